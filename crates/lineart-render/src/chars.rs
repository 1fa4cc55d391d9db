//! Glyphs used to plot line cells.

use serde::Deserialize;

/// Marker glyph style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    #[default]
    Dot,
    Block,
    Star,
    Hash,
}

impl Marker {
    /// Character plotted for each lit cell.
    pub fn glyph(self) -> char {
        match self {
            Marker::Dot => '•',
            Marker::Block => '█',
            Marker::Star => '*',
            Marker::Hash => '#',
        }
    }

    /// Next style in cycle order.
    pub fn next(self) -> Self {
        match self {
            Marker::Dot => Marker::Block,
            Marker::Block => Marker::Star,
            Marker::Star => Marker::Hash,
            Marker::Hash => Marker::Dot,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Marker::Dot => "dot",
            Marker::Block => "block",
            Marker::Star => "star",
            Marker::Hash => "hash",
        }
    }
}
