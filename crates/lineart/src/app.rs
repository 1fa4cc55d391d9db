//! Terminal host for the simulation.

use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use lineart_config::Config;
use lineart_core::{Lineart, RandomSource, RngSource, ScreenSize};
use lineart_render::{LineartView, to_terminal_color};
use log::{debug, info};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect, Size},
    style::{Color, Stylize},
    text::Line,
    widgets::Paragraph,
};

/// Smallest usable viewport side. Generated speeds reach 19, and a
/// border below the speed can bounce a point out of the viewport.
const MIN_SIDE: u16 = 20;

/// Terminal host: owns the screen size, the simulation and the view.
pub struct App {
    /// Is the application running?
    running: bool,
    /// Frozen animation.
    paused: bool,
    /// Show the key help line.
    show_help: bool,
    /// Loaded configuration.
    config: Config,
    /// Write-once viewport, set from the first usable terminal size.
    screen: ScreenSize,
    /// Random draws for every generated trail.
    source: Box<dyn RandomSource>,
    /// The simulation, once the screen size is known.
    lineart: Option<Lineart>,
    /// Rasterization state.
    view: LineartView,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let source: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(RngSource::seeded(seed)),
            None => Box::new(RngSource::from_entropy()),
        };
        Self {
            running: false,
            paused: false,
            show_help: config.display.show_help,
            screen: ScreenSize::new(),
            source,
            lineart: None,
            view: LineartView::new(config.display.marker),
            config,
        }
    }

    /// Run the application's main loop.
    ///
    /// Each iteration draws the current state, then advances it one step.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.running = true;
        while self.running {
            self.ensure_simulation(terminal.size()?)?;
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            if !self.paused
                && let Some(lineart) = self.lineart.as_mut()
            {
                lineart.advance().wrap_err("advancing simulation")?;
            }
        }
        Ok(())
    }

    /// Initialize the screen size and build the simulation on the first
    /// usable terminal size. Later resizes keep the original viewport.
    fn ensure_simulation(&mut self, size: Size) -> Result<()> {
        if self.lineart.is_some() {
            return Ok(());
        }
        let canvas = self.canvas_area(Rect::new(0, 0, size.width, size.height));
        let (width, height) = (canvas.width.saturating_sub(1), canvas.height.saturating_sub(1));
        if width < MIN_SIDE || height < MIN_SIDE {
            return Ok(());
        }

        let viewport = if self.screen.is_initialized() {
            self.screen.viewport()
        } else {
            self.screen.init(width, height)?
        };
        info!("viewport {}x{}", viewport.width, viewport.height);
        self.regenerate()
    }

    /// Build a fresh trail inside the current viewport.
    fn regenerate(&mut self) -> Result<()> {
        let lineart = Lineart::with_source(
            self.screen.viewport(),
            self.config.settings(),
            &mut *self.source,
        )
        .wrap_err("generating polygons")?;
        debug!("generated {} polygons", lineart.polygons().len());
        self.lineart = Some(lineart);
        Ok(())
    }

    /// Split the frame into the drawing canvas and the help line.
    fn layout(&self, area: Rect) -> [Rect; 2] {
        Layout::vertical([Constraint::Fill(1), Constraint::Length(self.help_height())]).areas(area)
    }

    fn help_height(&self) -> u16 {
        if self.show_help { 1 } else { 0 }
    }

    /// Smallest terminal whose canvas fits a [`MIN_SIDE`] viewport.
    fn min_terminal_size(&self) -> Size {
        // positions are inclusive, so the canvas needs one extra cell per axis
        Size::new(MIN_SIDE + 1, MIN_SIDE + 1 + self.help_height())
    }

    fn canvas_area(&self, area: Rect) -> Rect {
        self.layout(area)[0]
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let [canvas, help_area] = self.layout(frame.area());

        let Some(lineart) = self.lineart.as_ref() else {
            let min = self.min_terminal_size();
            let message = format!("terminal too small, need at least {}x{}", min.width, min.height);
            frame.render_widget(Paragraph::new(message).alignment(Alignment::Center), canvas);
            return;
        };

        self.view.render(frame, canvas, lineart);

        if self.show_help {
            let color = lineart
                .polygons()
                .first()
                .map(|polygon| to_terminal_color(polygon.color()))
                .unwrap_or(Color::White);
            let state = if self.paused { " paused" } else { "" };
            let help = Line::from(vec![
                "q".bold().fg(color),
                " quit  ".dark_gray(),
                "space".bold().fg(color),
                " pause  ".dark_gray(),
                "r".bold().fg(color),
                " restart  ".dark_gray(),
                "m".bold().fg(color),
                format!(" marker ({})  ", self.view.marker().name()).dark_gray(),
                "h".bold().fg(color),
                " hide help  ".dark_gray(),
                format!("frame {}{}", lineart.frame(), state).dark_gray(),
            ])
            .centered();
            frame.render_widget(help, help_area);
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    fn handle_crossterm_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(self.config.display.tick_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key)?,
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) -> Result<()> {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ')) => self.paused = !self.paused,
            (_, KeyCode::Char('r')) if self.lineart.is_some() => self.regenerate()?,
            (_, KeyCode::Char('m')) => self.view.set_marker(self.view.marker().next()),
            (_, KeyCode::Char('h')) => self.show_help = !self.show_help,
            _ => {}
        }
        Ok(())
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
