mod app;
mod logging;

use color_eyre::eyre::WrapErr;
use lineart_config::Config;
use log::info;

use crate::app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Some(path) = logging::init()? {
        info!("logging to {}", path.display());
    }
    let config = Config::load().wrap_err("loading configuration")?;
    info!("starting with {:?}", config);

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}
