//! Entry point for the vitrine showcase.

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use vitrine_config::Config;

mod app;
mod assets;
mod clock;
mod overlay;

use app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let mouse = config.mouse;

    let terminal = ratatui::init();
    if mouse {
        execute!(stdout(), EnableMouseCapture)?;
    }
    let result = App::new(config).run(terminal);
    if mouse {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
    ratatui::restore();
    result
}
