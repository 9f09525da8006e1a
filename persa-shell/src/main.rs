use std::error::Error;

use tracing::info;

mod args;
mod config;
mod dir;
mod logger;
mod shell;

use crate::{
    args::{parse_args, Arg},
    config::Config,
    dir::PersaDirectory,
    logger::{parse_log_level, setup_logger},
    shell::Page,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect(), VERSION)?;

    let mut datadir = None;
    let mut config_path = None;
    for arg in args {
        match arg {
            Arg::DatadirPath(path) => datadir = Some(path),
            Arg::ConfigPath(path) => config_path = Some(path),
        }
    }

    let datadir = match datadir {
        Some(datadir) => datadir,
        None => PersaDirectory::new_default()?,
    };
    if !datadir.exists() {
        datadir.init()?;
    }

    let config = match config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::from_file_or_default(datadir.config_file())?,
    };

    let log_level = parse_log_level()?.unwrap_or(config.log_level);
    setup_logger(log_level, &datadir)?;
    info!("persa-shell {} started", VERSION);

    let mut page = Page::new(config.open_on_start);
    let stdin = std::io::stdin();
    shell::run(&mut page, stdin.lock(), std::io::stdout())?;

    info!("persa-shell stopped, login modal open: {}", page.modal_open());
    Ok(())
}
