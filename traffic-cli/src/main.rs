use std::rc::Rc;

use error::AppError;
use log::debug;
use traffic::observers::ConsoleAnnouncer;

use crate::config::app::AppConfig;

mod config;
mod driver;
mod error;

fn main() -> anyhow::Result<()> {
    config::log::init();

    let config = AppConfig::new()?;
    debug!("Starting traffic light with configuration: {:?}", config);

    driver::run(&config, Rc::new(ConsoleAnnouncer));
    Ok(())
}
