use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, prelude::*};

use app::AppCore;
use config::Config;

mod app;
mod config;
mod error;
mod sim;
mod ticker;
mod vec2f;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    info!("press - to spread the windows apart, = to bring them back");

    let mut app = AppCore::new(&config)?;
    app.run()?;

    info!("bye");
    Ok(())
}
