use anyhow::Context;
use loader::SensorDataLoader;
use log::LevelFilter;
use panel::Panel;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

mod air_quality;
mod config;
mod loader;
mod panel;
mod reading;
mod timestamp;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    TermLogger::init(
        LevelFilter::Info,
        ConfigBuilder::new()
            .set_time_format_rfc3339()
            .set_time_offset_to_local()
            .map_err(|_| anyhow::anyhow!("Failed to set time offset to local"))?
            .build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;

    if let Err(e) = run().await {
        log::error!("{e}");
    }

    Ok(())
}

pub async fn run() -> Result<(), anyhow::Error> {
    let loader =
        SensorDataLoader::new(config::BASE_URL).context("Failed to initialize sensor loader")?;
    let view = loader.subscribe();

    println!("{}\n", Panel::from_view(&view.borrow()));

    if let Err(e) = loader.load().await {
        log::warn!("Showing fallback values: {e}");
    }

    let state = view.borrow().clone();
    if state.is_loading() {
        log::warn!("Load cycle ended without a terminal state");
    }
    log::info!("Load state: {:?}", state.load_state);
    println!("{}", Panel::from_view(&state));

    Ok(())
}
