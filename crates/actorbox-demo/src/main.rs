use actorbox_demo::{DemoApp, DemoConfig};
use actorbox_engine::device::GpuInit;
use actorbox_engine::logging::{init_logging, LoggingConfig};
use actorbox_engine::window::Runtime;
use anyhow::Result;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::default();
    let runtime_config = config.runtime_config();
    let app = DemoApp::new(config, SmallRng::from_entropy())?;

    Runtime::run(runtime_config, GpuInit::default(), app)?;

    log::info!("bye");
    Ok(())
}
