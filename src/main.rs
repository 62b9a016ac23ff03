use std::process::ExitCode;
use stockwatch::configuration::get_configuration;
use stockwatch::errors::Error;
use stockwatch::run;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

fn start() -> Result<(), Error> {
    let settings = get_configuration()?;
    info!(items = settings.items.len(), "configuration loaded");
    run(&settings)?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
