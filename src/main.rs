use std::process::ExitCode;

use caddy_dns_easydns::config::Config;
use caddy_dns_easydns::core::registry::modules;
use caddy_dns_easydns::register_modules;
use log::{error, info};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    register_modules();
    info!("Available modules: {}", modules().join(", "));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match config.load_module() {
        Ok(module) => {
            info!("Configuration valid");
            println!("{module:#?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
