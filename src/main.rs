use clap::Parser;
use matrix_calc::utils::logger::{self, LogFormat};
use matrix_calc::utils::validation::Validate;
use matrix_calc::{CliConfig, OperationDispatcher};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, LogFormat::Compact);

    tracing::info!("Starting matrix-calc ({})", config.operation);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let dispatcher = OperationDispatcher::from_config(&config);
    let outcome = dispatcher.run(&config.to_request());

    if config.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.text());
    }

    if !outcome.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
