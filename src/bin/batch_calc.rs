use clap::Parser;
use matrix_calc::config::{BatchConfig, OutputFormat};
use matrix_calc::utils::logger::{self, LogFormat};
use matrix_calc::utils::validation::Validate;
use matrix_calc::{ConfigProvider, OperationDispatcher};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "batch-calc")]
#[command(about = "Run a batch of matrix operations described in a TOML file")]
struct Args {
    /// Path to TOML batch file
    #[arg(short, long, default_value = "matrix-batch.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Dry run - list the requests without computing them
    #[arg(long)]
    dry_run: bool,
}

#[derive(Serialize)]
struct BatchEntry<'a> {
    name: &'a str,
    operation: String,
    status: &'static str,
    result: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_logger(args.verbose, LogFormat::from_json_flag(args.log_json));

    tracing::info!("📁 Loading batch from: {}", args.config);

    let config = match BatchConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load batch file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!(
            "❌ Configuration validation failed: {} (Category: {:?})",
            e,
            e.category()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!(
        "✅ Batch '{}' loaded with {} requests",
        config.batch_name(),
        config.requests.len()
    );

    if args.dry_run {
        display_batch_summary(&config);
        return Ok(());
    }

    let dispatcher = OperationDispatcher::from_config(&config);
    let entries: Vec<BatchEntry> = config
        .requests
        .iter()
        .map(|request| {
            let outcome = dispatcher.run(&request.to_request());
            BatchEntry {
                name: &request.name,
                operation: request.operation.to_string(),
                status: if outcome.is_success() { "success" } else { "failure" },
                result: outcome.into_text(),
            }
        })
        .collect();

    let failures = entries.iter().filter(|e| e.status == "failure").count();

    match config.output_format() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            for entry in &entries {
                println!("[{}] {}", entry.name, entry.operation);
                println!("{}", entry.result);
                println!();
            }
        }
    }

    tracing::info!(
        "Batch finished: {} succeeded, {} failed",
        entries.len() - failures,
        failures
    );

    if failures > 0 {
        std::process::exit(2);
    }

    Ok(())
}

fn display_batch_summary(config: &BatchConfig) {
    println!("📋 Batch Summary:");
    println!("  Batch: {}", config.batch_name());
    println!("  Precision: {}", config.precision());
    println!("  Singular tolerance: {:e}", config.singular_tolerance());
    println!("  Output: {:?}", config.output_format());
    println!();
    for request in &config.requests {
        println!(
            "  {} -> {} ({}x{} by {}x{})",
            request.name,
            request.operation,
            request.a.rows,
            request.a.cols,
            request.b.rows,
            request.b.cols
        );
    }
}
