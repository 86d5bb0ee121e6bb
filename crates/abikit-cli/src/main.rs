//! # abikit-cli
//!
//! Command-line interface for contract call data.
//!
//! ## Usage
//!
//! ```bash
//! # Encode a call from textual arguments
//! abikit encode --abi token.json transfer 0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d 1000
//! abikit encode --abi token.json sum [ 1 2 3 ]
//! abikit encode --abi token.json --constructor Gold 1000000
//!
//! # Decode method output or event data
//! abikit decode --abi token.json balanceOf 0x00...2a
//!
//! # Resolve a selector (and decode the arguments of full call data)
//! abikit selector --abi token.json 0xa9059cbb
//!
//! # List methods, events and selector clashes
//! abikit inspect --abi token.json
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use config::Config;
pub use error::CliError;
pub use output::Output;

/// abikit CLI
#[derive(Parser, Debug)]
#[command(name = "abikit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Log filter (e.g. "debug", "abikit=trace"); RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// CLI commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Encode call data from textual arguments
    Encode(commands::encode::EncodeArgs),
    /// Decode method output or event data
    Decode(commands::decode::DecodeArgs),
    /// Resolve a selector to its method
    Selector(commands::selector::SelectorArgs),
    /// Summarize a schema
    Inspect(commands::inspect::InspectArgs),
    /// Show or edit configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Set the default schema file
        #[arg(long)]
        set_abi: Option<std::path::PathBuf>,
        /// Set the default log filter
        #[arg(long)]
        set_log_level: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let mut config = Config::load();
    let json = cli.json || config.json;

    init_tracing(cli.log_level.as_deref().unwrap_or(&config.log_level));

    let result = match cli.command {
        Commands::Encode(cmd) => cmd.execute(&config, json),
        Commands::Decode(cmd) => cmd.execute(&config, json),
        Commands::Selector(cmd) => cmd.execute(&config, json),
        Commands::Inspect(cmd) => cmd.execute(&config, json),
        Commands::Config {
            show,
            set_abi,
            set_log_level,
        } => handle_config(&mut config, show, set_abi, set_log_level, json),
    };

    if let Err(e) = result {
        tracing::debug!("Command failed: {:?}", e);
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "error": e.to_string(),
                    "success": false
                })
            );
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays machine-readable
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn handle_config(
    config: &mut Config,
    show: bool,
    set_abi: Option<std::path::PathBuf>,
    set_log_level: Option<String>,
    json: bool,
) -> Result<(), CliError> {
    let mut modified = false;

    if let Some(abi) = set_abi {
        config.default_abi = Some(abi);
        modified = true;
    }

    if let Some(level) = set_log_level {
        EnvFilter::try_new(&level)
            .map_err(|e| CliError::Config(format!("Invalid log level '{}': {}", level, e)))?;
        config.log_level = level;
        modified = true;
    }

    if modified {
        config.save()?;
        Output::new(json)
            .field("status", "saved")
            .message("Configuration saved")
            .print();
    } else if show {
        let abi = config
            .default_abi
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        Output::new(json)
            .field("default_abi", &abi)
            .field("log_level", &config.log_level)
            .field_value("json", serde_json::Value::Bool(config.json))
            .message(&format!(
                "Default ABI: {}\nLog level: {}\nJSON output: {}",
                if abi.is_empty() { "(none)" } else { &abi },
                config.log_level,
                config.json
            ))
            .print();
    } else {
        Output::new(json)
            .message("Use --show to display config, or --set-abi/--set-log-level to modify")
            .print();
    }

    Ok(())
}
