//! Forum EMI backend: CLI server
//!
//! ```sh
//! # Run with default config (~/.config/forum-emi/config.toml)
//! forum-emi
//!
//! # Custom config path and port
//! forum-emi --config /etc/forum-emi/config.toml --port 9090
//!
//! # Validate config without starting
//! forum-emi --check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use forum_emi::config::{default_config_path, AppConfig, CONFIG_ENV};
use forum_emi::server::{init_tracing, ServerHandle, ServerOptions};

#[derive(Parser, Debug)]
#[command(
    name = "forum-emi",
    version,
    about = "Administrative backend of the Forum EMI",
    long_about = "REST API managing companies, booths, speakers, rooms, conferences, \
                  events, partners, contracts and logistics tasks of the Forum EMI.\n\n\
                  Default config: ~/.config/forum-emi/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Skip seeding users and rooms into an empty database.
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    if cli.check {
        return match load_error {
            Some(e) => {
                eprintln!("Configuration is invalid: {}", e);
                ExitCode::FAILURE
            }
            None => {
                println!("Configuration is valid");
                println!("   Config file : {}", config_path.display());
                println!("   Address     : {}", config.server.address());
                println!("   Database    : {}", config.database.url);
                println!("   Log level   : {}", config.logging.level);
                println!("   Seeding     : {}", config.seed.enabled && !cli.no_seed);
                ExitCode::SUCCESS
            }
        };
    }

    init_tracing(&config);
    match load_error {
        Some(e) => {
            error!("{}", e);
            error!("Using default configuration.");
        }
        None => info!("Configuration loaded from {}", config_path.display()),
    }

    let mut opts = ServerOptions::from(config);
    opts.auto_migrate = !cli.no_migrate;
    opts.seed = opts.seed && !cli.no_seed;

    let handle = match ServerHandle::start(opts).await {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start: {}", e);
            return ExitCode::FAILURE;
        }
    };

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");
    handle.wait().await;

    ExitCode::SUCCESS
}
