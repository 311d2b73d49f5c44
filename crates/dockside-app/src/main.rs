mod cli;
mod run;
mod simulate;

use std::path::Path;

use dockside_common::ConfigError;
use dockside_config::DocksideConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use cli::Command;

const DEFAULT_LOG_DIRECTIVE: &str = "dockside=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- Dockside crashed ---");
        eprintln!("The tracked window may still be shrunk; resize it manually.");
        eprintln!("------------------------\n");
        default_hook(info);
    }));
}

fn load_config(path: Option<&str>) -> Result<DocksideConfig, ConfigError> {
    match path {
        Some(path) => dockside_config::load_config_from(Path::new(path)),
        None => dockside_config::load_config(),
    }
}

fn init_logging(directive: &str) {
    let directive: Directive = directive.parse().unwrap_or_else(|_| {
        eprintln!("invalid log directive {directive:?}, using {DEFAULT_LOG_DIRECTIVE}");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

#[tokio::main]
async fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Config comes first so its log level can seed the subscriber; the
    // outcome is logged once logging is up.
    let loaded = load_config(args.config.as_deref());
    let directive = match (&args.log_level, &loaded) {
        (Some(directive), _) => directive.clone(),
        (None, Ok(config)) => config.logging.level.directive(),
        (None, Err(_)) => DEFAULT_LOG_DIRECTIVE.to_string(),
    };
    init_logging(&directive);

    tracing::info!("Dockside v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        DocksideConfig::default()
    });

    let result = match args.command.unwrap_or(Command::Run) {
        Command::Run => run::run(&config).await,
        Command::Simulate {
            screen_width,
            screen_height,
        } => simulate::simulate(&config, screen_width, screen_height).await,
        Command::PrintConfig => {
            println!("{}", dockside_config::config_to_json(&config));
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
