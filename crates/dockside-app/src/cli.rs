use clap::{Parser, Subcommand};

/// Dockside: keeps a companion window docked beside another app's window.
#[derive(Parser, Debug)]
#[command(name = "dockside", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override, e.g. `dockside=debug`.
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the placement service until Ctrl-C (default).
    Run,

    /// Drive a scripted session against a simulated desktop.
    Simulate {
        /// Width of the simulated screen.
        #[arg(long, default_value_t = 1200.0)]
        screen_width: f64,

        /// Height of the simulated screen.
        #[arg(long, default_value_t = 800.0)]
        screen_height: f64,
    },

    /// Print the effective configuration as JSON.
    PrintConfig,
}

pub fn parse() -> Args {
    Args::parse()
}
