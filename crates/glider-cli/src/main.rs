use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glider_core::{AppConfig, EasingKind};

mod commands;

#[derive(Parser)]
#[command(name = "glider")]
#[command(author, version, about = "A smooth-scrolling terminal document viewer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Document to open (shorthand for `run --file`)
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the viewer
    Run {
        /// Document to open; a built-in sample page is used when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Animation duration in milliseconds
        #[arg(long)]
        duration: Option<u64>,
        /// Easing curve: linear, ease-in, ease-out, ease-in-out
        #[arg(long)]
        easing: Option<String>,
    },
    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;

    match cli.command {
        Some(Commands::Run {
            file,
            duration,
            easing,
        }) => {
            if let Some(duration) = duration {
                config.scroll.duration_ms = duration;
            }
            if let Some(easing) = easing {
                config.scroll.easing = parse_easing(&easing)?;
            }
            commands::run::run(config, file)
        }
        None => commands::run::run(config, cli.file),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init => commands::config::init(),
        },
    }
}

fn parse_easing(name: &str) -> Result<EasingKind> {
    match name {
        "linear" => Ok(EasingKind::Linear),
        "ease-in" => Ok(EasingKind::EaseIn),
        "ease-out" => Ok(EasingKind::EaseOut),
        "ease-in-out" => Ok(EasingKind::EaseInOut),
        other => anyhow::bail!(
            "unknown easing '{other}' (expected linear, ease-in, ease-out, or ease-in-out)"
        ),
    }
}
