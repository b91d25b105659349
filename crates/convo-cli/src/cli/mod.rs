//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use convo_core::config::{self, Config};

#[derive(Parser)]
#[command(name = "convo")]
#[command(version)]
#[command(about = "Terminal editor for two-role conversation transcripts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory conversation.json is written into (overrides config)
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Subcommands print to stdout; only the editor takes over the terminal.
    let Some(command) = cli.command else {
        let _log_guard = crate::logging::init().context("set up logging")?;

        let mut config = Config::load().context("load config")?;
        if let Some(dir) = cli.export_dir {
            config.export_dir = dir;
        }

        tracing::info!(export_dir = %config.export_dir.display(), "starting editor");
        return convo_tui::run_editor(&config);
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                println!("{}", config::paths::config_path().display());
                Ok(())
            }
            ConfigCommands::Init => {
                let path = config::paths::config_path();
                if Config::init().context("initialize config")? {
                    println!("Created {}", path.display());
                } else {
                    println!("Config already exists at {}", path.display());
                }
                Ok(())
            }
        },
    }
}
