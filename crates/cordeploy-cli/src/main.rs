//! cordeploy CLI - Run and inspect deploy cycles
//!
//! Commands:
//! - `cordeploy run` - Package the web build with corber and print the updated context
//! - `cordeploy args` - Show the corber command a cycle would run
//! - `cordeploy locate` - Show where build artifacts are collected from
//! - `cordeploy check` - Validate a cordeploy.toml configuration

use clap::{Parser, Subcommand};
use cordeploy_core::LogLevel;
use cordeploy_native::CORBER_PROGRAM;
use cordeploy_pipeline::DEFAULT_PLUGIN_NAME;
use std::path::PathBuf;

mod run;
mod settings;

use settings::ConfigArgs;

#[derive(Parser)]
#[command(name = "cordeploy")]
#[command(author, version, about = "Deploy adapter for corber native builds", long_about = None)]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one deploy cycle
    Run {
        /// Path to the host project (default: current directory)
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// Web build directory (default: <project>/dist)
        #[arg(short, long)]
        dist: Option<PathBuf>,

        /// Start from a saved context JSON file instead of listing the dist directory
        #[arg(long)]
        context: Option<PathBuf>,

        /// corber executable
        #[arg(long, default_value = CORBER_PROGRAM)]
        program: String,

        /// Plugin instance name
        #[arg(long, default_value = DEFAULT_PLUGIN_NAME)]
        name: String,

        #[command(flatten)]
        settings: ConfigArgs,
    },

    /// Print the corber command line for the configuration
    Args {
        /// corber executable
        #[arg(long, default_value = CORBER_PROGRAM)]
        program: String,

        #[command(flatten)]
        settings: ConfigArgs,
    },

    /// Print the directory build artifacts are collected from
    Locate {
        /// Path to the host project (default: current directory)
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        #[command(flatten)]
        settings: ConfigArgs,
    },

    /// Validate a configuration file
    Check {
        /// Path to cordeploy.toml (default: ./cordeploy.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    cordeploy_logging::init_logging_with_level(level);

    match cli.command {
        Commands::Run {
            project,
            dist,
            context,
            program,
            name,
            settings,
        } => {
            let target = run::RunTarget {
                project,
                dist,
                context,
            };
            run::run(target, &settings, program, name).await?;
        }
        Commands::Args { program, settings } => {
            run::args(&settings, program)?;
        }
        Commands::Locate { project, settings } => {
            run::locate(&project, &settings)?;
        }
        Commands::Check { config } => {
            settings::check(config)?;
        }
    }

    Ok(())
}
