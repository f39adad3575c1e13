//! signquest CLI: the terminal play screen.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "signquest", version, about = "Guess the sign, grow your evolution")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds in the terminal
    Play {
        /// Sign in as this email (overrides config)
        #[arg(long)]
        email: Option<String>,

        /// Seed for image selection, for reproducible sessions
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the images in the catalog and their answers
    Catalog {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show a player's stored profile
    Profile {
        /// Player email
        #[arg(long)]
        email: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("signquest=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            email,
            seed,
            config,
        } => commands::play::execute(email, seed, config).await,
        Commands::Catalog { config } => commands::catalog::execute(config),
        Commands::Profile { email, config } => commands::profile::execute(email, config).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
