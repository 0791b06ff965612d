mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use config::Config;
use mazeboard_core::{FileStore, ScoreStore};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mazeboard=warn,mazeboard_core=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut config = if args.config.exists() {
        match Config::load(&args.config) {
            Ok(c) => {
                info!("Loaded config from {:?}", args.config);
                c
            }
            Err(e) => {
                warn!("Failed to load config: {:#}, using defaults", e);
                Config::default()
            }
        }
    } else {
        debug!("No config file at {:?}, using defaults", args.config);
        Config::default()
    };
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }

    let storage = FileStore::new(&config.data_dir);
    let mut store = ScoreStore::load_with_key(storage, config.storage_key.clone());

    match args.command {
        Command::Record { level, seconds } => {
            commands::record::run(&mut store, &config, level, seconds)
        }
        Command::Show { level, json } => commands::show::run(&store, &config, level, json),
        Command::Clear { yes } => commands::clear::run(&mut store, yes),
        Command::Export { output, format } => {
            commands::export::run(&store, &config, output.as_deref(), format)
        }
        Command::Play => commands::play::run(&mut store),
    }
}
