pub mod breakdown;
pub mod chart;
pub mod cli;
pub mod columns;
pub mod dataset;
pub mod error;
pub mod io_utils;
pub mod normalize;
pub mod player;
pub mod preview;
pub mod rank;
pub mod report;
pub mod table;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::cli::{Cli, Commands};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("ipl_stats", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Preview(args) => preview::execute(&args),
        Commands::Report(args) => report::execute(&args),
        Commands::Player(args) => player::execute(&args),
    }
}
