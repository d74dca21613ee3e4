#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod prelude;
mod quantity;
mod render;
mod tables;

use clap::{Parser, crate_version};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_env_filter(
            EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
    debug!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Check(args) => args.run()?,
        Command::Classify(args) => args.run()?,
    }

    Ok(())
}
