mod check;
mod classify;

use clap::{Parser, Subcommand};

pub use self::{check::CheckArgs, classify::ClassifyArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: estimate the battery state of health from a single trip.
    #[clap(name = "check")]
    Check(Box<CheckArgs>),

    /// Classify an already known state-of-health percentage.
    #[clap(name = "classify")]
    Classify(ClassifyArgs),
}
