use clap::Parser;

use crate::{
    core::StatusTier,
    prelude::*,
    quantity::percentage::Percentage,
    render::{OutputFormat, render_status},
};

#[derive(Parser)]
pub struct ClassifyArgs {
    /// State of health in percent.
    #[clap(allow_negative_numbers = true, value_parser = parse_finite)]
    soh: f64,

    #[clap(long, env = "OUTPUT_FORMAT", default_value = "table")]
    format: OutputFormat,
}

impl ClassifyArgs {
    pub fn run(self) -> Result {
        let soh = Percentage::from(self.soh);
        let status = StatusTier::classify(soh);
        info!(%soh, ?status, "classified");
        println!("{}", render_status(soh, status, self.format)?);
        Ok(())
    }
}

fn parse_finite(value: &str) -> Result<f64> {
    let value: f64 = value.trim().parse()?;
    ensure!(value.is_finite(), "must be a finite number");
    Ok(value)
}
