use std::{fs, path::PathBuf};

use clap::Parser;

use crate::{
    core::{AssumeNo, AssumeYes, Prompt, RawMeasurement, check},
    prelude::*,
    render::{OutputFormat, render_outcome},
};

/// Trip measurement as entered by the user, parsed later by the validation.
#[derive(Parser)]
pub struct MeasurementArgs {
    /// Battery capacity at delivery, in kilowatt-hours.
    #[clap(long, env = "DELIVERY_CAPACITY_KWH", allow_hyphen_values = true)]
    delivery_capacity: Option<String>,

    /// Distance driven during the trip, in kilometers.
    #[clap(long, env = "TRIP_DISTANCE_KM", allow_hyphen_values = true)]
    trip_distance: Option<String>,

    /// Average consumption over the trip, in kilowatt-hours per 100 kilometers.
    #[clap(long, env = "AVG_CONSUMPTION_KWH_PER_100KM", allow_hyphen_values = true)]
    avg_consumption: Option<String>,

    /// State of charge at the start of the trip, in percent.
    #[clap(long, env = "SOC_START_PERCENT", allow_hyphen_values = true)]
    soc_start: Option<String>,

    /// State of charge at the end of the trip, in percent.
    #[clap(long, env = "SOC_END_PERCENT", allow_hyphen_values = true)]
    soc_end: Option<String>,

    /// TOML file with the same fields, overridden by the options above.
    #[clap(long, env = "MEASUREMENT_FILE")]
    measurement_file: Option<PathBuf>,
}

impl MeasurementArgs {
    pub fn load(self) -> Result<RawMeasurement> {
        let raw = RawMeasurement {
            delivery_capacity: self.delivery_capacity,
            trip_distance: self.trip_distance,
            avg_consumption: self.avg_consumption,
            soc_start: self.soc_start,
            soc_end: self.soc_end,
        };
        match self.measurement_file {
            Some(path) => {
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read `{}`", path.display()))?;
                let from_file: RawMeasurement = toml::from_str(&contents)
                    .with_context(|| format!("failed to parse `{}`", path.display()))?;
                debug!(path = %path.display(), "loaded the measurement file");
                Ok(raw.or(from_file))
            }
            None => Ok(raw),
        }
    }
}

#[derive(Parser)]
pub struct CheckArgs {
    #[clap(flatten)]
    measurement: MeasurementArgs,

    /// Proceed without asking when the SoC difference is too small for an accurate result.
    #[clap(long, short = 'y', conflicts_with = "no_input")]
    yes: bool,

    /// Never ask, cancel when the SoC difference is too small for an accurate result.
    #[clap(long)]
    no_input: bool,

    #[clap(long, env = "OUTPUT_FORMAT", default_value = "table")]
    format: OutputFormat,
}

impl CheckArgs {
    pub fn run(self) -> Result {
        let raw = self.measurement.load()?;
        let outcome = if self.yes {
            check(&raw, &mut AssumeYes)?
        } else if self.no_input {
            check(&raw, &mut AssumeNo)?
        } else {
            check(&raw, &mut Prompt::stdio())?
        };
        println!("{}", render_outcome(&outcome, self.format)?);
        Ok(())
    }
}
