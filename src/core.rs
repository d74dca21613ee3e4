mod check;
mod health;
mod measurement;
mod status;

pub use self::{
    check::{AssumeNo, AssumeYes, Outcome, Prompt, check},
    health::{SohResult, compute},
    measurement::{MIN_ACCURATE_SOC_DELTA, MeasurementInput, RawMeasurement, ValidationError},
    status::StatusTier,
};
