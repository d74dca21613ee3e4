use std::io::{BufRead, Stderr, StdinLock, Write};

use crate::{
    core::{
        health::{SohResult, compute},
        measurement::{LowSocDeltaWarning, MeasurementInput, RawMeasurement},
    },
    prelude::*,
};

/// Decides whether to proceed despite a [`LowSocDeltaWarning`].
pub trait Confirm {
    fn confirm(&mut self, warning: &LowSocDeltaWarning) -> Result<bool>;
}

/// Always proceeds.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, warning: &LowSocDeltaWarning) -> Result<bool> {
        warn!(%warning, "proceeding anyway");
        Ok(true)
    }
}

/// Never proceeds, for when there is nobody to ask.
pub struct AssumeNo;

impl Confirm for AssumeNo {
    fn confirm(&mut self, warning: &LowSocDeltaWarning) -> Result<bool> {
        warn!(%warning, "refusing without asking");
        Ok(false)
    }
}

/// Asks the user on the terminal.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<StdinLock<'static>, Stderr> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for Prompt<R, W> {
    fn confirm(&mut self, warning: &LowSocDeltaWarning) -> Result<bool> {
        write!(self.output, "Warning: {warning}. Continue anyway? [y/N] ")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer).context("failed to read the answer")?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Outcome {
    Computed { input: MeasurementInput, result: SohResult },

    /// The user has declined to proceed with an inaccurate measurement.
    Cancelled,
}

/// Validate the measurement, confirm a low SoC difference if needed, and compute the result.
///
/// Validation failures are returned as [`crate::core::ValidationError`].
#[instrument(skip_all)]
pub fn check(raw: &RawMeasurement, confirm: &mut impl Confirm) -> Result<Outcome> {
    let input = raw.validate()?;
    if let Some(warning) = input.low_soc_delta_warning()
        && !confirm.confirm(&warning)?
    {
        warn!("cancelled");
        return Ok(Outcome::Cancelled);
    }
    let result = compute(&input);
    info!(
        soh = %result.soh,
        current_capacity = %result.current_capacity,
        status = ?result.status,
        "calculated"
    );
    Ok(Outcome::Computed { input, result })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::{ValidationError, status::StatusTier};

    fn low_delta_measurement() -> RawMeasurement {
        RawMeasurement::builder()
            .delivery_capacity("75")
            .trip_distance("60")
            .avg_consumption("18")
            .soc_start("60")
            .soc_end("45")
            .build()
    }

    #[test]
    fn test_check_ok() -> Result {
        let raw = RawMeasurement::builder()
            .delivery_capacity("75")
            .trip_distance("150")
            .avg_consumption("18")
            .soc_start("90")
            .soc_end("20")
            .build();
        let Outcome::Computed { result, .. } = check(&raw, &mut AssumeNo)? else {
            bail!("expected a result");
        };
        assert_abs_diff_eq!(result.soh.0, 51.4);
        assert_eq!(result.status, StatusTier::Poor);
        Ok(())
    }

    #[test]
    fn test_check_validation_error() {
        let raw = RawMeasurement::builder().delivery_capacity("75").build();
        let error = check(&raw, &mut AssumeYes).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ValidationError>(),
            Some(ValidationError::MissingOrNonNumeric { .. }),
        ));
    }

    #[test]
    fn test_low_delta_cancelled() -> Result {
        assert_eq!(check(&low_delta_measurement(), &mut AssumeNo)?, Outcome::Cancelled);
        Ok(())
    }

    #[test]
    fn test_low_delta_confirmed() -> Result {
        let Outcome::Computed { result, .. } = check(&low_delta_measurement(), &mut AssumeYes)? else {
            bail!("expected a result");
        };
        // 10.8 kWh over 15% → 72 kWh.
        assert_abs_diff_eq!(result.current_capacity.0, 72.0);
        assert_abs_diff_eq!(result.soh.0, 96.0);
        assert_eq!(result.status, StatusTier::Excellent);
        Ok(())
    }

    #[test]
    fn test_prompt_yes() -> Result {
        let mut output = Vec::new();
        let mut prompt = Prompt::new(" Yes\n".as_bytes(), &mut output);
        assert!(matches!(check(&low_delta_measurement(), &mut prompt)?, Outcome::Computed { .. }));
        assert!(String::from_utf8(output)?.contains("Continue anyway?"));
        Ok(())
    }

    #[test]
    fn test_prompt_default_is_no() -> Result {
        let mut prompt = Prompt::new("\n".as_bytes(), std::io::sink());
        assert_eq!(check(&low_delta_measurement(), &mut prompt)?, Outcome::Cancelled);
        Ok(())
    }

    #[test]
    fn test_prompt_end_of_input_is_no() -> Result {
        let mut prompt = Prompt::new(&b""[..], std::io::sink());
        assert_eq!(check(&low_delta_measurement(), &mut prompt)?, Outcome::Cancelled);
        Ok(())
    }
}
