use crate::{
    core::{measurement::MeasurementInput, status::StatusTier},
    prelude::*,
    quantity::{energy::KilowattHours, percentage::Percentage},
};

/// Estimated battery health.
///
/// Capacity and state of health are rounded to tenths, the status is classified before rounding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SohResult {
    /// Energy the trip took from the battery.
    pub consumed_energy: KilowattHours,

    /// State-of-charge window the energy was taken from.
    pub soc_delta: Percentage,

    /// Usable capacity at 100% state of charge.
    pub current_capacity: KilowattHours,

    /// Current capacity relative to the delivery capacity.
    pub soh: Percentage,

    pub status: StatusTier,
}

/// Unrounded values the estimate is derived from.
#[derive(Copy, Clone, Debug)]
pub(super) struct Extrapolation {
    pub soc_delta: Percentage,
    pub consumed_energy: KilowattHours,
    pub current_capacity: KilowattHours,
    pub soh: Percentage,
}

impl Extrapolation {
    pub fn of(input: &MeasurementInput) -> Self {
        let soc_delta = input.soc_delta();
        let consumed_energy = input.trip_distance() * input.avg_consumption();
        let current_capacity = consumed_energy / soc_delta;
        let soh = current_capacity / input.delivery_capacity();
        Self { soc_delta, consumed_energy, current_capacity, soh }
    }

    /// Every derived value is finite and greater than zero.
    pub fn is_computable(&self) -> bool {
        self.consumed_energy.is_finite()
            && self.consumed_energy > KilowattHours::ZERO
            && self.current_capacity.is_finite()
            && self.current_capacity > KilowattHours::ZERO
            && self.soh.is_finite()
            && self.soh > Percentage::ZERO
    }
}

/// Extrapolate the trip consumption to the full battery and compare it with the delivery capacity.
#[instrument(skip_all, fields(input = %input))]
pub fn compute(input: &MeasurementInput) -> SohResult {
    let Extrapolation { soc_delta, consumed_energy, current_capacity, soh } =
        Extrapolation::of(input);
    debug!(%consumed_energy, %current_capacity, %soh, "computed");

    SohResult {
        consumed_energy,
        soc_delta,
        current_capacity: current_capacity.round_to_tenths(),
        soh: soh.round_to_tenths(),
        status: StatusTier::classify(soh),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::measurement::RawMeasurement;

    fn input(
        delivery_capacity: f64,
        trip_distance: f64,
        avg_consumption: f64,
        soc_start: f64,
        soc_end: f64,
    ) -> Result<MeasurementInput> {
        Ok(RawMeasurement::builder()
            .delivery_capacity(delivery_capacity.to_string())
            .trip_distance(trip_distance.to_string())
            .avg_consumption(avg_consumption.to_string())
            .soc_start(soc_start.to_string())
            .soc_end(soc_end.to_string())
            .build()
            .validate()?)
    }

    #[test]
    fn test_degraded_battery() -> Result {
        let result = compute(&input(75.0, 150.0, 18.0, 90.0, 20.0)?);
        assert_abs_diff_eq!(result.soc_delta.0, 70.0);
        assert_abs_diff_eq!(result.consumed_energy.0, 27.0);
        assert_abs_diff_eq!(result.current_capacity.0, 38.6);
        assert_abs_diff_eq!(result.soh.0, 51.4);
        assert_eq!(result.status, StatusTier::Poor);
        Ok(())
    }

    #[test]
    fn test_exact_division() -> Result {
        let result = compute(&input(80.0, 100.0, 16.0, 80.0, 30.0)?);
        assert_abs_diff_eq!(result.soc_delta.0, 50.0);
        assert_abs_diff_eq!(result.consumed_energy.0, 16.0);
        assert_abs_diff_eq!(result.current_capacity.0, 32.0);
        assert_abs_diff_eq!(result.soh.0, 40.0);
        assert_eq!(result.status, StatusTier::Poor);
        Ok(())
    }

    #[test]
    fn test_healthy_battery() -> Result {
        // 58.5 kWh over 80% of the window → 73.125 kWh of 75 kWh.
        let result = compute(&input(75.0, 325.0, 18.0, 90.0, 10.0)?);
        assert_abs_diff_eq!(result.current_capacity.0, 73.1);
        assert_abs_diff_eq!(result.soh.0, 97.5);
        assert_eq!(result.status, StatusTier::Excellent);
        Ok(())
    }

    #[test]
    fn test_inconsistent_inputs_exceed_hundred_percent() -> Result {
        let result = compute(&input(50.0, 500.0, 20.0, 100.0, 0.0)?);
        assert_abs_diff_eq!(result.soh.0, 200.0);
        assert_eq!(result.status, StatusTier::Excellent);
        Ok(())
    }

    #[test]
    fn test_status_uses_unrounded_soh() -> Result {
        // 94.96% is displayed as 95.0%, but is still below the threshold.
        let result = compute(&input(100.0, 474.8, 20.0, 100.0, 0.0)?);
        assert_abs_diff_eq!(result.soh.0, 95.0);
        assert_eq!(result.status, StatusTier::Good);
        Ok(())
    }

    #[test]
    fn test_idempotent() -> Result {
        let input = input(64.0, 212.3, 17.4, 95.0, 12.0)?;
        assert_eq!(compute(&input), compute(&input));
        Ok(())
    }

    #[test]
    fn test_always_positive_and_finite() -> Result {
        for (capacity, distance, consumption, soc_start, soc_end) in [
            (0.001, 0.001, 0.001, 100.0, 0.0),
            (1000.0, 1.0, 0.1, 0.2, 0.1),
            (10.0, 10_000.0, 40.0, 100.0, 99.9),
            (77.0, 0.5, 12.0, 1.0, 0.0),
        ] {
            let result = compute(&input(capacity, distance, consumption, soc_start, soc_end)?);
            assert!(result.current_capacity.is_finite());
            assert!(result.soh.is_finite());
            assert!(result.consumed_energy > KilowattHours::ZERO);
        }
        Ok(())
    }

    #[test]
    fn test_extreme_inputs_never_reach_compute() {
        for (capacity, distance, consumption, soc_start, soc_end) in [
            (75.0, 1e200, 1e200, 90.0, 20.0),
            (1e-300, 1e307, 100.0, 100.0, 99.0),
            (1e-300, 1e-200, 1e-200, 90.0, 20.0),
        ] {
            assert!(input(capacity, distance, consumption, soc_start, soc_end).is_err());
        }
    }
}
