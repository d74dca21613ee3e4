use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Deserializer};

use crate::{
    core::health::Extrapolation,
    prelude::*,
    quantity::{
        Quantity,
        consumption::KilowattHoursPer100Km,
        distance::Kilometers,
        energy::KilowattHours,
        percentage::Percentage,
    },
};

/// Below this, the vehicle's integer SoC readout dominates the error.
pub const MIN_ACCURATE_SOC_DELTA: Percentage = Quantity(20.0);

#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Field {
    #[display("delivery capacity")]
    DeliveryCapacity,

    #[display("trip distance")]
    TripDistance,

    #[display("average consumption")]
    AvgConsumption,

    #[display("SoC at the start")]
    SocStart,

    #[display("SoC at the end")]
    SocEnd,
}

#[derive(Copy, Clone, Debug, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    #[display("{field} is missing or not a number")]
    MissingOrNonNumeric { field: Field },

    #[display("delivery capacity must be greater than zero, got {capacity:?}")]
    NonPositiveCapacity { capacity: KilowattHours },

    #[display("trip distance must be greater than zero, got {distance:?}")]
    NonPositiveDistance { distance: Kilometers },

    #[display("average consumption must be greater than zero, got {consumption:?}")]
    NonPositiveConsumption { consumption: KilowattHoursPer100Km },

    #[display("{field} must be between 0% and 100%, got {value:?}")]
    SocOutOfRange { field: Field, value: Percentage },

    #[display("SoC at the start ({start:?}) must be greater than SoC at the end ({end:?})")]
    SocOrderInvalid { start: Percentage, end: Percentage },

    /// The values are valid one by one, but the estimate over- or underflows.
    #[display("the measurement is outside of the computable range")]
    OutOfComputableRange,
}

/// The state-of-charge window is too narrow for an accurate estimate.
///
/// Not an error: the user may still choose to proceed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LowSocDeltaWarning {
    pub delta: Percentage,
}

impl Display for LowSocDeltaWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "the SoC difference of {} is below {}, the result may be inaccurate",
            self.delta, MIN_ACCURATE_SOC_DELTA,
        )
    }
}

/// Measurement fields exactly as the user has entered them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, bon::Builder)]
#[serde(deny_unknown_fields)]
pub struct RawMeasurement {
    #[builder(into)]
    #[serde(default, deserialize_with = "deserialize_field")]
    pub delivery_capacity: Option<String>,

    #[builder(into)]
    #[serde(default, deserialize_with = "deserialize_field")]
    pub trip_distance: Option<String>,

    #[builder(into)]
    #[serde(default, deserialize_with = "deserialize_field")]
    pub avg_consumption: Option<String>,

    #[builder(into)]
    #[serde(default, deserialize_with = "deserialize_field")]
    pub soc_start: Option<String>,

    #[builder(into)]
    #[serde(default, deserialize_with = "deserialize_field")]
    pub soc_end: Option<String>,
}

impl RawMeasurement {
    /// Fill in the fields missing here from the fallback.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            delivery_capacity: self.delivery_capacity.or(fallback.delivery_capacity),
            trip_distance: self.trip_distance.or(fallback.trip_distance),
            avg_consumption: self.avg_consumption.or(fallback.avg_consumption),
            soc_start: self.soc_start.or(fallback.soc_start),
            soc_end: self.soc_end.or(fallback.soc_end),
        }
    }

    /// Parse and check the fields, first failure wins.
    #[instrument(skip_all)]
    pub fn validate(&self) -> Result<MeasurementInput, ValidationError> {
        let delivery_capacity: KilowattHours =
            parse_field(Field::DeliveryCapacity, self.delivery_capacity.as_deref())?;
        let trip_distance: Kilometers =
            parse_field(Field::TripDistance, self.trip_distance.as_deref())?;
        let avg_consumption: KilowattHoursPer100Km =
            parse_field(Field::AvgConsumption, self.avg_consumption.as_deref())?;
        let soc_start: Percentage = parse_field(Field::SocStart, self.soc_start.as_deref())?;
        let soc_end: Percentage = parse_field(Field::SocEnd, self.soc_end.as_deref())?;
        debug!(
            %delivery_capacity,
            %trip_distance,
            %avg_consumption,
            %soc_start,
            %soc_end,
            "parsed"
        );

        if delivery_capacity <= KilowattHours::ZERO {
            return Err(ValidationError::NonPositiveCapacity { capacity: delivery_capacity });
        }
        if trip_distance <= Kilometers::ZERO {
            return Err(ValidationError::NonPositiveDistance { distance: trip_distance });
        }
        if avg_consumption <= KilowattHoursPer100Km::ZERO {
            return Err(ValidationError::NonPositiveConsumption { consumption: avg_consumption });
        }
        for (field, value) in [(Field::SocStart, soc_start), (Field::SocEnd, soc_end)] {
            if value.clamp(Percentage::ZERO, Percentage::FULL) != value {
                return Err(ValidationError::SocOutOfRange { field, value });
            }
        }
        if soc_start <= soc_end {
            return Err(ValidationError::SocOrderInvalid { start: soc_start, end: soc_end });
        }

        let input =
            MeasurementInput { delivery_capacity, trip_distance, avg_consumption, soc_start, soc_end };
        if !Extrapolation::of(&input).is_computable() {
            return Err(ValidationError::OutOfComputableRange);
        }
        Ok(input)
    }
}

fn parse_field<T: From<f64>>(field: Field, value: Option<&str>) -> Result<T, ValidationError> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| f64::from_str(value).ok())
        .filter(|value| value.is_finite())
        .map(T::from)
        .ok_or(ValidationError::MissingOrNonNumeric { field })
}

/// Accept both TOML numbers and strings, so that a measurement file may be written either way.
fn deserialize_field<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        Integer(i64),
        Float(f64),
        String(String),
    }

    Ok(Option::<Value>::deserialize(deserializer)?.map(|value| match value {
        Value::Integer(value) => value.to_string(),
        Value::Float(value) => value.to_string(),
        Value::String(value) => value,
    }))
}

/// Validated trip measurement.
///
/// Only constructible through [`RawMeasurement::validate`], hence the SoC window is never empty.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MeasurementInput {
    delivery_capacity: KilowattHours,
    trip_distance: Kilometers,
    avg_consumption: KilowattHoursPer100Km,
    soc_start: Percentage,
    soc_end: Percentage,
}

impl MeasurementInput {
    pub const fn delivery_capacity(&self) -> KilowattHours {
        self.delivery_capacity
    }

    pub const fn trip_distance(&self) -> Kilometers {
        self.trip_distance
    }

    pub const fn avg_consumption(&self) -> KilowattHoursPer100Km {
        self.avg_consumption
    }

    pub const fn soc_start(&self) -> Percentage {
        self.soc_start
    }

    pub const fn soc_end(&self) -> Percentage {
        self.soc_end
    }

    /// Always positive.
    pub fn soc_delta(&self) -> Percentage {
        self.soc_start - self.soc_end
    }

    pub fn low_soc_delta_warning(&self) -> Option<LowSocDeltaWarning> {
        let delta = self.soc_delta();
        (delta < MIN_ACCURATE_SOC_DELTA).then_some(LowSocDeltaWarning { delta })
    }
}

impl Display for MeasurementInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {} with SoC {} → {} (rated {})",
            self.trip_distance,
            self.avg_consumption,
            self.soc_start,
            self.soc_end,
            self.delivery_capacity,
        )
    }
}
