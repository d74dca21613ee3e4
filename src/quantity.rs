pub mod consumption;
pub mod distance;
pub mod energy;
pub mod percentage;

use serde::{Deserialize, Serialize};

/// Physical quantity tagged with its energy and distance dimensions.
#[derive(
    Clone,
    Copy,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::From,
    derive_more::Sub,
)]
#[serde(transparent)]
pub struct Quantity<T, const ENERGY: isize, const DISTANCE: isize>(pub T);

impl<T, const ENERGY: isize, const DISTANCE: isize> Quantity<T, ENERGY, DISTANCE>
where
    Self: PartialOrd,
{
    pub fn clamp(mut self, min: Self, max: Self) -> Self {
        if self < min {
            self = min;
        }
        if self > max {
            self = max;
        }
        self
    }
}

impl<const ENERGY: isize, const DISTANCE: isize> Quantity<f64, ENERGY, DISTANCE> {
    pub const ZERO: Self = Self(0.0);

    /// Round half-up to one decimal place, the precision the results are reported with.
    #[must_use]
    pub fn round_to_tenths(self) -> Self {
        Self((self.0 * 10.0 + 0.5).floor() / 10.0)
    }

    pub const fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}
