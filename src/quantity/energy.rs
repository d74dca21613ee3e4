use std::{
    fmt::{Debug, Display, Formatter},
    ops::Div,
};

use crate::quantity::{Quantity, percentage::Percentage};

pub type KilowattHours = Quantity<f64, 1, 0>;

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} kWh", self.0)
    }
}

impl Debug for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kWh", self.0)
    }
}

/// Extrapolate the energy spent over a state-of-charge window to the full 100%.
impl Div<Percentage> for KilowattHours {
    type Output = Self;

    fn div(self, rhs: Percentage) -> Self::Output {
        Self(self.0 / rhs.0 * 100.0)
    }
}

/// Relate two energies to each other as a percentage.
impl Div<Self> for KilowattHours {
    type Output = Percentage;

    fn div(self, rhs: Self) -> Self::Output {
        Quantity(self.0 / rhs.0 * 100.0)
    }
}
