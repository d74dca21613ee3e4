use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Average energy consumption, expressed per 100 kilometers the way vehicles report it.
pub type KilowattHoursPer100Km = Quantity<f64, 1, -1>;

impl Display for KilowattHoursPer100Km {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} kWh/100km", self.0)
    }
}

impl Debug for KilowattHoursPer100Km {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kWh/100km", self.0)
    }
}
