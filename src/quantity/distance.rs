use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, consumption::KilowattHoursPer100Km, energy::KilowattHours};

pub type Kilometers = Quantity<f64, 0, 1>;

impl Display for Kilometers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} km", self.0)
    }
}

impl Debug for Kilometers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}km", self.0)
    }
}

/// Energy spent driving the distance at the given average consumption.
impl Mul<KilowattHoursPer100Km> for Kilometers {
    type Output = KilowattHours;

    fn mul(self, rhs: KilowattHoursPer100Km) -> Self::Output {
        Quantity(self.0 * rhs.0 / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_consumed_energy() {
        let energy = Kilometers::from(150.0) * KilowattHoursPer100Km::from(18.0);
        assert_abs_diff_eq!(energy.0, 27.0);
        let energy = Kilometers::from(100.0) * KilowattHoursPer100Km::from(16.0);
        assert_abs_diff_eq!(energy.0, 16.0);
    }
}
