use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type Percentage = Quantity<f64, 0, 0>;

impl Percentage {
    pub const FULL: Self = Self(100.0);
}

impl Display for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

impl Debug for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
