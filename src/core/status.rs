use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::Serialize;

use crate::quantity::{Quantity, percentage::Percentage};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusTier {
    /// The battery is as good as new.
    Excellent,

    /// Normal ageing.
    Good,

    /// Noticeable degradation, worth a check at the next service.
    Fair,

    /// Degradation well beyond the usual, the battery should be inspected.
    Poor,
}

impl StatusTier {
    const EXCELLENT_THRESHOLD: Percentage = Quantity(95.0);
    const GOOD_THRESHOLD: Percentage = Quantity(85.0);
    const FAIR_THRESHOLD: Percentage = Quantity(75.0);

    /// Classify the unrounded state of health, first matching threshold wins.
    pub fn classify(soh: Percentage) -> Self {
        if soh >= Self::EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if soh >= Self::GOOD_THRESHOLD {
            Self::Good
        } else if soh >= Self::FAIR_THRESHOLD {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair (check recommended)",
            Self::Poor => "Inspection recommended",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Excellent => Color::Green,
            Self::Good => Color::Cyan,
            Self::Fair => Color::DarkYellow,
            Self::Poor => Color::Red,
        }
    }
}

impl Display for StatusTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
