//! Device classification.
//!
//! The keyword rules run in a fixed priority order and the first
//! match wins. That order is part of the external contract (a
//! requirement mentioning both a ventilator and a glucose sensor is
//! classified as a ventilator) and is covered by tests.

use serde::{Deserialize, Serialize};

/// Device category selected by the ordered keyword rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceCategory {
    /// Mechanical ventilator (Class III reference design).
    Ventilator,
    /// Continuous glucose monitor (Class II reference design).
    Cgm,
    /// Catch-all for everything else.
    Generic,
}

impl DeviceCategory {
    /// Classify a free-text device type.
    ///
    /// Case-insensitive substring match, priority order:
    /// 1. "ventilator"
    /// 2. "glucose" or "cgm"
    /// 3. generic catch-all
    pub fn classify(device_type: &str) -> Self {
        let device_type = device_type.to_lowercase();

        if device_type.contains("ventilator") {
            DeviceCategory::Ventilator
        } else if device_type.contains("glucose") || device_type.contains("cgm") {
            DeviceCategory::Cgm
        } else {
            DeviceCategory::Generic
        }
    }
}

impl std::fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DeviceCategory::Ventilator => "ventilator",
            DeviceCategory::Cgm => "cgm",
            DeviceCategory::Generic => "generic",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(
            DeviceCategory::classify("VENTILATOR"),
            DeviceCategory::Ventilator
        );
        assert_eq!(DeviceCategory::classify("CgM Patch"), DeviceCategory::Cgm);
        assert_eq!(
            DeviceCategory::classify("Glucose Monitor"),
            DeviceCategory::Cgm
        );
    }

    #[test]
    fn ventilator_rule_wins_over_glucose_rule() {
        assert_eq!(
            DeviceCategory::classify("Ventilator with glucose sensor"),
            DeviceCategory::Ventilator
        );
    }

    #[test]
    fn unmatched_input_is_generic() {
        assert_eq!(
            DeviceCategory::classify("Smart Insulin Pen"),
            DeviceCategory::Generic
        );
        assert_eq!(DeviceCategory::classify(""), DeviceCategory::Generic);
    }
}
