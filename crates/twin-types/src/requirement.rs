//! Device requirement input model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-text device requirement submitted by a client.
///
/// Immutable input value; owned by the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRequirement {
    /// Type of medical device, e.g. "Ventilator".
    pub device_type: String,

    /// Regulatory device class, e.g. "Class III".
    pub device_class: String,

    /// Ordered list of functional requirements.
    #[serde(default)]
    pub functional_requirements: Vec<String>,

    /// Design constraints as key/value pairs, e.g. power or standard.
    #[serde(default)]
    pub constraints: BTreeMap<String, String>,
}

impl DeviceRequirement {
    pub fn new(device_type: impl Into<String>, device_class: impl Into<String>) -> Self {
        Self {
            device_type: device_type.into(),
            device_class: device_class.into(),
            functional_requirements: Vec::new(),
            constraints: BTreeMap::new(),
        }
    }
}
