//! Architecture design output model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How an architecture result was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignStatus {
    /// The design came out of the architect (rule-based or parsed
    /// from model output).
    Generated,
    /// Model output could not be parsed; the fixed generic design
    /// was substituted.
    Fallback,
}

/// Structured {components, interfaces} design returned by either
/// architect.
///
/// `components` maps unique role labels to part identifiers.
/// `interfaces` order is display order only; consumers must not
/// attach meaning to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureResult {
    pub components: BTreeMap<String, String>,
    pub interfaces: Vec<String>,
    pub status: DesignStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ArchitectureResult {
    /// Build a generated result from (role, part) pairs.
    pub fn generated<K, V, I>(
        components: impl IntoIterator<Item = (K, V)>,
        interfaces: impl IntoIterator<Item = I>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: Into<String>,
    {
        Self {
            components: components
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            interfaces: interfaces.into_iter().map(Into::into).collect(),
            status: DesignStatus::Generated,
            note: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_is_omitted_from_json_when_absent() {
        let result = ArchitectureResult::generated([("MCU", "STM32F4")], ["I2C"]);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("note").is_none());
        assert_eq!(json["status"], "generated");
    }
}
