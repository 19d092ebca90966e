//! Property tests for the ordered classification rules.
//!
//! The contract is quantified over all device-type strings, so the
//! keyword rules are exercised with arbitrary surrounding text and
//! casing rather than a fixed list of samples.

use proptest::prelude::*;
use twin_architect::{generate_architecture, DeviceCategory};
use twin_types::{DesignStatus, DeviceRequirement};

/// Arbitrary printable padding without any rule keyword in it.
fn neutral_padding() -> impl Strategy<Value = String> {
    "[ -~]{0,20}".prop_filter("padding must not contain a keyword", |s| {
        let lower = s.to_lowercase();
        !lower.contains("ventilator") && !lower.contains("glucose") && !lower.contains("cgm")
    })
}

/// Random-case spelling of a fixed keyword.
fn mixed_case(keyword: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), keyword.len()).prop_map(move |upper| {
        keyword
            .chars()
            .zip(upper)
            .map(|(c, up)| {
                if up {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn any_string_containing_ventilator_is_a_ventilator(
        prefix in neutral_padding(),
        keyword in mixed_case("ventilator"),
        suffix in "[ -~]{0,20}",
    ) {
        let device_type = format!("{prefix}{keyword}{suffix}");
        prop_assert_eq!(
            DeviceCategory::classify(&device_type),
            DeviceCategory::Ventilator
        );

        let result = generate_architecture(&DeviceRequirement::new(device_type, "Class III"));
        prop_assert_eq!(result.components.len(), 8);
        prop_assert_eq!(result.interfaces.len(), 5);
        prop_assert_eq!(result.status, DesignStatus::Generated);
    }

    #[test]
    fn glucose_or_cgm_without_ventilator_is_cgm(
        prefix in neutral_padding(),
        keyword in prop_oneof![mixed_case("glucose"), mixed_case("cgm")],
        suffix in neutral_padding(),
    ) {
        let device_type = format!("{prefix}{keyword}{suffix}");
        prop_assert_eq!(DeviceCategory::classify(&device_type), DeviceCategory::Cgm);

        let result = generate_architecture(&DeviceRequirement::new(device_type, "Class II"));
        prop_assert_eq!(result.components.len(), 6);
        prop_assert_eq!(result.interfaces.len(), 4);
    }

    #[test]
    fn keyword_free_strings_fall_back_to_generic(device_type in neutral_padding()) {
        prop_assert_eq!(
            DeviceCategory::classify(&device_type),
            DeviceCategory::Generic
        );

        let result = generate_architecture(&DeviceRequirement::new(device_type, "Class I"));
        prop_assert_eq!(result.components.len(), 4);
        prop_assert_eq!(result.interfaces.len(), 3);
    }

    #[test]
    fn classification_is_deterministic(device_type in "[ -~]{0,40}") {
        prop_assert_eq!(
            DeviceCategory::classify(&device_type),
            DeviceCategory::classify(&device_type)
        );
    }
}
