//! Rule-based architecture generator.
//!
//! Maps a device requirement onto one of a small closed set of
//! reference designs. The whole path is a pure function: no model
//! call, no I/O, no shared state, identical output for identical
//! input.

pub mod category;
pub mod designs;

pub use category::DeviceCategory;

use twin_types::{ArchitectureResult, DeviceRequirement};

/// Select the reference design for a requirement.
///
/// Total over all inputs: unknown device types land on the generic
/// design, so there is no error path.
pub fn generate_architecture(requirement: &DeviceRequirement) -> ArchitectureResult {
    let category = DeviceCategory::classify(&requirement.device_type);
    designs::reference_design(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use twin_types::DesignStatus;

    #[test]
    fn ventilator_requirement_gets_ventilator_design() {
        let req = DeviceRequirement::new("Ventilator", "Class III");
        let result = generate_architecture(&req);
        assert_eq!(result.components.len(), 8);
        assert_eq!(result.interfaces.len(), 5);
        assert_eq!(result.status, DesignStatus::Generated);
        assert_eq!(result.components["MCU"], "STM32F4");
    }

    #[test]
    fn unknown_device_gets_generic_design() {
        let req = DeviceRequirement::new("Smart Insulin Pen", "Class II");
        let result = generate_architecture(&req);
        assert_eq!(result.components.len(), 4);
        assert_eq!(result.interfaces.len(), 3);
        assert_eq!(result.status, DesignStatus::Generated);
    }

    #[test]
    fn repeated_calls_are_byte_identical() {
        let req = DeviceRequirement::new("CGM patch", "Class II");
        let a = serde_json::to_vec(&generate_architecture(&req)).unwrap();
        let b = serde_json::to_vec(&generate_architecture(&req)).unwrap();
        assert_eq!(a, b);
    }
}
