//! Static reference designs, one per device category.

use crate::DeviceCategory;
use twin_types::ArchitectureResult;

/// Reference design for the ventilator (Class III) category:
/// 8 components, 5 annotated interfaces.
fn ventilator() -> ArchitectureResult {
    ArchitectureResult::generated(
        [
            ("MCU", "STM32F4"),
            ("Pressure Sensor", "MPX5010"),
            ("Flow Sensor", "YF-S201"),
            ("Blower Motor", "BLDC Motor"),
            ("Valve", "Solenoid Valve"),
            ("Alarm", "Buzzer + LED"),
            ("Display", "LCD"),
            ("Power", "Battery + SMPS"),
        ],
        [
            "I2C (Sensors)",
            "ADC (Pressure)",
            "PWM (Motor Control)",
            "GPIO (Alarm, Valve)",
            "UART (Display)",
        ],
    )
}

/// Reference design for the CGM (Class II) category:
/// 6 components, 4 interfaces.
fn cgm() -> ArchitectureResult {
    ArchitectureResult::generated(
        [
            ("MCU", "nRF52832"),
            ("Glucose Sensor", "Electrochemical Sensor"),
            ("ADC", "12-bit ADC"),
            ("BLE Module", "Bluetooth Low Energy"),
            ("Battery", "Coin Cell"),
            ("Mobile App", "Android / iOS"),
        ],
        [
            "ADC (Sensor Input)",
            "SPI (ADC)",
            "BLE (Wireless)",
            "GPIO (Status LED)",
        ],
    )
}

/// Catch-all design: 4 components, 3 interfaces.
fn generic() -> ArchitectureResult {
    ArchitectureResult::generated(
        [
            ("MCU", "Generic MCU"),
            ("Sensor", "Generic Sensor"),
            ("Actuator", "Generic Actuator"),
            ("Power", "DC Supply"),
        ],
        ["I2C", "SPI", "GPIO"],
    )
}

/// Look up the reference design for a category.
pub fn reference_design(category: DeviceCategory) -> ArchitectureResult {
    match category {
        DeviceCategory::Ventilator => ventilator(),
        DeviceCategory::Cgm => cgm(),
        DeviceCategory::Generic => generic(),
    }
}
