//! Simulation input and result models for the ventilator and CGM
//! digital twins.
//!
//! JSON key spelling (`pressure_cmH2O`, `motor_current_A`, ...) is
//! part of the external contract and is preserved via serde renames.

use serde::{Deserialize, Serialize};

/// Ventilator simulation input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Motor speed control value (RPM equivalent).
    pub motor_speed: f64,
}

/// CGM simulation input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CgmSimulationInput {
    /// Blood glucose level in mg/dL.
    pub glucose_level: f64,
}

/// Ventilator alarm state derived from airway pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmState {
    #[serde(rename = "NORMAL")]
    Normal,
    #[serde(rename = "LOW_PRESSURE_ALARM")]
    LowPressure,
    #[serde(rename = "OVER_PRESSURE_ALARM")]
    OverPressure,
}

/// Ventilator digital twin output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VentilatorSimulation {
    pub airflow_lpm: f64,
    #[serde(rename = "pressure_cmH2O")]
    pub pressure_cm_h2o: f64,
    #[serde(rename = "motor_current_A")]
    pub motor_current_a: f64,
    #[serde(rename = "power_W")]
    pub power_w: f64,
    pub alarm_status: AlarmState,
}

/// CGM alert state derived from the sensed glucose value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlucoseAlert {
    #[serde(rename = "NORMAL")]
    Normal,
    #[serde(rename = "HYPOGLYCEMIA")]
    Hypoglycemia,
    #[serde(rename = "HYPERGLYCEMIA")]
    Hyperglycemia,
}

/// CGM digital twin output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CgmSimulation {
    pub actual_glucose_mg_dl: f64,
    pub sensor_reading: f64,
    pub adc_value: u16,
    pub alert_status: GlucoseAlert,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ventilator_result_uses_original_json_keys() {
        let sim = VentilatorSimulation {
            airflow_lpm: 12.0,
            pressure_cm_h2o: 14.4,
            motor_current_a: 3.0,
            power_w: 36.0,
            alarm_status: AlarmState::Normal,
        };
        let json = serde_json::to_value(sim).unwrap();
        assert_eq!(json["pressure_cmH2O"], 14.4);
        assert_eq!(json["motor_current_A"], 3.0);
        assert_eq!(json["alarm_status"], "NORMAL");
    }
}
