//! Ventilator (Class III) digital twin.
//!
//! Mechanical model: airflow scales linearly with motor speed,
//! airway pressure scales with airflow. Electrical model: motor
//! current scales with speed at a fixed 12 V supply.

use crate::round2;
use twin_types::{AlarmState, VentilatorSimulation};

const AIRFLOW_PER_RPM: f64 = 0.08;
const PRESSURE_PER_LPM: f64 = 1.2;
const CURRENT_PER_RPM: f64 = 0.02;
const SUPPLY_VOLTAGE: f64 = 12.0;

/// Airway pressure safety band in cmH2O.
pub const MIN_PRESSURE: f64 = 5.0;
pub const MAX_PRESSURE: f64 = 20.0;

/// Pressure safety check.
pub fn control_logic(pressure_cm_h2o: f64) -> AlarmState {
    if pressure_cm_h2o < MIN_PRESSURE {
        AlarmState::LowPressure
    } else if pressure_cm_h2o > MAX_PRESSURE {
        AlarmState::OverPressure
    } else {
        AlarmState::Normal
    }
}

/// Run the full ventilator twin for a motor speed control value.
pub fn simulate(motor_speed: f64) -> VentilatorSimulation {
    let airflow_lpm = AIRFLOW_PER_RPM * motor_speed;
    let pressure_cm_h2o = PRESSURE_PER_LPM * airflow_lpm;
    let motor_current_a = CURRENT_PER_RPM * motor_speed;
    let power_w = SUPPLY_VOLTAGE * motor_current_a;

    VentilatorSimulation {
        airflow_lpm: round2(airflow_lpm),
        pressure_cm_h2o: round2(pressure_cm_h2o),
        motor_current_a: round2(motor_current_a),
        power_w: round2(power_w),
        alarm_status: control_logic(pressure_cm_h2o),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal_speed_runs_without_alarm() {
        let sim = simulate(150.0);
        assert_eq!(sim.airflow_lpm, 12.0);
        assert_eq!(sim.pressure_cm_h2o, 14.4);
        assert_eq!(sim.motor_current_a, 3.0);
        assert_eq!(sim.power_w, 36.0);
        assert_eq!(sim.alarm_status, AlarmState::Normal);
    }

    #[test]
    fn low_speed_triggers_low_pressure_alarm() {
        let sim = simulate(20.0);
        assert!(sim.pressure_cm_h2o < MIN_PRESSURE);
        assert_eq!(sim.alarm_status, AlarmState::LowPressure);
    }

    #[test]
    fn high_speed_triggers_over_pressure_alarm() {
        let sim = simulate(300.0);
        assert!(sim.pressure_cm_h2o > MAX_PRESSURE);
        assert_eq!(sim.alarm_status, AlarmState::OverPressure);
    }

    #[test]
    fn alarm_band_boundaries_are_inclusive() {
        assert_eq!(control_logic(MIN_PRESSURE), AlarmState::Normal);
        assert_eq!(control_logic(MAX_PRESSURE), AlarmState::Normal);
    }
}
