//! Continuous glucose monitor (Class II) digital twin.
//!
//! Models the sensing chain: electrochemical sensor with bounded
//! noise, 12-bit ADC conversion, and glycemic alert thresholds.

use crate::round2;
use rand::Rng;
use twin_types::{CgmSimulation, GlucoseAlert};

/// Sensor noise bound in mg/dL.
pub const NOISE_BOUND: f64 = 5.0;

const ADC_RESOLUTION: f64 = 4096.0;
const MAX_GLUCOSE: f64 = 400.0;

/// Glycemic alert thresholds in mg/dL.
pub const HYPO_THRESHOLD: f64 = 70.0;
pub const HYPER_THRESHOLD: f64 = 180.0;

/// Convert a sensed glucose value to a 12-bit ADC code, clamped to
/// the converter range.
pub fn adc_conversion(sensor_value: f64) -> u16 {
    let code = (sensor_value / MAX_GLUCOSE * ADC_RESOLUTION) as i64;
    code.clamp(0, ADC_RESOLUTION as i64 - 1) as u16
}

/// Alert logic over the sensed value.
pub fn alert_logic(sensor_reading: f64) -> GlucoseAlert {
    if sensor_reading < HYPO_THRESHOLD {
        GlucoseAlert::Hypoglycemia
    } else if sensor_reading > HYPER_THRESHOLD {
        GlucoseAlert::Hyperglycemia
    } else {
        GlucoseAlert::Normal
    }
}

/// Run the CGM twin with an explicit sensor noise term.
///
/// The noise term is a parameter so callers (and tests) control the
/// randomness; `noise` is expected in [-NOISE_BOUND, NOISE_BOUND].
pub fn simulate_with_noise(glucose_level: f64, noise: f64) -> CgmSimulation {
    let sensor_reading = glucose_level + noise;

    CgmSimulation {
        actual_glucose_mg_dl: round2(glucose_level),
        sensor_reading: round2(sensor_reading),
        adc_value: adc_conversion(sensor_reading),
        alert_status: alert_logic(sensor_reading),
    }
}

/// Run the CGM twin with uniform sensor noise from the thread RNG.
pub fn simulate(glucose_level: f64) -> CgmSimulation {
    let noise = rand::thread_rng().gen_range(-NOISE_BOUND..=NOISE_BOUND);
    simulate_with_noise(glucose_level, noise)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_range_reading_without_noise() {
        let sim = simulate_with_noise(140.0, 0.0);
        assert_eq!(sim.actual_glucose_mg_dl, 140.0);
        assert_eq!(sim.sensor_reading, 140.0);
        assert_eq!(sim.adc_value, 1433);
        assert_eq!(sim.alert_status, GlucoseAlert::Normal);
    }

    #[test]
    fn low_reading_raises_hypoglycemia() {
        let sim = simulate_with_noise(65.0, -2.0);
        assert_eq!(sim.alert_status, GlucoseAlert::Hypoglycemia);
    }

    #[test]
    fn high_reading_raises_hyperglycemia() {
        let sim = simulate_with_noise(200.0, 3.0);
        assert_eq!(sim.alert_status, GlucoseAlert::Hyperglycemia);
    }

    #[test]
    fn noise_can_move_a_reading_across_a_threshold() {
        assert_eq!(
            simulate_with_noise(72.0, -4.0).alert_status,
            GlucoseAlert::Hypoglycemia
        );
        assert_eq!(
            simulate_with_noise(72.0, 4.0).alert_status,
            GlucoseAlert::Normal
        );
    }

    #[test]
    fn adc_output_is_clamped_to_twelve_bits() {
        assert_eq!(adc_conversion(-10.0), 0);
        assert_eq!(adc_conversion(500.0), 4095);
        assert_eq!(adc_conversion(0.0), 0);
    }

    #[test]
    fn thread_rng_noise_stays_within_bounds() {
        for _ in 0..100 {
            let sim = simulate(140.0);
            assert!((sim.sensor_reading - 140.0).abs() <= NOISE_BOUND + f64::EPSILON);
        }
    }
}
