//! Digital twin simulators.
//!
//! Both twins are closed-form: each output is a fixed affine function
//! of one scalar input plus threshold logic. They model demo-level
//! behavior, not physical or electrical fidelity.

pub mod cgm;
pub mod ventilator;

/// Round to two decimals for wire output.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
