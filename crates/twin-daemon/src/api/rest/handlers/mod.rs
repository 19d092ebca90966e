//! Request handlers.

pub mod design;
pub mod simulate;
pub mod status;

pub use design::{generate_design, llm_design};
pub use simulate::{simulate_cgm, simulate_ventilator};
pub use status::root_status;
