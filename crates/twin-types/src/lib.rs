//! Shared wire types for the medtwin backend.
//!
//! Every type here is a plain value: created per request, serialized
//! once, and discarded. There is no identity, lifecycle, or shared
//! mutable state behind any of them.

pub mod architecture;
pub mod requirement;
pub mod simulation;

pub use architecture::{ArchitectureResult, DesignStatus};
pub use requirement::DeviceRequirement;
pub use simulation::{
    AlarmState, CgmSimulation, CgmSimulationInput, GlucoseAlert, SimulationInput,
    VentilatorSimulation,
};
