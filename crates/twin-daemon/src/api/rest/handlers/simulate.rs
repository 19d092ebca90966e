//! Digital twin simulation handlers.

use axum::Json;
use serde::Serialize;
use twin_compliance::{CgmComplianceReport, ComplianceReport};
use twin_types::{CgmSimulation, CgmSimulationInput, SimulationInput, VentilatorSimulation};

/// Response of `POST /simulate`.
#[derive(Debug, Serialize)]
pub struct VentilatorSimulateResponse {
    pub device: String,
    pub simulation_result: VentilatorSimulation,
    pub compliance: ComplianceReport,
}

/// Run the ventilator twin and its compliance checks.
pub async fn simulate_ventilator(
    Json(input): Json<SimulationInput>,
) -> Json<VentilatorSimulateResponse> {
    let simulation_result = twin_sim::ventilator::simulate(input.motor_speed);
    let compliance = twin_compliance::check_ventilator(&simulation_result);

    Json(VentilatorSimulateResponse {
        device: "Ventilator".to_string(),
        simulation_result,
        compliance,
    })
}

/// Response of `POST /simulate-cgm`.
#[derive(Debug, Serialize)]
pub struct CgmSimulateResponse {
    pub device: String,
    pub simulation_result: CgmSimulation,
    pub compliance: CgmComplianceReport,
}

/// Run the CGM twin with its static compliance summary.
pub async fn simulate_cgm(Json(input): Json<CgmSimulationInput>) -> Json<CgmSimulateResponse> {
    let simulation_result = twin_sim::cgm::simulate(input.glucose_level);

    Json(CgmSimulateResponse {
        device: "Continuous Glucose Monitor (CGM)".to_string(),
        simulation_result,
        compliance: twin_compliance::cgm_report(),
    })
}
