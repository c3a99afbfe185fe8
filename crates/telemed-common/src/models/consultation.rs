use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A consultation note in SOAP form (subjective, objective, assessment,
/// plan), written by a doctor against a completed appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    pub id: i64,
    #[serde(default)]
    pub appointment_id: Option<i64>,
    #[serde(default)]
    pub consultation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub subjective_notes: Option<String>,
    #[serde(default)]
    pub objective_findings: Option<String>,
    #[serde(default)]
    pub assessment: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConsultationRequest {
    pub appointment_id: i64,
    pub subjective_notes: String,
    pub objective_findings: String,
    pub assessment: String,
    pub plan: String,
}
