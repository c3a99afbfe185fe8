use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::doctor::Doctor;
use crate::models::patient::PatientProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    /// States introduced server-side that this client does not know yet.
    #[serde(other)]
    Unknown,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "SCHEDULED",
            AppointmentStatus::Completed => "COMPLETED",
            AppointmentStatus::Cancelled => "CANCELLED",
            AppointmentStatus::Unknown => "UNKNOWN",
        }
    }
}

/// Appointment as listed by `GET /appointments`. The server fills `doctor`
/// for patients and `patient` for doctors; both stay optional here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub purpose_of_consultation: Option<String>,
    #[serde(default)]
    pub initial_symptoms: Option<String>,
    #[serde(default)]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub doctor: Option<Doctor>,
    #[serde(default)]
    pub patient: Option<PatientProfile>,
}

/// Body of `POST /appointments`. `start_time` goes over the wire as
/// RFC 3339 UTC.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    pub doctor_id: i64,
    pub purpose_of_consultation: String,
    pub initial_symptoms: String,
    pub start_time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appointment_deserializes() {
        let json = r#"{
            "id": 42,
            "status": "SCHEDULED",
            "startTime": "2026-09-01T10:30:00Z",
            "purposeOfConsultation": "Follow-up",
            "initialSymptoms": "Headaches",
            "meetingLink": "https://meet.example.com/42",
            "doctor": {"id": 1, "firstName": "Jane", "lastName": "Doe"}
        }"#;
        let appt: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appt.status, AppointmentStatus::Scheduled);
        assert!(appt.start_time.is_some());
        assert!(appt.patient.is_none());
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let appt: Appointment =
            serde_json::from_str(r#"{"id":1,"status":"RESCHEDULED"}"#).unwrap();
        assert_eq!(appt.status, AppointmentStatus::Unknown);
    }

    #[test]
    fn test_booking_body_shape() {
        let req = BookAppointmentRequest {
            doctor_id: 5,
            purpose_of_consultation: "Checkup".into(),
            initial_symptoms: "Fatigue".into(),
            start_time: "2026-09-01T10:30:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["doctorId"], 5);
        assert_eq!(json["startTime"], "2026-09-01T10:30:00Z");
    }
}
