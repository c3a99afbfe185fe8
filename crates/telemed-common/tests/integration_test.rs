use chrono::{TimeZone, Utc};
use telemed_common::models::appointment::{Appointment, AppointmentStatus};
use telemed_common::models::auth::{AuthData, Role};
use telemed_common::models::consultation::Consultation;
use telemed_common::models::doctor::Doctor;
use telemed_common::models::envelope::ApiEnvelope;
use telemed_common::validation;

#[test]
fn test_login_envelope_full_flow() {
    // Shape the auth endpoint actually returns on success
    let json = r#"{
        "statusCode": 200,
        "message": "Login successful",
        "data": {
            "token": "t1",
            "roles": ["PATIENT"]
        }
    }"#;

    let envelope: ApiEnvelope<AuthData> = serde_json::from_str(json).unwrap();
    assert!(envelope.is_success());

    let auth = envelope.data.unwrap();
    assert_eq!(auth.token, "t1");
    assert_eq!(auth.roles, vec!["PATIENT"]);
    assert_eq!(Role::parse(&auth.roles[0]), Some(Role::Patient));
}

#[test]
fn test_application_error_wrapped_in_http_200() {
    // The server signals failure in the envelope, not the HTTP status
    let json = r#"{"statusCode": 401, "message": "Invalid email or password"}"#;
    let envelope: ApiEnvelope<AuthData> = serde_json::from_str(json).unwrap();
    assert!(!envelope.is_success());
    assert_eq!(envelope.message.as_deref(), Some("Invalid email or password"));
    assert!(envelope.data.is_none());
}

#[test]
fn test_doctor_listing_envelope() {
    let json = r#"{
        "statusCode": 200,
        "message": "OK",
        "data": [
            {"id": 1, "firstName": "Ada", "lastName": "Obi", "specialization": "CARDIOLOGY"},
            {"id": 2, "user": {"name": "Ben Eze"}}
        ]
    }"#;
    let envelope: ApiEnvelope<Vec<Doctor>> = serde_json::from_str(json).unwrap();
    let doctors = envelope.data.unwrap();
    assert_eq!(doctors.len(), 2);
    assert_eq!(doctors[0].display_name(), "Dr. Ada Obi - CARDIOLOGY");
    assert_eq!(doctors[1].display_name(), "Dr. Ben Eze - General Practice");
}

#[test]
fn test_appointment_listing_for_patient() {
    let json = r#"{
        "statusCode": 200,
        "data": [{
            "id": 42,
            "status": "SCHEDULED",
            "startTime": "2026-09-01T10:30:00Z",
            "purposeOfConsultation": "Follow-up",
            "initialSymptoms": "Headaches",
            "doctor": {"id": 1, "firstName": "Ada", "lastName": "Obi"}
        }, {
            "id": 43,
            "status": "COMPLETED"
        }]
    }"#;
    let envelope: ApiEnvelope<Vec<Appointment>> = serde_json::from_str(json).unwrap();
    let appointments = envelope.data.unwrap();
    assert_eq!(appointments[0].status, AppointmentStatus::Scheduled);
    assert_eq!(appointments[1].status, AppointmentStatus::Completed);
    assert!(appointments[1].start_time.is_none());
}

#[test]
fn test_consultation_history_envelope() {
    let json = r#"{
        "statusCode": 200,
        "data": [{
            "id": 9,
            "appointmentId": 43,
            "consultationDate": "2026-08-20T09:00:00Z",
            "subjectiveNotes": "Patient reports improvement",
            "objectiveFindings": "BP 120/80",
            "assessment": "Recovering",
            "plan": "Continue medication"
        }]
    }"#;
    let envelope: ApiEnvelope<Vec<Consultation>> = serde_json::from_str(json).unwrap();
    let history = envelope.data.unwrap();
    assert_eq!(history[0].appointment_id, Some(43));
    assert_eq!(
        history[0].consultation_date,
        Some(Utc.with_ymd_and_hms(2026, 8, 20, 9, 0, 0).unwrap())
    );
}

#[test]
fn test_booking_validation_blocks_before_submit() {
    // Empty doctor and past start time both block the submission
    let now = Utc.with_ymd_and_hms(2026, 8, 27, 12, 0, 0).unwrap();

    let err = validation::validate_booking(None, Some(now + chrono::Duration::days(1)), now)
        .unwrap_err();
    assert_eq!(err.to_string(), "Please select a doctor");

    let err = validation::validate_booking(Some(1), Some(now - chrono::Duration::days(1)), now)
        .unwrap_err();
    assert_eq!(err.to_string(), "Appointment time must be in the future");
}

#[test]
fn test_reset_password_validation_blocks_before_submit() {
    let err = validation::validate_new_password("newpass", "different").unwrap_err();
    assert_eq!(
        err.to_string(),
        "New password and confirm password do not match"
    );
}
