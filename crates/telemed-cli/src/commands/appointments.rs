use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

use telemed_client::{AccessPolicy, ApiClient, SessionStore};
use telemed_common::models::appointment::{AppointmentStatus, BookAppointmentRequest};
use telemed_common::validation;

use super::{require, submit_error};
use crate::render::{format_time, or_not_provided};

pub async fn cmd_doctors(client: &ApiClient) -> Result<()> {
    let doctors = client
        .get_all_doctors()
        .await
        .map_err(|_| anyhow!("Failed to load doctors list"))?;

    if doctors.is_empty() {
        println!("No doctors found.");
        return Ok(());
    }

    println!("{:6} NAME", "ID");
    println!("{}", "-".repeat(50));
    for doctor in &doctors {
        let id = doctor
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:6} {}", id, doctor.display_name());
    }
    Ok(())
}

/// Accepts RFC 3339 or the datetime-local form `YYYY-MM-DDTHH:MM`, which is
/// interpreted in the local timezone and sent as UTC.
fn parse_start_time(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Ok(t.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M"))
        .context("Invalid date-time (expected e.g. 2026-09-01T10:30)")?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|t| t.with_timezone(&Utc))
        .context("Ambiguous local date-time")
}

pub async fn cmd_book_appointment(
    client: &ApiClient,
    store: &SessionStore,
    doctor: Option<i64>,
    purpose: String,
    symptoms: String,
    start: Option<String>,
) -> Result<()> {
    require(store, AccessPolicy::PatientsOnly)?;

    let start_time = match &start {
        Some(raw) => Some(parse_start_time(raw)?),
        None => None,
    };
    validation::validate_booking(doctor, start_time, Utc::now())?;
    let req = BookAppointmentRequest {
        doctor_id: doctor.expect("validated above"),
        purpose_of_consultation: purpose,
        initial_symptoms: symptoms,
        start_time: start_time.expect("validated above"),
    };

    client.book_appointment(&req).await.map_err(|e| {
        submit_error(
            e,
            "Failed to book appointment",
            "An error occurred while booking appointment",
        )
    })?;

    println!("Appointment booked successfully!");
    println!("Run `telemed appointments` to see it.");
    Ok(())
}

pub async fn cmd_my_appointments(client: &ApiClient, store: &SessionStore) -> Result<()> {
    require(store, AccessPolicy::PatientsOnly)?;

    let appointments = client
        .get_my_appointments()
        .await
        .map_err(|_| anyhow!("Failed to load appointments"))?;

    if appointments.is_empty() {
        println!("No appointments found.");
        return Ok(());
    }

    for appointment in &appointments {
        println!(
            "#{} {} {}",
            appointment.id,
            appointment.status.as_str(),
            format_time(appointment.start_time),
        );
        if let Some(doctor) = &appointment.doctor {
            println!("  Doctor:   {}", doctor.display_name());
        }
        println!(
            "  Purpose:  {}",
            or_not_provided(appointment.purpose_of_consultation.as_deref())
        );
        println!(
            "  Symptoms: {}",
            or_not_provided(appointment.initial_symptoms.as_deref())
        );
        match appointment.status {
            AppointmentStatus::Scheduled => {
                if let Some(link) = &appointment.meeting_link {
                    println!("  Meeting:  {}", link);
                }
                println!(
                    "  Cancel with `telemed cancel-appointment {}`.",
                    appointment.id
                );
            }
            AppointmentStatus::Completed => {
                println!(
                    "  Notes: `telemed consultation-history --appointment {}`.",
                    appointment.id
                );
            }
            _ => {}
        }
        println!();
    }
    Ok(())
}

pub async fn cmd_cancel_appointment(
    client: &ApiClient,
    store: &SessionStore,
    appointment_id: i64,
) -> Result<()> {
    require(store, AccessPolicy::PatientOrDoctor)?;

    client.cancel_appointment(appointment_id).await.map_err(|e| {
        submit_error(
            e,
            "Failed to cancel appointment",
            "Error cancelling appointment",
        )
    })?;

    println!("Appointment cancelled.");
    Ok(())
}
