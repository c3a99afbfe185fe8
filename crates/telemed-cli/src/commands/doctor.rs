use anyhow::{anyhow, bail, Result};

use telemed_client::{AccessPolicy, ApiClient, SessionStore};
use telemed_common::models::consultation::CreateConsultationRequest;
use telemed_common::validation;

use super::{require, submit_error};
use crate::render::{enum_label, format_date, format_time, or_not_provided, print_consultations};

pub async fn cmd_specializations(client: &ApiClient) -> Result<()> {
    let specializations = client
        .get_specializations()
        .await
        .map_err(|_| anyhow!("Failed to load specializations"))?;
    for s in &specializations {
        println!("{}", s);
    }
    Ok(())
}

pub async fn cmd_doctor_profile(client: &ApiClient, store: &SessionStore) -> Result<()> {
    require(store, AccessPolicy::DoctorsOnly)?;

    let (user, doctor) = tokio::try_join!(
        client.get_my_user_details(),
        client.get_my_doctor_profile()
    )
    .map_err(|_| anyhow!("Failed to load profile data"))?;

    println!("Account");
    println!("  Name:   {}", or_not_provided(user.name.as_deref()));
    println!("  Email:  {}", or_not_provided(user.email.as_deref()));
    println!(
        "  Picture: {}",
        or_not_provided(user.profile_picture_url.as_deref())
    );
    println!();
    println!("Doctor profile");
    println!(
        "  First name:     {}",
        or_not_provided(doctor.first_name.as_deref())
    );
    println!(
        "  Last name:      {}",
        or_not_provided(doctor.last_name.as_deref())
    );
    println!("  Phone:          {}", or_not_provided(doctor.phone.as_deref()));
    println!(
        "  Specialization: {}",
        doctor
            .specialization
            .as_deref()
            .map(enum_label)
            .unwrap_or_else(|| "Not specified".to_string())
    );
    println!(
        "  License number: {}",
        or_not_provided(doctor.license_number.as_deref())
    );
    Ok(())
}

pub async fn cmd_update_doctor_profile(
    client: &ApiClient,
    store: &SessionStore,
    first_name: Option<String>,
    last_name: Option<String>,
    phone: Option<String>,
    specialization: Option<String>,
) -> Result<()> {
    require(store, AccessPolicy::DoctorsOnly)?;

    let mut profile = client
        .get_my_doctor_profile()
        .await
        .map_err(|_| anyhow!("Failed to load profile data"))?;

    if let Some(specialization) = &specialization {
        let known = client
            .get_specializations()
            .await
            .map_err(|_| anyhow!("Failed to load specializations"))?;
        validation::validate_choice("specialization", specialization, &known)?;
    }

    profile.first_name = first_name.or(profile.first_name);
    profile.last_name = last_name.or(profile.last_name);
    profile.phone = phone.or(profile.phone);
    profile.specialization = specialization.or(profile.specialization);

    client.update_my_doctor_profile(&profile).await.map_err(|e| {
        submit_error(
            e,
            "Failed to update profile",
            "An error occurred while updating profile",
        )
    })?;

    println!("Profile updated successfully!");
    println!("Run `telemed doctor profile` to review it.");
    Ok(())
}

pub async fn cmd_doctor_appointments(client: &ApiClient, store: &SessionStore) -> Result<()> {
    require(store, AccessPolicy::DoctorsOnly)?;

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
        if let Some(patient) = &appointment.patient {
            let name = match (&patient.first_name, &patient.last_name) {
                (Some(first), Some(last)) => format!("{} {}", first, last),
                _ => "Unknown".to_string(),
            };
            println!("  Patient:     {}", name);
            println!("  DOB:         {}", format_date(patient.date_of_birth));
            println!(
                "  Blood group: {}",
                patient
                    .blood_group
                    .as_deref()
                    .map(enum_label)
                    .unwrap_or_else(|| "Not provided".to_string())
            );
            println!(
                "  Genotype:    {}",
                or_not_provided(patient.genotype.as_deref())
            );
            println!(
                "  Allergies:   {}",
                patient.known_allergies.as_deref().unwrap_or("None")
            );
            if let Some(patient_id) = patient.id {
                println!(
                    "  History: `telemed doctor patient-history --patient {}`.",
                    patient_id
                );
            }
        }
        println!(
            "  Purpose:  {}",
            or_not_provided(appointment.purpose_of_consultation.as_deref())
        );
        println!(
            "  Symptoms: {}",
            or_not_provided(appointment.initial_symptoms.as_deref())
        );
        println!();
    }
    Ok(())
}

pub async fn cmd_complete_appointment(
    client: &ApiClient,
    store: &SessionStore,
    appointment_id: i64,
) -> Result<()> {
    require(store, AccessPolicy::DoctorsOnly)?;

    client
        .complete_appointment(appointment_id)
        .await
        .map_err(|e| {
            submit_error(
                e,
                "Failed to complete appointment",
                "Error completing appointment",
            )
        })?;

    println!("Appointment marked as completed.");
    println!(
        "Write the note with `telemed doctor create-consultation --appointment {}`.",
        appointment_id
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn cmd_create_consultation(
    client: &ApiClient,
    store: &SessionStore,
    appointment: i64,
    subjective: String,
    objective: String,
    assessment: String,
    plan: String,
) -> Result<()> {
    require(store, AccessPolicy::DoctorsOnly)?;
    validation::validate_consultation(&subjective, &objective, &assessment, &plan)?;

    // Resolve the appointment from the doctor's own list before submitting
    // so a mistyped id fails fast
    let appointments = client
        .get_my_appointments()
        .await
        .map_err(|_| anyhow!("Failed to load appointment details"))?;
    if !appointments.iter().any(|a| a.id == appointment) {
        bail!("Appointment not found");
    }

    client
        .create_consultation(&CreateConsultationRequest {
            appointment_id: appointment,
            subjective_notes: subjective,
            objective_findings: objective,
            assessment,
            plan,
        })
        .await
        .map_err(|e| {
            submit_error(
                e,
                "Failed to create consultation",
                "An error occurred while creating the consultation",
            )
        })?;

    println!("Consultation created successfully!");
    println!("Run `telemed doctor appointments` to go back to your schedule.");
    Ok(())
}

pub async fn cmd_patient_history(
    client: &ApiClient,
    store: &SessionStore,
    patient: i64,
) -> Result<()> {
    require(store, AccessPolicy::DoctorsOnly)?;

    let consultations = client
        .get_consultation_history(Some(patient))
        .await
        .map_err(|_| anyhow!("Failed to load consultation history"))?;

    if consultations.is_empty() {
        println!("No consultations found for this patient.");
        return Ok(());
    }
    print_consultations(&consultations);
    Ok(())
}
