use anyhow::{anyhow, Context, Result};
use std::path::Path;

use telemed_client::{AccessPolicy, ApiClient, SessionStore};
use telemed_common::models::auth::UpdatePasswordRequest;
use telemed_common::validation;

use super::{require, submit_error};
use crate::render::{enum_label, format_date, or_not_provided};

pub async fn cmd_profile(client: &ApiClient, store: &SessionStore) -> Result<()> {
    require(store, AccessPolicy::PatientsOnly)?;

    // Account details and the medical profile render together; both loads
    // fail as one.
    let (user, patient) = tokio::try_join!(
        client.get_my_user_details(),
        client.get_my_patient_profile()
    )
    .map_err(|_| anyhow!("Failed to load profile data"))?;

    println!("Account");
    println!("  Name:   {}", or_not_provided(user.name.as_deref()));
    println!("  Email:  {}", or_not_provided(user.email.as_deref()));
    println!(
        "  Roles:  {}",
        if user.roles.is_empty() {
            "Not provided".to_string()
        } else {
            user.role_names().join(", ")
        }
    );
    println!(
        "  Picture: {}",
        or_not_provided(user.profile_picture_url.as_deref())
    );
    println!();
    println!("Patient profile");
    println!(
        "  First name:     {}",
        or_not_provided(patient.first_name.as_deref())
    );
    println!(
        "  Last name:      {}",
        or_not_provided(patient.last_name.as_deref())
    );
    println!("  Phone:          {}", or_not_provided(patient.phone.as_deref()));
    println!("  Date of birth:  {}", format_date(patient.date_of_birth));
    println!(
        "  Blood group:    {}",
        patient
            .blood_group
            .as_deref()
            .map(enum_label)
            .unwrap_or_else(|| "Not provided".to_string())
    );
    println!(
        "  Genotype:       {}",
        or_not_provided(patient.genotype.as_deref())
    );
    println!(
        "  Known allergies: {}",
        patient
            .known_allergies
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or("No known allergies")
    );
    Ok(())
}

/// Fields of the update form; absent fields keep their current value.
pub struct ProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub known_allergies: Option<String>,
    pub blood_group: Option<String>,
    pub genotype: Option<String>,
}

pub async fn cmd_update_profile(
    client: &ApiClient,
    store: &SessionStore,
    changes: ProfileChanges,
) -> Result<()> {
    require(store, AccessPolicy::PatientsOnly)?;

    // Prefill from the current profile so omitted flags keep their value
    let mut profile = client
        .get_my_patient_profile()
        .await
        .map_err(|_| anyhow!("Failed to load profile data"))?;

    // The server owns these vocabularies; chosen values are checked
    // against them before submitting
    let (blood_groups, genotypes) =
        tokio::try_join!(client.get_blood_groups(), client.get_genotypes())
            .map_err(|_| anyhow!("Failed to load medical data options"))?;

    if let Some(blood_group) = &changes.blood_group {
        validation::validate_choice("blood group", blood_group, &blood_groups)?;
    }
    if let Some(genotype) = &changes.genotype {
        validation::validate_choice("genotype", genotype, &genotypes)?;
    }
    let date_of_birth = match &changes.date_of_birth {
        Some(raw) => Some(
            raw.parse::<chrono::NaiveDate>()
                .context("Invalid date of birth (expected YYYY-MM-DD)")?,
        ),
        None => None,
    };

    profile.first_name = changes.first_name.or(profile.first_name);
    profile.last_name = changes.last_name.or(profile.last_name);
    profile.phone = changes.phone.or(profile.phone);
    profile.date_of_birth = date_of_birth.or(profile.date_of_birth);
    profile.known_allergies = changes.known_allergies.or(profile.known_allergies);
    profile.blood_group = changes.blood_group.or(profile.blood_group);
    profile.genotype = changes.genotype.or(profile.genotype);

    client
        .update_my_patient_profile(&profile)
        .await
        .map_err(|e| {
            submit_error(
                e,
                "Failed to update profile",
                "An error occurred while updating profile",
            )
        })?;

    println!("Profile updated successfully!");
    println!("Run `telemed profile` to review it.");
    Ok(())
}

pub async fn cmd_update_password(
    client: &ApiClient,
    store: &SessionStore,
    old_password: String,
    new_password: String,
    confirm_password: String,
) -> Result<()> {
    require(store, AccessPolicy::PatientOrDoctor)?;
    validation::validate_new_password(&new_password, &confirm_password)?;

    client
        .update_password(&UpdatePasswordRequest {
            old_password,
            new_password,
        })
        .await
        .map_err(|e| {
            submit_error(
                e,
                "Failed to update password",
                "An error occurred while updating your password",
            )
        })?;

    // A successful change ends the session; the new password must be used
    store.logout()?;
    println!("Password updated successfully! Please log in again.");
    Ok(())
}

pub async fn cmd_upload_picture(
    client: &ApiClient,
    store: &SessionStore,
    file: &Path,
) -> Result<()> {
    require(store, AccessPolicy::PatientOrDoctor)?;

    let mime = validation::profile_picture_mime(file)?;
    let metadata = std::fs::metadata(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;
    validation::validate_picture_size(metadata.len())?;

    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("Failed to read file: {}", file.display()))?;
    let file_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("profile-picture");

    client
        .upload_profile_picture(file_name, mime, bytes)
        .await
        .map_err(|e| {
            submit_error(
                e,
                "Failed to upload profile picture",
                "An error occurred while uploading the picture",
            )
        })?;

    println!("Profile picture updated successfully!");
    Ok(())
}
