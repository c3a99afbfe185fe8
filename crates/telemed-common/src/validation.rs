use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Local form validation, run before any network call. A failure here is
/// terminal for the submission; nothing is sent to the server.

pub const MIN_REGISTER_PASSWORD_LEN: usize = 6;
pub const MIN_NEW_PASSWORD_LEN: usize = 5;
pub const MAX_PICTURE_BYTES: u64 = 5 * 1024 * 1024;

pub fn validate_registration_password(password: &str) -> Result<()> {
    if password.len() < MIN_REGISTER_PASSWORD_LEN {
        bail!(
            "Password must be at least {} characters long",
            MIN_REGISTER_PASSWORD_LEN
        );
    }
    Ok(())
}

pub fn validate_doctor_registration(
    specialization: Option<&str>,
    license_number: Option<&str>,
) -> Result<()> {
    match specialization {
        None | Some("") => bail!("Please select a specialization"),
        Some(_) => {}
    }
    match license_number {
        None | Some("") => bail!("Please pass in your licenseNumber"),
        Some(_) => {}
    }
    Ok(())
}

/// Shared by the update-password and reset-password forms.
pub fn validate_new_password(new_password: &str, confirm_password: &str) -> Result<()> {
    if new_password != confirm_password {
        bail!("New password and confirm password do not match");
    }
    if new_password.len() < MIN_NEW_PASSWORD_LEN {
        bail!(
            "New password must be at least {} characters long",
            MIN_NEW_PASSWORD_LEN
        );
    }
    Ok(())
}

pub fn validate_reset_code(code: Option<&str>) -> Result<()> {
    match code {
        None | Some("") => bail!("Reset code is missing. Please use the link from your email."),
        Some(_) => Ok(()),
    }
}

/// Booking checks: a doctor must be chosen and the requested time must lie
/// in the future relative to `now`.
pub fn validate_booking(
    doctor_id: Option<i64>,
    start_time: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<()> {
    if doctor_id.is_none() {
        bail!("Please select a doctor");
    }
    let start_time = match start_time {
        Some(t) => t,
        None => bail!("Please select appointment date and time"),
    };
    if start_time <= now {
        bail!("Appointment time must be in the future");
    }
    Ok(())
}

/// All four SOAP sections must be filled in before a consultation note is
/// submitted.
pub fn validate_consultation(
    subjective_notes: &str,
    objective_findings: &str,
    assessment: &str,
    plan: &str,
) -> Result<()> {
    if subjective_notes.trim().is_empty()
        || objective_findings.trim().is_empty()
        || assessment.trim().is_empty()
        || plan.trim().is_empty()
    {
        bail!("All fields are required");
    }
    Ok(())
}

/// Returns the MIME type for an accepted profile-picture file, judging by
/// extension. The server accepts JPEG, PNG and GIF.
pub fn profile_picture_mime(path: &Path) -> Result<&'static str> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => Ok("image/jpeg"),
        Some("png") => Ok("image/png"),
        Some("gif") => Ok("image/gif"),
        _ => bail!("Please select a valid image file (JPEG, PNG, GIF)"),
    }
}

pub fn validate_picture_size(len: u64) -> Result<()> {
    if len > MAX_PICTURE_BYTES {
        bail!("File size must be less than 5MB");
    }
    Ok(())
}

/// Checks a value against a server-provided enumeration (blood groups,
/// genotypes, specializations). Membership is exact; the server owns the
/// vocabulary.
pub fn validate_choice(label: &str, value: &str, allowed: &[String]) -> Result<()> {
    if !allowed.iter().any(|a| a == value) {
        bail!(
            "Invalid {}: '{}' (expected one of: {})",
            label,
            value,
            allowed.join(", ")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::path::PathBuf;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 27, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_booking_requires_doctor() {
        let err = validate_booking(None, Some(now() + chrono::Duration::hours(1)), now())
            .unwrap_err();
        assert_eq!(err.to_string(), "Please select a doctor");
    }

    #[test]
    fn test_booking_requires_start_time() {
        let err = validate_booking(Some(1), None, now()).unwrap_err();
        assert_eq!(err.to_string(), "Please select appointment date and time");
    }

    #[test]
    fn test_booking_rejects_past_start_time() {
        let err = validate_booking(Some(1), Some(now() - chrono::Duration::minutes(5)), now())
            .unwrap_err();
        assert_eq!(err.to_string(), "Appointment time must be in the future");
    }

    #[test]
    fn test_booking_accepts_future_start_time() {
        assert!(validate_booking(Some(1), Some(now() + chrono::Duration::hours(2)), now()).is_ok());
    }

    #[test]
    fn test_password_mismatch() {
        let err = validate_new_password("abcdef", "abcdeg").unwrap_err();
        assert_eq!(
            err.to_string(),
            "New password and confirm password do not match"
        );
    }

    #[test]
    fn test_password_too_short() {
        let err = validate_new_password("abcd", "abcd").unwrap_err();
        assert!(err.to_string().contains("at least 5 characters"));
        assert!(validate_new_password("abcde", "abcde").is_ok());
    }

    #[test]
    fn test_reset_code_required() {
        assert!(validate_reset_code(None).is_err());
        assert!(validate_reset_code(Some("")).is_err());
        assert!(validate_reset_code(Some("a1b2")).is_ok());
    }

    #[test]
    fn test_doctor_registration_fields() {
        assert_eq!(
            validate_doctor_registration(None, Some("MD-1"))
                .unwrap_err()
                .to_string(),
            "Please select a specialization"
        );
        assert_eq!(
            validate_doctor_registration(Some("CARDIOLOGY"), None)
                .unwrap_err()
                .to_string(),
            "Please pass in your licenseNumber"
        );
        assert!(validate_doctor_registration(Some("CARDIOLOGY"), Some("MD-1")).is_ok());
    }

    #[test]
    fn test_consultation_requires_all_fields() {
        let err = validate_consultation("s", "o", "", "p").unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");
        assert!(validate_consultation("s", "o", "a", "p").is_ok());
    }

    #[test]
    fn test_picture_mime() {
        assert_eq!(
            profile_picture_mime(&PathBuf::from("me.PNG")).unwrap(),
            "image/png"
        );
        assert_eq!(
            profile_picture_mime(&PathBuf::from("me.jpeg")).unwrap(),
            "image/jpeg"
        );
        assert!(profile_picture_mime(&PathBuf::from("me.pdf")).is_err());
        assert!(profile_picture_mime(&PathBuf::from("noext")).is_err());
    }

    #[test]
    fn test_picture_size_limit() {
        assert!(validate_picture_size(MAX_PICTURE_BYTES).is_ok());
        assert!(validate_picture_size(MAX_PICTURE_BYTES + 1).is_err());
    }

    #[test]
    fn test_choice_membership() {
        let allowed = vec!["AA".to_string(), "AS".to_string()];
        assert!(validate_choice("genotype", "AA", &allowed).is_ok());
        assert!(validate_choice("genotype", "BB", &allowed).is_err());
    }
}
