use chrono::{DateTime, Local, NaiveDate, Utc};

use telemed_common::models::consultation::Consultation;

/// Display fallback used across the profile views.
pub fn or_not_provided(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "Not provided",
    }
}

/// Enum constants come over the wire as SCREAMING_SNAKE_CASE; show them
/// with spaces.
pub fn enum_label(value: &str) -> String {
    value.replace('_', " ")
}

pub fn format_time(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(t) => t
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        None => "Not provided".to_string(),
    }
}

pub fn format_date(value: Option<NaiveDate>) -> String {
    match value {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "Not provided".to_string(),
    }
}

pub fn print_consultations(consultations: &[Consultation]) {
    for c in consultations {
        println!("Consultation #{}", c.id);
        println!("  Date:       {}", format_time(c.consultation_date));
        if let Some(appointment_id) = c.appointment_id {
            println!("  Appointment: {}", appointment_id);
        }
        println!(
            "  Subjective: {}",
            c.subjective_notes
                .as_deref()
                .unwrap_or("No subjective notes recorded.")
        );
        println!(
            "  Objective:  {}",
            c.objective_findings
                .as_deref()
                .unwrap_or("No objective findings recorded.")
        );
        println!(
            "  Assessment: {}",
            c.assessment.as_deref().unwrap_or("No assessment recorded.")
        );
        println!(
            "  Plan:       {}",
            c.plan.as_deref().unwrap_or("No treatment plan recorded.")
        );
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_not_provided() {
        assert_eq!(or_not_provided(Some("x")), "x");
        assert_eq!(or_not_provided(Some("")), "Not provided");
        assert_eq!(or_not_provided(None), "Not provided");
    }

    #[test]
    fn test_enum_label() {
        assert_eq!(enum_label("GENERAL_PRACTICE"), "GENERAL PRACTICE");
        assert_eq!(enum_label("AA"), "AA");
    }
}
