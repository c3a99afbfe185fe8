use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Patient medical profile, read from and written back to `/patients/me`
/// with the same shape. Every field is optional on the wire; the rendering
/// layer supplies "Not provided" fallbacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub known_allergies: Option<String>,
    /// One of the values served by `/patients/bloodgroup` (e.g. "A_POSITIVE").
    #[serde(default)]
    pub blood_group: Option<String>,
    /// One of the values served by `/patients/genotype` (e.g. "AA").
    #[serde(default)]
    pub genotype: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_round_trip() {
        let json = r#"{
            "id": 3,
            "firstName": "Jane",
            "lastName": "Doe",
            "phone": "0800000000",
            "dateOfBirth": "1990-04-12",
            "knownAllergies": "Penicillin",
            "bloodGroup": "O_POSITIVE",
            "genotype": "AA"
        }"#;
        let profile: PatientProfile = serde_json::from_str(json).unwrap();
        assert_eq!(
            profile.date_of_birth,
            Some(NaiveDate::from_ymd_opt(1990, 4, 12).unwrap())
        );
        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["bloodGroup"], "O_POSITIVE");
        assert_eq!(back["dateOfBirth"], "1990-04-12");
    }

    #[test]
    fn test_empty_profile() {
        let profile: PatientProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.first_name.is_none());
        assert!(profile.date_of_birth.is_none());
    }
}
