use serde::{Deserialize, Serialize};

use crate::models::user::UserAccount;

/// Doctor profile as returned by `/doctors/me` and the `/doctors` listing.
/// Older records carry the display name on the nested `user` object instead
/// of `first_name`/`last_name`, so callers must try both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// One of the values served by `/doctors/specializations`
    /// (e.g. "GENERAL_PRACTICE").
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserAccount>,
}

impl Doctor {
    /// Display name for listings: "Dr. Jane Doe - GENERAL PRACTICE".
    pub fn display_name(&self) -> String {
        let specialization = self
            .specialization
            .as_deref()
            .unwrap_or("General Practice")
            .replace('_', " ");
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("Dr. {} {} - {}", first, last, specialization),
            _ => {
                let name = self
                    .user
                    .as_ref()
                    .and_then(|u| u.name.as_deref())
                    .unwrap_or("Unknown");
                format!("Dr. {} - {}", name, specialization)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_with_profile_names() {
        let doctor: Doctor = serde_json::from_str(
            r#"{"id":1,"firstName":"Jane","lastName":"Doe","specialization":"GENERAL_PRACTICE"}"#,
        )
        .unwrap();
        assert_eq!(doctor.display_name(), "Dr. Jane Doe - GENERAL PRACTICE");
    }

    #[test]
    fn test_display_name_falls_back_to_user() {
        let doctor: Doctor =
            serde_json::from_str(r#"{"id":2,"user":{"name":"John Smith"}}"#).unwrap();
        assert_eq!(doctor.display_name(), "Dr. John Smith - General Practice");
    }
}
