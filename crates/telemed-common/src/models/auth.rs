use serde::{Deserialize, Serialize};

/// The two roles the platform grants. The server transmits roles as strings
/// ("PATIENT", "DOCTOR"); anything else is ignored rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Patient,
    Doctor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "PATIENT",
            Role::Doctor => "DOCTOR",
        }
    }

    /// Lenient parse -- unknown role names are `None`, never an error.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "PATIENT" => Some(Role::Patient),
            "DOCTOR" => Some(Role::Doctor),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a successful login: the bearer token plus the role names to
/// persist alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthData {
    pub token: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Shared by patient and doctor registration. Patients send only the first
/// three fields; doctors add license, specialization and an explicit
/// `roles: ["DOCTOR"]`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl RegisterRequest {
    pub fn patient(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
            license_number: None,
            specialization: None,
            roles: Vec::new(),
        }
    }

    pub fn doctor(
        name: String,
        email: String,
        password: String,
        license_number: String,
        specialization: String,
    ) -> Self {
        Self {
            name,
            email,
            password,
            license_number: Some(license_number),
            specialization: Some(specialization),
            roles: vec![Role::Doctor.as_str().to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub new_password: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::parse("PATIENT"), Some(Role::Patient));
        assert_eq!(Role::parse("DOCTOR"), Some(Role::Doctor));
        assert_eq!(Role::parse("ADMIN"), None);
        assert_eq!(Role::parse("patient"), None);
    }

    #[test]
    fn test_patient_register_body_omits_doctor_fields() {
        let req = RegisterRequest::patient(
            "Jane Doe".into(),
            "jane@example.com".into(),
            "secret1".into(),
        );
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("licenseNumber").is_none());
        assert!(json.get("specialization").is_none());
        assert!(json.get("roles").is_none());
    }

    #[test]
    fn test_doctor_register_body() {
        let req = RegisterRequest::doctor(
            "John Doe".into(),
            "john@example.com".into(),
            "secret1".into(),
            "MD-1234".into(),
            "CARDIOLOGY".into(),
        );
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["roles"], serde_json::json!(["DOCTOR"]));
        assert_eq!(json["licenseNumber"], "MD-1234");
        assert_eq!(json["specialization"], "CARDIOLOGY");
    }

    #[test]
    fn test_auth_data_tolerates_missing_roles() {
        let data: AuthData = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(data.token, "abc");
        assert!(data.roles.is_empty());
    }
}
