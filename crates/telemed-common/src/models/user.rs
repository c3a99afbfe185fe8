use serde::{Deserialize, Serialize};

/// Roles arrive as objects on the user endpoint (`{"name": "PATIENT"}`),
/// unlike the bare strings in the login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRef {
    pub name: String,
}

/// Account-level details from `GET /users/me`. Profile data (patient or
/// doctor) lives in its own endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<RoleRef>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

impl UserAccount {
    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.name.as_str()).collect()
    }
}
