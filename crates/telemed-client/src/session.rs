use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use telemed_common::models::auth::Role;

/// The client-held authentication state: a bearer token and the role names
/// granted at login. A token being present is the only notion of "logged in"
/// this client has; it never checks freshness or validity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// False, never an error, when no roles are stored or the role is not
    /// among them. Role names the client does not know simply never match.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|r| r == role.as_str())
    }

    pub fn is_patient(&self) -> bool {
        self.has_role(Role::Patient)
    }

    pub fn is_doctor(&self) -> bool {
        self.has_role(Role::Doctor)
    }
}

/// File-backed persistence for the session. Login overwrites it, logout
/// removes it; nothing else writes.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Reads the persisted session. A missing or unparseable file yields an
    /// empty session so every predicate degrades to false.
    pub fn load(&self) -> Session {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Session::default(),
        }
    }

    /// Unconditionally overwrites the persisted token and role list. The
    /// token shape is not validated.
    pub fn save_auth_data(&self, token: &str, roles: &[String]) -> Result<()> {
        let session = Session {
            token: Some(token.to_string()),
            roles: roles.to_vec(),
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .context("Failed to create session directory")?;
            }
        }
        let content =
            serde_json::to_string_pretty(&session).context("Failed to encode session")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write session file: {}", self.path.display()))?;
        Ok(())
    }

    /// Clears the session. Idempotent: clearing an absent session succeeds.
    pub fn logout(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to remove session file: {}", self.path.display())
            }),
        }
    }
}
