use anyhow::{bail, Result};

use telemed_client::{AccessPolicy, ApiError, GuardDecision, Session, SessionStore};

pub mod appointments;
pub mod auth;
pub mod consultations;
pub mod doctor;
pub mod profile;

/// Route guard for protected commands: evaluates the policy against the
/// stored session and refuses to run the view when denied, pointing at the
/// login command (the CLI's stand-in for the login redirect).
pub fn require(store: &SessionStore, policy: AccessPolicy) -> Result<Session> {
    let session = store.load();
    match policy.evaluate(&session) {
        GuardDecision::Allowed => Ok(session),
        GuardDecision::Denied => bail!(
            "You must be {} to use this command. Run `telemed login` first.",
            policy.requirement()
        ),
    }
}

/// The submission error pattern every form shares: show the server's payload
/// message when it sent one, a view-specific default for other server
/// rejections, and a generic wording for transport failures.
pub fn submit_error(err: ApiError, rejected_default: &str, generic: &str) -> anyhow::Error {
    match err {
        ApiError::Server {
            message: Some(message),
            ..
        } => anyhow::anyhow!("{}", message),
        ApiError::Server { message: None, .. } => anyhow::anyhow!("{}", rejected_default),
        _ => anyhow::anyhow!("{}", generic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denied_command_never_runs() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        let err = require(&store, AccessPolicy::PatientsOnly).unwrap_err();
        assert!(err.to_string().contains("telemed login"));

        store.save_auth_data("t", &["PATIENT".to_string()]).unwrap();
        let session = require(&store, AccessPolicy::PatientsOnly).unwrap();
        assert!(session.is_patient());
    }

    #[test]
    fn test_submit_error_prefers_server_message() {
        let err = ApiError::Server {
            status_code: 409,
            message: Some("Email already registered".into()),
        };
        assert_eq!(
            submit_error(err, "Registration failed", "An error occurred").to_string(),
            "Email already registered"
        );

        let err = ApiError::Server {
            status_code: 500,
            message: None,
        };
        assert_eq!(
            submit_error(err, "Registration failed", "An error occurred").to_string(),
            "Registration failed"
        );

        let err = ApiError::MissingData;
        assert_eq!(
            submit_error(err, "Registration failed", "An error occurred").to_string(),
            "An error occurred"
        );
    }
}
