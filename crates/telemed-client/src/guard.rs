use crate::session::Session;

/// Access policies for protected views. One policy type with the variants as
/// data; each differs only in the session predicate it consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    PatientsOnly,
    DoctorsOnly,
    /// Any authenticated user, patient or doctor.
    PatientOrDoctor,
}

/// Outcome of evaluating a policy against the current session. Denied always
/// redirects to the login view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allowed,
    Denied,
}

impl AccessPolicy {
    pub fn allows(&self, session: &Session) -> bool {
        match self {
            AccessPolicy::PatientsOnly => session.is_patient(),
            AccessPolicy::DoctorsOnly => session.is_doctor(),
            AccessPolicy::PatientOrDoctor => session.is_authenticated(),
        }
    }

    /// Pure function of (policy, session); re-evaluated on every entry, no
    /// caching across navigations.
    pub fn evaluate(&self, session: &Session) -> GuardDecision {
        if self.allows(session) {
            GuardDecision::Allowed
        } else {
            GuardDecision::Denied
        }
    }

    /// What the user must be for the view to open. Used in the denial
    /// message alongside the login redirect.
    pub fn requirement(&self) -> &'static str {
        match self {
            AccessPolicy::PatientsOnly => "logged in as a patient",
            AccessPolicy::DoctorsOnly => "logged in as a doctor",
            AccessPolicy::PatientOrDoctor => "logged in",
        }
    }
}
