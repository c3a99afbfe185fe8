use reqwest::header::AUTHORIZATION;
use reqwest::{multipart, Method};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use telemed_common::models::appointment::{Appointment, BookAppointmentRequest};
use telemed_common::models::auth::{
    AuthData, ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest,
    UpdatePasswordRequest,
};
use telemed_common::models::consultation::{Consultation, CreateConsultationRequest};
use telemed_common::models::doctor::Doctor;
use telemed_common::models::envelope::ApiEnvelope;
use telemed_common::models::patient::PatientProfile;
use telemed_common::models::user::UserAccount;

use crate::error::ApiError;
use crate::session::SessionStore;

/// HTTP gateway to the telemed REST API: one method per remote operation.
/// Calls are fire-once -- no retry, no timeout, no de-duplication; failures
/// surface directly to the caller.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Arc<str>,
    sessions: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: &str, sessions: SessionStore) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Arc::from(base_url.trim_end_matches('/')),
            sessions,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The single interception point: every request goes through here, and
    /// the stored token (when present) is attached as a bearer credential.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match self.sessions.load().token {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Sends a request and unwraps the response envelope. Success is
    /// `statusCode == 200` in the envelope, whatever the HTTP status says.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let http_status = response.status();
        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|source| ApiError::Decode {
                http_status,
                source,
            })?;
        if envelope.is_success() {
            envelope.data.ok_or(ApiError::MissingData)
        } else {
            Err(ApiError::Server {
                status_code: envelope.status_code,
                message: envelope.message,
            })
        }
    }

    /// As `execute`, for operations whose payload the client does not use.
    async fn execute_ack(&self, request: reqwest::RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        let http_status = response.status();
        let envelope: ApiEnvelope<serde_json::Value> = response
            .json()
            .await
            .map_err(|source| ApiError::Decode {
                http_status,
                source,
            })?;
        if envelope.is_success() {
            Ok(())
        } else {
            Err(ApiError::Server {
                status_code: envelope.status_code,
                message: envelope.message,
            })
        }
    }

    // Auth and account

    #[tracing::instrument(skip(self, req))]
    pub async fn login(&self, req: &LoginRequest) -> Result<AuthData, ApiError> {
        self.execute(self.request(Method::POST, "/auth/login").json(req))
            .await
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn register(&self, req: &RegisterRequest) -> Result<(), ApiError> {
        self.execute_ack(self.request(Method::POST, "/auth/register").json(req))
            .await
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn forgot_password(&self, req: &ForgotPasswordRequest) -> Result<(), ApiError> {
        self.execute_ack(self.request(Method::POST, "/auth/forgot-password").json(req))
            .await
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn reset_password(&self, req: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.execute_ack(self.request(Method::POST, "/auth/reset-password").json(req))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_my_user_details(&self) -> Result<UserAccount, ApiError> {
        self.execute(self.request(Method::GET, "/users/me")).await
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn update_password(&self, req: &UpdatePasswordRequest) -> Result<(), ApiError> {
        self.execute_ack(self.request(Method::PUT, "/users/update-password").json(req))
            .await
    }

    /// The one non-JSON call: the picture goes up as a multipart body under
    /// the field name `file`.
    #[tracing::instrument(skip(self, bytes))]
    pub async fn upload_profile_picture(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ApiError> {
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = multipart::Form::new().part("file", part);
        self.execute_ack(
            self.request(Method::PUT, "/users/profile-picture")
                .multipart(form),
        )
        .await
    }

    // Patient profile

    #[tracing::instrument(skip(self))]
    pub async fn get_my_patient_profile(&self) -> Result<PatientProfile, ApiError> {
        self.execute(self.request(Method::GET, "/patients/me")).await
    }

    #[tracing::instrument(skip(self, profile))]
    pub async fn update_my_patient_profile(
        &self,
        profile: &PatientProfile,
    ) -> Result<(), ApiError> {
        self.execute_ack(self.request(Method::PUT, "/patients/me").json(profile))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_genotypes(&self) -> Result<Vec<String>, ApiError> {
        self.execute(self.request(Method::GET, "/patients/genotype"))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_blood_groups(&self) -> Result<Vec<String>, ApiError> {
        self.execute(self.request(Method::GET, "/patients/bloodgroup"))
            .await
    }

    // Doctor profile

    #[tracing::instrument(skip(self))]
    pub async fn get_my_doctor_profile(&self) -> Result<Doctor, ApiError> {
        self.execute(self.request(Method::GET, "/doctors/me")).await
    }

    #[tracing::instrument(skip(self, profile))]
    pub async fn update_my_doctor_profile(&self, profile: &Doctor) -> Result<(), ApiError> {
        self.execute_ack(self.request(Method::PUT, "/doctors/me").json(profile))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_all_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        self.execute(self.request(Method::GET, "/doctors")).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_specializations(&self) -> Result<Vec<String>, ApiError> {
        self.execute(self.request(Method::GET, "/doctors/specializations"))
            .await
    }

    // Appointments

    #[tracing::instrument(skip(self, req))]
    pub async fn book_appointment(&self, req: &BookAppointmentRequest) -> Result<(), ApiError> {
        self.execute_ack(self.request(Method::POST, "/appointments").json(req))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_my_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.execute(self.request(Method::GET, "/appointments")).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn cancel_appointment(&self, appointment_id: i64) -> Result<(), ApiError> {
        let path = format!("/appointments/cancel/{}", appointment_id);
        self.execute_ack(self.request(Method::PUT, &path)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn complete_appointment(&self, appointment_id: i64) -> Result<(), ApiError> {
        let path = format!("/appointments/complete/{}", appointment_id);
        self.execute_ack(self.request(Method::PUT, &path)).await
    }

    // Consultations

    #[tracing::instrument(skip(self, req))]
    pub async fn create_consultation(
        &self,
        req: &CreateConsultationRequest,
    ) -> Result<(), ApiError> {
        self.execute_ack(self.request(Method::POST, "/consultations").json(req))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_consultation_by_appointment(
        &self,
        appointment_id: i64,
    ) -> Result<Consultation, ApiError> {
        let path = format!("/consultations/appointment/{}", appointment_id);
        self.execute(self.request(Method::GET, &path)).await
    }

    /// With `patient_id` absent the server scopes the history to the caller,
    /// which is how the patient-facing view uses it.
    #[tracing::instrument(skip(self))]
    pub async fn get_consultation_history(
        &self,
        patient_id: Option<i64>,
    ) -> Result<Vec<Consultation>, ApiError> {
        let mut request = self.request(Method::GET, "/consultations/history");
        if let Some(id) = patient_id {
            request = request.query(&[("patientId", id)]);
        }
        self.execute(request).await
    }
}
