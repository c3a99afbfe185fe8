use serde::{Deserialize, Serialize};

/// Every server response arrives wrapped in this envelope. The application
/// status lives in `status_code`; the transport-level HTTP status is not
/// authoritative (a 200 envelope inside a 4xx response still counts as
/// success, and vice versa).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub status_code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}
