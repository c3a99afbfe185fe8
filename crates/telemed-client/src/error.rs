use reqwest::StatusCode;

/// Failure modes of a remote call, kept apart so each view can decide
/// between the server-supplied message and its own default.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response (connection refused,
    /// DNS, closed socket).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an envelope whose statusCode is not 200.
    #[error("{}", .message.as_deref().unwrap_or("request rejected by server"))]
    Server {
        status_code: i64,
        message: Option<String>,
    },

    /// The body could not be decoded as a response envelope.
    #[error("invalid response from server (HTTP {http_status})")]
    Decode {
        http_status: StatusCode,
        #[source]
        source: reqwest::Error,
    },

    /// A success envelope arrived without the data field the operation
    /// requires.
    #[error("server response is missing data")]
    MissingData,
}

impl ApiError {
    /// The application-level message from the server, when there is one.
    /// Views fall back to their own wording otherwise.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Convenience for the view pattern "payload message, else this
    /// view-specific default".
    pub fn message_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.server_message().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_preferred() {
        let err = ApiError::Server {
            status_code: 409,
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(
            err.message_or("Registration failed"),
            "Email already registered"
        );
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn test_default_used_without_server_message() {
        let err = ApiError::Server {
            status_code: 500,
            message: None,
        };
        assert_eq!(err.message_or("Registration failed"), "Registration failed");

        let err = ApiError::MissingData;
        assert_eq!(err.message_or("Registration failed"), "Registration failed");
    }
}
