use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8086/api";
pub const DEFAULT_SESSION_FILE: &str = ".telemed-session.json";

/// Optional YAML configuration. Command-line flags and environment
/// variables override whatever is loaded here.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_session_file() -> PathBuf {
    PathBuf::from(DEFAULT_SESSION_FILE)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            session_file: default_session_file(),
        }
    }
}

pub fn load_config(path: &str) -> Result<ClientConfig> {
    let content =
        std::fs::read_to_string(path).context(format!("Failed to read config file: {}", path))?;
    let config: ClientConfig =
        serde_yml::from_str(&content).context("Failed to parse client config YAML")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config() {
        let yaml = r#"
api_base_url: "https://telemed.example.com/api"
session_file: "/tmp/telemed/session.json"
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file.flush().unwrap();

        let config = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.api_base_url, "https://telemed.example.com/api");
        assert_eq!(config.session_file, PathBuf::from("/tmp/telemed/session.json"));
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"api_base_url: \"http://localhost:9000/api\"\n")
            .unwrap();
        file.flush().unwrap();

        let config = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:9000/api");
        assert_eq!(config.session_file, PathBuf::from(DEFAULT_SESSION_FILE));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_config("/nonexistent/telemed.yaml").is_err());
    }
}
