//! Loading the form configuration (`config.yml`)

use std::path::PathBuf;

use serde_yaml::Value;
use tracing::{debug, info};

use crate::error::{FormError, Result};

/// Where the YAML configuration document is read from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Fetched with an unauthenticated GET
    Remote(String),
    File(PathBuf),
}

impl ConfigSource {
    /// `http://` and `https://` locations are fetched, anything else is a file path.
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            ConfigSource::Remote(location.to_string())
        } else {
            ConfigSource::File(PathBuf::from(location))
        }
    }
}

/// Settings the form needs, immutable once loaded
#[derive(Debug, Clone, PartialEq)]
pub struct DeployConfig {
    server_url: String,
}

impl DeployConfig {
    pub fn new(server_url: &str) -> Self {
        Self {
            server_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    /// Deployment endpoint, without a trailing slash
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Parse the YAML document and pull out `ui.server_url`.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let doc: Value = serde_yaml::from_str(text)?;

        let server_url = doc
            .get("ui")
            .and_then(|ui| ui.get("server_url"))
            .and_then(|url| url.as_str())
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                FormError::Config("ui.server_url is missing from the configuration".to_string())
            })?;

        Ok(Self::new(server_url.trim()))
    }
}

/// Read the configuration document from `source` and parse it.
pub async fn load_config(source: &ConfigSource) -> Result<DeployConfig> {
    let text = match source {
        ConfigSource::Remote(url) => {
            debug!("GET {}", url);
            let response = reqwest::get(url).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(FormError::Config(format!(
                    "could not fetch configuration from '{}': HTTP {}",
                    url, status
                )));
            }
            response.text().await?
        }
        ConfigSource::File(path) => tokio::fs::read_to_string(path).await?,
    };

    let config = DeployConfig::from_yaml_str(&text)?;
    info!("Deployment server URL loaded: {}", config.server_url());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = DeployConfig::from_yaml_str("ui:\n  server_url: https://host/x/\n").unwrap();
        assert_eq!(config.server_url(), "https://host/x");
    }

    #[test]
    fn url_without_slash_is_untouched() {
        let config = DeployConfig::new("http://dockerfly.nimbus.net/repo");
        assert_eq!(config.server_url(), "http://dockerfly.nimbus.net/repo");
    }

    #[test]
    fn other_sections_are_ignored() {
        let text = r#"
server:
  repositories_clone_path: /repositories/
ui:
  title: Dockerfly
  server_url: "http://localhost:8000/repo"
"#;
        let config = DeployConfig::from_yaml_str(text).unwrap();
        assert_eq!(config.server_url(), "http://localhost:8000/repo");
    }

    #[test]
    fn missing_server_url_is_config_error() {
        for text in ["ui: {}\n", "other: 1\n", "ui:\n  server_url: ''\n", "ui:\n  server_url: 8080\n"] {
            let err = DeployConfig::from_yaml_str(text).unwrap_err();
            assert!(matches!(err, FormError::Config(_)), "{text:?} gave {err:?}");
        }
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let err = DeployConfig::from_yaml_str("ui: [unclosed\n").unwrap_err();
        assert!(matches!(err, FormError::Yaml(_)));
    }

    #[test]
    fn location_picks_source_kind() {
        assert_eq!(
            ConfigSource::from_location("https://cdn.local/config.yml"),
            ConfigSource::Remote("https://cdn.local/config.yml".into())
        );
        assert_eq!(
            ConfigSource::from_location("config.yml"),
            ConfigSource::File(PathBuf::from("config.yml"))
        );
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let source = ConfigSource::File(PathBuf::from("/nonexistent/dockerfly/config.yml"));
        let err = load_config(&source).await.unwrap_err();
        assert!(matches!(err, FormError::Io(_)));
    }
}
