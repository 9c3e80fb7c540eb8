//! HTTP client for the deployment server

use reqwest::{Client, header};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::config::DeployConfig;
use crate::deployment::{DeploymentResult, error_message};
use crate::error::{FormError, Result};
use crate::submission::Submission;

#[derive(Debug, Serialize)]
struct DeployRequest<'a> {
    url: &'a str,
}

/// Posts repository URLs to the configured deployment endpoint
#[derive(Debug, Clone)]
pub struct DeployClient {
    client: Client,
    endpoint: String,
}

impl DeployClient {
    /// No timeout is set; a request runs until the server answers or the connection fails.
    pub fn new(config: &DeployConfig) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            endpoint: config.server_url().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one deployment request and interpret the answer.
    pub async fn deploy(&self, submission: &Submission) -> Result<DeploymentResult> {
        debug!("POST {} url={}", self.endpoint, submission.url);

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(&DeployRequest {
                url: &submission.url,
            })
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        let body: Value = match serde_json::from_str(&text) {
            Ok(v) => v,
            Err(e) => {
                error!("Could not parse response body as JSON: {}", e);
                return Err(FormError::UnreadableResponse {
                    status: status.as_u16(),
                    status_text: status.canonical_reason().unwrap_or_default().to_string(),
                    body: text,
                });
            }
        };

        if !status.is_success() {
            let message = error_message(&body);
            error!("Deployment rejected: {} - {}", status, message);
            return Err(FormError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let result = DeploymentResult::from_json(&body);
        info!(
            "Deployment accepted: app={:?} container={:?}",
            result.app_name, result.container_id
        );
        Ok(result)
    }
}
