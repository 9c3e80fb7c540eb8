use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// URL prefixes the deployment server knows how to clone from
pub const ACCEPTED_SCHEMES: [&str; 3] = ["http://", "https://", "git@"];

/// Reasons a submission is refused before any request is made
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("The repository URL must not be empty")]
    Empty,

    #[error("The repository URL must start with http://, https:// or git@")]
    UnsupportedScheme,
}

/// Represents the status of a deployment submission
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    InFlight,
    Deployed,
    Failed,
}

/// A single deployment request, alive from the user's trigger until the server answers
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub id: String,
    pub url: String,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl Submission {
    /// Validate raw form input and create a pending submission from it.
    ///
    /// The input is trimmed first; the stored URL is the trimmed value.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let url = raw.trim();
        if url.is_empty() {
            return Err(ValidationError::Empty);
        }
        if !ACCEPTED_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
            return Err(ValidationError::UnsupportedScheme);
        }

        Ok(Self {
            id: Uuid::now_v7().to_string(),
            url: url.to_string(),
            status: SubmissionStatus::Pending,
            submitted_at: Utc::now(),
            completed_at: None,
            error: None,
        })
    }

    pub fn mark_in_flight(&mut self) {
        self.status = SubmissionStatus::InFlight;
    }

    pub fn mark_deployed(&mut self) {
        self.status = SubmissionStatus::Deployed;
        self.completed_at = Some(Utc::now());
    }

    pub fn mark_failed(&mut self, error: String) {
        self.status = SubmissionStatus::Failed;
        self.completed_at = Some(Utc::now());
        self.error = Some(error);
    }

    /// Milliseconds between submission and completion, if completed
    pub fn elapsed_ms(&self) -> Option<i64> {
        self.completed_at
            .map(|done| (done - self.submitted_at).num_milliseconds())
    }
}
