pub mod client;
pub mod config;
pub mod deployment;
pub mod error;
pub mod form;
pub mod logging;
pub mod submission;
pub mod terminal;

pub use client::DeployClient;
pub use config::{ConfigSource, DeployConfig, load_config};
pub use deployment::{DeploymentResult, SuccessPanel};
pub use error::FormError;
pub use form::{FormController, FormEvent, FormView, SubmitControl, SubmitOutcome};
pub use submission::{Submission, ValidationError};
