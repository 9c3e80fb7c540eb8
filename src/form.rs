//! The deployment request form controller
//!
//! The controller owns the submit control state and drives a [`FormView`], which is
//! whatever actually shows the input, the button and the two result panels.

use tracing::{Instrument, debug, error, info, info_span, warn};

use crate::client::DeployClient;
use crate::config::{ConfigSource, DeployConfig, load_config};
use crate::deployment::{DeploymentResult, SuccessPanel};
use crate::error::FormError;
use crate::submission::Submission;

pub const SUBMIT_LABEL: &str = "Deploy";
pub const LOADING_LABEL: &str = "Processing...";

/// Display surface for the form
pub trait FormView {
    /// Current raw content of the URL input
    fn input_value(&self) -> String;
    fn clear_input(&mut self);
    /// Hide both the success and the error panel
    fn hide_panels(&mut self);
    fn show_error(&mut self, message: &str);
    fn show_success(&mut self, panel: &SuccessPanel);
    fn render_control(&mut self, control: &SubmitControl);
}

/// State of the submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: String,
}

impl SubmitControl {
    fn disabled() -> Self {
        Self {
            enabled: false,
            label: SUBMIT_LABEL.to_string(),
        }
    }

    fn begin_loading(&mut self) {
        self.enabled = false;
        self.label = LOADING_LABEL.to_string();
    }

    fn restore(&mut self) {
        self.enabled = true;
        self.label = SUBMIT_LABEL.to_string();
    }
}

/// User interactions the form reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Click,
    /// Key pressed while the input has focus
    KeyPress(String),
}

/// What became of one trigger
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The control was disabled, nothing happened
    Ignored,
    Deployed(DeploymentResult),
    Rejected(FormError),
}

pub struct FormController<V: FormView> {
    view: V,
    client: Option<DeployClient>,
    control: SubmitControl,
}

impl<V: FormView> FormController<V> {
    /// Build a ready form around an already loaded configuration.
    pub fn new(mut view: V, config: &DeployConfig) -> Self {
        let mut control = SubmitControl::disabled();
        let client = match DeployClient::new(config) {
            Ok(client) => {
                control.restore();
                Some(client)
            }
            Err(e) => {
                error!("Could not build HTTP client: {}", e);
                view.show_error(&format!("Failed to load configuration: {}", e));
                None
            }
        };
        view.render_control(&control);

        Self {
            view,
            client,
            control,
        }
    }

    /// Load the configuration from `source` and build the form.
    ///
    /// On failure the error is shown and the submit control stays disabled for the
    /// lifetime of the form.
    pub async fn load(mut view: V, source: &ConfigSource) -> Self {
        match load_config(source).await {
            Ok(config) => Self::new(view, &config),
            Err(e) => {
                error!("Failed to load configuration: {}", e);
                view.show_error(&format!("Failed to load configuration: {}", e));
                let control = SubmitControl::disabled();
                view.render_control(&control);
                Self {
                    view,
                    client: None,
                    control,
                }
            }
        }
    }

    /// True once a configuration has been loaded
    pub fn is_ready(&self) -> bool {
        self.client.is_some()
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.client.as_ref().map(|c| c.endpoint())
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Route a UI event. Clicks and the Enter key submit; other keys do nothing.
    pub async fn dispatch(&mut self, event: FormEvent) -> SubmitOutcome {
        match event {
            FormEvent::Click => self.submit().await,
            FormEvent::KeyPress(key) if key == "Enter" => self.submit().await,
            FormEvent::KeyPress(_) => SubmitOutcome::Ignored,
        }
    }

    /// Validate the input, send it and render the outcome.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.control.enabled {
            debug!("Submit control is disabled; ignoring trigger");
            return SubmitOutcome::Ignored;
        }
        let Some(client) = self.client.clone() else {
            return SubmitOutcome::Ignored;
        };

        self.view.hide_panels();

        let outcome = match Submission::parse(&self.view.input_value()) {
            Ok(submission) => {
                self.control.begin_loading();
                self.view.render_control(&self.control);

                let span = info_span!("submission", id = %submission.id);
                self.send(&client, submission).instrument(span).await
            }
            Err(e) => {
                warn!("Submission rejected: {}", e);
                Err(FormError::from(e))
            }
        };

        let outcome = match outcome {
            Ok(result) => {
                self.view.show_success(&SuccessPanel::from(&result));
                self.view.clear_input();
                SubmitOutcome::Deployed(result)
            }
            Err(e) => {
                self.view.show_error(&e.to_string());
                SubmitOutcome::Rejected(e)
            }
        };

        self.control.restore();
        self.view.render_control(&self.control);
        outcome
    }

    async fn send(
        &self,
        client: &DeployClient,
        mut submission: Submission,
    ) -> Result<DeploymentResult, FormError> {
        submission.mark_in_flight();
        info!("Submitting {}", submission.url);

        let result = client.deploy(&submission).await;
        match &result {
            Ok(_) => submission.mark_deployed(),
            Err(e) => submission.mark_failed(e.to_string()),
        }
        info!(
            "Submission finished: status={:?} elapsed_ms={:?}",
            submission.status,
            submission.elapsed_ms()
        );
        result
    }
}
