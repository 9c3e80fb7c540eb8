//! Terminal rendition of the form

use std::io::Write;

use colored::Colorize;

use crate::deployment::SuccessPanel;
use crate::form::{FormView, SubmitControl};

/// Prints panels to a writer (stdout by default); the input is whatever was last typed.
pub struct TerminalView<W: Write> {
    out: W,
    input: String,
}

impl TerminalView<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            input: String::new(),
        }
    }

    /// Replace the input content, as if the user had typed it
    pub fn type_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn prompt(&mut self) {
        let _ = write!(self.out, "{} ", "repository URL>".bold());
        let _ = self.out.flush();
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FormView for TerminalView<W> {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn hide_panels(&mut self) {}

    fn show_error(&mut self, message: &str) {
        let _ = writeln!(self.out, "{} {}", "error:".red().bold(), message);
    }

    fn show_success(&mut self, panel: &SuccessPanel) {
        let link = match &panel.access_href {
            Some(href) => href.underline().to_string(),
            None => panel.access_url.clone(),
        };
        let _ = writeln!(self.out, "{}", "Deployment started".green().bold());
        let _ = writeln!(self.out, "  application:  {}", panel.app_name);
        let _ = writeln!(self.out, "  access URL:   {}", link);
        let _ = writeln!(self.out, "  container:    {}", panel.container_id);
        let _ = writeln!(self.out, "  commit:       {}", panel.commit);
    }

    fn render_control(&mut self, control: &SubmitControl) {
        if !control.enabled {
            let _ = writeln!(self.out, "{}", control.label.dimmed());
        }
    }
}
