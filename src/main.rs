use std::path::PathBuf;

use dockerfly_form::logging::{FileLogger, setup_logging};
use dockerfly_form::terminal::TerminalView;
use dockerfly_form::{ConfigSource, FormController, FormEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

const DEFAULT_CONFIG_LOCATION: &str = "config.yml";

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config_location =
        std::env::var("DOCKERFLY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_LOCATION.to_string());
    let file_logger = std::env::var("DOCKERFLY_LOG_DIR")
        .ok()
        .map(|dir| FileLogger::new(PathBuf::from(dir)));

    let _guard = match setup_logging(file_logger.as_ref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    info!("Using config at {:?}", config_location);
    let source = ConfigSource::from_location(&config_location);
    let mut form = FormController::load(TerminalView::stdout(), &source).await;
    if !form.is_ready() {
        std::process::exit(1);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        form.view_mut().prompt();
        match lines.next_line().await {
            Ok(Some(line)) => {
                form.view_mut().type_input(&line);
                form.dispatch(FormEvent::KeyPress("Enter".to_string())).await;
            }
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }
    }
}
