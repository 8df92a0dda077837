use crate::config::Logging;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter directives: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("could not create log file `{path}`: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("global subscriber already set: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

pub fn default_filter(module_name: &str) -> String {
    format!("{module_name}=debug,catalog=debug")
}

pub fn setup_logging(module_name: &str, config: &Logging) -> Result<(), LoggingError> {
    let directives = config
        .filter
        .clone()
        .unwrap_or_else(|| default_filter(module_name));

    let stdout_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_filter(EnvFilter::try_new(&directives)?);

    let file_log = match config.file.as_deref() {
        Some(path) => {
            let file = create_log_file(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true)
                    .with_filter(EnvFilter::try_new(&directives)?),
            )
        }
        None => None,
    };

    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(stdout_log)
            .with(file_log),
    )?;
    Ok(())
}

fn create_log_file(path: &str) -> Result<File, LoggingError> {
    let to_err = |source| LoggingError::File {
        path: path.to_string(),
        source,
    };
    if let Some(dir) = Path::new(path).parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(to_err)?;
    }
    File::create(path).map_err(to_err)
}
