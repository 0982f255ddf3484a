//! CLI error types.

use cdocs_config::ConfigError;
use cdocs_content::IndexError;
use cdocs_site::SiteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Index(#[from] IndexError),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Domain not found: {0}")]
    DomainNotFound(String),

    #[error("{0}")]
    Validation(String),
}
