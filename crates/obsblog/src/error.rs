//! CLI error types.

use obsblog_config::ConfigError;
use obsblog_site::BuildError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{failed} file(s) could not be processed")]
    Incomplete { failed: usize },
}
