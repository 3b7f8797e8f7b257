//! `app` section: identity of the running tool and its log verbosity.

use serde::Deserialize;
use tracing::Level;

/// Environments accepted in `app.env`.
pub const ENVIRONMENTS: &[&str] = &["development", "staging", "production"];

/// Identity and logging settings of the payload tool.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Shown in the startup log line.
    pub name: String,
    /// One of [`ENVIRONMENTS`].
    pub env: String,
    /// Default tracing level when `RUST_LOG` is unset. `PIX_MODELS_LOG_LEVEL`
    /// overrides the file value.
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Resolves `log_level` to a tracing level, falling back to INFO for
    /// missing or unrecognised values. "warning" is accepted as "warn".
    pub fn tracing_level(&self) -> Level {
        self.log_level
            .as_deref()
            .map(|level| if level == "warning" { "warn" } else { level })
            .and_then(|level| level.parse().ok())
            .unwrap_or(Level::INFO)
    }
}
