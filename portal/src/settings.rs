//! Runtime configuration loaded via OrthoConfig.

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::ControllerOptions;
use crate::outbound::http::DEFAULT_API_BASE_URL;

const DEFAULT_STORAGE_DIR: &str = ".portal-session";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A URL setting did not parse.
    #[error("invalid {name} '{value}': {source}")]
    InvalidUrl {
        /// Setting name.
        name: &'static str,
        /// Offending value.
        value: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// A required setting was absent.
    #[error("missing required setting: {name}")]
    Missing {
        /// Setting name.
        name: &'static str,
    },
}

/// Portal settings from CLI arguments, `PORTAL_*` variables, and files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PORTAL")]
pub struct PortalSettings {
    /// Root of the remote API.
    pub api_base_url: Option<String>,
    /// Directory holding the durable session token.
    pub storage_dir: Option<PathBuf>,
    /// Whole-request timeout; the transport default applies when absent.
    pub request_timeout_secs: Option<u64>,
    /// Keep the query string visible after the subject id is read.
    #[ortho_config(default = false)]
    pub preserve_entry_url: bool,
    /// Entry page URL to resolve the subject id from.
    pub entry_url: Option<String>,
    /// Login id used by the driver binary.
    pub username: Option<String>,
    /// Password used by the driver binary.
    pub password: Option<String>,
}

impl PortalSettings {
    /// Configured API root, falling back to the production URL.
    pub fn api_base_url(&self) -> Result<Url, SettingsError> {
        let raw = self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL);
        Url::parse(raw).map_err(|source| SettingsError::InvalidUrl {
            name: "api_base_url",
            value: raw.to_owned(),
            source,
        })
    }

    /// Configured entry URL.
    pub fn entry_url(&self) -> Result<Url, SettingsError> {
        let raw = self
            .entry_url
            .as_deref()
            .ok_or(SettingsError::Missing { name: "entry_url" })?;
        Url::parse(raw).map_err(|source| SettingsError::InvalidUrl {
            name: "entry_url",
            value: raw.to_owned(),
            source,
        })
    }

    /// Configured storage directory, falling back to the default.
    pub fn storage_dir(&self) -> PathBuf {
        self.storage_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR))
    }

    /// Configured request timeout.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Controller toggles derived from these settings.
    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            clean_entry_url: !self.preserve_entry_url,
        }
    }
}
