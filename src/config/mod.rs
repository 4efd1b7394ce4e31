// Configuration module.
// Loads config.toml from the platform config directory with defaults for every key.

pub mod paths;
pub mod store;

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::WizardTimings;

pub use paths::{config_path, log_path};

/// Default review URL template; `{place_id}` is substituted.
pub const DEFAULT_REVIEW_URL_TEMPLATE: &str =
    "https://search.google.com/local/writereview?placeid={place_id}";

/// Default display budget for the feedback field.
pub const DEFAULT_FEEDBACK_BUDGET: usize = 280;

/// Tags offered on step 2 when the config does not override them.
pub const DEFAULT_TAGS: &[&str] = &[
    "Friendly Staff",
    "Great Value",
    "Delicious Food",
    "Fast Service",
    "Clean",
    "Cozy Atmosphere",
    "Good for Groups",
    "Family Friendly",
];

/// On-disk config (config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the backend hosting the generation endpoint.
    pub base_url: String,
    pub review_url_template: String,
    pub redirect_delay_ms: u64,
    pub nav_reveal_delay_ms: u64,
    pub request_timeout_secs: u64,
    /// Upper bound on how long exit waits to keep a copied review on the clipboard.
    pub clipboard_hold_secs: u64,
    pub feedback_budget: usize,
    pub tags: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let timings = WizardTimings::default();
        Self {
            base_url: "http://localhost:8000".to_string(),
            review_url_template: DEFAULT_REVIEW_URL_TEMPLATE.to_string(),
            redirect_delay_ms: timings.redirect_delay.as_millis() as u64,
            nav_reveal_delay_ms: timings.nav_reveal_delay.as_millis() as u64,
            request_timeout_secs: 30,
            clipboard_hold_secs: 30,
            feedback_budget: DEFAULT_FEEDBACK_BUDGET,
            tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load config from `path`, or from the platform config path when None.
    ///
    /// A missing file yields defaults. An unparseable file is logged and
    /// also yields defaults so the wizard still starts.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path.map(Path::to_path_buf).or_else(config_path) {
            Some(path) => path,
            None => return Self::default(),
        };

        match store::read_toml::<Config>(&path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read config.toml, using defaults");
                Self::default()
            }
        }
    }

    /// Write this config to `path`. Refuses to overwrite unless `force`.
    /// Returns whether the file was written.
    pub fn save(&self, path: &Path, force: bool) -> Result<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        store::write_toml(path, self)?;
        Ok(true)
    }

    /// Generation endpoint URL for a review link token.
    pub fn endpoint_url(&self, token: &str) -> String {
        format!("{}/submit/{}/", self.base_url.trim_end_matches('/'), token)
    }

    /// Review target URL for a business place identifier.
    pub fn review_url(&self, place_id: &str) -> String {
        self.review_url_template.replace("{place_id}", place_id)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn clipboard_hold(&self) -> Duration {
        Duration::from_secs(self.clipboard_hold_secs)
    }

    pub fn timings(&self) -> WizardTimings {
        WizardTimings {
            redirect_delay: Duration::from_millis(self.redirect_delay_ms),
            nav_reveal_delay: Duration::from_millis(self.nav_reveal_delay_ms),
        }
    }
}
