// Review target navigation.
// Opens the external review page in the user's browser.

use crate::error::{ReviewError, Result};

/// Leaves the wizard for an external URL.
pub trait Navigator {
    fn navigate(&mut self, url: &str) -> Result<()>;
}

/// Opens URLs with the platform's default browser.
#[derive(Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&mut self, url: &str) -> Result<()> {
        tracing::info!(url, "opening review target");
        open::that(url).map_err(|e| ReviewError::Other(format!("Failed to open {}: {}", url, e)))
    }
}
