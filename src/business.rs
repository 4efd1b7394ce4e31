// Business selection handling.
// Validates the lookup result and derives the review target URL.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{ReviewError, Result};

/// Geographic position of a selected business.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Raw output of the business lookup, possibly incomplete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessSelection {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub place_id: Option<String>,
    pub location: Option<LatLng>,
}

/// A validated business the review is written for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Business {
    pub name: String,
    pub address: String,
    pub place_id: String,
    /// External review-target URL built from `place_id`.
    pub review_url: String,
}

impl BusinessSelection {
    /// Validate the selection. Every field is required; blank strings count as missing.
    pub fn validate(self, config: &Config) -> Result<Business> {
        let mut missing = Vec::new();

        if self.location.is_none() {
            missing.push("geometry");
        }
        let name = non_blank(self.name);
        if name.is_none() {
            missing.push("name");
        }
        let address = non_blank(self.formatted_address);
        if address.is_none() {
            missing.push("address");
        }
        let place_id = non_blank(self.place_id);
        if place_id.is_none() {
            missing.push("place id");
        }

        match (name, address, place_id) {
            (Some(name), Some(address), Some(place_id)) if missing.is_empty() => {
                let review_url = config.review_url(&place_id);
                Ok(Business {
                    name,
                    address,
                    place_id,
                    review_url,
                })
            }
            _ => Err(ReviewError::InvalidSelection { missing }),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
