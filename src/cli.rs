// Command-line interface.
// Wizard flags for the selected business plus the init subcommand.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use reviewbud::business::{BusinessSelection, LatLng};

#[derive(Parser, Debug)]
#[command(name = "reviewbud")]
#[command(about = "Rate a business, generate a review, and post it to the review site")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Review link token issued by the backend
    #[arg(long)]
    pub token: Option<String>,

    /// Business name
    #[arg(long)]
    pub name: Option<String>,

    /// Formatted business address
    #[arg(long)]
    pub address: Option<String>,

    /// Place identifier used to build the review URL
    #[arg(long)]
    pub place_id: Option<String>,

    /// Business latitude
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Business longitude
    #[arg(long, allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// Override the backend base URL from config.toml
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to an alternate config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default config.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// The business as passed on the command line, not yet validated.
    pub fn selection(&self) -> BusinessSelection {
        let location = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(LatLng { lat, lng }),
            _ => None,
        };
        BusinessSelection {
            name: self.name.clone(),
            formatted_address: self.address.clone(),
            place_id: self.place_id.clone(),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wizard_args() {
        let cli = Cli::try_parse_from([
            "reviewbud",
            "--token",
            "abc123",
            "--name",
            "Cafe Nero",
            "--address",
            "1 High St",
            "--place-id",
            "ChIJabc",
            "--lat",
            "51.5",
            "--lng",
            "-0.12",
        ])
        .unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.token.as_deref(), Some("abc123"));
        let selection = cli.selection();
        assert_eq!(selection.name.as_deref(), Some("Cafe Nero"));
        assert_eq!(selection.location, Some(LatLng { lat: 51.5, lng: -0.12 }));
    }

    #[test]
    fn test_partial_location_is_missing() {
        let cli = Cli::try_parse_from(["reviewbud", "--lat", "51.5"]).unwrap();
        assert!(cli.selection().location.is_none());
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["reviewbud", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init { force: true })));
    }
}
