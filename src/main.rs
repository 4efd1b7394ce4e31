// reviewbud entry point.
// Parses the command line, sets up logging and config, and runs the wizard TUI.

mod cli;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use reviewbud::app::App;
use reviewbud::clipboard::ClipboardChain;
use reviewbud::config::{self, Config};
use reviewbud::error::{ReviewError, Result};
use reviewbud::generation::GenerationClient;
use reviewbud::navigator::BrowserNavigator;
use reviewbud::state::{CommitButton, WizardState};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Rotate and initialize file-based logging before anything else logs
    if let Some(log_path) = config::log_path() {
        logging::rotate_log(&log_path);
        if let Err(e) = logging::setup_logging(&log_path) {
            eprintln!("Warning: logging disabled: {}", e);
        }
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "reviewbud exited with an error");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    tracing::debug!(command = ?cli.command, "dispatching command");

    if let Some(Commands::Init { force }) = cli.command {
        let path = cli
            .config
            .clone()
            .or_else(config::config_path)
            .ok_or_else(|| ReviewError::Other("No config directory available".to_string()))?;
        if Config::default().save(&path, force)? {
            println!("reviewbud config written to {}", path.display());
        } else {
            println!(
                "{} already exists, use --force to overwrite",
                path.display()
            );
        }
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref());
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }

    let token = cli
        .token
        .clone()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ReviewError::Other("A review link --token is required".to_string()))?;
    let business = cli.selection().validate(&config)?;
    tracing::info!(business = %business.name, place_id = %business.place_id, "starting review wizard");

    let client = GenerationClient::new(config.endpoint_url(&token), config.request_timeout())?;
    let wizard = WizardState::new(
        business,
        config.tags.clone(),
        config.feedback_budget,
        config.timings(),
    );
    let mut app = App::new(
        wizard,
        client,
        ClipboardChain::default(),
        Box::new(BrowserNavigator),
    );

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result?;

    if let Some(url) = &app.exit_url {
        println!("Post your review at {}", url);
    }

    // Natively copied text lives only as long as this process on X11/Wayland
    let copied_natively =
        app.wizard.completion().button() == CommitButton::CopiedRedirecting { disabled: true };
    if copied_natively {
        println!(
            "Keeping the review on the clipboard (up to {}s, Ctrl+C to stop)...",
            config.clipboard_hold_secs
        );
    }
    let release = app.release_clipboard(config.clipboard_hold());
    tracing::debug!(?release, "clipboard released");
    Ok(())
}
