// Config path utilities.
// Resolves the platform config and data directories for reviewbud.

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "reviewbud")
}

/// Get the base config directory (~/.config/reviewbud on Linux).
fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the base data directory (~/.local/share/reviewbud on Linux).
fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Path to the config file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Path to the log file.
pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("reviewbud.log"))
}
