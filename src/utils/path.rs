//! Path utilities: home directory resolution and `~` expansion.

use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or(AppError::HomeDir)
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
