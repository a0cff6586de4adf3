use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// The effective configuration as YAML.
    pub fn render(cfg: &Config) -> AppResult<String> {
        serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Editor to use: `--editor`, then $EDITOR / $VISUAL, then a platform default.
    pub fn pick_editor(requested: Option<&str>) -> (String, String) {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor = requested
            .map(str::to_string)
            .unwrap_or_else(|| default_editor.clone());
        (editor, default_editor)
    }

    /// Open `path` in `editor`, retrying once with `fallback` when it differs.
    pub fn edit(path: &Path, editor: &str, fallback: &str) -> AppResult<String> {
        if editor == fallback {
            return Self::launch(path, editor);
        }

        match Command::new(editor).arg(path).status() {
            Ok(s) if s.success() => return Ok(editor.to_string()),
            Ok(_) | Err(_) => {
                tracing::warn!(editor, fallback, "editor failed, trying fallback");
            }
        }

        Self::launch(path, fallback)
    }

    fn launch(path: &Path, editor: &str) -> AppResult<String> {
        match Command::new(editor).arg(path).status() {
            Ok(s) if s.success() => Ok(editor.to_string()),
            Ok(s) => Err(AppError::Config(format!(
                "editor '{}' exited with {}",
                editor, s
            ))),
            Err(e) => Err(AppError::Config(format!(
                "failed to launch editor '{}': {}",
                editor, e
            ))),
        }
    }
}
