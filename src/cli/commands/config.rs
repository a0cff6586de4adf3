use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(
    print_config: bool,
    edit_config: bool,
    editor: Option<&str>,
    cfg: &Config,
) -> AppResult<()> {
    if !print_config && !edit_config {
        info("Nothing to do: pass --print or --edit");
        return Ok(());
    }

    // ---- PRINT CONFIG ----
    if print_config {
        println!("📄 Current configuration:\n");
        println!("{}", ConfigLogic::render(cfg)?);
    }

    // ---- EDIT CONFIG ----
    if edit_config {
        let path = Config::config_file()?;
        if !path.exists() {
            cfg.save()?;
            info(format!("Created {} with the current settings", path.display()));
        }

        let (editor, fallback) = ConfigLogic::pick_editor(editor);
        let used = ConfigLogic::edit(&path, &editor, &fallback)?;

        if used != editor {
            warning(format!(
                "Editor '{}' not available, used '{}' instead",
                editor, used
            ));
        }
        success(format!("Configuration file edited with '{}'", used));
    }

    Ok(())
}
