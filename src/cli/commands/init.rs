use crate::config::Config;
use crate::db::migrate::current_version;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// Writes the configuration file (unless one exists and `--force` is not
/// given) and creates/migrates the database it points to.
pub fn handle(force: bool, cfg: &Config) -> AppResult<()> {
    let path = Config::config_file()?;

    if path.exists() && !force {
        warning(format!(
            "Config file {} already exists (use --force to overwrite)",
            path.display()
        ));
    } else {
        let written = cfg.save()?;
        success(format!("Config file: {}", written.display()));
    }

    let pool = DbPool::open(&cfg.database)?;
    let version = current_version(&pool.conn)?;

    success(format!(
        "Database initialized at {} (schema v{})",
        cfg.database, version
    ));
    Ok(())
}
