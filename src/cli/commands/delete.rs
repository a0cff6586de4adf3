use crate::config::Config;
use crate::core::delete::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(date_str: &str, cfg: &Config) -> AppResult<()> {
    let d = date::parse_date(date_str)?;

    let pool = DbPool::open(&cfg.database)?;
    let deleted = DeleteLogic::apply(&pool, d)?;

    success(format!("Deleted working day {}", deleted.day_str()));
    Ok(())
}
