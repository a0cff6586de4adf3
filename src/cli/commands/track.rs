use crate::cli::parser::TrackArgs;
use crate::config::Config;
use crate::core::report::build_report;
use crate::core::track::TrackLogic;
use crate::db::pool::DbPool;
use crate::db::queries::{load_by_date, overtime};
use crate::errors::AppResult;
use crate::models::DayInput;
use crate::ui::messages::info;
use crate::utils::date::{self, parse_date_or};
use crate::utils::time::{now_minutes, parse_optional_time};
use chrono::NaiveDate;

/// Break value scripts pass to mean "not supplied".
pub const BREAK_UNSET: i64 = -1;

/// Turn raw flags into a `DayInput`. Fails before anything touches the store.
pub fn build_input(args: &TrackArgs, today: NaiveDate) -> AppResult<DayInput> {
    Ok(DayInput {
        date: parse_date_or(args.date.as_deref(), today)?,
        start: parse_optional_time(args.start.as_deref())?,
        end: parse_optional_time(args.end.as_deref())?,
        break_minutes: args.brk.filter(|b| *b != BREAK_UNSET),
        note: args.note.clone(),
    })
}

/// Create or update a working day, then report today and total overtime.
pub fn handle(args: &TrackArgs, cfg: &Config) -> AppResult<()> {
    let today = date::today();

    //
    // 1. Parse input and baseline (no DB access yet)
    //
    let input = build_input(args, today)?;
    let baseline = cfg.daily_target_minutes()?;

    //
    // 2. Open DB
    //
    let pool = DbPool::open(&cfg.database)?;

    //
    // 3. Upsert
    //
    let stored = TrackLogic::apply(&pool, &input, now_minutes())?;
    info(&stored);

    //
    // 4. Report
    //
    let worked_today = load_by_date(&pool, &today)?;
    let total = overtime(&pool, baseline)?;
    println!("{}", build_report(worked_today.as_ref(), total));

    Ok(())
}
