use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::WorkingDay;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, color_for_overtime};
use crate::utils::date;
use crate::utils::mins2readable;
use crate::utils::table::{Cell, Table};

pub fn handle(start: Option<&str>, end: Option<&str>, cfg: &Config) -> AppResult<()> {
    let start = start.map(date::parse_date).transpose()?;
    let end = end.map(date::parse_date).transpose()?;
    let baseline = cfg.daily_target_minutes()?;

    let (from, to) = ListLogic::range_for(start, end, date::today(), cfg.list_days_back);

    let pool = DbPool::open(&cfg.database)?;
    let days = ListLogic::apply(&pool, &from, &to)?;

    if days.is_empty() {
        info(format!(
            "No working days between {} and {}",
            from.date(),
            to.date().pred_opt().unwrap_or(to.date())
        ));
        return Ok(());
    }

    print!("{}", render_table(&days, baseline).render());
    Ok(())
}

pub fn render_table(days: &[WorkingDay], baseline: i64) -> Table {
    let mut table = Table::new(["Day", "Start", "End", "Break", "Worked", "Overtime", "Note"]);

    for wd in days {
        let overtime = wd.overtime_minutes(baseline);
        let note = if wd.note.is_empty() {
            Cell::colored("--", GREY)
        } else {
            Cell::plain(wd.note.clone())
        };

        table.add_row(vec![
            Cell::plain(wd.day_str()),
            Cell::plain(wd.start.format("%H:%M").to_string()),
            Cell::plain(wd.end.format("%H:%M").to_string()),
            Cell::plain(format!("{} min", wd.break_minutes)),
            Cell::plain(mins2readable(wd.worked_minutes(), false)),
            Cell::colored(mins2readable(overtime, true), color_for_overtime(overtime)),
            note,
        ]);
    }

    table
}
