pub mod day_input;
pub mod working_day;

pub use day_input::DayInput;
pub use working_day::WorkingDay;
