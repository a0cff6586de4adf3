pub mod config;
pub mod delete;
pub mod list;
pub mod report;
pub mod track;
