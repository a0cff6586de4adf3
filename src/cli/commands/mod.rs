pub mod config;
pub mod delete;
pub mod init;
pub mod list;
pub mod track;
pub mod version;
