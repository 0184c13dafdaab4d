pub mod catalog;
pub mod config;
pub mod log;
pub mod ui;
