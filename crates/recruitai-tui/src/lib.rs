// Terminal dashboard for the screening service, built on ratatui

pub mod app;
pub mod help_ui;
pub mod runner;
pub mod ui;

pub use app::{App, InputMode, Page};
pub use runner::run_tui;
