//! # twlog - Teamwork time logger
//!
//! Aggregates tracked time from CSV exports and logs it to Teamwork.
//!
//! ## Features
//!
//! - **Aggregation**: Rows are merged per project, description and day
//! - **Flexible Durations**: `H:MM` or plain minutes, with carry into hours
//! - **Task Inference**: Task IDs typed into descriptions (`123 - ...`, `[TW:123] ...`)
//! - **Dry Runs**: Simulate mode shows what would be logged without sending anything
//!
//! ## Usage
//!
//! ```rust,no_run
//! use twlog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
