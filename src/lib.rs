//! # Roster - Employee records keeper
//!
//! A command-line utility for maintaining a small roster of employees backed
//! by a local SQLite file.
//!
//! ## Features
//!
//! - **Records**: Add, edit and delete employees with confirmation
//! - **Search**: Case-insensitive name search and department filter
//! - **Statistics**: Bar chart of employees per department
//! - **Data Export**: CSV export of the whole table
//! - **Reports**: Paginated A4 PDF list sent to the default printer
//!
//! ## Usage
//!
//! ```rust,no_run
//! use roster::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
