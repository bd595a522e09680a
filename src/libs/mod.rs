//! Core library modules for the roster application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Records**: Employee record, add/edit form validation, list filters
//! - **Application Shell**: View state and action handlers
//! - **Output**: Terminal list view, department chart, CSV export, PDF report
//! - **System Integration**: Default printer dispatch
//!
//! ## Usage
//!
//! ```rust,no_run
//! use roster::libs::employee::EmployeeForm;
//! use roster::libs::shell::{Shell, ViewState};
//!
//! let mut shell = Shell::new("roster.db");
//! let mut state = ViewState::default();
//! shell.open_add(&mut state);
//! let form = EmployeeForm { name: "Aya".to_string(), ..Default::default() };
//! shell.submit(&mut state, form)?;
//! let snapshot = shell.refresh(&mut state)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod chart;
pub mod config;
pub mod data_storage;
pub mod employee;
pub mod export;
pub mod messages;
pub mod print;
pub mod report;
pub mod shell;
pub mod view;
