//! Database layer for the roster application.
//!
//! A single SQLite file holds the `employees` table. There is no pooling:
//! every action opens its own connection through [`employees::Employees`]
//! and drops it when done.
//!
//! ```rust,no_run
//! use roster::db::employees::Employees;
//! use roster::libs::employee::{Employee, EmployeeFilter};
//!
//! let mut employees = Employees::open("roster.db")?;
//! let id = employees.insert(&Employee::new("Aya", "Engineer", "5000", "IT", "0101"))?;
//! let all = employees.list(&EmployeeFilter::all())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management and database file location.
pub mod db;

/// Employee table: schema, CRUD, filtered listing and department lookup.
pub mod employees;
