use super::db::Db;
use crate::libs::employee::{DepartmentFilter, Employee, EmployeeFilter};
use anyhow::Result;
use rusqlite::types::ValueRef;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;

const SCHEMA_EMPLOYEES: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    position TEXT,
    salary TEXT,
    department TEXT,
    phone TEXT
);";
const INSERT_EMPLOYEE: &str = "INSERT INTO employees (name, position, salary, department, phone) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_EMPLOYEE: &str = "UPDATE employees SET name = ?2, position = ?3, salary = ?4, department = ?5, phone = ?6 WHERE id = ?1";
const DELETE_EMPLOYEE: &str = "DELETE FROM employees WHERE id = ?1";
const SELECT_EMPLOYEES: &str = "SELECT id, name, position, salary, department, phone FROM employees WHERE 1=1";
const SELECT_EMPLOYEE_BY_ID: &str = "SELECT id, name, position, salary, department, phone FROM employees WHERE id = ?1";
const SELECT_DEPARTMENTS: &str = "SELECT department FROM employees
    WHERE department IS NOT NULL AND department <> ''
    GROUP BY department
    ORDER BY MIN(id)";
const COUNT_EMPLOYEES: &str = "SELECT COUNT(*) FROM employees";
const WHERE_NAME_LIKE: &str = "AND name LIKE ? ESCAPE '\\'";
const WHERE_DEPARTMENT: &str = "AND department = ?";
const ORDER_BY_ID: &str = "ORDER BY id";

/// Employee table access. Each instance owns one short-lived connection.
pub struct Employees {
    conn: Connection,
}

impl Employees {
    pub fn new() -> Result<Self> {
        Self::from_db(Db::new()?)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_db(Db::open(path)?)
    }

    fn from_db(db: Db) -> Result<Self> {
        let employees = Employees { conn: db.conn };
        employees.ensure_schema()?;
        Ok(employees)
    }

    /// Creates the table when it is missing; a no-op otherwise.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn.execute(SCHEMA_EMPLOYEES, [])?;
        Ok(())
    }

    /// Inserts the record and returns the id assigned by the store.
    pub fn insert(&mut self, employee: &Employee) -> Result<i64> {
        self.conn.execute(
            INSERT_EMPLOYEE,
            params![employee.name, employee.position, employee.salary, employee.department, employee.phone],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Overwrites every mutable field of `id`. Returns the number of rows changed.
    pub fn update(&mut self, id: i64, employee: &Employee) -> Result<usize> {
        let affected = self.conn.execute(
            UPDATE_EMPLOYEE,
            params![id, employee.name, employee.position, employee.salary, employee.department, employee.phone],
        )?;
        Ok(affected)
    }

    /// Removes `id`. Returns the number of rows removed.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let affected = self.conn.execute(DELETE_EMPLOYEE, params![id])?;
        Ok(affected)
    }

    pub fn get(&self, id: i64) -> Result<Option<Employee>> {
        self.conn
            .query_row(SELECT_EMPLOYEE_BY_ID, params![id], map_employee)
            .optional()
            .map_err(Into::into)
    }

    /// Records matching `filter`, in insertion order.
    pub fn list(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>> {
        let mut query = SELECT_EMPLOYEES.to_string();
        let mut params: Vec<String> = Vec::new();

        if let Some(search) = &filter.name_contains {
            query = format!("{} {}", query, WHERE_NAME_LIKE);
            params.push(format!("%{}%", escape_like(search)));
        }
        if let DepartmentFilter::Only(department) = &filter.department {
            query = format!("{} {}", query, WHERE_DEPARTMENT);
            params.push(department.clone());
        }
        query = format!("{} {}", query, ORDER_BY_ID);

        let mut stmt = self.conn.prepare(&query)?;
        let employee_iter = stmt.query_map(params_from_iter(params.iter()), map_employee)?;

        let mut employees = Vec::new();
        for employee in employee_iter {
            employees.push(employee?);
        }
        Ok(employees)
    }

    /// Non-empty department values in use, in first-seen order.
    pub fn distinct_departments(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(SELECT_DEPARTMENTS)?;
        let department_iter = stmt.query_map([], |row| text_column(row, 0))?;

        let mut departments = Vec::new();
        for department in department_iter {
            departments.push(department?);
        }
        Ok(departments)
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_EMPLOYEES, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn map_employee(row: &Row) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: text_column(row, 1)?,
        position: text_column(row, 2)?,
        salary: text_column(row, 3)?,
        department: text_column(row, 4)?,
        phone: text_column(row, 5)?,
    })
}

/// Reads any storage class as text. Older databases declared `salary REAL`
/// and may hold NULLs in the optional columns.
fn text_column(row: &Row, idx: usize) -> rusqlite::Result<String> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => String::new(),
        ValueRef::Integer(value) => value.to_string(),
        ValueRef::Real(value) => value.to_string(),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    })
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
