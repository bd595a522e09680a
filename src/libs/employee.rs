//! Employee record, form input and list filters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column captions shared by the list view, CSV export and PDF report.
pub const COLUMNS: [&str; 6] = ["ID", "Name", "Position", "Salary", "Department", "Phone"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Option<i64>,
    pub name: String,
    pub position: String,
    /// Free-form text; never parsed as a number.
    pub salary: String,
    pub department: String,
    pub phone: String,
}

impl Employee {
    pub fn new(name: &str, position: &str, salary: &str, department: &str, phone: &str) -> Self {
        Employee {
            id: None,
            name: name.to_string(),
            position: position.to_string(),
            salary: salary.to_string(),
            department: department.to_string(),
            phone: phone.to_string(),
        }
    }

    /// Cells in [`COLUMNS`] order. A missing id renders as an empty cell.
    pub fn cells(&self) -> [String; 6] {
        [
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            self.name.clone(),
            self.position.clone(),
            self.salary.clone(),
            self.department.clone(),
            self.phone.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("employee name is required")]
    NameRequired,
}

/// Raw values typed into the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub name: String,
    pub position: String,
    pub salary: String,
    pub department: String,
    pub phone: String,
}

impl EmployeeForm {
    pub fn from_employee(employee: &Employee) -> Self {
        EmployeeForm {
            name: employee.name.clone(),
            position: employee.position.clone(),
            salary: employee.salary.clone(),
            department: employee.department.clone(),
            phone: employee.phone.clone(),
        }
    }

    /// Trims every field and rejects a blank name. Nothing else is checked.
    pub fn validate(&self) -> Result<Employee, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::NameRequired);
        }

        Ok(Employee::new(
            name,
            self.position.trim(),
            self.salary.trim(),
            self.department.trim(),
            self.phone.trim(),
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DepartmentFilter {
    #[default]
    All,
    Only(String),
}

impl DepartmentFilter {
    /// Maps a typed department name to a filter; only an exact `sentinel`
    /// (or nothing) means every department.
    pub fn from_choice(choice: &str, sentinel: &str) -> Self {
        if choice.is_empty() || choice == sentinel {
            DepartmentFilter::All
        } else {
            DepartmentFilter::Only(choice.to_string())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub name_contains: Option<String>,
    pub department: DepartmentFilter,
}

impl EmployeeFilter {
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds a filter from raw search text; blank text means no name filter.
    pub fn new(search: &str, department: DepartmentFilter) -> Self {
        let search = search.trim();
        EmployeeFilter {
            name_contains: if search.is_empty() { None } else { Some(search.to_string()) },
            department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_fields() {
        let form = EmployeeForm {
            name: "  Aya ".to_string(),
            position: " Engineer".to_string(),
            salary: "5000 ".to_string(),
            department: "IT".to_string(),
            phone: " 0101 ".to_string(),
        };
        let employee = form.validate().unwrap();
        assert_eq!(employee, Employee::new("Aya", "Engineer", "5000", "IT", "0101"));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let form = EmployeeForm {
            name: "   \t".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(FormError::NameRequired));
    }

    #[test]
    fn test_salary_is_not_parsed() {
        let form = EmployeeForm {
            name: "Omar".to_string(),
            salary: "about 4k".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap().salary, "about 4k");
    }

    #[test]
    fn test_department_choice_sentinel() {
        assert_eq!(DepartmentFilter::from_choice("All", "All"), DepartmentFilter::All);
        assert_eq!(DepartmentFilter::from_choice("", "All"), DepartmentFilter::All);
        assert_eq!(DepartmentFilter::from_choice("all", "All"), DepartmentFilter::Only("all".to_string()));
        assert_eq!(DepartmentFilter::from_choice("ALL", "All"), DepartmentFilter::Only("ALL".to_string()));
        assert_eq!(DepartmentFilter::from_choice("HR", "All"), DepartmentFilter::Only("HR".to_string()));
    }

    #[test]
    fn test_blank_search_is_no_filter() {
        let filter = EmployeeFilter::new("  ", DepartmentFilter::All);
        assert_eq!(filter, EmployeeFilter::all());
    }

    #[test]
    fn test_cells_without_id() {
        let employee = Employee::new("Aya", "", "", "", "");
        assert_eq!(employee.cells()[0], "");
    }
}
