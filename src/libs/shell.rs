//! Application shell: view state and action handlers.
//!
//! Handlers take the [`ViewState`] explicitly and never draw anything; the
//! terminal front-end in `commands::shell` (and the one-shot subcommands)
//! render whatever [`Shell::refresh`] returns. Every mutation is expected to
//! be followed by a `refresh`.

use crate::db::employees::Employees;
use crate::libs::chart::{ChartSurface, DepartmentChart};
use crate::libs::employee::{DepartmentFilter, Employee, EmployeeFilter, EmployeeForm, FormError};
use crate::libs::export::CsvExporter;
use crate::libs::messages::Message;
use crate::libs::report::ReportGenerator;
use anyhow::Result;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Validation(#[from] FormError),
    #[error("no employee selected")]
    NoSelection,
    #[error("employee {0} not found")]
    NotFound(i64),
    #[error("no form is open")]
    NoFormOpen,
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl ShellError {
    /// User-facing text for warnings shown by the front-end.
    pub fn message(&self) -> Option<Message> {
        match self {
            ShellError::Validation(FormError::NameRequired) => Some(Message::EmployeeNameRequired),
            ShellError::NoSelection => Some(Message::NoEmployeeSelected),
            ShellError::NotFound(id) => Some(Message::EmployeeNotFound(*id)),
            ShellError::NoFormOpen | ShellError::Store(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Adding(EmployeeForm),
    Editing { id: i64, form: EmployeeForm },
}

impl FormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Closed)
    }

    /// Values currently in the open form.
    pub fn values(&self) -> Option<&EmployeeForm> {
        match self {
            FormState::Closed => None,
            FormState::Adding(form) | FormState::Editing { form, .. } => Some(form),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search: String,
    pub department: DepartmentFilter,
    pub selected: Option<i64>,
    pub form: FormState,
}

impl ViewState {
    pub fn filter(&self) -> EmployeeFilter {
        EmployeeFilter::new(&self.search, self.department.clone())
    }

    pub fn department_label(&self) -> String {
        match &self.department {
            DepartmentFilter::All => Message::AllDepartments.to_string(),
            DepartmentFilter::Only(department) => department.clone(),
        }
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.department = DepartmentFilter::All;
    }
}

/// Everything the view shows after a refresh.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub employees: Vec<Employee>,
    /// Dropdown options, the "All" sentinel first.
    pub department_choices: Vec<String>,
    pub chart: DepartmentChart,
    pub status: Message,
}

impl Snapshot {
    /// Filter for a position in `department_choices`. Position 0 is the
    /// "All" entry whatever the departments are called.
    pub fn department_at(&self, index: usize) -> DepartmentFilter {
        match self.department_choices.get(index) {
            Some(department) if index > 0 => DepartmentFilter::Only(department.clone()),
            _ => DepartmentFilter::All,
        }
    }

    /// Position of `filter` in `department_choices`.
    pub fn department_index(&self, filter: &DepartmentFilter) -> usize {
        match filter {
            DepartmentFilter::All => 0,
            DepartmentFilter::Only(department) => self
                .department_choices
                .iter()
                .skip(1)
                .position(|choice| choice == department)
                .map_or(0, |position| position + 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(Employee),
    Updated { employee: Employee, changed: usize },
    Deleted(Employee),
    Cancelled,
}

pub struct Shell {
    db_path: PathBuf,
    chart: ChartSurface,
}

impl Shell {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Shell {
            db_path: db_path.into(),
            chart: ChartSurface::default(),
        }
    }

    pub fn db_path(&self) -> &PathBuf {
        &self.db_path
    }

    /// Opens a fresh connection for one action; it is closed when dropped.
    fn store(&self) -> Result<Employees> {
        Employees::open(&self.db_path)
    }

    pub fn chart_surface(&self) -> &ChartSurface {
        &self.chart
    }

    /// Re-queries the list, department options, chart and status count.
    /// A department filter whose department is no longer in use falls back
    /// to all departments.
    pub fn refresh(&mut self, state: &mut ViewState) -> Result<Snapshot> {
        self.load(state, true)
    }

    /// Same as [`Shell::refresh`] but the department filter is kept as given,
    /// so an unknown department lists nothing.
    pub fn query(&mut self, state: &mut ViewState) -> Result<Snapshot> {
        self.load(state, false)
    }

    fn load(&mut self, state: &mut ViewState, reconcile: bool) -> Result<Snapshot> {
        let store = self.store()?;
        let departments = store.distinct_departments()?;

        if reconcile {
            if let DepartmentFilter::Only(department) = &state.department {
                if !departments.contains(department) {
                    tracing::debug!(department = %department, "department filter no longer applies");
                    state.department = DepartmentFilter::All;
                }
            }
        }

        let employees = store.list(&state.filter())?;
        if let Some(selected) = state.selected {
            if !employees.iter().any(|employee| employee.id == Some(selected)) {
                state.selected = None;
            }
        }

        let chart = DepartmentChart::aggregate(&employees);
        self.chart.render(&chart);

        let mut department_choices = vec![Message::AllDepartments.to_string()];
        department_choices.extend(departments);

        tracing::debug!(visible = employees.len(), search = %state.search, department = %state.department_label(), "view refreshed");
        Ok(Snapshot {
            status: Message::EmployeesStatus(employees.len()),
            employees,
            department_choices,
            chart,
        })
    }

    pub fn select(&self, state: &mut ViewState, id: Option<i64>) {
        state.selected = id;
    }

    pub fn search(&self, state: &mut ViewState, text: &str) {
        state.search = text.trim().to_string();
    }

    /// Applies a typed department name; exactly the "All" label clears the filter.
    pub fn filter_department(&self, state: &mut ViewState, choice: &str) {
        state.department = DepartmentFilter::from_choice(choice, &Message::AllDepartments.to_string());
    }

    pub fn set_department(&self, state: &mut ViewState, department: DepartmentFilter) {
        state.department = department;
    }

    pub fn open_add(&self, state: &mut ViewState) {
        state.form = FormState::Adding(EmployeeForm::default());
    }

    /// Opens the edit form pre-filled with the selected record.
    pub fn open_edit(&self, state: &mut ViewState) -> Result<Employee, ShellError> {
        let id = state.selected.ok_or(ShellError::NoSelection)?;
        let employee = self.store()?.get(id)?.ok_or(ShellError::NotFound(id))?;
        state.form = FormState::Editing {
            id,
            form: EmployeeForm::from_employee(&employee),
        };
        Ok(employee)
    }

    pub fn cancel(&self, state: &mut ViewState) {
        state.form = FormState::Closed;
    }

    /// Submits `form` for the open add/edit form. A blank name keeps the form
    /// open with the entered values and never reaches the store.
    pub fn submit(&self, state: &mut ViewState, form: EmployeeForm) -> Result<Outcome, ShellError> {
        let editing = match &state.form {
            FormState::Closed => return Err(ShellError::NoFormOpen),
            FormState::Adding(_) => None,
            FormState::Editing { id, .. } => Some(*id),
        };

        let mut employee = match form.validate() {
            Ok(employee) => employee,
            Err(e) => {
                state.form = match editing {
                    Some(id) => FormState::Editing { id, form },
                    None => FormState::Adding(form),
                };
                return Err(e.into());
            }
        };

        let mut store = self.store()?;
        let outcome = match editing {
            None => {
                let id = store.insert(&employee)?;
                employee.id = Some(id);
                state.selected = Some(id);
                tracing::info!(id, name = %employee.name, "employee created");
                Outcome::Created(employee)
            }
            Some(id) => {
                let changed = store.update(id, &employee)?;
                employee.id = Some(id);
                tracing::info!(id, changed, name = %employee.name, "employee updated");
                Outcome::Updated { employee, changed }
            }
        };

        state.form = FormState::Closed;
        Ok(outcome)
    }

    /// Deletes the selected record once `confirm` agrees.
    pub fn delete_selected(&self, state: &mut ViewState, confirm: impl FnOnce(&Employee) -> bool) -> Result<Outcome, ShellError> {
        let id = state.selected.ok_or(ShellError::NoSelection)?;
        let mut store = self.store()?;
        let employee = match store.get(id)? {
            Some(employee) => employee,
            None => {
                state.selected = None;
                return Err(ShellError::NotFound(id));
            }
        };

        if !confirm(&employee) {
            return Ok(Outcome::Cancelled);
        }

        store.delete(id)?;
        state.selected = None;
        tracing::info!(id, name = %employee.name, "employee deleted");
        Ok(Outcome::Deleted(employee))
    }

    /// Every record, ignoring the active search and department filter.
    pub fn all_employees(&self) -> Result<Vec<Employee>> {
        self.store()?.list(&EmployeeFilter::all())
    }

    pub fn export_csv(&self, output: Option<PathBuf>) -> Result<(PathBuf, usize)> {
        let exporter = CsvExporter::new(output);
        let rows = exporter.export(&self.all_employees()?)?;
        Ok((exporter.output_path().to_path_buf(), rows))
    }

    pub fn generate_report(&self, output: Option<PathBuf>, title: &str) -> Result<(PathBuf, usize)> {
        let generator = ReportGenerator::new(output).with_title(title);
        let pages = generator.generate(&self.all_employees()?)?;
        Ok((generator.output_path().to_path_buf(), pages))
    }
}
