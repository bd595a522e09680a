//! Interactive employee manager.
//!
//! Each pass of the loop refreshes the view (list, filters, status line),
//! asks for one action and runs it to completion. Warnings (blank name,
//! nothing selected) keep the shell running; store errors abort only the
//! action that hit them.

use super::AppContext;
use crate::libs::employee::EmployeeForm;
use crate::libs::export;
use crate::libs::messages::Message;
use crate::libs::print::PrintDispatcher;
use crate::libs::report::DEFAULT_REPORT_FILE;
use crate::libs::shell::{Outcome, Shell, ShellError, Snapshot, ViewState};
use crate::libs::view::View;
use crate::{msg_error, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::path::PathBuf;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Edit,
    Delete,
    Refresh,
    Select,
    Search,
    FilterDepartment,
    ClearFilters,
    Statistics,
    ExportCsv,
    PrintReport,
    About,
    Exit,
}

const ACTIONS: [Action; 13] = [
    Action::Select,
    Action::Add,
    Action::Edit,
    Action::Delete,
    Action::Refresh,
    Action::Search,
    Action::FilterDepartment,
    Action::ClearFilters,
    Action::Statistics,
    Action::ExportCsv,
    Action::PrintReport,
    Action::About,
    Action::Exit,
];

impl Action {
    fn label(self) -> Message {
        match self {
            Action::Add => Message::ActionAdd,
            Action::Edit => Message::ActionEdit,
            Action::Delete => Message::ActionDelete,
            Action::Refresh => Message::ActionRefresh,
            Action::Select => Message::ActionSelect,
            Action::Search => Message::ActionSearch,
            Action::FilterDepartment => Message::ActionFilterDepartment,
            Action::ClearFilters => Message::ActionClearFilters,
            Action::Statistics => Message::ActionStatistics,
            Action::ExportCsv => Message::ActionExportCsv,
            Action::PrintReport => Message::ActionPrintReport,
            Action::About => Message::ActionAbout,
            Action::Exit => Message::ActionExit,
        }
    }
}

pub fn cmd(ctx: &AppContext) -> Result<()> {
    let mut shell = Shell::new(&ctx.db_path);
    let mut state = ViewState::default();
    let labels: Vec<String> = ACTIONS.iter().map(|action| action.label().to_string()).collect();

    loop {
        let snapshot = match shell.refresh(&mut state) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                msg_error!(e);
                let retry = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmRetryRefresh.to_string())
                    .default(true)
                    .interact()?;
                if retry {
                    continue;
                }
                msg_print!(Message::Goodbye);
                return Ok(());
            }
        };
        render_list(&snapshot, &state);

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        let action = ACTIONS[choice];
        if action == Action::Exit {
            msg_print!(Message::Goodbye);
            return Ok(());
        }

        if let Err(e) = run_action(action, &mut shell, &mut state, &snapshot, ctx) {
            msg_error!(e);
        }
    }
}

fn run_action(action: Action, shell: &mut Shell, state: &mut ViewState, snapshot: &Snapshot, ctx: &AppContext) -> Result<()> {
    match action {
        Action::Add => {
            shell.open_add(state);
            msg_print!(Message::AddingEmployee, true);
            run_form(shell, state)
        }
        Action::Edit => {
            if let Some(employee) = warn_on_user_error(shell.open_edit(state))? {
                msg_print!(Message::EditingEmployee(employee.name), true);
                run_form(shell, state)?;
            }
            Ok(())
        }
        Action::Delete => {
            let mut prompt_error = None;
            let outcome = shell.delete_selected(state, |employee| {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteEmployee(employee.name.clone()).to_string())
                    .default(false)
                    .interact();
                match confirmed {
                    Ok(answer) => answer,
                    Err(e) => {
                        prompt_error = Some(e);
                        false
                    }
                }
            });
            if let Some(e) = prompt_error {
                return Err(e.into());
            }
            if let Some(outcome) = warn_on_user_error(outcome)? {
                report_outcome(outcome);
            }
            Ok(())
        }
        Action::Refresh => Ok(()),
        Action::Select => {
            if snapshot.employees.is_empty() {
                msg_info!(Message::NoEmployeesFound);
                return Ok(());
            }
            let items: Vec<String> = snapshot
                .employees
                .iter()
                .map(|employee| {
                    let id = employee.id.unwrap_or_default();
                    if employee.department.is_empty() {
                        format!("{} | {}", id, employee.name)
                    } else {
                        format!("{} | {} | {}", id, employee.name, employee.department)
                    }
                })
                .collect();
            let current = snapshot.employees.iter().position(|employee| employee.id.is_some() && employee.id == state.selected);
            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::SelectEmployee.to_string())
                .items(&items)
                .default(current.unwrap_or(0))
                .interact()?;

            let employee = &snapshot.employees[choice];
            shell.select(state, employee.id);
            msg_info!(Message::EmployeeSelected(employee.name.clone()));
            Ok(())
        }
        Action::Search => {
            let text: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSearchName.to_string())
                .with_initial_text(state.search.clone())
                .allow_empty(true)
                .interact_text()?;
            shell.search(state, &text);
            Ok(())
        }
        Action::FilterDepartment => {
            let current = snapshot.department_index(&state.department);
            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::SelectDepartmentFilter.to_string())
                .items(&snapshot.department_choices)
                .default(current)
                .interact()?;
            shell.set_department(state, snapshot.department_at(choice));
            Ok(())
        }
        Action::ClearFilters => {
            state.clear_filters();
            Ok(())
        }
        Action::Statistics => {
            msg_print!(shell.chart_surface(), true);
            Ok(())
        }
        Action::ExportCsv => {
            let path: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptExportPath.to_string())
                .default(export::default_file_name())
                .interact_text()?;
            match shell.export_csv(Some(PathBuf::from(path.trim()))) {
                Ok((path, rows)) => msg_success!(Message::ExportCompleted(path.display().to_string(), rows)),
                Err(e) => msg_error!(Message::ExportFailed(e.to_string())),
            }
            Ok(())
        }
        Action::PrintReport => {
            let path: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptReportPath.to_string())
                .default(DEFAULT_REPORT_FILE.to_string())
                .interact_text()?;
            match shell.generate_report(Some(PathBuf::from(path.trim())), &ctx.config.report_title()) {
                Ok((path, pages)) => {
                    msg_success!(Message::ReportCreated(path.display().to_string(), pages));
                    msg_info!(Message::ReportSendingToPrinter);
                    PrintDispatcher::for_host(ctx.config.printer.as_ref()).dispatch(&path);
                }
                Err(e) => msg_error!(e),
            }
            Ok(())
        }
        Action::About => {
            msg_print!(
                Message::About(
                    APP_METADATA_NAME.to_string(),
                    APP_METADATA_VERSION.to_string(),
                    APP_METADATA_OWNER.to_string()
                ),
                true
            );
            Ok(())
        }
        Action::Exit => Ok(()),
    }
}

/// Prompts for the open form until it is submitted or abandoned.
fn run_form(shell: &Shell, state: &mut ViewState) -> Result<()> {
    while let Some(values) = state.form.values().cloned() {
        let form = prompt_form(&values)?;
        match warn_on_user_error(shell.submit(state, form))? {
            Some(outcome) => report_outcome(outcome),
            None => {
                let retry = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmRetryForm.to_string())
                    .default(true)
                    .interact()?;
                if !retry {
                    shell.cancel(state);
                    msg_info!(Message::OperationCancelled);
                }
            }
        }
    }
    Ok(())
}

fn prompt_form(initial: &EmployeeForm) -> Result<EmployeeForm> {
    let field = |prompt: Message, value: &str| -> Result<String> {
        let text: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .with_initial_text(value.to_string())
            .allow_empty(true)
            .interact_text()?;
        Ok(text)
    };

    Ok(EmployeeForm {
        name: field(Message::PromptEmployeeName, &initial.name)?,
        position: field(Message::PromptEmployeePosition, &initial.position)?,
        salary: field(Message::PromptEmployeeSalary, &initial.salary)?,
        department: field(Message::PromptEmployeeDepartment, &initial.department)?,
        phone: field(Message::PromptEmployeePhone, &initial.phone)?,
    })
}

/// Turns validation and selection errors into warnings (`Ok(None)`);
/// anything else is a real failure.
pub(crate) fn warn_on_user_error<T>(result: Result<T, ShellError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ShellError::Store(e)) => Err(e),
        Err(e) => match e.message() {
            Some(message) => {
                msg_warning!(message);
                Ok(None)
            }
            None => Err(msg_error_anyhow!(e)),
        },
    }
}

pub(crate) fn report_outcome(outcome: Outcome) {
    match outcome {
        Outcome::Created(employee) => msg_success!(Message::EmployeeCreated(employee.name)),
        Outcome::Updated { employee, changed: 0 } => {
            msg_warning!(Message::EmployeeNotFound(employee.id.unwrap_or_default()))
        }
        Outcome::Updated { employee, .. } => msg_success!(Message::EmployeeUpdated(employee.name)),
        Outcome::Deleted(employee) => msg_success!(Message::EmployeeDeleted(employee.name)),
        Outcome::Cancelled => msg_info!(Message::OperationCancelled),
    }
}

pub(crate) fn render_list(snapshot: &Snapshot, state: &ViewState) {
    msg_print!(Message::EmployeesHeader, true);
    if snapshot.employees.is_empty() {
        msg_info!(Message::NoEmployeesFound);
    } else {
        View::employees(&snapshot.employees, state.selected).printstd();
    }
    msg_print!(Message::ActiveFilters(state.search.clone(), state.department_label()));
    msg_print!(snapshot.status);
}
