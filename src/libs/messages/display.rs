//! Display implementation for roster application messages.
//!
//! Every user-facing string lives here, so the rest of the application only
//! ever deals with typed [`Message`] variants.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === EMPLOYEE MESSAGES ===
            Message::EmployeeCreated(name) => format!("Employee '{}' added successfully.", name),
            Message::EmployeeUpdated(name) => format!("Employee '{}' updated successfully.", name),
            Message::EmployeeDeleted(name) => format!("Employee '{}' deleted successfully.", name),
            Message::EmployeeNotFound(id) => format!("Employee with ID {} not found.", id),
            Message::EmployeeNameRequired => "Employee name is required!".to_string(),
            Message::EmployeesHeader => "Employees".to_string(),
            Message::EmployeesStatus(count) => format!("Employees: {}", count),
            Message::NoEmployeesFound => "No employees found.".to_string(),
            Message::NoEmployeeSelected => "Please select an employee from the list.".to_string(),
            Message::EmployeeSelected(name) => format!("Selected: {}", name),
            Message::EditingEmployee(name) => format!("Editing employee: {}", name),
            Message::AddingEmployee => "New employee".to_string(),
            Message::ConfirmDeleteEmployee(name) => format!("Are you sure you want to delete employee '{}'?", name),
            Message::ConfirmRetryForm => "Fix the form and try again?".to_string(),
            Message::PromptEmployeeName => "Name".to_string(),
            Message::PromptEmployeePosition => "Position".to_string(),
            Message::PromptEmployeeSalary => "Salary".to_string(),
            Message::PromptEmployeeDepartment => "Department".to_string(),
            Message::PromptEmployeePhone => "Phone".to_string(),
            Message::SelectEmployee => "Select employee".to_string(),

            // === FILTER MESSAGES ===
            Message::AllDepartments => "All".to_string(),
            Message::ActiveFilters(search, department) => {
                let search = if search.is_empty() { "-" } else { search.as_str() };
                format!("Search: {} | Department: {}", search, department)
            }
            Message::PromptSearchName => "Search by name (leave empty for all)".to_string(),
            Message::SelectDepartmentFilter => "Filter by department".to_string(),
            Message::DepartmentsHeader => "Departments:".to_string(),
            Message::NoDepartmentsFound => "No departments in use.".to_string(),

            // === SHELL MESSAGES ===
            Message::SelectAction => "Select action".to_string(),
            Message::ActionAdd => "Add employee".to_string(),
            Message::ActionEdit => "Edit employee".to_string(),
            Message::ActionDelete => "Delete employee".to_string(),
            Message::ActionRefresh => "Refresh".to_string(),
            Message::ActionSelect => "Select employee".to_string(),
            Message::ActionSearch => "Search by name".to_string(),
            Message::ActionFilterDepartment => "Filter by department".to_string(),
            Message::ActionClearFilters => "Clear filters".to_string(),
            Message::ActionStatistics => "Statistics".to_string(),
            Message::ActionExportCsv => "Export to CSV".to_string(),
            Message::ActionPrintReport => "Print employee list (PDF)".to_string(),
            Message::ActionAbout => "About".to_string(),
            Message::ActionExit => "Exit".to_string(),
            Message::About(name, version, owner) => format!("{} v{} by {}\nEmployee records keeper", name, version, owner),
            Message::Goodbye => "Bye!".to_string(),
            Message::ConfirmRetryRefresh => "Could not load employees. Try again?".to_string(),

            // === CHART MESSAGES ===
            Message::ChartTitle => "Employees by department".to_string(),
            Message::ChartNoData => "No data to display statistics".to_string(),

            // === EXPORT MESSAGES ===
            Message::PromptExportPath => "Export file path".to_string(),
            Message::ExportCompleted(path, rows) => format!("Exported {} employee(s) to {}", rows, path),
            Message::ExportFailed(error) => format!("Export failed: {}", error),

            // === REPORT MESSAGES ===
            Message::PromptReportPath => "Report file path".to_string(),
            Message::ReportTitle => "Employee List".to_string(),
            Message::ReportTitleContinued(title) => format!("{} (continued)", title),
            Message::ReportCreated(path, pages) => format!("PDF file created: {} ({} page(s))", path, pages),
            Message::ReportWriteFailed(error) => format!("Failed to write PDF report: {}", error),
            Message::ReportSendingToPrinter => "Sending the report to the printer...".to_string(),

            // === PRINT MESSAGES ===
            Message::PrintSending(path, backend) => format!("Printing {} via {}", path, backend),
            Message::PrintSent(path) => format!("{} sent to the default printer", path),
            Message::PrintFailed(error) => format!("Printing failed: {}", error),
            Message::PrintFileMissing(path) => format!("File to print does not exist: {}", path),
            Message::PrintUnsupportedOs(os) => format!("Direct printing is not supported on {}", os),
            Message::PrintCommandFailed(program, stderr) => {
                if stderr.is_empty() {
                    format!("'{}' exited with an error", program)
                } else {
                    format!("'{}' exited with an error: {}", program, stderr)
                }
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),
            Message::ConfigModulePrinter => "Printer settings".to_string(),
            Message::ConfigModuleReport => "Report settings".to_string(),
            Message::SelectConfigModules => "Select nodes to configure".to_string(),
            Message::PromptDatabasePath => "Database file path".to_string(),
            Message::PromptPrinterCommand => "Print command (empty for the system default)".to_string(),
            Message::PromptPrinterArgs => "Print command arguments (space separated)".to_string(),
            Message::PromptReportTitle => "Report title".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Using database {}", path),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        assert_eq!(Message::EmployeesStatus(3).to_string(), "Employees: 3");
    }

    #[test]
    fn test_active_filters_placeholder() {
        let text = Message::ActiveFilters(String::new(), "All".to_string()).to_string();
        assert_eq!(text, "Search: - | Department: All");
    }

    #[test]
    fn test_print_command_failed_without_stderr() {
        let text = Message::PrintCommandFailed("lp".to_string(), String::new()).to_string();
        assert_eq!(text, "'lp' exited with an error");
    }
}
