#[derive(Debug, Clone)]
pub enum Message {
    // === EMPLOYEE MESSAGES ===
    EmployeeCreated(String),
    EmployeeUpdated(String),
    EmployeeDeleted(String),
    EmployeeNotFound(i64),
    EmployeeNameRequired,
    EmployeesHeader,
    EmployeesStatus(usize),
    NoEmployeesFound,
    NoEmployeeSelected,
    EmployeeSelected(String),
    EditingEmployee(String),
    AddingEmployee,
    ConfirmDeleteEmployee(String),
    ConfirmRetryForm,
    PromptEmployeeName,
    PromptEmployeePosition,
    PromptEmployeeSalary,
    PromptEmployeeDepartment,
    PromptEmployeePhone,
    SelectEmployee,

    // === FILTER MESSAGES ===
    AllDepartments,
    ActiveFilters(String, String), // search, department
    PromptSearchName,
    SelectDepartmentFilter,
    DepartmentsHeader,
    NoDepartmentsFound,

    // === SHELL MESSAGES ===
    SelectAction,
    ActionAdd,
    ActionEdit,
    ActionDelete,
    ActionRefresh,
    ActionSelect,
    ActionSearch,
    ActionFilterDepartment,
    ActionClearFilters,
    ActionStatistics,
    ActionExportCsv,
    ActionPrintReport,
    ActionAbout,
    ActionExit,
    About(String, String, String), // name, version, owner
    Goodbye,
    ConfirmRetryRefresh,

    // === CHART MESSAGES ===
    ChartTitle,
    ChartNoData,

    // === EXPORT MESSAGES ===
    PromptExportPath,
    ExportCompleted(String, usize), // path, rows
    ExportFailed(String),

    // === REPORT MESSAGES ===
    PromptReportPath,
    ReportTitle,
    ReportTitleContinued(String),
    ReportCreated(String, usize), // path, pages
    ReportWriteFailed(String),
    ReportSendingToPrinter,

    // === PRINT MESSAGES ===
    PrintSending(String, String), // path, backend
    PrintSent(String),
    PrintFailed(String),
    PrintFileMissing(String),
    PrintUnsupportedOs(String),
    PrintCommandFailed(String, String), // program, stderr

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleDatabase,
    ConfigModulePrinter,
    ConfigModuleReport,
    SelectConfigModules,
    PromptDatabasePath,
    PromptPrinterCommand,
    PromptPrinterArgs,
    PromptReportTitle,

    // === DATABASE MESSAGES ===
    DatabaseOpened(String),

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
