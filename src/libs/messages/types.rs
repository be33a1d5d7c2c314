#[derive(Debug, Clone)]
pub enum Message {
    // === EMPLOYEE MESSAGES ===
    EmployeeCreated(String, String), // name, id
    EmployeeUpdated(String),         // name
    EmployeeDeactivated(String),     // name
    EmployeeAlreadyInactive(String), // name
    EmployeeNotFound(String),        // id
    EmployeesHeader,
    NoEmployeesFound,
    ConfirmDeactivateEmployee(String), // name

    // === SHIFT MESSAGES ===
    ShiftCreated(String), // id
    ShiftUpdated(String), // id
    ShiftDeleted(String), // id
    ShiftNotFound(String),
    ShiftsHeader,
    NoShiftsFound,
    ConfirmDeleteShift(String),      // id
    ShiftEmployeeUnknown(String),    // employee id
    ShiftEmployeeInactive(String),   // name
    BreakHoursNegative,
    BreakExceedsShift(f64, f64), // break hours, gross hours

    // === DASHBOARD MESSAGES ===
    DashboardHeader(String), // name
    StatsHeader,
    RecentShiftsHeader,
    NoRecentShifts,
    UnknownEmployee,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigParseError(String), // error
    ConfigModuleStorage,
    ConfigModuleDashboard,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path

    // === RESET MESSAGES ===
    ConfirmReset,
    DataCleared,

    // === PROMPTS ===
    PromptSelectModules,
    PromptDbFile,
    PromptRecentShifts,

    // === GENERAL MESSAGES ===
    NoChangesDetected,
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,
}
