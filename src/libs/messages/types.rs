#[derive(Debug, Clone)]
pub enum Message {
    // === REPORT MESSAGES ===
    ReportSaved(String),                 // path
    ReportGenerationFailed(String),      // error
    ReportMetricsHeader(String, String), // furnace, date
    ReportMetricsLegend,

    // === FORM MESSAGES ===
    FormHeader,
    FormProgramHeader(u8), // program number

    // === NORMS MESSAGES ===
    NormsTitle,
    NormMustBePositive,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigNormsEmpty,
    ConfigModuleSite,
    ConfigModuleNorms,
    ConfigModuleOutput,
    ConfigFurnaceHeader(String), // furnace name

    // === PROMPTS ===
    PromptDate,
    PromptFurnace,
    PromptProgramStart,
    PromptProgramEnd,
    PromptNotifications,
    PromptSelectModules,
    PromptWorkshop,
    PromptResponsible,
    PromptOutputDirectory,
    PromptAddFurnace,
    PromptFurnaceName,
    PromptNormCycle1,
    PromptNormCycle2,
    PromptNormBreak,
    PromptNormTotal,
}
