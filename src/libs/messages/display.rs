//! Display implementation for furnace-report messages.
//!
//! All user-facing text lives here so wording stays consistent between the
//! CLI commands, the interactive form and the configuration wizard.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === REPORT MESSAGES ===
            Message::ReportSaved(path) => format!("Report successfully generated: {}", path),
            Message::ReportGenerationFailed(error) => format!("Failed to generate report:\n{}", error),
            Message::ReportMetricsHeader(furnace, date) => format!("{} for {}", furnace, date),
            Message::ReportMetricsLegend => "🔺 above norm  🔻 below norm  ❎ on norm".to_string(),

            // === FORM MESSAGES ===
            Message::FormHeader => "Heat treatment shift report".to_string(),
            Message::FormProgramHeader(number) => format!("Program {}", number),

            // === NORMS MESSAGES ===
            Message::NormsTitle => "Furnace norms (HH:MM)".to_string(),
            Message::NormMustBePositive => "Norm must be a positive number of minutes".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNotFound => "No configuration file found, nothing to delete".to_string(),
            Message::ConfigNormsEmpty => "Configured norms table is empty, using built-in norms".to_string(),
            Message::ConfigModuleSite => "Site settings".to_string(),
            Message::ConfigModuleNorms => "Furnace norms, in minutes".to_string(),
            Message::ConfigModuleOutput => "Output settings".to_string(),
            Message::ConfigFurnaceHeader(name) => format!("Norms for {}", name),

            // === PROMPTS ===
            Message::PromptDate => "Date (dd.mm.yyyy)".to_string(),
            Message::PromptFurnace => "Furnace".to_string(),
            Message::PromptProgramStart => "Start time (HH:MM)".to_string(),
            Message::PromptProgramEnd => "Stop time (HH:MM)".to_string(),
            Message::PromptNotifications => "Notifications (leave empty if none)".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptWorkshop => "Workshop".to_string(),
            Message::PromptResponsible => "Responsible person".to_string(),
            Message::PromptOutputDirectory => "Report output directory".to_string(),
            Message::PromptAddFurnace => "Add another furnace?".to_string(),
            Message::PromptFurnaceName => "Furnace name".to_string(),
            Message::PromptNormCycle1 => "Cycle 1 norm (minutes)".to_string(),
            Message::PromptNormCycle2 => "Cycle 2 norm (minutes)".to_string(),
            Message::PromptNormBreak => "Break norm (minutes)".to_string(),
            Message::PromptNormTotal => "Total norm (minutes)".to_string(),
        };
        write!(f, "{}", text)
    }
}
