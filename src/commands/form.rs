//! Interactive report form.
//!
//! Walks the operator through the same fields as the paper form: date,
//! furnace, both programs' start and stop times and notifications. Times are
//! validated strictly as they are typed; an invalid value is rejected and
//! asked for again rather than corrected.

use super::generate::{emit, OutputArgs};
use crate::libs::{
    config::Config,
    generator::{RawReportFields, ReportGenerator},
    messages::Message,
    time::TimeOfDay,
};
use crate::msg_print;
use anyhow::Result;
use chrono::Local;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Command-line arguments for the form command.
#[derive(Debug, Args)]
pub struct FormArgs {
    #[command(flatten)]
    output: OutputArgs,
}

pub fn cmd(args: FormArgs) -> Result<()> {
    let config = Config::read()?;
    let generator = ReportGenerator::from_config(&config);

    msg_print!(Message::FormHeader, true);

    let date: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDate.to_string())
        .default(Local::now().format("%d.%m.%Y").to_string())
        .interact_text()?;

    let furnaces = generator.norms().furnaces();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptFurnace.to_string())
        .items(&furnaces)
        .default(0)
        .interact()?;
    let furnace = furnaces[selection].to_string();

    msg_print!(Message::FormProgramHeader(1));
    let prog1_start = prompt_time(Message::PromptProgramStart)?;
    let prog1_end = prompt_time(Message::PromptProgramEnd)?;

    msg_print!(Message::FormProgramHeader(2));
    let prog2_start = prompt_time(Message::PromptProgramStart)?;
    let prog2_end = prompt_time(Message::PromptProgramEnd)?;

    let notifications: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptNotifications.to_string())
        .allow_empty(true)
        .interact_text()?;

    let raw = RawReportFields {
        date,
        furnace,
        prog1_start,
        prog1_end,
        prog2_start,
        prog2_end,
        notifications,
    };

    emit(&config, &generator, &raw, &args.output)
}

fn prompt_time(prompt: Message) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .validate_with(|value: &String| TimeOfDay::parse(value).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?)
}
