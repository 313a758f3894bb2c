pub mod form;
pub mod generate;
pub mod init;
pub mod norms;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure site, furnace norms and output directory")]
    Init(init::InitArgs),
    #[command(about = "Generate a report from command-line values")]
    Generate(generate::GenerateArgs),
    #[command(about = "Fill in the report form interactively")]
    Form(form::FormArgs),
    #[command(about = "Show furnace norms")]
    Norms,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Generate(args) => generate::cmd(args),
            Commands::Form(args) => form::cmd(args),
            Commands::Norms => norms::cmd(),
        }
    }
}
