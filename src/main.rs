use furnace_report::commands::Cli;
use furnace_report::libs::{logging, messages::macros::is_debug_mode};
use furnace_report::msg_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    if is_debug_mode() {
        logging::init();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(e);
            ExitCode::FAILURE
        }
    }
}
