//! Display the active furnace norms.

use crate::libs::{config::Config, messages::Message, view::View};
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;

    msg_print!(Message::NormsTitle, true);
    View::norms(&config.norms_table());

    Ok(())
}
