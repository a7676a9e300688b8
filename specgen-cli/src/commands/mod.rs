use crate::cli::Commands;
use anyhow::Result;

pub mod generate;

/// Dispatch command to appropriate handler
pub fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Generate => generate::execute(),
    }
}
