//! Clear command - empty generated seed files

use anyhow::Result;
use demoflow_core::clear_data;

use crate::cli::{ClearArgs, GlobalArgs};
use crate::commands::common::load_layout;

/// Execute the clear command
pub async fn execute(args: &ClearArgs, global: &GlobalArgs) -> Result<()> {
    let layout = load_layout(global)?;

    if !args.validation && !args.training {
        log::info!("Nothing to clear: pass --validation and/or --training");
        return Ok(());
    }

    clear_data(&layout, args.validation, args.training)?;

    if args.validation {
        println!("Cleared validation seeds");
    }
    if args.training {
        println!("Cleared training seeds");
    }
    Ok(())
}

#[cfg(test)]
#[path = "clear_test.rs"]
mod tests;
