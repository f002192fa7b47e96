//! Seed-file clearing
//!
//! Seed CSVs are cleared (truncated to zero bytes) rather than deleted:
//! the generators repopulate the same files on the next cycle, and dbt
//! never sees a half-written directory. Clearing one tier must leave the
//! other untouched.

use std::fs;
use std::path::Path;

use glob::glob;

use crate::error::{CoreError, CoreResult};
use crate::layout::ProjectLayout;

/// Truncate a CSV file to zero bytes, keeping the file on disk
pub fn clear_csv(path: &Path) -> CoreResult<()> {
    fs::write(path, "").map_err(|e| CoreError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })
}

/// Clear every CSV in the selected seed tiers.
///
/// Missing directories are skipped silently; a tier that was never
/// generated simply has nothing to clear.
pub fn clear_data(layout: &ProjectLayout, validation: bool, training: bool) -> CoreResult<()> {
    if validation {
        clear_dir(&layout.validation_seeds_dir())?;
    }
    if training {
        clear_dir(&layout.training_seeds_dir())?;
    }
    Ok(())
}

fn clear_dir(dir: &Path) -> CoreResult<()> {
    if !dir.is_dir() {
        log::debug!("Seed directory {} does not exist, nothing to clear", dir.display());
        return Ok(());
    }

    let pattern = format!("{}/*.csv", dir.display());
    for entry in glob(&pattern)? {
        match entry {
            Ok(path) => {
                log::debug!("Clearing seed file {}", path.display());
                clear_csv(&path)?;
            }
            Err(e) => {
                log::warn!("Skipping unreadable seed file: {e}");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "seeds_test.rs"]
mod tests;
