//! Project path layout
//!
//! All paths the demo touches hang off a single repository root: the
//! `jaffle_shop_online` dbt project with its training/validation seed
//! directories, and the separate injection dbt project used to plant
//! synthetic test results at the end of a demo.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Directory name of the demo dbt project under the repository root
pub const DBT_PROJECT_DIR_NAME: &str = "jaffle_shop_online";

/// Injection dbt project, relative to the repository root
pub const INJECTION_PROJECT_RELATIVE_PATH: &str = "data_injection/dbt_project";

/// Resolved paths for a demo repository
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    /// Repository root containing the dbt project
    root: PathBuf,
}

impl ProjectLayout {
    /// Create a layout rooted at `root`.
    ///
    /// Fails when the root does not exist, so that a mistyped
    /// `--project-dir` surfaces before any tool invocation.
    pub fn new(root: impl Into<PathBuf>) -> CoreResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(CoreError::ProjectNotFound {
                path: root.display().to_string(),
            });
        }
        Ok(Self { root })
    }

    /// Repository root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of the demo dbt project
    pub fn dbt_project_dir(&self) -> PathBuf {
        self.root.join(DBT_PROJECT_DIR_NAME)
    }

    /// Directory of the injection dbt project
    pub fn injection_project_dir(&self) -> PathBuf {
        self.root.join(INJECTION_PROJECT_RELATIVE_PATH)
    }

    /// Seed directory holding the incremental training CSVs
    pub fn training_seeds_dir(&self) -> PathBuf {
        self.dbt_project_dir().join("seeds").join("training")
    }

    /// Seed directory holding the incremental validation CSVs
    pub fn validation_seeds_dir(&self) -> PathBuf {
        self.dbt_project_dir().join("seeds").join("validation")
    }
}

/// Default dbt profiles directory: `$HOME/.dbt`
pub fn default_profiles_dir() -> CoreResult<PathBuf> {
    match std::env::var("HOME") {
        Ok(home) => Ok(PathBuf::from(home).join(".dbt")),
        Err(_) => Err(CoreError::HomeNotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_layout_paths() {
        let dir = tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path()).unwrap();

        assert_eq!(
            layout.dbt_project_dir(),
            dir.path().join("jaffle_shop_online")
        );
        assert_eq!(
            layout.injection_project_dir(),
            dir.path().join("data_injection/dbt_project")
        );
        assert_eq!(
            layout.training_seeds_dir(),
            dir.path().join("jaffle_shop_online/seeds/training")
        );
        assert_eq!(
            layout.validation_seeds_dir(),
            dir.path().join("jaffle_shop_online/seeds/validation")
        );
    }

    #[test]
    fn test_layout_missing_root() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        let result = ProjectLayout::new(&missing);
        assert!(matches!(result, Err(CoreError::ProjectNotFound { .. })));
    }
}
