use super::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn layout_with_seeds(dir: &Path) -> ProjectLayout {
    let layout = ProjectLayout::new(dir).unwrap();
    fs::create_dir_all(layout.training_seeds_dir()).unwrap();
    fs::create_dir_all(layout.validation_seeds_dir()).unwrap();

    fs::write(
        layout.training_seeds_dir().join("orders_training.csv"),
        "id,amount\n1,10\n",
    )
    .unwrap();
    fs::write(
        layout.validation_seeds_dir().join("orders_validation.csv"),
        "id,amount\n2,20\n",
    )
    .unwrap();
    layout
}

#[test]
fn test_clear_csv_truncates_but_keeps_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, "id\n1\n2\n").unwrap();

    clear_csv(&path).unwrap();

    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_clear_validation_leaves_training() {
    let dir = tempdir().unwrap();
    let layout = layout_with_seeds(dir.path());

    clear_data(&layout, true, false).unwrap();

    let validation = layout.validation_seeds_dir().join("orders_validation.csv");
    let training = layout.training_seeds_dir().join("orders_training.csv");
    assert_eq!(fs::read_to_string(validation).unwrap(), "");
    assert_eq!(fs::read_to_string(training).unwrap(), "id,amount\n1,10\n");
}

#[test]
fn test_clear_training_leaves_validation() {
    let dir = tempdir().unwrap();
    let layout = layout_with_seeds(dir.path());

    clear_data(&layout, false, true).unwrap();

    let validation = layout.validation_seeds_dir().join("orders_validation.csv");
    let training = layout.training_seeds_dir().join("orders_training.csv");
    assert_eq!(fs::read_to_string(validation).unwrap(), "id,amount\n2,20\n");
    assert_eq!(fs::read_to_string(training).unwrap(), "");
}

#[test]
fn test_clear_both_tiers() {
    let dir = tempdir().unwrap();
    let layout = layout_with_seeds(dir.path());

    clear_data(&layout, true, true).unwrap();

    assert_eq!(
        fs::read_to_string(layout.validation_seeds_dir().join("orders_validation.csv")).unwrap(),
        ""
    );
    assert_eq!(
        fs::read_to_string(layout.training_seeds_dir().join("orders_training.csv")).unwrap(),
        ""
    );
}

#[test]
fn test_clear_ignores_non_csv_files() {
    let dir = tempdir().unwrap();
    let layout = layout_with_seeds(dir.path());
    let readme = layout.validation_seeds_dir().join("README.md");
    fs::write(&readme, "notes\n").unwrap();

    clear_data(&layout, true, false).unwrap();

    assert_eq!(fs::read_to_string(&readme).unwrap(), "notes\n");
}

#[test]
fn test_clear_handles_missing_directories() {
    let dir = tempdir().unwrap();
    let layout = ProjectLayout::new(dir.path()).unwrap();

    // Neither seed directory exists yet
    clear_data(&layout, true, true).unwrap();
}
