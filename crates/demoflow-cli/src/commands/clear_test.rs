use super::*;
use demoflow_core::ProjectLayout;
use std::fs;
use tempfile::tempdir;

fn seeded_layout(dir: &std::path::Path) -> ProjectLayout {
    let layout = ProjectLayout::new(dir).unwrap();
    fs::create_dir_all(layout.training_seeds_dir()).unwrap();
    fs::create_dir_all(layout.validation_seeds_dir()).unwrap();
    fs::write(
        layout.training_seeds_dir().join("orders_training.csv"),
        "id\n1\n",
    )
    .unwrap();
    fs::write(
        layout.validation_seeds_dir().join("orders_validation.csv"),
        "id\n2\n",
    )
    .unwrap();
    layout
}

fn global_for(dir: &std::path::Path) -> GlobalArgs {
    GlobalArgs {
        verbose: false,
        project_dir: dir.display().to_string(),
    }
}

#[tokio::test]
async fn test_clear_validation_only() {
    let dir = tempdir().unwrap();
    let layout = seeded_layout(dir.path());

    let args = ClearArgs {
        validation: true,
        training: false,
    };
    execute(&args, &global_for(dir.path())).await.unwrap();

    assert_eq!(
        fs::read_to_string(layout.validation_seeds_dir().join("orders_validation.csv")).unwrap(),
        ""
    );
    assert_eq!(
        fs::read_to_string(layout.training_seeds_dir().join("orders_training.csv")).unwrap(),
        "id\n1\n"
    );
}

#[tokio::test]
async fn test_no_flags_is_a_noop() {
    let dir = tempdir().unwrap();
    let layout = seeded_layout(dir.path());

    let args = ClearArgs {
        validation: false,
        training: false,
    };
    execute(&args, &global_for(dir.path())).await.unwrap();

    assert_eq!(
        fs::read_to_string(layout.validation_seeds_dir().join("orders_validation.csv")).unwrap(),
        "id\n2\n"
    );
}
