use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn recipe_cmd(db: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_recipe-box"));
    cmd.env("RECIPE_BOX_DB", db)
        .env_remove("RECIPE_BOX_ENV")
        .env_remove("RUST_LOG");
    cmd
}

fn run(db: &Path, args: &[&str]) -> Output {
    recipe_cmd(db).args(args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_init_creates_database_and_seeds() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("data").join("recipes.db");

    let output = run(&db, &["init"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(db.exists());
    assert!(stdout(&output).contains("3 recipes"));

    let output = run(&db, &["list"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Lemon Garlic Pasta"));
    assert!(out.contains("Quick, Vegetarian"));
    assert!(out.contains("Berry Yogurt Parfait"));
}

#[test]
fn test_init_twice_does_not_duplicate_seed() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("recipes.db");

    run(&db, &["init"]);
    let output = run(&db, &["init"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("3 recipes"));
}

#[test]
fn test_init_fails_when_database_path_is_blocked() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();
    let db = blocker.join("recipes.db");

    let output = run(&db, &["init"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Storage error"));
}

#[test]
fn test_list_empty_database() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("recipes.db");

    let output = run(&db, &["list"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No recipes found."));
}

#[test]
fn test_add_list_delete_workflow() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("recipes.db");

    let output = run(
        &db,
        &[
            "add",
            "--title",
            "  Pancakes ",
            "--author",
            "Lee",
            "--description",
            "Fluffy.",
            "--servings",
            "-1",
            "--tags",
            "a, b ,,c",
        ],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Created recipe 1 - Pancakes"));

    let output = run(&db, &["list", "--json"]);
    assert!(output.status.success());
    let recipes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(recipes[0]["title"], "Pancakes");
    assert_eq!(recipes[0]["servings"], "N/A");
    assert_eq!(recipes[0]["prepTime"], "N/A");
    assert_eq!(recipes[0]["tags"], serde_json::json!(["a", "b", "c"]));

    let output = run(&db, &["delete", "1"]);
    assert!(output.status.success());

    // Deleting again is not an error
    let output = run(&db, &["delete", "1"]);
    assert!(output.status.success());

    let output = run(&db, &["list"]);
    assert!(stdout(&output).contains("No recipes found."));
}

#[test]
fn test_add_blank_title_fails() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("recipes.db");

    let output = run(
        &db,
        &["add", "--title", "   ", "--author", "Lee", "--description", "x"],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Title is required"));
}

#[test]
fn test_delete_invalid_id_fails() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("recipes.db");

    for bad in ["0", "abc", "2.5"] {
        let output = run(&db, &["delete", bad]);
        assert!(!output.status.success());
        assert!(stderr(&output).contains("Invalid recipe id"));
    }
}

#[test]
fn test_clear_then_reinit_reseeds() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("recipes.db");

    run(&db, &["init"]);

    let output = run(&db, &["clear", "--yes"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("3 removed"));

    let output = run(&db, &["list"]);
    assert!(stdout(&output).contains("No recipes found."));

    let output = run(&db, &["init"]);
    assert!(stdout(&output).contains("3 recipes"));
}

#[test]
fn test_clear_refused_in_production() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("recipes.db");
    run(&db, &["init"]);

    let output = recipe_cmd(&db)
        .env("RECIPE_BOX_ENV", "production")
        .args(["clear", "--yes"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Refusing to clear recipes in production"));

    let output = run(&db, &["list"]);
    assert!(stdout(&output).contains("Lemon Garlic Pasta"));

    let output = recipe_cmd(&db)
        .env("RECIPE_BOX_ENV", "production")
        .args(["clear", "--yes", "--force"])
        .output()
        .unwrap();
    assert!(output.status.success());
}

#[test]
fn test_clear_without_yes_in_non_interactive_mode_fails() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("recipes.db");
    run(&db, &["init"]);

    let output = recipe_cmd(&db)
        .args(["clear"])
        .stdin(std::process::Stdio::null())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--yes"));

    let output = run(&db, &["list"]);
    assert!(stdout(&output).contains("Spiced Chickpea Bowl"));
}
