use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and the test database
fn studio_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("studio").expect("Failed to find studio binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path.to_str().unwrap());
    cmd
}

fn create_lumen(temp_dir: &TempDir) {
    studio_cmd(temp_dir)
        .args(["studio", "create", "lumen", "Lumen Photography"])
        .assert()
        .success();
}

fn add_stages(temp_dir: &TempDir, names: &[&str]) {
    for name in names {
        studio_cmd(temp_dir)
            .args(["item", "add-stage", "lumen", name])
            .assert()
            .success();
    }
}

#[test]
fn test_cli_create_studio() {
    let temp_dir = create_cli_test_environment();

    studio_cmd(&temp_dir)
        .args(["studio", "create", "lumen", "Lumen Photography"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created studio 'lumen'"))
        .stdout(predicate::str::contains("# Lumen Photography (lumen)"));
}

#[test]
fn test_cli_create_studio_invalid_slug() {
    let temp_dir = create_cli_test_environment();

    studio_cmd(&temp_dir)
        .args(["studio", "create", "Not A Slug", "Lumen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("slug"));
}

#[test]
fn test_cli_list_without_command_shows_studios() {
    let temp_dir = create_cli_test_environment();

    studio_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No studios found."));

    create_lumen(&temp_dir);

    studio_cmd(&temp_dir)
        .args(["s", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **lumen**: Lumen Photography"));
}

#[test]
fn test_cli_add_items_of_each_kind() {
    let temp_dir = create_cli_test_environment();
    create_lumen(&temp_dir);

    studio_cmd(&temp_dir)
        .args(["item", "add-stage", "lumen", "Lead", "--color", "amber"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added pipeline_stage with ID: ps_1"))
        .stdout(predicate::str::contains("- **Color**: amber"));

    studio_cmd(&temp_dir)
        .args(["item", "add-phone", "lumen", "555-0100", "--label", "Front desk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 555-0100"));

    studio_cmd(&temp_dir)
        .args([
            "item",
            "add-condition",
            "lumen",
            "Early booking",
            "--discount",
            "10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Discount**: 10%"));

    studio_cmd(&temp_dir)
        .args([
            "item",
            "add-link",
            "lumen",
            "Instagram",
            "https://instagram.com/lumen",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://instagram.com/lumen"));

    studio_cmd(&temp_dir)
        .args(["studio", "show", "lumen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Pipeline stages"))
        .stdout(predicate::str::contains("## Social links"))
        .stdout(predicate::str::contains("Early booking"));
}

#[test]
fn test_cli_rejects_out_of_range_discount() {
    let temp_dir = create_cli_test_environment();
    create_lumen(&temp_dir);

    studio_cmd(&temp_dir)
        .args(["item", "add-condition", "lumen", "Free", "--discount", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("discount"));
}

#[test]
fn test_cli_move_item() {
    let temp_dir = create_cli_test_environment();
    create_lumen(&temp_dir);
    add_stages(&temp_dir, &["A", "B", "C", "D"]);

    studio_cmd(&temp_dir)
        .args(["item", "move", "lumen", "stage", "ps_1", "ps_3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved new order for 4 items."))
        .stdout(predicate::str::contains(
            "1. B (ps_2)\n2. C (ps_3)\n3. A (ps_1)\n4. D (ps_4)",
        ));

    studio_cmd(&temp_dir)
        .args(["item", "list", "lumen", "stages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 3. A (ps_1)"));
}

#[test]
fn test_cli_step_up_and_boundary() {
    let temp_dir = create_cli_test_environment();
    create_lumen(&temp_dir);
    add_stages(&temp_dir, &["A", "B", "C"]);

    studio_cmd(&temp_dir)
        .args(["item", "up", "lumen", "stage", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. B (ps_2)\n2. A (ps_1)\n3. C (ps_3)"));

    studio_cmd(&temp_dir)
        .args(["item", "down", "lumen", "stage", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Order unchanged."));

    studio_cmd(&temp_dir)
        .args(["item", "up", "lumen", "stage", "0"])
        .assert()
        .failure();
}

#[test]
fn test_cli_remove_recompacts() {
    let temp_dir = create_cli_test_environment();
    create_lumen(&temp_dir);
    add_stages(&temp_dir, &["A", "B", "C"]);

    studio_cmd(&temp_dir)
        .args(["item", "remove", "lumen", "stage", "ps_2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 'B' (ID: ps_2)"));

    studio_cmd(&temp_dir)
        .args(["item", "list", "lumen", "stage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. A (ps_1)"))
        .stdout(predicate::str::contains("### 2. C (ps_3)"));

    studio_cmd(&temp_dir)
        .args(["item", "remove", "lumen", "stage", "ps_2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in this list"));
}

#[test]
fn test_cli_update_item() {
    let temp_dir = create_cli_test_environment();
    create_lumen(&temp_dir);
    add_stages(&temp_dir, &["Lead"]);

    studio_cmd(&temp_dir)
        .args(["item", "update", "lumen", "stage", "ps_1", "--name", "Inquiry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name set to 'Inquiry'"))
        .stdout(predicate::str::contains("### 1. Inquiry (ps_1)"));

    studio_cmd(&temp_dir)
        .args(["item", "update", "lumen", "stage", "ps_1", "--url", "https://x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url does not apply"));
}

#[test]
fn test_cli_unknown_studio() {
    let temp_dir = create_cli_test_environment();

    studio_cmd(&temp_dir)
        .args(["item", "list", "ghost", "phone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Studio 'ghost' not found"));
}

#[test]
fn test_cli_delete_studio() {
    let temp_dir = create_cli_test_environment();
    create_lumen(&temp_dir);
    add_stages(&temp_dir, &["A"]);

    studio_cmd(&temp_dir)
        .args(["studio", "delete", "lumen"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted studio 'Lumen Photography' (lumen)",
        ));

    studio_cmd(&temp_dir)
        .args(["studio", "show", "lumen"])
        .assert()
        .failure();
}

#[test]
fn test_cli_rejects_zero_retry_attempts() {
    let temp_dir = create_cli_test_environment();

    studio_cmd(&temp_dir)
        .args(["--retry-attempts", "0", "studio", "list"])
        .assert()
        .failure();
}
