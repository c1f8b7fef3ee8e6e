use assert_cmd::Command;
use finexp::{SqliteStore, Table, DEFAULT_CATEGORIES, SAMPLE_BUDGETS, SAMPLE_TRANSACTIONS};
use predicates::str::contains;
use std::path::Path;
use tempfile::TempDir;

fn seed_cmd(db_path: &Path, cost: &str) -> Command {
    let mut cmd = Command::cargo_bin("finexp-seed").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("FINEXP_DEMO_EMAIL")
        .env_remove("FINEXP_DEMO_NAME")
        .env_remove("FINEXP_DEMO_PASSWORD")
        .env("FINEXP_DATABASE_PATH", db_path)
        .env("FINEXP_BCRYPT_COST", cost);
    cmd
}

#[test]
fn seeding_twice_succeeds_and_duplicates_only_samples() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("finexp.db");

    seed_cmd(&db_path, "4").assert().success();
    seed_cmd(&db_path, "4")
        .assert()
        .success()
        .stderr(contains("demo@finexp.com"));

    let store = SqliteStore::open(&db_path).unwrap();
    assert_eq!(store.count(Table::Users).unwrap(), 1);
    assert_eq!(store.count(Table::Categories).unwrap(), DEFAULT_CATEGORIES.len() as i64);
    assert_eq!(store.count(Table::Transactions).unwrap(), 2 * SAMPLE_TRANSACTIONS.len() as i64);
    assert_eq!(store.count(Table::Budgets).unwrap(), 2 * SAMPLE_BUDGETS.len() as i64);
}

#[test]
fn invalid_cost_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("finexp.db");

    seed_cmd(&db_path, "99")
        .assert()
        .code(1)
        .stderr(contains("Seed failed"))
        .stderr(contains("FINEXP_BCRYPT_COST"));

    assert!(!db_path.exists());
}

#[test]
fn unopenable_database_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("missing").join("dir").join("finexp.db");

    seed_cmd(&db_path, "4")
        .assert()
        .code(1)
        .stderr(contains("Seed failed"))
        .stderr(contains("opening"));
}
