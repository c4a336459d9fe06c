use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory and config home for one test.
struct TestEnv {
    tmp: TempDir,
    work: PathBuf,
    config_home: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let work = tmp.path().join("work");
        let config_home = tmp.path().join("config");
        fs::create_dir_all(&work).expect("create work dir");
        fs::create_dir_all(&config_home).expect("create config dir");
        Self {
            tmp,
            work,
            config_home,
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("wcag-tally").expect("binary built");
        cmd.current_dir(&self.work)
            .env("HOME", self.tmp.path())
            .env("XDG_CONFIG_HOME", &self.config_home)
            .env_remove("RUST_LOG");
        cmd
    }

    fn run(&self, args: &[&str]) -> String {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 stdout")
    }

    fn store(&self) -> PathBuf {
        self.work.join("issues.json")
    }

    fn write_config(&self, body: &str) {
        let dir = self.config_home.join("wcag-tally");
        fs::create_dir_all(&dir).expect("create app config dir");
        fs::write(dir.join("config.toml"), body).expect("write config");
    }
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).expect("store exists")).expect("valid json")
}

#[test]
fn add_twice_reports_full_share() {
    let env = TestEnv::new();
    env.cmd()
        .args(["add", "1.4.3"])
        .assert()
        .success()
        .stdout("Issue 1.4.3 (Contrast (Minimum)) added.\n");
    env.run(&["add", "1.4.3"]);

    env.cmd()
        .arg("report")
        .assert()
        .success()
        .stdout(contains("total number of issues is 2"))
        .stdout(contains("1.4.3      2          (Contrast (Minimum)) (100.00%)"));

    assert_eq!(
        read_json(&env.store()),
        serde_json::json!({"1.4.3": 2, "last": "1.4.3"})
    );
}

#[test]
fn invalid_add_leaves_no_store() {
    let env = TestEnv::new();
    env.cmd()
        .args(["add", "9.9.9"])
        .assert()
        .success()
        .stdout("Error: Criteria 9.9.9 not valid.\n");
    assert!(!env.store().exists());

    env.cmd()
        .arg("report")
        .assert()
        .success()
        .stdout("No issues found.\n");
}

#[test]
fn oops_is_single_step() {
    let env = TestEnv::new();
    env.run(&["add", "1.1.1"]);
    env.run(&["add", "2.1.1"]);

    env.cmd()
        .arg("oops")
        .assert()
        .success()
        .stdout("Issue 2.1.1 (Keyboard) removed.\n");
    env.cmd()
        .arg("oops")
        .assert()
        .success()
        .stdout(contains("I didn't find the last issue you added"));

    assert_eq!(
        read_json(&env.store()),
        serde_json::json!({"1.1.1": 1, "last": null})
    );
}

#[test]
fn reads_store_written_by_hand() {
    let env = TestEnv::new();
    fs::write(
        env.store(),
        "{\n    \"2.4.7\": 3,\n    \"1.4.3\": 1,\n    \"last\": \"1.4.3\"\n}",
    )
    .unwrap();

    let out = env.run(&["report"]);
    let rows: Vec<_> = out.lines().skip(3).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("2.4.7"));
    assert!(rows[0].ends_with("(75.00%)"));
    assert!(rows[1].starts_with("1.4.3"));
    assert!(rows[1].ends_with("(25.00%)"));
}

#[test]
fn find_matches_titles() {
    let env = TestEnv::new();
    env.cmd()
        .args(["find", "CAPTIONS"])
        .assert()
        .success()
        .stdout("1.2.2: Captions (Prerecorded)\n1.2.4: Captions (Live)\n");
    env.cmd()
        .args(["find", "nonexistent-xyz"])
        .assert()
        .success()
        .stdout("No criteria found.\n");
    assert!(!env.store().exists());
}

#[test]
fn usage_messages_exit_cleanly() {
    let env = TestEnv::new();
    env.cmd()
        .assert()
        .success()
        .stdout("Usage: wcag-tally <command> [<args>]\n");
    env.cmd()
        .arg("add")
        .assert()
        .success()
        .stdout("Usage: wcag-tally add <criteria_number>\n");
    env.cmd()
        .arg("find")
        .assert()
        .success()
        .stdout("Usage: wcag-tally find <text>\n");
    env.cmd()
        .arg("explode")
        .assert()
        .success()
        .stdout("Unknown command.\n");
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("oops").and(contains("report")));
}

#[test]
fn corrupt_store_is_fatal() {
    let env = TestEnv::new();
    fs::write(env.store(), "{\"1.4.3\": \"many\"}").unwrap();

    env.cmd()
        .arg("report")
        .assert()
        .failure()
        .stderr(contains("corrupt"));
    env.cmd().args(["add", "1.4.3"]).assert().failure();

    // the bad file is left for the user to fix
    assert_eq!(
        fs::read_to_string(env.store()).unwrap(),
        "{\"1.4.3\": \"many\"}"
    );
}

#[test]
#[cfg(target_os = "linux")]
fn config_moves_the_store() {
    let env = TestEnv::new();
    let custom = env.work.join("audits").join("site.json");
    env.write_config(&format!("store_path = {:?}\n", custom.display().to_string()));

    env.run(&["add", "3.3.1"]);
    assert!(!env.store().exists());
    assert_eq!(
        read_json(&custom),
        serde_json::json!({"3.3.1": 1, "last": "3.3.1"})
    );
}

#[test]
#[cfg(target_os = "linux")]
fn bad_config_is_fatal() {
    let env = TestEnv::new();
    env.write_config("store_path = [\n");

    env.cmd()
        .arg("report")
        .assert()
        .failure()
        .stderr(contains("configuration"));
}
