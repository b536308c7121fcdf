use assert_cmd::prelude::*;
use predicates::prelude::*;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn normalize_paths(s: &str) -> String {
    let re = Regex::new(r#"(?m)^path: .*$"#).unwrap();
    re.replace(s, "path: <CFG>").to_string()
}

#[test]
fn doctor_prints_resolved_profile() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");

    let toml = r#"
version = 1
profile = "work"

[profiles.default]
docs_root = "/tmp/elsewhere"

[profiles.work]
docs_root = "/srv/docs"
excluded_folders = ["{{docs_root}}/archive", "drafts"]

[validation]
strict = true
output = "json"

[logging]
level = "debug"
"#;
    write_file(&cfg, toml);

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("docmeta"))
        .args(["doctor", "--config", cfg.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK   docmeta doctor"));

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    insta::assert_snapshot!(normalize_paths(&out), @r"
    OK   docmeta doctor
    path: <CFG>
    profile: work
    docs_root: /srv/docs
    excluded_folders:
      - /srv/docs/archive
      - drafts
    validation.strict: true
    validation.output: json
    logging.level: debug
    ");
}

#[test]
fn profile_flag_overrides_config() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    write_file(
        &cfg,
        r#"
version = 1
profile = "work"

[profiles.default]
docs_root = "/tmp/elsewhere"

[profiles.work]
docs_root = "/srv/docs"
"#,
    );

    Command::new(assert_cmd::cargo::cargo_bin!("docmeta"))
        .args(["--profile", "default", "doctor", "--config", cfg.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("docs_root: /tmp/elsewhere"))
        .stdout(predicate::str::contains("excluded_folders: (none)"));
}

#[test]
fn doctor_fails_when_config_missing() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docmeta"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()); // empty dir → no config
    cmd.arg("doctor");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL docmeta doctor"))
        .stdout(predicate::str::contains("looked for:"));
}

#[test]
fn doctor_fails_on_unknown_output_format() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    write_file(
        &cfg,
        r#"
version = 1

[profiles.default]
docs_root = "/srv/docs"

[validation]
output = "xml"
"#,
    );

    Command::new(assert_cmd::cargo::cargo_bin!("docmeta"))
        .args(["doctor", "--config", cfg.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL docmeta doctor"))
        .stdout(predicate::str::contains("failed to parse TOML"));
}

#[test]
fn doctor_fails_on_unknown_profile() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    write_file(
        &cfg,
        r#"
version = 1

[profiles.default]
docs_root = "/srv/docs"
"#,
    );

    Command::new(assert_cmd::cargo::cargo_bin!("docmeta"))
        .args(["--profile", "ghost", "doctor", "--config", cfg.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("profile 'ghost' not found"))
        .stdout(predicate::str::contains("looked for:").not());
}
