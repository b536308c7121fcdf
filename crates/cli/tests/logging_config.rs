use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_logging_to_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let docs = root.join("docs");
    let log_file = root.join("docmeta.log");
    fs::create_dir(&docs).unwrap();
    fs::write(docs.join("loose.md"), "# no frontmatter\n").unwrap();

    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1
[profiles.default]
docs_root = "{}"

[logging]
level = "warn"
file_level = "debug"
file = "{}"
"#,
        docs.display(),
        log_file.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docmeta"));
    cmd.env_remove("RUST_LOG");
    cmd.arg("--config").arg(&config_path).arg("validate").assert().code(1);

    assert!(log_file.exists(), "Log file should be created");
    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("frontmatter extraction failed"));
}

#[test]
fn test_logging_level_parsing() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1
[profiles.default]
docs_root = "{}"

[logging]
level = "not-a-level"
"#,
        root.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    // Unknown levels fall back to info rather than failing
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docmeta"));
    cmd.env_remove("RUST_LOG");
    cmd.arg("--config").arg(&config_path).arg("validate").assert().success();
}
