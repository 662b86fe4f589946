use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn qdisc_with_home(home: &std::path::Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_qdisc"));
    command
        .current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("QDISC_CONFIG");
    command
}

fn lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout).lines().map(str::to_string).collect()
}

#[test]
fn test_config_file_selects_discipline() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("qdisc.toml");
    fs::write(&config_path, "[queue]\nkind = \"priority\"\norder = \"min\"\n").unwrap();

    let output = qdisc_with_home(temp_dir.path())
        .arg("--config-file")
        .arg(&config_path)
        .args(["9", "2", "5"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(lines(&output), vec!["2", "5", "9"]);
}

#[test]
fn test_cli_flag_overrides_config_file() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("qdisc.toml");
    fs::write(&config_path, "[queue]\nkind = \"priority\"\n").unwrap();

    let output = qdisc_with_home(temp_dir.path())
        .arg("--config-file")
        .arg(&config_path)
        .args(["--kind", "lifo", "9", "2", "5"])
        .output()
        .unwrap();

    assert_eq!(lines(&output), vec!["5", "2", "9"]);
}

#[test]
fn test_config_section_selection() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("qdisc.toml");
    fs::write(&config_path, r#"
[queue]
kind = "fifo"

[stack]
kind = "lifo"
"#).unwrap();

    let output = qdisc_with_home(temp_dir.path())
        .arg("--config-file")
        .arg(&config_path)
        .args(["--config-name", "stack", "1", "2", "3"])
        .output()
        .unwrap();

    assert_eq!(lines(&output), vec!["3", "2", "1"]);
}

#[test]
fn test_config_discovered_from_env_var() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(&config_path, "[queue]\nkind = \"lifo\"\n").unwrap();

    let output = qdisc_with_home(temp_dir.path())
        .env("QDISC_CONFIG", &config_path)
        .args(["1", "2"])
        .output()
        .unwrap();

    assert_eq!(lines(&output), vec!["2", "1"]);
}

#[test]
fn test_project_local_config_discovered() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join(".qdisc.toml"), "[queue]\nkind = \"priority\"\n").unwrap();

    let output = qdisc_with_home(temp_dir.path())
        .args(["1", "3", "2"])
        .output()
        .unwrap();

    assert_eq!(lines(&output), vec!["3", "2", "1"]);
}

#[test]
fn test_invalid_config_value_fails() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("qdisc.toml");
    fs::write(&config_path, "[queue]\nlayout = \"ternary\"\n").unwrap();

    let output = qdisc_with_home(temp_dir.path())
        .arg("--config-file")
        .arg(&config_path)
        .arg("1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid heap layout: ternary"));
}

#[test]
fn test_log_console_disabled_writes_file_only() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("qdisc.toml");
    let log_path = temp_dir.path().join("qdisc.log");
    fs::write(
        &config_path,
        format!(
            "[base]\nconsole-level = \"info\"\nlog-console = false\nlog-file = \"{}\"\n\n[queue]\nkind = \"Stack\"\n",
            log_path.display()
        ),
    )
    .unwrap();

    let output = qdisc_with_home(temp_dir.path())
        .arg("--config-file")
        .arg(&config_path)
        .args(["1", "2"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(lines(&output), vec!["2", "1"]);
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let content = fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("lifo queue: 2 inserted, 2 popped"), "log: {}", content);
}
