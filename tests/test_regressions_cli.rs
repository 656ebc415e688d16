use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_opencode-kit")
}

fn write_file(path: &Path, content: &str) {
    fs::write(path, content).expect("failed to write test file");
}

fn kit(args: &[&str]) -> Output {
    Command::new(bin())
        .args(["--color", "never"])
        .args(args)
        .env_remove("OPENCODE_KIT_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("command should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_templates_list_json_keeps_registry_order() {
    let output = kit(&["-F", "json", "templates", "list"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("stdout should be JSON");
    let names: Vec<&str> = value
        .as_array()
        .expect("array")
        .iter()
        .map(|v| v["name"].as_str().expect("name"))
        .collect();
    assert_eq!(
        names,
        vec!["basic", "security", "notification", "custom-tool", "logging"]
    );
}

#[test]
fn test_templates_show_prints_source() {
    let output = kit(&["templates", "show", "security"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("tool.execute.before"));
}

#[test]
fn test_templates_show_unknown_lists_available_names() {
    let output = kit(&["templates", "show", "nope"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());

    let err = stderr(&output);
    assert!(err.contains("Template 'nope' not found"), "stderr: {err}");
    assert!(
        err.contains("basic, security, notification, custom-tool, logging"),
        "stderr: {err}"
    );
}

#[test]
fn test_match_exit_codes() {
    let hit = kit(&["match", "file.edited", "-p", "file.*", "-p", "session.idle"]);
    assert_eq!(hit.status.code(), Some(0), "stderr: {}", stderr(&hit));
    assert!(stdout(&hit).starts_with("true"));

    let miss = kit(&["match", "session.created", "-p", "file.*", "-p", "session.idle"]);
    assert_eq!(miss.status.code(), Some(1), "stderr: {}", stderr(&miss));
    assert!(stdout(&miss).starts_with("false"));

    let prefix_only = kit(&["match", "toolbox.run", "-p", "tool.*"]);
    assert_eq!(prefix_only.status.code(), Some(1));
}

#[test]
fn test_match_uses_config_patterns_when_none_given() {
    let dir = tempdir().expect("temp dir");
    let config = dir.path().join("kit.toml");
    write_file(&config, "[logging]\nevents = [\"tool.*\"]\n");

    let output = kit(&[
        "-c",
        config.to_str().expect("utf8 path"),
        "-F",
        "json",
        "match",
        "tool.execute.before",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("stdout should be JSON");
    assert_eq!(value["selected"], true);
    assert_eq!(value["patterns"], serde_json::json!(["tool.*"]));
}

#[test]
fn test_misplaced_wildcard_warns_but_still_answers() {
    let output = kit(&["match", "tool.execute.before", "-p", "to*ol"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("only matches literally"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_filter_selects_bare_and_json_lines() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("events.log");
    let out = dir.path().join("selected.log");
    write_file(
        &input,
        "session.created\n\
         {\"plugin\":\"log\",\"type\":\"file.edited\"}\n\
         \n\
         session.idle\n\
         tool.execute.before\n\
         {\"plugin\":\"log\"}\n",
    );

    let output = kit(&[
        "-o",
        out.to_str().expect("utf8 path"),
        "filter",
        input.to_str().expect("utf8 path"),
        "-p",
        "file.*",
        "-p",
        "session.idle",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let expected = "{\"plugin\":\"log\",\"type\":\"file.edited\"}\nsession.idle\n";
    assert_eq!(stdout(&output), expected);
    assert_eq!(
        fs::read_to_string(&out).expect("output file should exist"),
        expected
    );
}

#[test]
fn test_filter_reads_stdin() {
    let mut child = Command::new(bin())
        .args(["filter", "-p", "tool.*"])
        .env_remove("OPENCODE_KIT_CONFIG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("command should spawn");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"tool.execute.after\ntoolbox.run\ntool\n")
        .expect("write stdin");

    let output = child.wait_with_output().expect("command should finish");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "tool.execute.after\n");
}

#[test]
fn test_filter_missing_file_fails() {
    let output = kit(&["filter", "/definitely/not/here.log", "-p", "*"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read event records"));
}

#[test]
fn test_events_json_filtered_by_namespace() {
    let output = kit(&["-F", "json", "events", "-p", "tool.*"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("stdout should be JSON");
    let names: Vec<&str> = value
        .as_array()
        .expect("array")
        .iter()
        .map(|v| v["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["tool.execute.after", "tool.execute.before"]);
}

#[test]
fn test_new_scaffolds_into_directory() {
    let dir = tempdir().expect("temp dir");
    let plugin_dir = dir.path().join("plugins");

    let output = kit(&[
        "new",
        "env-guard",
        "--template",
        "security",
        "--dir",
        plugin_dir.to_str().expect("utf8 path"),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("from template 'security'"));

    let content =
        fs::read_to_string(plugin_dir.join("env-guard.ts")).expect("plugin file should exist");
    assert!(content.contains("export const EnvGuard: Plugin"));

    let again = kit(&[
        "new",
        "env-guard",
        "--dir",
        plugin_dir.to_str().expect("utf8 path"),
    ]);
    assert_eq!(again.status.code(), Some(2));
    assert!(stderr(&again).contains("already exists"));
}

#[test]
fn test_new_with_unknown_template_writes_nothing() {
    let dir = tempdir().expect("temp dir");
    let plugin_dir = dir.path().join("plugins");

    let output = kit(&[
        "new",
        "x",
        "-t",
        "fancy",
        "-d",
        plugin_dir.to_str().expect("utf8 path"),
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Template 'fancy' not found"));
    assert!(!plugin_dir.exists());
}

fn filter_stdin(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(bin())
        .args(args)
        .env_remove("OPENCODE_KIT_CONFIG")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("command should spawn");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input)
        .expect("write stdin");

    child.wait_with_output().expect("command should finish")
}

#[test]
fn test_missing_config_reports_os_error_once() {
    let output = kit(&["-c", "/definitely/not/here.toml", "match", "session.idle"]);
    assert_eq!(output.status.code(), Some(2));

    let err = stderr(&output);
    assert!(
        err.contains("Failed to read config file '/definitely/not/here.toml'"),
        "stderr: {err}"
    );
    assert_eq!(err.matches("(os error").count(), 1, "stderr: {err}");
}

#[test]
fn test_unwritable_plugin_dir_reports_os_error_once() {
    let dir = tempdir().expect("temp dir");
    let blocker = dir.path().join("not-a-dir");
    write_file(&blocker, "plain file");

    let output = kit(&[
        "new",
        "x",
        "--dir",
        blocker.join("plugins").to_str().expect("utf8 path"),
    ]);
    assert_eq!(output.status.code(), Some(2));

    let err = stderr(&output);
    assert!(err.contains("Failed to write"), "stderr: {err}");
    assert_eq!(err.matches("(os error").count(), 1, "stderr: {err}");
}

#[test]
fn test_filter_skips_invalid_utf8_lines() {
    let output = filter_stdin(
        &["filter", "-p", "*"],
        b"session.idle\n\xff\xfe\nfile.edited\n",
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "session.idle\nfile.edited\n");
}

#[test]
fn test_filter_json_format_lists_records() {
    let output = filter_stdin(
        &["-F", "json", "filter", "-p", "file.*"],
        b"session.idle\n{\"type\":\"file.edited\"}\n",
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("stdout should be JSON");
    assert_eq!(
        value,
        serde_json::json!([{
            "event": "file.edited",
            "line": "{\"type\":\"file.edited\"}",
            "line_number": 2,
        }])
    );
}
