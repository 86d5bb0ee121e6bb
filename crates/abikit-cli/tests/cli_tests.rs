//! CLI integration tests for abikit-cli
//!
//! Tests command parsing, output formatting, and config handling.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

const SCHEMA: &str = r#"[
    {"type":"constructor","inputs":[{"name":"supply","type":"uint256"}]},
    {"type":"function","name":"foo","inputs":[{"name":"x","type":"uint256"}],"outputs":[{"name":"","type":"bool"}]},
    {"type":"function","name":"sum","inputs":[{"name":"xs","type":"uint256[]"}],"outputs":[{"name":"","type":"uint256"}]},
    {"type":"function","name":"delta","inputs":[{"name":"d","type":"int8"}],"outputs":[]},
    {"type":"function","name":"burn","inputs":[{"name":"amount","type":"uint256"}],"outputs":[]},
    {"type":"function","name":"collate_propagate_storage","inputs":[{"name":"k","type":"bytes16"}],"outputs":[]},
    {"type":"event","name":"Transfer","inputs":[
        {"name":"from","type":"address","indexed":true},
        {"name":"to","type":"address","indexed":true},
        {"name":"value","type":"uint256"}]}
]"#;

const WORD_42: &str = "000000000000000000000000000000000000000000000000000000000000002a";

/// Isolated home directory holding a schema file
struct Env {
    home: TempDir,
    abi: PathBuf,
}

impl Env {
    fn new() -> Self {
        let home = TempDir::new().unwrap();
        let abi = home.path().join("abi.json");
        std::fs::write(&abi, SCHEMA).unwrap();
        Self { home, abi }
    }

    fn abi(&self) -> &str {
        self.abi.to_str().unwrap()
    }

    fn run(&self, args: &[&str]) -> std::process::Output {
        run_abikit(self.home.path(), args)
    }
}

/// Helper to run the CLI with arguments
fn run_abikit(home: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_abikit"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

// ==================== Help & Version Tests ====================

#[test]
fn test_cli_help() {
    let env = Env::new();
    let output = env.run(&["--help"]);
    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("abikit"));
    for command in ["encode", "decode", "selector", "inspect", "config"] {
        assert!(stdout.contains(command), "help lists {}", command);
    }
}

#[test]
fn test_cli_version() {
    let env = Env::new();
    let output = env.run(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("abikit"));
}

// ==================== Encode Tests ====================

#[test]
fn test_encode_uint() {
    let env = Env::new();
    let output = env.run(&["encode", "--abi", env.abi(), "foo", "42"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("0x2fbebd38{}", WORD_42));
}

#[test]
fn test_encode_array_json() {
    let env = Env::new();
    let output = env.run(&["--json", "encode", "--abi", env.abi(), "sum", "[", "1", "2", "]"]);
    assert!(output.status.success());

    let value = json(&output);
    assert_eq!(value["target"], "sum");
    let data = value["data"].as_str().unwrap();
    // selector, offset, length, two elements
    assert_eq!(data.len(), 2 + 8 + 4 * 64);
}

#[test]
fn test_encode_negative_argument() {
    let env = Env::new();
    let output = env.run(&["encode", "--abi", env.abi(), "delta", "-1"]);
    assert!(output.status.success());
    assert!(stdout(&output).ends_with(&"f".repeat(64)));
}

#[test]
fn test_encode_constructor() {
    let env = Env::new();
    let output = env.run(&["encode", "--abi", env.abi(), "--constructor", "42"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("0x{}", WORD_42));
}

#[test]
fn test_encode_unknown_method() {
    let env = Env::new();
    let output = env.run(&["encode", "--abi", env.abi(), "nope", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope"));
}

#[test]
fn test_encode_error_json() {
    let env = Env::new();
    let output = env.run(&["--json", "encode", "--abi", env.abi(), "foo"]);
    assert!(!output.status.success());

    let value = json(&output);
    assert_eq!(value["success"], false);
    assert!(value["error"].as_str().unwrap().contains("underflow"));
}

#[test]
fn test_encode_without_schema() {
    let env = Env::new();
    let output = env.run(&["encode", "foo", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--abi"));
}

// ==================== Decode Tests ====================

#[test]
fn test_decode_method_output() {
    let env = Env::new();
    let output = env.run(&["--json", "decode", "--abi", env.abi(), "sum", &format!("0x{}", WORD_42)]);
    assert!(output.status.success());
    assert_eq!(json(&output)["values"], serde_json::json!(["42"]));
}

#[test]
fn test_decode_event_data() {
    let env = Env::new();
    let output = env.run(&["decode", "--abi", env.abi(), "Transfer", WORD_42]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0: 42");
}

#[test]
fn test_decode_malformed_output() {
    let env = Env::new();
    let output = env.run(&["decode", "--abi", env.abi(), "sum", "0x2a"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("multiple of 32"));
}

#[test]
fn test_decode_invalid_hex() {
    let env = Env::new();
    let output = env.run(&["decode", "--abi", env.abi(), "sum", "0xzz"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid hex"));
}

// ==================== Selector Tests ====================

#[test]
fn test_selector_resolves_method() {
    let env = Env::new();
    let output = env.run(&["--json", "selector", "--abi", env.abi(), "0x2fbebd38"]);
    assert!(output.status.success());

    let value = json(&output);
    assert_eq!(value["name"], "foo");
    assert_eq!(value["signature"], "foo(uint256)");
}

#[test]
fn test_selector_decodes_call_data() {
    let env = Env::new();
    let data = format!("0x2fbebd38{}", WORD_42);
    let output = env.run(&["selector", "--abi", env.abi(), &data]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "foo(uint256)\n0: 42");
}

#[test]
fn test_selector_clash_resolves_by_name_order() {
    let env = Env::new();
    let output = env.run(&["selector", "--abi", env.abi(), "42966c68"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "burn(uint256)");
}

#[test]
fn test_selector_too_short() {
    let env = Env::new();
    let output = env.run(&["selector", "--abi", env.abi(), "0x2fbe"]);
    assert!(!output.status.success());
}

// ==================== Inspect Tests ====================

#[test]
fn test_inspect_json() {
    let env = Env::new();
    let output = env.run(&["--json", "inspect", "--abi", env.abi()]);
    assert!(output.status.success());

    let value = json(&output);
    assert_eq!(value["constructor"], "constructor(uint256)");
    assert_eq!(value["method_count"], 5);
    assert_eq!(value["events"][0]["name"], "Transfer");
    assert_eq!(value["clashes"][0]["selector"], "0x42966c68");
}

#[test]
fn test_inspect_human() {
    let env = Env::new();
    let output = env.run(&["inspect", "--abi", env.abi()]);
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(stdout.contains("0x2fbebd38  foo(uint256)"));
    assert!(stdout.contains("event Transfer(address,address,uint256)"));
    assert!(stdout.contains("clash 0x42966c68: burn, collate_propagate_storage"));
}

// ==================== Config Tests ====================

#[test]
fn test_config_set_abi_used_as_default() {
    let env = Env::new();
    let output = env.run(&["config", "--set-abi", env.abi()]);
    assert!(output.status.success());
    assert!(env.home.path().join(".abikit/config.toml").exists());

    let output = env.run(&["encode", "foo", "42"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("0x2fbebd38{}", WORD_42));
}

#[test]
fn test_config_show_json() {
    let env = Env::new();
    let output = env.run(&["--json", "config", "--show"]);
    assert!(output.status.success());

    let value = json(&output);
    assert_eq!(value["log_level"], "warn");
    assert_eq!(value["json"], false);
}

#[test]
fn test_config_rejects_bad_log_level() {
    let env = Env::new();
    let output = env.run(&["config", "--set-log-level", "abikit=notalevel"]);
    assert!(!output.status.success());
}
