//! End-to-end tests for the `snakebot-agent` binary.
//!
//! Each test starts the built binary, writes one snapshot to its stdin and
//! checks the single line it prints. The process must exit successfully on
//! every path, including malformed input and broken configuration.

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_snakebot-agent");

const OVERRIDES: &[&str] = &[
    "SNAKEBOT_CONFIG",
    "SNAKEBOT_IDENTITY",
    "SNAKEBOT_BOARD_WIDTH",
    "SNAKEBOT_BOARD_HEIGHT",
    "SNAKEBOT_SHIELD_THRESHOLD",
    "SNAKEBOT_SHIELD_ROLL_PROBABILITY",
    "SNAKEBOT_DEFAULT_ACTION",
    "SNAKEBOT_PROTOCOL",
    "SNAKEBOT_SELECTOR",
    "SNAKEBOT_SEED",
];

/// Run the agent once with a clean `SNAKEBOT_*` environment plus `env`.
fn run_agent(input: &str, env: &[(&str, &str)]) -> String {
    let mut cmd = Command::new(BIN);
    for name in OVERRIDES {
        cmd.env_remove(name);
    }
    cmd.envs(env.iter().copied())
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn().expect("agent binary should start");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("snapshot should be written");
    let output = child.wait_with_output().expect("agent should finish");
    assert!(output.status.success(), "agent exited with {}", output.status);
    String::from_utf8(output.stdout).expect("stdout is UTF-8")
}

fn temp_config(name: &str, yaml: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "snakebot-agent-cli-{name}-{}.yaml",
        std::process::id()
    ));
    std::fs::write(&path, yaml).unwrap();
    path
}

const DIRECTIONS: [&str; 4] = ["0\n", "1\n", "2\n", "3\n"];

#[test]
fn empty_snapshot_prints_one_direction() {
    let out = run_agent("10 0 0\n", &[]);
    assert!(DIRECTIONS.contains(&out.as_str()), "got {out:?}");
}

#[test]
fn non_integer_token_prints_default_right() {
    let out = run_agent("10 0 oops\n", &[]);
    assert_eq!(out, "2\n");
}

#[test]
fn empty_input_prints_default_right() {
    assert_eq!(run_agent("", &[]), "2\n");
}

#[test]
fn default_action_override() {
    let out = run_agent("garbage", &[("SNAKEBOT_DEFAULT_ACTION", "up")]);
    assert_eq!(out, "1\n");
}

#[test]
fn boxed_in_with_shield_prints_shield() {
    let input = "10\n4\n5 4 -4\n4 5 -4\n5 6 -4\n6 5 -4\n1\n7 1 25 0 0 0\n5 5\n";
    let out = run_agent(
        input,
        &[
            ("SNAKEBOT_IDENTITY", "7"),
            ("SNAKEBOT_SHIELD_ROLL_PROBABILITY", "0"),
        ],
    );
    assert_eq!(out, "4\n");
}

#[test]
fn wall_on_the_left_is_never_chosen() {
    let input = "10 1 5 4 -4 1 7 1 0 0 0 0 5 5";
    for seed in 0..25 {
        let seed = seed.to_string();
        let out = run_agent(
            input,
            &[("SNAKEBOT_IDENTITY", "7"), ("SNAKEBOT_SEED", seed.as_str())],
        );
        assert!(["1\n", "2\n", "3\n"].contains(&out.as_str()), "seed {seed}: {out:?}");
    }
}

#[test]
fn same_seed_same_move() {
    let input = "10 0 1 7 1 0 0 0 0 20 15";
    let env = [("SNAKEBOT_IDENTITY", "7"), ("SNAKEBOT_SEED", "1234")];
    assert_eq!(run_agent(input, &env), run_agent(input, &env));
}

#[test]
fn config_file_is_read() {
    let path = temp_config("file", "identity: 7\ndefault_action: down\n");
    let out = run_agent("10 1", &[("SNAKEBOT_CONFIG", path.to_str().unwrap())]);
    let _ = std::fs::remove_file(&path);
    assert_eq!(out, "3\n");
}

#[test]
fn extended_protocol_via_env() {
    // Head in the corner (0,0): only RIGHT and DOWN are safe.
    let input = "10\n0\n1\n7 1 0 0 0 0 0\n0 0\n0\n0\n0 0 39 29\n-1 0 0 39 29\n-1 0 0 39 29\n";
    let out = run_agent(
        input,
        &[
            ("SNAKEBOT_IDENTITY", "7"),
            ("SNAKEBOT_PROTOCOL", "extended"),
            ("SNAKEBOT_SELECTOR", "greedy"),
        ],
    );
    assert!(["2\n", "3\n"].contains(&out.as_str()), "got {out:?}");
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let out = run_agent(
        "10 0 0",
        &[("SNAKEBOT_CONFIG", "/nonexistent/snakebot/agent.yaml")],
    );
    assert!(DIRECTIONS.contains(&out.as_str()), "got {out:?}");
}

#[test]
fn invalid_override_falls_back_to_defaults() {
    let out = run_agent(
        "broken",
        &[
            ("SNAKEBOT_SHIELD_ROLL_PROBABILITY", "2.5"),
            ("SNAKEBOT_DEFAULT_ACTION", "down"),
        ],
    );
    assert_eq!(out, "2\n");
}
