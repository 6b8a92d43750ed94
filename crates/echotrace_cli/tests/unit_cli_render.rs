#![allow(missing_docs)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use echotrace_testkit::fixture_path;
use serde_json::Value;

#[test]
fn render_text_prints_metadata_sections() {
	let fixture = fixture_path("metadata.json").display().to_string();
	let output = run(&["render", &fixture, "--kind", "metadata"]);
	assert!(output.status.success(), "render should succeed: {}", String::from_utf8_lossy(&output.stderr));

	let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
	assert!(stdout.starts_with("== Metadata ==\n"));
	assert!(stdout.contains("  | Audio Properties:\n  |   | Sample Rate: 44100\n  |   | Channels: 2\n"));
	assert!(stdout.contains("  | created: null\n"));
}

#[test]
fn render_json_exposes_display_tree() {
	let fixture = fixture_path("diarization.json").display().to_string();
	let json = run_json(&["render", &fixture, "--kind", "diarization", "--format", "json"]);

	assert_eq!(json["title"], "Speaker Diarization");
	assert_eq!(json["status"], "success");
	let items = json["body"]["entries"][1]["value"]["items"].as_array().expect("segments list");
	assert_eq!(items.len(), 2);
	assert_eq!(items[0]["node"]["entries"][0]["value"]["text"], "0");
}

#[test]
fn rejected_reply_renders_error_card() {
	let fixture = fixture_path("error_validation.json").display().to_string();
	let output = run(&["render", &fixture, "--status", "422", "--reason", "Unprocessable Entity"]);
	assert!(output.status.success(), "error cards still render");

	let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
	assert_eq!(stdout, "== Result ==\nSomething went wrong.\nfield required\n");
}

#[test]
fn render_reads_stdin() {
	let mut child = Command::new(env!("CARGO_BIN_EXE_echotrace"))
		.args(["render", "-", "--format", "html"])
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("command spawns");
	child
		.stdin
		.take()
		.expect("stdin is piped")
		.write_all(br#"{"text": "hello"}"#)
		.expect("stdin accepts body");
	let output = child.wait_with_output().expect("command finishes");

	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
	assert!(stdout.contains("<div style=\"border-left: none; padding-left: 0\">"));
	assert!(stdout.contains(">hello</span>"));
}

#[test]
fn missing_file_exits_with_error() {
	let output = run(&["render", "/nonexistent/echotrace/reply.json"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: io:"));
}

#[test]
fn unknown_kind_is_rejected_by_argument_parsing() {
	let output = run(&["render", "-", "--kind", "karaoke"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("unknown analysis kind: karaoke"));
}

#[test]
fn kinds_lists_every_title() {
	let output = run(&["kinds"]);
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
	assert_eq!(stdout.lines().count(), 6);
	assert!(stdout.contains("temporal       Temporal Inconsistency Detection"));
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_echotrace"))
		.args(args)
		.env_remove("ECHOTRACE_FORMAT")
		.env_remove("ECHOTRACE_COLOR")
		.stdin(Stdio::null())
		.output()
		.expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(output.status.success(), "command should succeed");
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
