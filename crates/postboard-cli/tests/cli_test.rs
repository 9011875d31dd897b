//! Headless command tests.
//!
//! Each test runs the real binary inside an isolated `TestWorld`; network
//! tests point it at a one-shot HTTP responder on localhost.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use assert_cmd::Command;
use postboard_testing::TestWorld;
use predicates::prelude::*;
use serde_json::{Value, json};

/// Answer one GraphQL request per entry in `bodies`, in order. Returns the
/// endpoint URL and a channel yielding each request payload as it arrives.
fn serve(bodies: Vec<Value>) -> (String, Receiver<Value>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/api", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for body in bodies {
            let (mut socket, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(socket.try_clone().unwrap());

            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                if let Some(value) = line.to_lowercase().strip_prefix("content-length:") {
                    content_length = value.trim().parse().unwrap();
                }
            }
            let mut request = vec![0u8; content_length];
            reader.read_exact(&mut request).unwrap();
            let _ = tx.send(serde_json::from_slice(&request).unwrap_or(Value::Null));

            let payload = body.to_string();
            write!(
                socket,
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                payload.len(),
                payload
            )
            .unwrap();
        }
    });

    (endpoint, rx)
}

fn serve_once(body: Value) -> String {
    serve(vec![body]).0
}

fn next_request(requests: &Receiver<Value>) -> Value {
    requests.recv_timeout(Duration::from_secs(5)).unwrap()
}

#[test]
#[allow(deprecated)]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("postboard").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("--endpoint"));
}

#[test]
fn test_config_show_reads_file() -> Result<()> {
    let world = TestWorld::new().with_config("endpoint = \"http://example.test/api\"\npage_size = 5\n");

    let result = world.run(&["config", "show", "--format", "json"])?;
    assert!(result.success(), "stderr: {}", result.stderr);

    let json = result.json()?;
    assert_eq!(json["content"]["endpoint"], "http://example.test/api");
    assert_eq!(json["content"]["page_size"], 5);
    assert_eq!(json["content"]["timeout_secs"], 30);
    assert_eq!(json["content"]["exists"], true);
    Ok(())
}

#[test]
fn test_endpoint_flag_overrides_file() -> Result<()> {
    let world = TestWorld::new().with_endpoint("http://from-file.test/api");

    let result = world.run(&[
        "config",
        "show",
        "--format",
        "json",
        "--endpoint",
        "http://from-flag.test/api",
    ])?;

    assert_eq!(result.json()?["content"]["endpoint"], "http://from-flag.test/api");
    Ok(())
}

#[test]
fn test_config_init_writes_defaults_once() -> Result<()> {
    let world = TestWorld::new();
    assert!(!world.config_path().exists());

    let first = world.run(&["config", "init", "--format", "json"])?;
    assert!(first.success(), "stderr: {}", first.stderr);
    assert_eq!(first.json()?["content"]["created"], true);

    let written = std::fs::read_to_string(world.config_path())?;
    assert!(written.contains("graphqlzero.almansi.me"));

    let second = world.run(&["config", "init", "--format", "json"])?;
    assert_eq!(second.json()?["content"]["created"], false);
    Ok(())
}

#[test]
fn test_invalid_config_is_reported() -> Result<()> {
    let world = TestWorld::new().with_config("page_size = 0\n");

    let result = world.run(&["config", "show"])?;
    assert_eq!(result.code(), Some(1));
    assert!(result.stderr.contains("Error: Configuration error"));
    Ok(())
}

#[test]
fn test_unreachable_endpoint_exits_with_error() -> Result<()> {
    let world = TestWorld::new().with_endpoint("http://127.0.0.1:1/api");

    let result = world.run(&["list"])?;
    assert_eq!(result.code(), Some(1));
    assert!(result.stderr.contains("Error: HTTP error"), "stderr: {}", result.stderr);
    assert!(result.stdout.is_empty());
    Ok(())
}

#[test]
fn test_list_prints_posts_as_json() -> Result<()> {
    let endpoint = serve_once(json!({
        "data": {"posts": {"data": [
            {"id": "3", "title": "third", "body": "c", "user": {"id": "1", "name": "Leanne Graham", "email": null}},
            {"id": "2", "title": "second", "body": "b", "user": null}
        ]}}
    }));
    let world = TestWorld::new().with_endpoint(&endpoint);

    let result = world.run(&["list", "--format", "json", "--limit", "2"])?;
    assert!(result.success(), "stderr: {}", result.stderr);

    let json = result.json()?;
    assert_eq!(json["content"]["limit"], 2);
    assert_eq!(json["content"]["posts"][0]["id"], "3");
    assert_eq!(json["content"]["posts"][0]["author"], "Leanne Graham");
    assert_eq!(json["content"]["posts"][1]["title"], "second");
    Ok(())
}

#[test]
fn test_graphql_error_is_reported() -> Result<()> {
    let endpoint = serve_once(json!({
        "data": {"deletePost": null},
        "errors": [{"message": "Post not found"}]
    }));
    let world = TestWorld::new().with_endpoint(&endpoint);

    let result = world.run(&["delete", "999"])?;
    assert_eq!(result.code(), Some(1));
    assert!(result.stderr.contains("Error: Post not found"), "stderr: {}", result.stderr);
    Ok(())
}

#[test]
fn test_create_prints_created_post() -> Result<()> {
    let (endpoint, requests) = serve(vec![json!({
        "data": {"createPost": {"id": "101", "title": "T", "body": "B", "user": null}}
    })]);
    let world = TestWorld::new().with_endpoint(&endpoint);

    let result = world.run(&["create", "--title", "T", "--body", "B", "--format", "json"])?;
    assert!(result.success(), "stderr: {}", result.stderr);

    let request = next_request(&requests);
    assert_eq!(request["operationName"], "CreatePost");
    assert_eq!(request["variables"]["input"], json!({"title": "T", "body": "B"}));

    let json = result.json()?;
    assert_eq!(json["content"]["kind"], "created");
    assert_eq!(json["content"]["post"]["id"], "101");
    assert_eq!(json["content"]["post"]["title"], "T");
    Ok(())
}

#[test]
fn test_update_keeps_fields_not_given() -> Result<()> {
    let (endpoint, requests) = serve(vec![
        json!({"data": {"post": {"id": "3", "title": "old", "body": "kept body", "user": null}}}),
        json!({"data": {"updatePost": {"id": "3", "title": "X", "body": "kept body", "user": null}}}),
    ]);
    let world = TestWorld::new().with_endpoint(&endpoint);

    let result = world.run(&["update", "3", "--title", "X", "--format", "json"])?;
    assert!(result.success(), "stderr: {}", result.stderr);

    let lookup = next_request(&requests);
    assert_eq!(lookup["operationName"], "Post");
    assert_eq!(lookup["variables"]["id"], "3");

    let update = next_request(&requests);
    assert_eq!(update["operationName"], "UpdatePost");
    assert_eq!(update["variables"]["id"], "3");
    assert_eq!(
        update["variables"]["input"],
        json!({"title": "X", "body": "kept body"})
    );

    assert_eq!(result.json()?["content"]["post"]["title"], "X");
    Ok(())
}

#[test]
fn test_update_unknown_post_is_reported() -> Result<()> {
    let endpoint = serve_once(json!({"data": {"post": null}}));
    let world = TestWorld::new().with_endpoint(&endpoint);

    let result = world.run(&["update", "999"])?;
    assert_eq!(result.code(), Some(1));
    assert!(result.stderr.contains("Error: Post 999 not found"), "stderr: {}", result.stderr);
    Ok(())
}

#[test]
fn test_update_lookup_with_null_record_is_not_found() -> Result<()> {
    let endpoint = serve_once(json!({
        "data": {"post": {"id": null, "title": null, "body": null, "user": null}}
    }));
    let world = TestWorld::new().with_endpoint(&endpoint);

    let result = world.run(&["update", "999", "--body", "B"])?;
    assert_eq!(result.code(), Some(1));
    assert!(result.stderr.contains("Error: Post 999 not found"), "stderr: {}", result.stderr);
    Ok(())
}

#[test]
fn test_delete_reports_deleted_post() -> Result<()> {
    let (endpoint, requests) = serve(vec![json!({"data": {"deletePost": true}})]);
    let world = TestWorld::new().with_endpoint(&endpoint);

    let result = world.run(&["delete", "5", "--format", "json"])?;
    assert!(result.success(), "stderr: {}", result.stderr);

    let request = next_request(&requests);
    assert_eq!(request["operationName"], "DeletePost");
    assert_eq!(request["variables"]["id"], "5");

    let json = result.json()?;
    assert_eq!(json["content"]["id"], "5");
    assert_eq!(json["content"]["deleted"], true);
    Ok(())
}

#[test]
fn test_rust_log_overrides_log_level() -> Result<()> {
    let world = TestWorld::new()
        .with_endpoint("http://127.0.0.1:1/api")
        .with_env("RUST_LOG", "postboard_client=debug");

    let result = world.run(&["list"])?;
    assert_eq!(result.code(), Some(1));
    assert!(
        result.stderr.contains("sending graphql operation"),
        "stderr: {}",
        result.stderr
    );
    Ok(())
}
