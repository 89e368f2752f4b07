//! `feed pull` against a mock upstream: synthesis reaches the target count
//! with unique ascending ids, and server failures exit nonzero.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::{TempDir, tempdir};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_posts(count: u64) -> Vec<Value> {
    (1..=count)
        .map(|id| {
            json!({
                "userId": (id - 1) / 10 + 1,
                "id": id,
                "title": format!("post {id}"),
                "body": format!("body of post {id}"),
            })
        })
        .collect()
}

fn home_with_base_url(uri: &str) -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        format!("api_base_url = \"{uri}\"\n"),
    )
    .unwrap();
    dir
}

#[tokio::test(flavor = "multi_thread")]
async fn test_pull_synthesizes_to_target_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_posts(100)))
        .mount(&server)
        .await;

    let home = home_with_base_url(&server.uri());

    let output = cargo_bin_cmd!("feedline")
        .env("FEEDLINE_HOME", home.path())
        .args(["feed", "pull", "--count", "2000", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let items: Vec<Value> = serde_json::from_slice(&output).unwrap();
    assert_eq!(items.len(), 2000);

    // Ids are unique, ascending 1..=2000; each block of 100 replicates the
    // source titles.
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item["id"].as_u64().unwrap(), i as u64 + 1);
        let expected_title = format!("post {}", i % 100 + 1);
        assert_eq!(item["title"].as_str().unwrap(), expected_title);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_pull_summary_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_posts(10)))
        .mount(&server)
        .await;

    let home = home_with_base_url(&server.uri());

    cargo_bin_cmd!("feedline")
        .env("FEEDLINE_HOME", home.path())
        .args(["feed", "pull", "--count", "45"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fetched 10 source items, synthesized 45 (ids 1..=45)",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_pull_server_error_exits_nonzero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let home = home_with_base_url(&server.uri());

    cargo_bin_cmd!("feedline")
        .env("FEEDLINE_HOME", home.path())
        .args(["feed", "pull"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("server error (HTTP 500)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_pull_sends_stored_token_as_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(wiremock::matchers::header(
            "authorization",
            "Bearer fl-stored-token",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_posts(1)))
        .expect(1)
        .mount(&server)
        .await;

    let home = home_with_base_url(&server.uri());
    fs::write(
        home.path().join("session.json"),
        r#"{"token": "fl-stored-token"}"#,
    )
    .unwrap();

    cargo_bin_cmd!("feedline")
        .env("FEEDLINE_HOME", home.path())
        .args(["feed", "pull", "--count", "3"])
        .assert()
        .success();
}
