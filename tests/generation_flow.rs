//! End-to-end generation tests: CLI -> HTTP client -> mocked model API.

mod common;

use common::TestContext;
use predicates::prelude::*;

fn config_for(server_url: &str) -> String {
    format!(
        "[api]\napi_url = \"{}\"\nmax_retries = 1\nretry_delay_ms = 1\ntimeout_secs = 5\n",
        server_url
    )
}

#[test]
fn successful_api_call_shows_generated_copy() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"completion": "HEADLINE: Stay hydrated, stay fun!\nHydration for the whole family."}"#)
        .create();

    let ctx = TestContext::new();
    ctx.write_config(&config_for(&server.url()));
    ctx.cli()
        .env("DEEPADS_API_KEY", "test-key")
        .args(["generate", "--description", "Eco-friendly water bottle", "--tone", "friendly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Headline: Stay hydrated, stay fun!"))
        .stdout(predicate::str::contains("Hydration for the whole family."));
}

#[test]
fn server_error_surfaces_as_generation_failure() {
    let mut server = mockito::Server::new();
    let _m = server.mock("POST", "/").with_status(500).create();

    let ctx = TestContext::new();
    ctx.write_config(&config_for(&server.url()));
    ctx.cli()
        .env("DEEPADS_API_KEY", "test-key")
        .args(["generate", "--description", "Eco-friendly water bottle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Generation failed"));
}

#[test]
fn rejected_api_key_surfaces_as_configuration_error() {
    let mut server = mockito::Server::new();
    let _m = server.mock("POST", "/").with_status(401).create();

    let ctx = TestContext::new();
    ctx.write_config(&config_for(&server.url()));
    ctx.cli()
        .env("DEEPADS_API_KEY", "bad-key")
        .args(["generate", "--description", "Eco-friendly water bottle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key rejected"));
}

#[test]
fn malformed_response_body_fails_cleanly() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"unexpected": true}"#)
        .create();

    let ctx = TestContext::new();
    ctx.write_config(&config_for(&server.url()));
    ctx.cli()
        .env("DEEPADS_API_KEY", "test-key")
        .args(["generate", "--description", "Eco-friendly water bottle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed model response"));
}

#[test]
fn empty_description_never_reaches_the_api() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/").with_status(200).expect(0).create();

    let ctx = TestContext::new();
    ctx.write_config(&config_for(&server.url()));
    ctx.cli()
        .env("DEEPADS_API_KEY", "test-key")
        .args(["generate", "--description", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product description must not be empty"));
    mock.assert();
}
