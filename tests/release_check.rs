use std::collections::HashMap;
use std::fs;
use std::path::Path;

use mockito::Server;
use tempfile::TempDir;

use release_check::check::run_check;
use release_check::config::Config;
use release_check::error::CheckError;
use release_check::output::OutputEmitter;
use release_check::release::{Decision, GitHubReleases, RegistryError};

const REPOSITORY: &str = "acme/addons";

fn write_manifest(dir: &Path, version: &str) {
    fs::write(
        dir.join("__manifest__.py"),
        format!(
            r#"# -*- coding: utf-8 -*-
{{
    "name": "Addon",
    "version": "{}",
    "depends": ["base"],
    "installable": True,
}}
"#,
            version
        ),
    )
    .unwrap();
}

fn releases_body(tags: &[&str]) -> String {
    let releases: Vec<_> = tags
        .iter()
        .map(|tag| serde_json::json!({ "tag_name": tag, "draft": false }))
        .collect();
    serde_json::to_string(&releases).unwrap()
}

fn config(server_url: &str, module_dir: &Path, extra: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = HashMap::from([
        ("GITHUB_API_URL".to_string(), server_url.to_string()),
        ("GITHUB_REPOSITORY".to_string(), REPOSITORY.to_string()),
        ("GITHUB_TOKEN".to_string(), "test-token".to_string()),
        (
            "MODULE_PATH".to_string(),
            module_dir.to_string_lossy().into_owned(),
        ),
    ]);
    for (key, value) in extra {
        vars.insert(key.to_string(), value.to_string());
    }
    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

fn lister(config: &Config) -> GitHubReleases {
    GitHubReleases::new(&config.api_url, config.token.clone(), config.fetch_timeout).unwrap()
}

#[tokio::test]
async fn new_release_is_written_to_github_output() {
    let mut server = Server::new_async().await;
    let module_dir = TempDir::new().unwrap();
    write_manifest(module_dir.path(), "12.0.1.2.3");
    let output_path = module_dir.path().join("github_output");
    let output = output_path.to_string_lossy().into_owned();

    let mock = server
        .mock("GET", "/repos/acme/addons/releases")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(releases_body(&["v12.0.1.0.0", "v12.0.1.2.0", "v11.9.9.9.9"]))
        .create_async()
        .await;

    let config = config(
        &server.url(),
        module_dir.path(),
        &[("GITHUB_OUTPUT", output.as_str())],
    );
    let decision = run_check(&config, &lister(&config)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(decision, Decision::NewRelease("v12.0.1.2.3".to_string()));

    let mut stdout = Vec::new();
    OutputEmitter::new(config.github_output.clone())
        .emit(&decision, &mut stdout)
        .unwrap();
    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        "new-version=v12.0.1.2.3\n"
    );
    assert_eq!(
        String::from_utf8(stdout).unwrap(),
        "NEW RELEASE! v12.0.1.2.3\n"
    );
}

#[tokio::test]
async fn existing_release_produces_no_output() {
    let mut server = Server::new_async().await;
    let module_dir = TempDir::new().unwrap();
    write_manifest(module_dir.path(), "12.0.1.2.3");

    let mock = server
        .mock("GET", "/repos/acme/addons/releases")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(releases_body(&["v12.0.1.2.3", "v12.0.1.2.0"]))
        .create_async()
        .await;

    let config = config(&server.url(), module_dir.path(), &[]);
    let decision = run_check(&config, &lister(&config)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(decision, Decision::UpToDate);

    let mut stdout = Vec::new();
    OutputEmitter::new(None).emit(&decision, &mut stdout).unwrap();
    assert!(stdout.is_empty());
}

#[tokio::test]
async fn first_release_of_new_major_is_created() {
    let mut server = Server::new_async().await;
    let module_dir = TempDir::new().unwrap();
    write_manifest(module_dir.path(), "14.0.1.0.0");

    let mock = server
        .mock("GET", "/repos/acme/addons/releases")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(releases_body(&["v12.0.1.2.3", "v13.0.2.0.0"]))
        .create_async()
        .await;

    let config = config(&server.url(), module_dir.path(), &[]);
    let decision = run_check(&config, &lister(&config)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(decision, Decision::NewRelease("v14.0.1.0.0".to_string()));
}

#[tokio::test]
async fn module_name_prefixes_matched_and_generated_tags() {
    let mut server = Server::new_async().await;
    let module_dir = TempDir::new().unwrap();
    write_manifest(module_dir.path(), "12.0.1.2.3");

    let mock = server
        .mock("GET", "/repos/acme/addons/releases")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(releases_body(&[
            "mymod-v12.0.1.2.0",
            "othermod-v12.0.9.0.0",
            "v12.0.9.0.0",
        ]))
        .create_async()
        .await;

    let config = config(&server.url(), module_dir.path(), &[("MODULE_NAME", "mymod")]);
    let decision = run_check(&config, &lister(&config)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        decision,
        Decision::NewRelease("mymod-v12.0.1.2.3".to_string())
    );
}

#[tokio::test]
async fn numeric_ordering_picks_highest_segment() {
    let mut server = Server::new_async().await;
    let module_dir = TempDir::new().unwrap();
    write_manifest(module_dir.path(), "12.0.1.10.0");

    let mock = server
        .mock("GET", "/repos/acme/addons/releases")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(releases_body(&["v12.0.1.9.0", "v12.0.1.10.0"]))
        .create_async()
        .await;

    let config = config(
        &server.url(),
        module_dir.path(),
        &[("TAG_ORDERING", "numeric")],
    );
    let decision = run_check(&config, &lister(&config)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(decision, Decision::UpToDate);
}

#[tokio::test]
async fn api_failure_aborts_the_check() {
    let mut server = Server::new_async().await;
    let module_dir = TempDir::new().unwrap();
    write_manifest(module_dir.path(), "12.0.1.2.3");

    let mock = server
        .mock("GET", "/repos/acme/addons/releases")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Bad credentials"}"#)
        .create_async()
        .await;

    let config = config(&server.url(), module_dir.path(), &[]);
    let result = run_check(&config, &lister(&config)).await;

    mock.assert_async().await;
    assert!(matches!(
        result,
        Err(CheckError::Registry(RegistryError::Unauthorized {
            status: 401,
            ..
        }))
    ));
}
