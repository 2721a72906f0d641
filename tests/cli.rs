use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repo_json(name: &str, language: &str, fork: bool) -> serde_json::Value {
    json!({
        "name": name,
        "description": format!("{name} description"),
        "language": language,
        "updated_at": "2024-01-02T15:04:05Z",
        "svn_url": format!("https://github.com/octocat/{name}"),
        "fork": fork
    })
}

fn gitx(server: &MockServer) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("gitx");
    cmd.env("GITX_API_URL", server.uri())
        .env("GITX_GEOMETRY", "120x40")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version() {
    let mut cmd = cargo_bin_cmd!("gitx");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gitx"));
}

#[test]
fn test_repos_requires_username() {
    let mut cmd = cargo_bin_cmd!("gitx");
    cmd.arg("repos")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<USERNAME>"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_language_filter_shows_single_row() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("per_page", "5"))
        .and(query_param("sort", "update"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_json("A", "Go", false),
            repo_json("B", "Go", true),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let output = gitx(&server)
        .args(["repos", "octocat", "-l", "go"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("https://github.com/octocat/A").count(), 1);
    assert!(!stdout.contains("octocat/B"));
    assert!(stdout.contains("02-01-2024"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_number_flag_sets_page_size() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("per_page", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_json("A", "Rust", false),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    gitx(&server)
        .args(["repos", "octocat", "--number", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("octocat/A"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_not_found_reports_fetch_error_without_table() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/nobody-here/repos"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found"
        })))
        .mount(&server)
        .await;

    gitx(&server)
        .args(["repos", "nobody-here"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Error during repository fetch"))
        .stdout(predicate::str::contains("nobody-here"))
        .stdout(predicate::str::contains("404 Not Found"))
        .stdout(predicate::str::contains("Last update").not())
        .stdout(predicate::str::contains("┌").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_json_reports_fetch_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    gitx(&server)
        .args(["repos", "octocat"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Error during repository fetch"))
        .stdout(predicate::str::contains("decode"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_list_renders_headers_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    gitx(&server)
        .args(["repos", "octocat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name"))
        .stdout(predicate::str::contains("Description"))
        .stdout(predicate::str::contains("Last update"))
        .stdout(predicate::str::contains("github.com").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_piped_output_without_geometry_reports_render_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_json("A", "Go", false),
        ])))
        .mount(&server)
        .await;

    gitx(&server)
        .env_remove("GITX_GEOMETRY")
        .args(["repos", "octocat"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Error rendering repositories table"))
        .stdout(predicate::str::contains("octocat/A").not());
}
