mod common;

use axum_test::TestServer;
use common::{DNA_ID, DNA_SLUG, PID_HOST, PRIMARY_HOST, UNKNOWN_ID};
use pid_resolver::domain::surface::Surface;
use pid_resolver::error::NOT_FOUND_BODY;
use pid_resolver::routes::app_router;

fn make_server() -> TestServer {
    let (state, _catalog) = common::create_test_state(Surface::Api);
    TestServer::new(app_router(state)).unwrap()
}

#[tokio::test]
async fn test_pid_api_found_on_pid_host() {
    let server = make_server();

    let response = server
        .get(&format!("/resource/{}", DNA_ID))
        .add_header("Host", PID_HOST)
        .await;

    assert_eq!(response.status_code(), 308);
    assert_eq!(
        response.header("location"),
        common::resource_location(PRIMARY_HOST, DNA_SLUG)
    );
}

#[tokio::test]
async fn test_pid_api_host_match_ignores_case_and_port() {
    let server = make_server();

    let response = server
        .get(&format!("/resource/{}", DNA_ID))
        .add_header("Host", "PID.Example.org:8443")
        .await;

    assert_eq!(response.status_code(), 308);
}

#[tokio::test]
async fn test_pid_api_unknown_identifier() {
    let server = make_server();

    let response = server
        .get(&format!("/resource/{}", UNKNOWN_ID))
        .add_header("Host", PID_HOST)
        .await;

    response.assert_status_not_found();
    assert_eq!(response.text(), NOT_FOUND_BODY);
}

#[tokio::test]
async fn test_pid_api_other_host_not_found() {
    let server = make_server();

    for host in [PRIMARY_HOST, "pid.example.net", "evil.example.org"] {
        let response = server
            .get(&format!("/resource/{}", DNA_ID))
            .add_header("Host", host)
            .await;

        assert_eq!(response.status_code(), 404, "host {}", host);
        assert_eq!(response.text(), NOT_FOUND_BODY);
    }
}

#[tokio::test]
async fn test_pid_api_extra_segments_not_found() {
    let server = make_server();

    let response = server
        .get(&format!("/resource/{}/history", DNA_ID))
        .add_header("Host", PID_HOST)
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_pid_api_other_paths_not_found() {
    let server = make_server();

    let response = server
        .get(&format!("/{}", DNA_ID))
        .add_header("Host", PID_HOST)
        .await;

    response.assert_status_not_found();
    assert_eq!(response.text(), NOT_FOUND_BODY);
}
