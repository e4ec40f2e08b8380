mod common;

use axum_test::TestServer;
use common::{DNA_ID, DNA_SLUG, PRIMARY_HOST, UNKNOWN_ID};
use pid_resolver::domain::surface::Surface;
use pid_resolver::error::NOT_FOUND_BODY;
use pid_resolver::routes::app_router;

fn make_server() -> TestServer {
    let (state, _catalog) = common::create_test_state(Surface::Route);
    TestServer::new(app_router(state)).unwrap()
}

#[tokio::test]
async fn test_route_single_segment_redirects() {
    let server = make_server();

    let response = server.get(&format!("/resource/{}", DNA_ID)).await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(
        response.header("location"),
        common::resource_location(PRIMARY_HOST, DNA_SLUG)
    );
}

#[tokio::test]
async fn test_route_unknown_identifier() {
    let server = make_server();

    let response = server.get(&format!("/resource/{}", UNKNOWN_ID)).await;

    response.assert_status_not_found();
    assert_eq!(response.text(), NOT_FOUND_BODY);
}

#[tokio::test]
async fn test_route_rejects_multiple_segments() {
    let server = make_server();

    let response = server.get(&format!("/resource/{}/{}", DNA_ID, DNA_ID)).await;

    response.assert_status_not_found();
    assert_eq!(response.text(), NOT_FOUND_BODY);
}

#[tokio::test]
async fn test_route_rejects_trailing_slash() {
    let server = make_server();

    let response = server.get(&format!("/resource/{}/", DNA_ID)).await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_route_other_paths_not_found() {
    let server = make_server();

    for path in ["/", "/resource", "/about", "/pid/resource"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), 404, "path {}", path);
        assert_eq!(response.text(), NOT_FOUND_BODY);
    }
}

#[tokio::test]
async fn test_route_health_is_served() {
    let server = make_server();

    server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn test_route_decodes_candidate_like_redirector() {
    let records = vec![pid_resolver::domain::entities::CatalogRecord::new(
        "legacy 42",
        "legacy-resource",
    )];
    let (state, _catalog) = common::create_test_state_with(
        Surface::Route,
        records,
        std::time::Duration::from_secs(300),
    );
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get("/resource/legacy%2042").await;
    assert_eq!(response.status_code(), 303);

    let response = server.get(&format!("/resource/{}%2Fextra", DNA_ID)).await;
    response.assert_status_not_found();
}
