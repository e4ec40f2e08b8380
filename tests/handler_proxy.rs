mod common;

use axum_test::TestServer;
use common::{BLOOD_ID, BLOOD_SLUG, DNA_ID, PRIMARY_HOST, UNKNOWN_ID};
use pid_resolver::domain::surface::Surface;
use pid_resolver::routes::app_router;

const ROOT: &str = "https://example.org/";

fn make_server() -> (TestServer, std::sync::Arc<common::FakeCatalog>) {
    let (state, catalog) = common::create_test_state(Surface::Proxy);
    (TestServer::new(app_router(state)).unwrap(), catalog)
}

#[tokio::test]
async fn test_proxy_found_is_permanent_redirect() {
    let (server, _catalog) = make_server();

    let response = server.get(&format!("/resource/{}", BLOOD_ID)).await;

    assert_eq!(response.status_code(), 308);
    assert_eq!(
        response.header("location"),
        common::resource_location(PRIMARY_HOST, BLOOD_SLUG)
    );
}

#[tokio::test]
async fn test_proxy_unknown_identifier_redirects_to_root() {
    let (server, _catalog) = make_server();

    let response = server.get(&format!("/resource/{}", UNKNOWN_ID)).await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), ROOT);
}

#[tokio::test]
async fn test_proxy_wrong_shapes_redirect_to_root() {
    let (server, catalog) = make_server();

    for path in [
        "/".to_string(),
        "/resource/".to_string(),
        "/about/team".to_string(),
        format!("/resource/{}/extra", DNA_ID),
    ] {
        let response = server.get(&path).await;
        assert_eq!(response.status_code(), 301, "path {}", path);
        assert_eq!(response.header("location"), ROOT);
    }

    assert_eq!(catalog.calls(), 0);
}

#[tokio::test]
async fn test_proxy_cold_failure_redirects_to_root() {
    let (server, catalog) = make_server();
    catalog.set_failing(true);

    let response = server.get(&format!("/resource/{}", DNA_ID)).await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), ROOT);
}

#[tokio::test]
async fn test_proxy_answers_any_method() {
    let (server, _catalog) = make_server();

    let response = server.post(&format!("/resource/{}", BLOOD_ID)).await;

    assert_eq!(response.status_code(), 308);
}

#[tokio::test]
async fn test_proxy_percent_encodes_slug() {
    let records = vec![pid_resolver::domain::entities::CatalogRecord::new(
        DNA_ID,
        "dna donation",
    )];
    let (state, _catalog) = common::create_test_state_with(
        Surface::Proxy,
        records,
        std::time::Duration::from_secs(300),
    );
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get(&format!("/resource/{}", DNA_ID)).await;

    assert_eq!(response.status_code(), 308);
    assert_eq!(
        response.header("location"),
        "https://example.org/resource/dna%20donation"
    );
}
