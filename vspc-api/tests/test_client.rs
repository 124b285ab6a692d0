//! Integration tests for the resource endpoints and transport behaviour.

mod common;

use common::{client_for, mount_page, object_body, page_body, retrying_client_for, TOKEN};
use serde_json::json;
use vspc_api::ApiClient;
use vspc_core::{ServerConfig, VspcError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ---- Resource endpoints ----

#[tokio::test]
async fn about_sends_bearer_token_and_unwraps_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/about"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .and(header("accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(object_body(json!({ "serverVersion": "8.1.0.21377" }))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let about = client_for(&server, 100).about().await.unwrap();
    assert_eq!(about["serverVersion"], "8.1.0.21377");
}

#[tokio::test]
async fn custom_user_agent_and_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/about"))
        .and(header("user-agent", "probe/1.0"))
        .and(header("x-tenant", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(object_body(json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let config = ServerConfig::new(server.uri(), TOKEN)
        .with_user_agent("probe/1.0")
        .with_header("X-Tenant", "acme");
    ApiClient::new(&config).unwrap().about().await.unwrap();
}

#[tokio::test]
async fn company_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/organizations/companies/c-42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(object_body(json!({ "instanceUid": "c-42", "name": "Acme" }))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let company = client_for(&server, 100).company("c-42").await.unwrap();
    assert_eq!(company["name"], "Acme");
}

#[tokio::test]
async fn backup_servers_and_single_server() {
    let server = MockServer::start().await;
    mount_page(&server, "/api/v3/infrastructure/backupServers", "vbr", 2, 0, 3).await;
    mount_page(&server, "/api/v3/infrastructure/backupServers", "vbr", 2, 2, 3).await;
    Mock::given(method("GET"))
        .and(path("/api/v3/infrastructure/backupServers/vbr-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(object_body(json!({ "instanceUid": "vbr-1" }))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 2);
    let servers = client.backup_servers().await.unwrap();
    assert_eq!(servers.len(), 3);

    let first = client.backup_server("vbr-1").await.unwrap();
    assert_eq!(first["instanceUid"], servers[1]["instanceUid"]);
}

#[tokio::test]
async fn alarm_endpoints_hit_their_paths() {
    let server = MockServer::start().await;
    mount_page(&server, "/api/v3/alarms/active", "alarm", 50, 0, 2).await;
    mount_page(&server, "/api/v3/alarms/active/alarm-0/history", "change", 50, 0, 3).await;
    mount_page(&server, "/api/v3/alarms/templates", "template", 50, 0, 4).await;
    mount_page(&server, "/api/v3/alarms/templates/template-1/events", "event", 50, 0, 5).await;
    Mock::given(method("GET"))
        .and(path("/api/v3/alarms/active/alarm-0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(object_body(json!({ "instanceUid": "alarm-0" }))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/alarms/templates/template-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(object_body(json!({ "instanceUid": "template-1" }))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 50);
    assert_eq!(client.active_alarms().await.unwrap().len(), 2);
    assert_eq!(client.alarm_history("alarm-0").await.unwrap().len(), 3);
    assert_eq!(client.alarm_templates().await.unwrap().len(), 4);
    assert_eq!(client.alarm_template_events("template-1").await.unwrap().len(), 5);
    assert_eq!(client.active_alarm("alarm-0").await.unwrap()["instanceUid"], "alarm-0");
    assert_eq!(client.alarm_template("template-1").await.unwrap()["instanceUid"], "template-1");
}

#[tokio::test]
async fn ids_are_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/organizations/companies/a%20b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(object_body(json!({ "name": "spaced" }))))
        .expect(1)
        .mount(&server)
        .await;

    let company = client_for(&server, 100).company("a b").await.unwrap();
    assert_eq!(company["name"], "spaced");
}

#[tokio::test]
async fn count_reads_paging_total() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/alarms/active"))
        .and(query_param("limit", "1"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(vec![json!({})], 17, 0)))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client_for(&server, 100).active_alarm_count().await.unwrap(), 17);
}

#[tokio::test]
async fn count_tolerates_loose_paging_metadata() {
    let cases = [
        (json!({ "data": [{}], "meta": { "pagingInfo": { "total": "35" } } }), 35),
        (json!({ "data": [{}], "meta": { "pagingInfo": { "total": 35.0 } } }), 35),
        (json!({ "data": [{}], "meta": "x" }), 0),
        (json!({ "data": [] }), 0),
    ];

    for (body, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/organizations/companies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let client = client_for(&server, 10);
        assert_eq!(client.company_count().await.unwrap(), expected, "body {body}");
        // The paged listing reads the same metadata without failing.
        assert!(client.companies().await.is_ok(), "body {body}");
    }
}

#[tokio::test]
async fn raw_get_passes_query_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/organizations/companies"))
        .and(query_param("filter", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(vec![], 0, 0)))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server, 100)
        .get("/api/v3/organizations/companies", &[("filter", "acme".to_string())])
        .await
        .unwrap();
    assert_eq!(body["meta"]["pagingInfo"]["total"], 0);
}

// ---- Error mapping ----

#[tokio::test]
async fn unauthorized_is_a_transport_error_outside_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server, 100).companies().await.unwrap_err();
    assert!(matches!(err, VspcError::Unauthorized(_)));
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn not_found_maps_to_client_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such company"))
        .mount(&server)
        .await;

    let err = client_for(&server, 100).company("missing").await.unwrap_err();
    match err {
        VspcError::ClientError { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "no such company");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn invalid_json_maps_to_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server, 100).about().await.unwrap_err();
    assert!(matches!(err, VspcError::Serialization(_)));
}

#[tokio::test]
async fn retryable_status_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/about"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/about"))
        .respond_with(ResponseTemplate::new(200).set_body_json(object_body(json!({ "serverVersion": "8" }))))
        .expect(1)
        .mount(&server)
        .await;

    let about = retrying_client_for(&server).about().await.unwrap();
    assert_eq!(about["serverVersion"], "8");
}

#[tokio::test]
async fn server_error_surfaces_after_retries_run_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(3)
        .mount(&server)
        .await;

    let err = retrying_client_for(&server).about().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn connection_failure_maps_to_http_error() {
    let config = ServerConfig::new("http://127.0.0.1:9", TOKEN);
    let client = ApiClient::new(&config)
        .unwrap()
        .with_retry_config(vspc_api::RetryConfig::disabled());

    let err = client.about().await.unwrap_err();
    assert!(matches!(err, VspcError::Http(_) | VspcError::Timeout(_)));
}
