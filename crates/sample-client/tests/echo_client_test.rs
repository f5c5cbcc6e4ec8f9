//! Tests for SampleService over the real HTTP transport.
//!
//! Each test starts a wiremock server standing in for the echo service and
//! checks request construction, verbatim response pass-through, and the
//! mapping of failures onto `NetworkError`.

use std::time::Duration;

use sample_client::{EchoApiConfig, SampleService};
use sample_core::NetworkError;
use serde_json::{json, Map, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> SampleService {
    let config = EchoApiConfig::local_mock(&server.uri()).unwrap();
    SampleService::from_config(&config).unwrap()
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[tokio::test]
async fn get_ip_info_returns_body_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ip"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"origin": "203.0.113.7"})))
        .expect(1)
        .mount(&server)
        .await;

    let info = service_for(&server).get_ip_info().await.unwrap();
    assert_eq!(info, object(json!({"origin": "203.0.113.7"})));
}

#[tokio::test]
async fn requests_carry_the_sample_user_agent() {
    let server = MockServer::start().await;

    let ua = format!("sample-a/{}", env!("CARGO_PKG_VERSION"));
    Mock::given(method("GET"))
        .and(path("/ip"))
        .and(header("user-agent", ua.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"origin": "::1"})))
        .expect(1)
        .mount(&server)
        .await;

    service_for(&server).get_ip_info().await.unwrap();
}

#[tokio::test]
async fn post_data_sends_payload_and_returns_envelope() {
    let server = MockServer::start().await;

    let payload = json!({"test": "data"});
    Mock::given(method("POST"))
        .and(path("/post"))
        .and(body_json(&payload))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"json": {"test": "data"}, "status": "ok"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = service_for(&server).post_data(&object(payload)).await.unwrap();
    assert_eq!(result, object(json!({"json": {"test": "data"}, "status": "ok"})));
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/echo/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"origin": "10.0.0.1"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = EchoApiConfig::local_mock(&format!("{}/v1/echo", server.uri())).unwrap();
    let info = SampleService::from_config(&config)
        .unwrap()
        .get_ip_info()
        .await
        .unwrap();
    assert_eq!(info["origin"], json!("10.0.0.1"));
}

#[tokio::test]
async fn non_2xx_status_is_reported_with_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let err = service_for(&server).get_ip_info().await.unwrap_err();
    match err {
        NetworkError::Status { status, body, .. } => {
            assert_eq!(status, 503);
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/post"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .expect(1)
        .mount(&server)
        .await;

    let result = service_for(&server).post_data(&Map::new()).await;
    assert!(matches!(result, Err(NetworkError::Status { status: 400, .. })));
    // MockServer verifies `.expect(1)` on drop.
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>hello</html>"))
        .mount(&server)
        .await;

    let err = service_for(&server).get_ip_info().await.unwrap_err();
    assert!(matches!(err, NetworkError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn json_array_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/post"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
        .mount(&server)
        .await;

    let err = service_for(&server).post_data(&Map::new()).await.unwrap_err();
    assert!(err.to_string().contains("an array"), "got {err}");
}

#[tokio::test]
async fn slow_response_is_a_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"origin": "late"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = EchoApiConfig::local_mock(&server.uri())
        .unwrap()
        .with_timeout_secs(1)
        .unwrap();
    let err = SampleService::from_config(&config)
        .unwrap()
        .get_ip_info()
        .await
        .unwrap_err();
    match err {
        NetworkError::Timeout { timeout_ms, .. } => assert_eq!(timeout_ms, 1000),
        other => panic!("expected Timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_service_is_a_connect_error() {
    let config = EchoApiConfig::local_mock("http://127.0.0.1:1").unwrap();
    let err = SampleService::from_config(&config)
        .unwrap()
        .get_ip_info()
        .await
        .unwrap_err();
    assert!(matches!(err, NetworkError::Connect { .. }), "got {err:?}");
}
