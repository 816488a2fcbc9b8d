//! alternative.me client against a local fake provider.

mod support;

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use greedwatch::adapter::outbound::alternative::AlternativeMeClient;
use greedwatch::domain::time::{format_timestamp, taipei};
use greedwatch::error::FetchError;
use greedwatch::port::IndexSource;

use support::http::spawn_server;

async fn client_for(router: Router) -> AlternativeMeClient {
    let base = spawn_server(router).await;
    AlternativeMeClient::new(format!("{base}/fng/"), Duration::from_secs(5), taipei()).unwrap()
}

#[tokio::test]
async fn fetches_latest_reading() {
    let router = Router::new().route(
        "/fng/",
        get(|| async {
            r#"{"name":"Fear and Greed Index","data":[{"value":"25","value_classification":"Extreme Fear","timestamp":"1709251200","time_until_update":"3600"}],"metadata":{"error":null}}"#
        }),
    );
    let client = client_for(router).await;

    let reading = client.fetch().await.unwrap();

    assert_eq!(reading.value(), 25.0);
    assert_eq!(reading.classification(), "Extreme Fear");
    assert_eq!(format_timestamp(reading.observed_at()), "2024-03-01 08:00:00");
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let router = Router::new().route(
        "/fng/",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let client = client_for(router).await;

    let result = client.fetch().await;

    assert!(matches!(result, Err(FetchError::Status { status: 503 })));
}

#[tokio::test]
async fn empty_data_is_reported() {
    let router = Router::new().route("/fng/", get(|| async { r#"{"data":[]}"# }));
    let client = client_for(router).await;

    assert!(matches!(client.fetch().await, Err(FetchError::Empty)));
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let router = Router::new().route("/fng/", get(|| async { "<html>oops</html>" }));
    let client = client_for(router).await;

    assert!(matches!(client.fetch().await, Err(FetchError::Malformed(_))));
}

#[tokio::test]
async fn unreachable_provider_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client =
        AlternativeMeClient::new(format!("http://{addr}/fng/"), Duration::from_secs(2), taipei())
            .unwrap();

    assert!(matches!(client.fetch().await, Err(FetchError::Http(_))));
}
