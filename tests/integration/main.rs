//! End-to-end tests against a server bound to a real socket.

use std::net::{Ipv4Addr, SocketAddr};

use pretty_assertions::assert_eq;
use serde_json::Value;

use status_service::api::AppState;
use status_service::clock::ProcessClock;
use status_service::config::Config;
use status_service::metadata::ServiceInfo;
use status_service::server;

/// Start the service on an ephemeral localhost port.
async fn spawn_server() -> SocketAddr {
    let listener = server::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let state = AppState::new(ServiceInfo::from_build(), ProcessClock::start());
    tokio::spawn(server::serve(listener, state));

    addr
}

#[tokio::test]
async fn health_live_over_http() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/health/live"))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], env!("CARGO_PKG_NAME"));
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime"].as_f64().unwrap() < 1.0);
}

#[tokio::test]
async fn root_and_health_share_identity() {
    let addr = spawn_server().await;

    let root: Value = reqwest::get(format!("http://{addr}/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let health: Value = reqwest::get(format!("http://{addr}/health/live"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        root["message"],
        format!("{} is running!", env!("CARGO_PKG_NAME"))
    );
    assert_eq!(root["service"], health["service"]);
    assert_eq!(root["version"], health["version"]);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/unknown")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn second_bind_on_same_port_fails() {
    let addr = spawn_server().await;

    let err = server::bind(addr).await.unwrap_err();
    assert!(matches!(err, status_service::ServiceError::Bind { .. }));
}

#[tokio::test]
async fn port_from_environment_is_the_bound_port() {
    // Reserve a free port, then release it for the service to claim.
    let port = std::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let config = Config::from_vars(vec![("PORT".to_string(), port.to_string())]).unwrap();
    let listener = server::bind(server::listen_addr(&config)).await.unwrap();

    let local = listener.local_addr().unwrap();
    assert_eq!(local.port(), port);
    assert!(local.ip().is_unspecified());
}
