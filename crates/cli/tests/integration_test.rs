use std::sync::Arc;

use lamport_cli::client::NodeClient;
use lamport_cli::commands::{event, events, message, time};
use lamport_node::engine::{Engine, SharedEngine};
use lamport_node::server;
use tokio::net::TcpListener;

async fn spawn_node() -> (SharedEngine, NodeClient) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let engine: SharedEngine = Arc::new(Engine::default());

    let served = engine.clone();
    tokio::spawn(async move {
        let _ = server::serve(listener, served).await;
    });

    (engine, NodeClient::new(format!("http://{addr}")))
}

#[tokio::test]
async fn test_client_round_trip_against_node() {
    let (engine, client) = spawn_node().await;

    let first = client.create_event(Some("User login")).await.unwrap();
    assert_eq!(first.label, "User login");
    assert_eq!(first.logical_time, 1);

    let defaulted = client.create_event(None).await.unwrap();
    assert_eq!(defaulted.label, "Local event");

    let received = client.send_message(5, "External event").await.unwrap();
    assert_eq!(received.logical_time, 6);
    assert_eq!(received.id, "msg-6");

    let listing = client.events().await.unwrap();
    assert_eq!(listing.count, 3);
    assert_eq!(listing.current_time, 6);

    let reading = client.time().await.unwrap();
    assert_eq!(reading.lamport_timestamp, 6);
    assert_eq!(engine.now(), 6);
}

#[tokio::test]
async fn test_node_errors_surface_in_client() {
    let (engine, client) = spawn_node().await;

    let err = client.send_message(3, "").await.unwrap_err();
    assert!(err.to_string().contains("Missing timestamp or message parameter"));
    assert_eq!(engine.now(), 0);
}

#[tokio::test]
async fn test_commands_run_against_node() {
    let (engine, client) = spawn_node().await;

    assert!(event::run(&client, Some("first".to_string())).await.is_ok());
    assert!(message::run(&client, 10, "remote").await.is_ok());
    assert!(events::run(&client).await.is_ok());
    assert!(time::run(&client).await.is_ok());

    assert_eq!(engine.now(), 11);
}

#[tokio::test]
async fn test_unreachable_node_is_an_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = NodeClient::new(format!("http://{addr}"));
    let err = client.time().await.unwrap_err();
    assert!(err.to_string().contains("Failed to reach"));
}
