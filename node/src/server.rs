// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use lamport_kernel::{Event, LogSnapshot};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::api::*;
use crate::engine::SharedEngine;
use crate::errors::NodeError;

pub const USAGE: &str = r#"Lamport Timestamp Server

Available endpoints:
- POST /event?message=<msg>     : Create a local event
- POST /message?timestamp=<ts>&message=<msg> : Process received message
- GET  /events                  : Get all events with timestamps
- GET  /time                    : Get current Lamport timestamp
- GET  /metrics                 : Prometheus metrics

Example usage:
curl -X POST "http://localhost:8080/event?message=User%20login"
curl -X POST "http://localhost:8080/message?timestamp=5&message=External%20event"
curl http://localhost:8080/events
"#;

pub fn build_router(state: SharedEngine) -> Router {
    Router::new()
        .route("/", get(usage))
        .route("/event", post(create_event))
        .route("/message", post(receive_message))
        .route("/events", get(list_events))
        .route("/time", get(current_time))
        // Observability
        .route("/metrics", get(metrics_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serve the router on an already bound listener until the server stops.
pub async fn serve(listener: TcpListener, state: SharedEngine) -> Result<(), NodeError> {
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

async fn usage() -> &'static str {
    USAGE
}

async fn create_event(
    State(engine): State<SharedEngine>,
    Query(query): Query<CreateEventQuery>,
) -> Json<Event> {
    Json(engine.record_local(query.label()))
}

async fn receive_message(
    State(engine): State<SharedEngine>,
    Query(query): Query<ReceiveMessageQuery>,
) -> Result<Json<Event>, NodeError> {
    let incoming = query.validate()?;
    Ok(Json(engine.record_message(incoming.timestamp, &incoming.message)))
}

async fn list_events(State(engine): State<SharedEngine>) -> Json<LogSnapshot> {
    Json(engine.snapshot())
}

async fn current_time(State(engine): State<SharedEngine>) -> Json<TimeResponse> {
    Json(TimeResponse {
        lamport_timestamp: engine.now(),
        wall_time: Utc::now(),
    })
}

async fn metrics_handler() -> String {
    crate::telemetry::get_metrics()
}
