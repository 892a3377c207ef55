// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use lamport_node::config::NodeConfig;
use lamport_node::engine::{Engine, SharedEngine};
use lamport_node::errors::NodeError;
use lamport_node::server;
use lamport_node::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), NodeError> {
    telemetry::init_telemetry()?;

    let cfg = NodeConfig::from_env()?;
    tracing::info!("Initializing Lamport node with config: {:?}", cfg);

    let engine: SharedEngine = Arc::new(Engine::new(&cfg));
    if cfg.record_startup_event {
        engine.record_startup();
    }

    let listener = TcpListener::bind(cfg.bind_addr).await?;
    tracing::info!("Visit http://{} for usage instructions", cfg.bind_addr);
    server::serve(listener, engine).await
}
