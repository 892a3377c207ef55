use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use lamport_kernel::{Event, LogSnapshot};
use reqwest::{Response, StatusCode};
use serde::Deserialize;

pub const DEFAULT_NODE: &str = "http://127.0.0.1:8080";

/// Body of `GET /time`.
#[derive(Debug, Deserialize)]
pub struct TimeReading {
    pub lamport_timestamp: u64,
    pub wall_time: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Thin HTTP client for a running `lamport-node`.
#[derive(Debug, Clone)]
pub struct NodeClient {
    base: String,
    http: reqwest::Client,
}

impl NodeClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// `POST /event`. The node applies its default label when `message` is `None`.
    pub async fn create_event(&self, message: Option<&str>) -> Result<Event> {
        let mut req = self.http.post(self.url("/event"));
        if let Some(message) = message {
            req = req.query(&[("message", message)]);
        }
        let resp = req.send().await.with_context(|| format!("Failed to reach {}", self.base))?;
        decode(resp).await
    }

    /// `POST /message`: deliver a message stamped `timestamp` by its sender.
    pub async fn send_message(&self, timestamp: i64, message: &str) -> Result<Event> {
        let resp = self
            .http
            .post(self.url("/message"))
            .query(&[("timestamp", timestamp.to_string().as_str()), ("message", message)])
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.base))?;
        decode(resp).await
    }

    /// `GET /events`.
    pub async fn events(&self) -> Result<LogSnapshot> {
        let resp = self
            .http
            .get(self.url("/events"))
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.base))?;
        decode(resp).await
    }

    /// `GET /time`.
    pub async fn time(&self) -> Result<TimeReading> {
        let resp = self
            .http
            .get(self.url("/time"))
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.base))?;
        decode(resp).await
    }
}

async fn decode<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    if status.is_success() {
        return resp.json::<T>().await.context("Malformed response from node");
    }

    let body = resp.text().await.unwrap_or_default();
    bail!("{}", describe_failure(status, &body))
}

fn describe_failure(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => format!("Node rejected request ({status}): {}", err.error),
        Err(_) if body.trim().is_empty() => format!("Node rejected request ({status})"),
        Err(_) => format!("Node rejected request ({status}): {}", body.trim()),
    }
}
