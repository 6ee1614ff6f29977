//! Where node snapshots come from.
//!
//! A source is fetched exactly once per session. Payloads are either the
//! monitor envelope `{ "nodes": [...] }` or a bare array of records.

use crate::Result;
use nodescope_types::{NodeEnvelope, NodeRecord};
use serde::Deserialize;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tracing::debug;

pub trait NodeSource {
    /// Short description for logs and the dashboard header
    fn describe(&self) -> String;

    fn fetch(&self) -> impl Future<Output = Result<Vec<NodeRecord>>> + Send;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NodePayload {
    Bare(Vec<NodeRecord>),
    Envelope(NodeEnvelope),
}

impl NodePayload {
    fn into_records(self) -> Vec<NodeRecord> {
        match self {
            NodePayload::Bare(nodes) => nodes,
            NodePayload::Envelope(envelope) => envelope.nodes,
        }
    }
}

/// Decode a node payload in either accepted shape.
pub fn parse_payload(text: &str) -> Result<Vec<NodeRecord>> {
    let payload: NodePayload = serde_json::from_str(text)?;
    Ok(payload.into_records())
}

/// Node monitor over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

impl NodeSource for HttpSource {
    fn describe(&self) -> String {
        self.endpoint.clone()
    }

    async fn fetch(&self) -> Result<Vec<NodeRecord>> {
        debug!(endpoint = %self.endpoint, "fetching nodes");
        let body = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_payload(&body)
    }
}

/// JSON file on disk, or stdin when the path is `-`.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}

impl NodeSource for FileSource {
    fn describe(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            self.path.display().to_string()
        }
    }

    async fn fetch(&self) -> Result<Vec<NodeRecord>> {
        let text = if self.is_stdin() {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            text
        } else {
            debug!(path = %self.path.display(), "reading nodes");
            tokio::fs::read_to_string(&self.path).await?
        };
        parse_payload(&text)
    }
}

/// Records already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    nodes: Vec<NodeRecord>,
}

impl StaticSource {
    pub fn new(nodes: Vec<NodeRecord>) -> Self {
        Self { nodes }
    }
}

impl NodeSource for StaticSource {
    fn describe(&self) -> String {
        format!("{} in-memory nodes", self.nodes.len())
    }

    async fn fetch(&self) -> Result<Vec<NodeRecord>> {
        Ok(self.nodes.clone())
    }
}

/// Source picked from a user-supplied location string.
#[derive(Debug, Clone)]
pub enum AnySource {
    Http(HttpSource),
    File(FileSource),
}

impl AnySource {
    /// `http://` and `https://` locations are fetched, anything else is a
    /// file path (`-` for stdin).
    pub fn from_location(location: &str, timeout: Duration) -> Result<Self> {
        if location.starts_with("http://") || location.starts_with("https://") {
            Ok(AnySource::Http(HttpSource::new(location, timeout)?))
        } else {
            Ok(AnySource::File(FileSource::new(location)))
        }
    }
}

impl NodeSource for AnySource {
    fn describe(&self) -> String {
        match self {
            AnySource::Http(source) => source.describe(),
            AnySource::File(source) => source.describe(),
        }
    }

    async fn fetch(&self) -> Result<Vec<NodeRecord>> {
        match self {
            AnySource::Http(source) => source.fetch().await,
            AnySource::File(source) => source.fetch().await,
        }
    }
}
