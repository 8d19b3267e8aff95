use std::time::Instant;

use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::core::error::ToolError;
use crate::domain::{DraftParams, ScheduledDraftsQuery};
use crate::infra::config::UpstreamConfig;
use crate::infra::http::headers::add_standard_headers;

pub const DEFAULT_BASE_URL: &str = "https://api.typefully.com/v1";

/// Header carrying the API key. The upstream expects the key under this name
/// with a `Bearer ` prefix; both are kept here so a contract change is a
/// one-line edit.
const API_KEY_HEADER: &str = "X-API-KEY";

#[derive(Debug, Error)]
pub enum TypefullyError {
    #[error("Typefully API key is required. Set TYPEFULLY_API_KEY environment variable.")]
    MissingApiKey,
    #[error("Typefully API error: {status} - {body}")]
    Upstream { status: u16, body: String },
    #[error("{0}")]
    Transport(String),
}

impl From<TypefullyError> for ToolError {
    fn from(e: TypefullyError) -> Self {
        ToolError::Message(e.to_string())
    }
}

/// Thin, stateless client for the Typefully drafts API. One HTTP round trip
/// per call; no retries, no backoff, no timeout override.
#[derive(Clone, Debug)]
pub struct TypefullyClient {
    base: String,
    api_key: String,
    http: Client,
}

impl TypefullyClient {
    /// Fails fast when the API key is missing; this is the only fatal
    /// configuration error and is surfaced before any request can be made.
    pub fn new(
        base: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, TypefullyError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TypefullyError::MissingApiKey);
        }
        Ok(Self {
            base: base.into(),
            api_key,
            http: Client::new(),
        })
    }

    pub fn from_config(cfg: &UpstreamConfig) -> Result<Self, TypefullyError> {
        let base = cfg
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let key = cfg.api_key.clone().unwrap_or_default();
        Self::new(base, key)
    }

    pub async fn create_draft(&self, params: &DraftParams) -> Result<JsonValue, TypefullyError> {
        let url = self.endpoint("drafts/")?;
        tracing::debug!(endpoint = %url, "typefully.create_draft request");
        self.execute("create_draft", self.http.post(url).json(params))
            .await
    }

    pub async fn scheduled_drafts(
        &self,
        query: &ScheduledDraftsQuery,
    ) -> Result<JsonValue, TypefullyError> {
        let url = self.scheduled_drafts_url(query)?;
        tracing::debug!(endpoint = %url, "typefully.scheduled_drafts request");
        self.execute("get_scheduled_drafts", self.http.get(url))
            .await
    }

    pub async fn published_drafts(&self) -> Result<JsonValue, TypefullyError> {
        let url = self.endpoint("drafts/recently-published")?;
        tracing::debug!(endpoint = %url, "typefully.published_drafts request");
        self.execute("get_published_drafts", self.http.get(url))
            .await
    }

    fn endpoint(&self, path: &str) -> Result<Url, TypefullyError> {
        let raw = format!("{}/{}", self.base.trim_end_matches('/'), path);
        Url::parse(&raw)
            .map_err(|e| TypefullyError::Transport(format!("invalid endpoint {raw}: {e}")))
    }

    fn scheduled_drafts_url(&self, query: &ScheduledDraftsQuery) -> Result<Url, TypefullyError> {
        let mut url = self.endpoint("drafts/recently-scheduled")?;
        if let Some(filter) = query.content_filter.as_deref() {
            url.query_pairs_mut().append_pair("content_filter", filter);
        }
        Ok(url)
    }

    /// Send one request and map its outcome. 2xx bodies are returned as
    /// opaque JSON; everything else becomes a typed failure carrying the
    /// status and whatever body the upstream produced.
    async fn execute(
        &self,
        op: &'static str,
        builder: RequestBuilder,
    ) -> Result<JsonValue, TypefullyError> {
        let (builder, _rid) = add_standard_headers(builder, None);
        let builder = builder.header(API_KEY_HEADER, format!("Bearer {}", self.api_key));

        let start = Instant::now();
        let result = self.send_and_read(builder).await;
        let elapsed_ms = start.elapsed().as_millis() as f64;
        metrics::histogram!("typefully_upstream_request_ms", "op" => op).record(elapsed_ms);
        if result.is_err() {
            metrics::counter!("typefully_upstream_error_total", "op" => op).increment(1);
        }
        result
    }

    async fn send_and_read(&self, builder: RequestBuilder) -> Result<JsonValue, TypefullyError> {
        let resp = builder
            .send()
            .await
            .map_err(|e| TypefullyError::Transport(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            return Err(TypefullyError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        resp.json::<JsonValue>()
            .await
            .map_err(|e| TypefullyError::Transport(e.to_string()))
    }
}
