//! HTTP range fetch
//!
//! A thin blocking client for the backend's `values:batchGet` endpoint.
//! Credential acquisition is somebody else's job: the client takes a
//! ready bearer token or API key and puts it on the request. Failed
//! requests surface as [`ExportError`]; there is no retry layer.

use serde_json::Value;

use super::BatchGetResponse;
use crate::utils::error::{ExportError, ExportResult};

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4";

/// Ready credential for the backend
#[derive(Debug, Clone)]
pub enum Auth {
    /// OAuth bearer token (already acquired)
    Bearer(String),
    /// API key, for spreadsheets readable without a user context
    ApiKey(String),
}

impl Auth {
    /// Pick up a credential from the environment
    ///
    /// `SHEETS_TOKEN` wins over `SHEETS_API_KEY`.
    pub fn from_env() -> Option<Auth> {
        if let Ok(token) = std::env::var("SHEETS_TOKEN") {
            if !token.is_empty() {
                return Some(Auth::Bearer(token));
            }
        }
        if let Ok(key) = std::env::var("SHEETS_API_KEY") {
            if !key.is_empty() {
                return Some(Auth::ApiKey(key));
            }
        }
        None
    }
}

/// Blocking client for batch range reads
pub struct SheetsClient {
    http: reqwest::blocking::Client,
    base_url: String,
    auth: Auth,
}

impl SheetsClient {
    pub fn new(auth: Auth) -> ExportResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("gridson/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(SheetsClient {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            auth,
        })
    }

    /// Point the client at a different backend host (tests, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch all requested ranges of one spreadsheet in a single call
    pub fn batch_get(
        &self,
        spreadsheet_id: &str,
        ranges: &[String],
    ) -> ExportResult<BatchGetResponse> {
        if spreadsheet_id.is_empty() {
            return Err(ExportError::invalid("spreadsheet id is empty"));
        }
        if ranges.is_empty() {
            return Err(ExportError::invalid("no ranges requested"));
        }

        let url = format!(
            "{}/spreadsheets/{}/values:batchGet",
            self.base_url, spreadsheet_id
        );

        let mut query: Vec<(&str, &str)> = ranges
            .iter()
            .map(|range| ("ranges", range.as_str()))
            .collect();

        let mut request = self.http.get(&url);
        match &self.auth {
            Auth::Bearer(token) => {
                request = request.bearer_auth(token);
            }
            Auth::ApiKey(key) => {
                query.push(("key", key.as_str()));
            }
        }

        let response = request.query(&query).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ExportError::api(status.as_u16(), error_snippet(&body)));
        }

        Ok(response.json::<BatchGetResponse>()?)
    }
}

/// Pull a short human-readable message out of an error body
///
/// The backend wraps errors as `{"error": {"message": ...}}`; anything
/// else is truncated raw text.
fn error_snippet(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
        {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.chars().count() > 200 {
        let head: String = trimmed.chars().take(200).collect();
        format!("{}...", head)
    } else if trimmed.is_empty() {
        "no response body".to_string()
    } else {
        trimmed.to_string()
    }
}
