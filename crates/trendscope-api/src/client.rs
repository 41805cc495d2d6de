use reqwest::StatusCode;
use trendscope_types::TrendRecord;

use crate::error::{Error, Result};
use crate::schema::{ErrorBody, TrendsResponse};

/// Blocking client for the trends backend.
///
/// No retries and no client-side timeout beyond the transport defaults;
/// retry is always an explicit user action, and callers keep a single
/// request in flight by convention.
pub struct ApiClient {
    base: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            base,
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// GET /api/trends — the full current record set.
    pub fn fetch_trends(&self) -> Result<Vec<TrendRecord>> {
        let response = self.http.get(format!("{}/api/trends", self.base)).send()?;
        let status = response.status();
        let body = response.text()?;
        decode_fetch(status, &body)
    }

    /// POST /api/trends/refresh — re-run the upstream pipeline and return
    /// the refreshed record set.
    pub fn refresh_trends(&self) -> Result<Vec<TrendRecord>> {
        let response = self
            .http
            .post(format!("{}/api/trends/refresh", self.base))
            .send()?;
        let status = response.status();
        let body = response.text()?;
        decode_refresh(status, &body)
    }
}

/// Decode a fetch response. Non-2xx surfaces as "HTTP {status}: {reason}".
pub fn decode_fetch(status: StatusCode, body: &str) -> Result<Vec<TrendRecord>> {
    if !status.is_success() {
        return Err(Error::Status {
            status: status.as_u16(),
            message: format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ),
        });
    }
    let parsed: TrendsResponse = serde_json::from_str(body)?;
    Ok(parsed.trends)
}

/// Decode a refresh response. Non-2xx surfaces the server's `error` string
/// when the body carries one, falling back to "HTTP {status}". A success
/// body that fails to parse counts as an empty result, not an error.
pub fn decode_refresh(status: StatusCode, body: &str) -> Result<Vec<TrendRecord>> {
    if !status.is_success() {
        let server_message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error);
        return Err(Error::Status {
            status: status.as_u16(),
            message: server_message.unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
        });
    }
    let parsed: TrendsResponse = serde_json::from_str(body).unwrap_or_default();
    Ok(parsed.trends)
}
