//! HTTP client for the HireHub applicant-tracking API.
//!
//! Thin wrapper over reqwest: the four REST calls, CSRF header injection
//! on mutating requests, and mapping of server rejections into the error
//! taxonomy consumed by the UI layers.

use crate::model::{ApplicantRecord, NewApplicant, StagePatch};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{multipart, StatusCode, Url};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Name of both the CSRF cookie and (on the wire) the request header value
/// source, matching the server's Django defaults.
const CSRF_COOKIE: &str = "csrftoken";
const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or non-2xx response on a read.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response on a mutating call, with server-supplied detail.
    #[error("server rejected request ({status}): {detail}")]
    Api { status: u16, detail: String },
    /// Response body that could not be decoded where one was required.
    #[error("malformed response: {0}")]
    Parse(String),
}

/// API client for the applicants collection.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
    jar: Arc<Jar>,
    csrf_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, csrf_token: Option<String>) -> Result<Self, ClientError> {
        let jar = Arc::new(Jar::default());
        let client = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .user_agent(format!("hirehub-cli/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            jar,
            csrf_token,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/api/applicants/", self.base_url)
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}/api/applicants/{}/", self.base_url, id)
    }

    /// Fetch the whole collection as raw JSON. The store normalizes the
    /// envelope shape (bare array vs `{results: [...]}`).
    pub async fn list(&self) -> Result<Value, ClientError> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Network(format!("HTTP {}", status.as_u16())));
        }
        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Fetch a single record.
    pub async fn get(&self, id: i64) -> Result<ApplicantRecord, ClientError> {
        let response = self
            .client
            .get(self.record_url(id))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Network(format!("HTTP {}", status.as_u16())));
        }
        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Create an applicant. A resume attachment switches the encoding from
    /// JSON to multipart; without one the payload stays structured.
    pub async fn create(
        &self,
        payload: &NewApplicant,
        resume: Option<(String, Vec<u8>)>,
    ) -> Result<ApplicantRecord, ClientError> {
        let mut request = self.client.post(self.collection_url());
        if let Some(token) = self.csrf_token() {
            request = request.header(CSRF_HEADER, token);
        }

        let request = match resume {
            Some((filename, bytes)) => {
                let form = multipart::Form::new()
                    .text("name", payload.name.clone())
                    .text("email", payload.email.clone())
                    .text("phone", payload.phone.clone())
                    .text("source", payload.source.clone())
                    .text("tags", payload.tags.clone())
                    .text("current_stage", payload.current_stage.clone())
                    .part("resume_file", multipart::Part::bytes(bytes).file_name(filename));
                request.multipart(form)
            }
            None => request.json(payload),
        };

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::mutating_response(response).await
    }

    /// Patch a record's stage and comment fields.
    pub async fn update(&self, id: i64, patch: &StagePatch) -> Result<ApplicantRecord, ClientError> {
        let mut request = self.client.patch(self.record_url(id)).json(patch);
        if let Some(token) = self.csrf_token() {
            request = request.header(CSRF_HEADER, token);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::mutating_response(response).await
    }

    async fn mutating_response(response: reqwest::Response) -> Result<ApplicantRecord, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            return Err(api_error(status, &body));
        }
        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// CSRF token precedence: an explicitly configured token (the analog of
    /// the page-embedded form field), else the `csrftoken` cookie the
    /// server set on a prior response.
    pub fn csrf_token(&self) -> Option<String> {
        if let Some(token) = &self.csrf_token {
            return Some(token.clone());
        }
        let url = Url::parse(&self.base_url).ok()?;
        let header = self.jar.cookies(&url)?;
        let cookies = header.to_str().ok()?.to_string();
        cookie_value(&cookies, CSRF_COOKIE)
    }
}

/// Pull a named cookie out of a `Cookie:` header value.
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k == name).then(|| v.to_string())
    })
}

fn api_error(status: StatusCode, body: &Value) -> ClientError {
    ClientError::Api {
        status: status.as_u16(),
        detail: format_api_errors(body, status),
    }
}

/// Flatten a server rejection body into one displayable message: a bare
/// string, a `{detail}` object, or DRF-style per-field error arrays.
pub fn format_api_errors(body: &Value, status: StatusCode) -> String {
    match body {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            if let Some(detail) = map.get("detail").and_then(Value::as_str) {
                return detail.to_string();
            }
            let mut errors = Vec::new();
            for (field, messages) in map {
                let joined = match messages {
                    Value::Array(items) => items
                        .iter()
                        .map(|m| m.as_str().map(str::to_string).unwrap_or_else(|| m.to_string()))
                        .collect::<Vec<_>>()
                        .join(", "),
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                errors.push(format!("{}: {}", field, joined));
            }
            if errors.is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                errors.join("; ")
            }
        }
        _ => format!("HTTP {}", status.as_u16()),
    }
}
