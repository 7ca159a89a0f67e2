//! HTTP transport for the Firehose API

use crate::config::Config;
use crate::error::{FirehoseError, Result};
use log::debug;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

/// Media type of JSON:API request and response bodies
pub const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// Request payload, tagged with the content type it is sent as
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    JsonApi(Value),
    Json(Value),
}

/// A request relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub body: Option<Body>,
}

impl Request {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Body) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn patch(path: impl Into<String>, body: Body) -> Self {
        Self {
            method: Method::Patch,
            path: path.into(),
            body: Some(body),
        }
    }
}

/// Something that can execute API requests
///
/// Returns the decoded JSON body, or `None` when the server sent an empty one
/// (e.g. `204 No Content` after a delete).
pub trait Transport {
    fn execute(&self, request: &Request) -> Result<Option<Value>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &Request) -> Result<Option<Value>> {
        (**self).execute(request)
    }
}

/// Blocking HTTP client bound to one base URL and, optionally, one bearer token
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create an unauthenticated client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            token: None,
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn build(&self, request: &Request) -> RequestBuilder {
        let url = self.url_for(&request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Patch => self.client.patch(&url),
            Method::Delete => self.client.delete(&url),
        };

        builder = builder.header(ACCEPT, JSON_API_CONTENT_TYPE);
        if let Some(auth) = self.auth_header() {
            builder = builder.header(AUTHORIZATION, auth);
        }

        match &request.body {
            Some(Body::JsonApi(value)) => builder
                .header(CONTENT_TYPE, JSON_API_CONTENT_TYPE)
                .body(value.to_string()),
            Some(Body::Json(value)) => builder.json(value),
            None => builder,
        }
    }
}

impl Transport for HttpClient {
    fn execute(&self, request: &Request) -> Result<Option<Value>> {
        debug!("{:?} {}", request.method, self.url_for(&request.path));
        let response = self.build(request).send()?;
        handle_response(response)
    }
}

fn handle_response(response: Response) -> Result<Option<Value>> {
    let status = response.status();
    let text = response.text()?;

    if !status.is_success() {
        debug!("request failed with {}: {}", status, text);
        return Err(FirehoseError::Api {
            status: status.as_u16(),
            detail: error_detail(&text),
        });
    }

    parse_body(&text)
}

fn parse_body(text: &str) -> Result<Option<Value>> {
    if text.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(serde_json::from_str(text)?))
    }
}

/// Human-readable reason from an error body
///
/// Understands OAuth (`error_description`) and JSON:API (`errors[0].detail`,
/// `errors[0].title`) error shapes.
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    if let Some(description) = value.get("error_description").and_then(Value::as_str) {
        return Some(description.to_string());
    }

    let first = value.get("errors")?.get(0)?;
    first
        .get("detail")
        .or_else(|| first.get("title"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
