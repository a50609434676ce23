//! Shared HTTP plumbing.
//!
//! Every service answers `{ "data": ... }` on success and `{ "error": "..." }`
//! on failure. [`ApiClient`] unwraps the former, maps the latter onto
//! [`HotelbookError`] and attaches the bearer token of the current session.

use hotelbook_core::HotelbookError;
use hotelbook_core::Result;
use hotelbook_core::session::SessionHandle;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for one service base URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Option<SessionHandle>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session: None,
        }
    }

    /// Attaches `Authorization: Bearer <token>` whenever `session` holds one.
    pub fn with_session(mut self, session: SessionHandle) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Starts a request, with the bearer header when a session is active.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let builder = self.client.request(method, self.url(path));
        let token = match &self.session {
            Some(session) => session.bearer_token()?,
            None => None,
        };
        Ok(match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    /// Sends and unwraps the `data` envelope.
    pub async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.execute(builder).await?;
        let path = response.url().path().to_string();
        let body = response
            .text()
            .await
            .map_err(|err| HotelbookError::network(format!("{path}: body unreadable: {err}")))?;
        decode_envelope(&body, &path)
    }

    /// Like [`ApiClient::send`], with a `null` or missing `data` read as the
    /// empty value. The services answer `null` for an empty list.
    pub async fn send_or_default<T>(&self, builder: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let data: Option<T> = self.send(builder).await?;
        Ok(data.unwrap_or_default())
    }

    /// Sends and discards the body.
    pub async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
        self.execute(builder).await?;
        Ok(())
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let (client, request) = builder.build_split();
        let request = request.map_err(|err| HotelbookError::internal(err.to_string()))?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        tracing::debug!(%method, %path, "Sending request");
        let response = client.execute(request).await.map_err(|err| {
            tracing::warn!(%method, %path, error = %err, "Request failed");
            HotelbookError::network(format!("{method} {path} failed: {err}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%method, %path, status = status.as_u16(), "Service returned an error");
            return Err(map_http_error(status, &body, &path));
        }
        Ok(response)
    }
}

/// Decodes a success body.
///
/// The services wrap payloads as `{ "data": ... }`; upload endpoints answer
/// without the envelope, so any other body is decoded as the payload itself.
pub(crate) fn decode_envelope<T: DeserializeOwned>(body: &str, path: &str) -> Result<T> {
    let parse_error =
        |err: serde_json::Error| HotelbookError::json(format!("Failed to parse response of {path}: {err}"));
    let mut value: Value = serde_json::from_str(body).map_err(parse_error)?;
    let payload = match value.as_object_mut().and_then(|object| object.remove("data")) {
        Some(data) => data,
        None => value,
    };
    T::deserialize(payload).map_err(parse_error)
}

/// Classifies a non-success answer.
pub(crate) fn map_http_error(status: StatusCode, body: &str, path: &str) -> HotelbookError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|body| body.error)
        .ok()
        .filter(|message| !message.trim().is_empty())
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => HotelbookError::unauthorized(message),
        StatusCode::NOT_FOUND => HotelbookError::not_found("resource", path),
        _ => HotelbookError::http(status.as_u16(), message),
    }
}

/// Replaces the generic not-found of a lookup by id with the entity name.
pub(crate) fn not_found_as(entity_type: &'static str, id: &str) -> impl FnOnce(HotelbookError) -> HotelbookError {
    move |err| {
        if err.is_not_found() {
            HotelbookError::not_found(entity_type, id)
        } else {
            err
        }
    }
}
