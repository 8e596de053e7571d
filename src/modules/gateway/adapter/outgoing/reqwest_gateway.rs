use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::{Client, Method, StatusCode};

use crate::gateway::application::ports::outgoing::{
    CredentialProvider, GatewayError, HttpGateway,
};
use crate::gateway::config::GatewayConfig;

/// Header name the backend's CSRF middleware checks on unsafe methods.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// The outbound hook only fires for state-changing methods. GET/HEAD never
/// carry the token.
pub fn method_requires_csrf(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

/// Value for the anti-forgery header on this request, if any. Cookie absence
/// (or an empty token) is not an error; the request proceeds bare and any
/// rejection surfaces through the normal status mapping.
pub fn csrf_header_value(
    method: &Method,
    credentials: &dyn CredentialProvider,
) -> Option<String> {
    if !method_requires_csrf(method) {
        return None;
    }
    credentials.csrf_token().filter(|token| !token.is_empty())
}

/// Pull the user-displayable `detail` string out of an error body, falling
/// back to the status line when the body is not the expected JSON shape.
pub(crate) fn error_detail(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string)
        })
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })
}

/// reqwest-backed gateway: fixed base URL, shared cookie jar so the session
/// and CSRF cookies ride along on every call, no retries and no timeout
/// override beyond the transport default.
pub struct ReqwestGateway {
    client: Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl ReqwestGateway {
    pub fn new(
        config: GatewayConfig,
        cookie_jar: Arc<Jar>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .cookie_provider(cookie_jar)
            .build()
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url,
            credentials,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<String, GatewayError> {
        let mut request = self.client.request(method.clone(), self.url(path));

        if let Some(token) = csrf_header_value(&method, self.credentials.as_ref()) {
            request = request.header(CSRF_HEADER, token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| GatewayError::Decode(err.to_string()))?;

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                detail: error_detail(&text, status),
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl HttpGateway for ReqwestGateway {
    async fn get(&self, path: &str) -> Result<String, GatewayError> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<String, GatewayError> {
        self.send(Method::POST, path, Some(body)).await
    }
}
