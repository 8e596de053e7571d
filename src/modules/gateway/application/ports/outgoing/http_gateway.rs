use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server responded with status {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

impl GatewayError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::Status { status: 404, .. })
    }

    /// The user-displayable part of the failure. Server `detail` strings are
    /// already written for end users; transport/decode failures are not, so
    /// those callers substitute their own copy.
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            GatewayError::Status { detail, .. } if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}

/// Single configured entry point for all network calls against the content
/// API. Every request carries ambient cookies; unsafe methods additionally
/// carry the anti-forgery header (see the reqwest adapter).
#[async_trait]
pub trait HttpGateway: Send + Sync {
    /// GET `base_url + path`, returning the raw response body on 2xx.
    async fn get(&self, path: &str) -> Result<String, GatewayError>;

    /// POST a JSON body to `base_url + path`, returning the raw response
    /// body on 2xx.
    async fn post(&self, path: &str, body: serde_json::Value) -> Result<String, GatewayError>;
}

// One configured gateway is shared by every use case, so the shared handle
// itself satisfies the port.
#[async_trait]
impl<G: HttpGateway + ?Sized> HttpGateway for std::sync::Arc<G> {
    async fn get(&self, path: &str) -> Result<String, GatewayError> {
        (**self).get(path).await
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<String, GatewayError> {
        (**self).post(path, body).await
    }
}
