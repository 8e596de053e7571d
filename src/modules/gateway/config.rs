use std::env;

/// Default API origin while developing against a locally running backend.
pub const DEV_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Same-origin API path used in production deployments.
pub const PROD_BASE_PATH: &str = "/api";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
}

impl GatewayConfig {
    /// Resolve the base URL by priority: explicit override, then the
    /// development default, then the same-origin production path.
    pub fn resolve(override_url: Option<String>, dev_mode: bool) -> Self {
        let base_url = override_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| {
                if dev_mode {
                    DEV_BASE_URL.to_string()
                } else {
                    PROD_BASE_PATH.to_string()
                }
            });

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Environment-driven resolution used by the composition root.
    /// `PORTFOLIO_API_BASE_URL` overrides everything; anything other than
    /// `PORTFOLIO_ENV=production` counts as development.
    pub fn from_env() -> Self {
        let override_url = env::var("PORTFOLIO_API_BASE_URL").ok();
        let dev_mode = env::var("PORTFOLIO_ENV")
            .map(|value| value != "production")
            .unwrap_or(true);

        Self::resolve(override_url, dev_mode)
    }
}
