/// Default API endpoint for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Client configuration loaded from environment variables.
///
/// | Env Var          | Default                 |
/// |------------------|-------------------------|
/// | `MESAS_API_URL`  | `http://localhost:5000` |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash.
    pub api_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let raw = std::env::var("MESAS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        Self::new(&raw)
    }

    /// Build a config from an explicit base URL.
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
        }
    }
}
