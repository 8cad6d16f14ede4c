use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide settings, loaded once at startup and never mutated.
#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub serpapi_api_key: String,
    pub gemini_api_key: String,
    pub serpapi_base_url: String,
    pub gemini_base_url: String,
    pub utility_model: String,
    pub creative_model: String,
    pub default_category_id: String,
    pub candidate_cap: usize,
    pub trend_suffix_pattern: String,
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("serpapi_api_key", &"[redacted]")
            .field("gemini_api_key", &"[redacted]")
            .field("serpapi_base_url", &self.serpapi_base_url)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("utility_model", &self.utility_model)
            .field("creative_model", &self.creative_model)
            .field("default_category_id", &self.default_category_id)
            .field("candidate_cap", &self.candidate_cap)
            .field("trend_suffix_pattern", &self.trend_suffix_pattern)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
