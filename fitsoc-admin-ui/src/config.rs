use fitsoc::shell::DEFAULT_MOBILE_BREAKPOINT;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub http_server: String,
    pub api_base_url: String,
    /// Viewport width in px below which the sidebar becomes an overlay.
    pub mobile_breakpoint: u32,
    pub health_poll_ms: u32,
}

const DEFAULT_HTTP_SERVER: &str = "http://localhost:8000";
const DEFAULT_HEALTH_POLL_MS: u32 = 30_000;

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let http_server = lookup("FITSOC_API_SERVER")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_HTTP_SERVER.to_string());
        let mobile_breakpoint = lookup("FITSOC_MOBILE_BREAKPOINT")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MOBILE_BREAKPOINT);
        let health_poll_ms = lookup("FITSOC_HEALTH_POLL_MS")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_HEALTH_POLL_MS);

        let api_base_url = format!("{}{}", http_server, "/api");
        Self {
            http_server,
            api_base_url,
            mobile_breakpoint,
            health_poll_ms,
        }
    }
}
