//! Client configuration.

/// Server used when nothing else is configured (the Flask dev server).
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER)
    }
}

impl ClientConfig {
    /// Build a config from a base URL. Trailing slashes are dropped and a
    /// blank URL falls back to [`DEFAULT_SERVER`].
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        Self {
            base_url: if trimmed.is_empty() {
                DEFAULT_SERVER.to_string()
            } else {
                trimmed.to_string()
            },
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let cfg = ClientConfig::new("https://odds.example.org/");
        assert_eq!(cfg.endpoint("/check"), "https://odds.example.org/check");
        assert_eq!(cfg.endpoint("download/csv"), "https://odds.example.org/download/csv");
    }

    #[test]
    fn blank_url_uses_default_server() {
        assert_eq!(ClientConfig::new("  ").base_url, DEFAULT_SERVER);
        assert_eq!(ClientConfig::default().base_url, DEFAULT_SERVER);
    }
}
