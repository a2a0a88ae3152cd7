//! Connection settings for the HTTP transport.

use serde::{Deserialize, Serialize};

/// Settings for [`HttpTransport`](crate::transport::HttpTransport).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Server origin, e.g. `http://127.0.0.1:8080`. A trailing slash is
    /// tolerated.
    pub origin: String,

    /// Optional per-request timeout in seconds. `None` means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl HttpConfig {
    /// Config for the given origin with no timeout.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_timeout_uses_default() {
        let cfg: HttpConfig =
            serde_json::from_str(r#"{"origin": "http://localhost:8080"}"#).unwrap();
        assert_eq!(cfg.origin, "http://localhost:8080");
        assert!(cfg.timeout_secs.is_none());
    }

    #[test]
    fn roundtrip() {
        let cfg = HttpConfig {
            origin: "https://files.example.com".into(),
            timeout_secs: Some(30),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: HttpConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.origin, cfg.origin);
        assert_eq!(back.timeout_secs, Some(30));
    }
}
