use std::env;

pub const DEFAULT_COUNTRY: &str = "CH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend_url: Option<String>,
    pub demo_mode: bool,
    pub country: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            demo_mode: false,
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let backend_url = opt_env("BACKEND_URL").or_else(|| opt_env("EXPO_PUBLIC_BACKEND_URL"));
        let demo_mode = env::var("DEMO_MODE")
            .ok()
            .and_then(|val| parse_flag(&val))
            .unwrap_or(false);
        let country = opt_env("DEMO_COUNTRY")
            .map(|val| val.to_ascii_uppercase())
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string());
        Self {
            backend_url,
            demo_mode,
            country,
        }
    }

    /// No backend at all; every request is answered by the demo store.
    pub fn demo_only() -> Self {
        Self {
            demo_mode: true,
            ..Self::default()
        }
    }
}

pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn opt_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
