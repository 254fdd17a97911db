use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

const BACKEND_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("matchday_demo/", env!("CARGO_PKG_VERSION"));

static BACKEND: OnceCell<Client> = OnceCell::new();

/// Shared client for backend calls; every request speaks JSON.
pub fn backend_client() -> Result<&'static Client> {
    BACKEND.get_or_try_init(|| {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Client::builder()
            .timeout(Duration::from_secs(BACKEND_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .context("failed to build backend http client")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_client_is_built_once() {
        let first = backend_client().expect("client");
        let second = backend_client().expect("client");
        assert!(std::ptr::eq(first, second));
    }
}
