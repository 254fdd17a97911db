use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use serde_json::{Value, json};

use crate::config::ClientConfig;
use crate::error::FallbackResult;
use crate::fallback::{DemoRequest, Verb, dispatch};
use crate::http_client::backend_client;
use crate::state::LoginResponse;
use crate::store::DemoStore;

const MAX_LOGS: usize = 200;

/// Backend client that answers from the demo store when the live call fails
/// and demo mode is on.
pub struct ApiClient {
    config: ClientConfig,
    token: Mutex<Option<String>>,
    store: Mutex<DemoStore>,
    logs: Mutex<VecDeque<String>>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_store(config, DemoStore::new())
    }

    pub fn with_store(config: ClientConfig, store: DemoStore) -> Self {
        Self {
            config,
            token: Mutex::new(None),
            store: Mutex::new(store),
            logs: Mutex::new(VecDeque::with_capacity(MAX_LOGS)),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn set_demo_mode(&mut self, enabled: bool) {
        self.config.demo_mode = enabled;
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get(&self, path: &str) -> Result<Value> {
        self.request(Verb::Get, path, None)
    }

    pub fn post(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.request(Verb::Post, path, body)
    }

    /// Logs in and keeps the session token for later requests.
    pub fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = json!({ "email": email, "password": password });
        let raw = self.post("/api/auth/login", Some(&body))?;
        let session: LoginResponse =
            serde_json::from_value(raw).context("invalid login response")?;
        self.set_token(Some(session.token.clone()));
        self.push_log(format!("[INFO] Logged in as {}", session.user.email));
        Ok(session)
    }

    pub fn logout(&self) {
        self.set_token(None);
    }

    /// Runs `f` against the demo store under its lock.
    pub fn with_store_mut<R>(&self, f: impl FnOnce(&mut DemoStore) -> R) -> R {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *store)
    }

    pub fn logs(&self) -> Vec<String> {
        self.logs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn drain_logs(&self) -> Vec<String> {
        self.logs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }

    pub fn push_log(&self, msg: impl Into<String>) {
        let mut logs = self.logs.lock().unwrap_or_else(PoisonError::into_inner);
        logs.push_back(msg.into());
        while logs.len() > MAX_LOGS {
            logs.pop_front();
        }
    }

    fn request(&self, verb: Verb, path: &str, body: Option<&Value>) -> Result<Value> {
        let err = match self.live_request(verb, path, body) {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        self.push_log(format!("[WARN] {} {path} failed: {err:#}", verb.as_str()));

        if self.config.demo_mode
            && let Some(value) = self.fallback(verb, path, body)
        {
            self.push_log(format!("[INFO] {} {path} served by demo store", verb.as_str()));
            return Ok(value);
        }
        Err(err)
    }

    fn live_request(&self, verb: Verb, path: &str, body: Option<&Value>) -> Result<Value> {
        let base = self
            .config
            .backend_url
            .as_deref()
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .ok_or_else(|| anyhow!("backend url is not configured"))?;
        let url = format!("{}{}", base.trim_end_matches('/'), path);

        let client = backend_client()?;
        let mut req = match verb {
            Verb::Get => client.get(&url),
            Verb::Post => {
                let payload = body.cloned().unwrap_or_else(|| json!({}));
                client.post(&url).json(&payload)
            }
        };
        if let Some(token) = self.token() {
            req = req.bearer_auth(token);
        }

        let resp = req.send().context("request failed")?;
        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("{} {path} failed: {status}", verb.as_str()));
        }
        resp.json::<Value>().context("failed reading json body")
    }

    // Fallback errors are logged and swallowed; the caller keeps the network error.
    fn fallback(&self, verb: Verb, path: &str, body: Option<&Value>) -> Option<Value> {
        match self.answer_from_store(verb, path, body) {
            Ok(value) => Some(value),
            Err(err) => {
                self.push_log(format!(
                    "[WARN] Demo fallback for {} {path} failed: {err}",
                    verb.as_str()
                ));
                None
            }
        }
    }

    // Grouped listings without `?country=` use the configured country.
    fn answer_from_store(
        &self,
        verb: Verb,
        path: &str,
        body: Option<&Value>,
    ) -> FallbackResult<Value> {
        let request = match DemoRequest::from_path(verb, path, body)? {
            DemoRequest::GroupedMatches { country: None } => DemoRequest::GroupedMatches {
                country: Some(self.config.country.clone()),
            },
            request => request,
        };
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        dispatch(&mut store, request, Utc::now())
    }
}
