//! In-memory stand-in for the etcd v2 keys API, used by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::error::{CacheError, Result};
use crate::models::WriteForm;
use crate::transport::{Transport, TransportResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Verb {
    Get,
    Head,
    Put,
    Delete,
}

#[derive(Debug, Default)]
struct State {
    entries: HashMap<String, WriteForm>,
    forced_status: HashMap<(Verb, String), u16>,
    forced_body: HashMap<String, Vec<u8>>,
    unreachable: bool,
    requests: Vec<(Verb, String)>,
}

/// Keyed store keeping entries by absolute URL.
#[derive(Debug, Default)]
pub(crate) struct FakeStore {
    state: Mutex<State>,
}

impl FakeStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answers `verb` on `url` with `status` instead of the emulated behavior.
    pub(crate) fn force_status(&self, verb: Verb, url: &str, status: u16) {
        let mut state = self.state.lock().unwrap();
        state.forced_status.insert((verb, url.to_string()), status);
    }

    /// Answers GET on `url` with 200 and a raw body.
    pub(crate) fn force_body(&self, url: &str, body: &[u8]) {
        let mut state = self.state.lock().unwrap();
        state.forced_body.insert(url.to_string(), body.to_vec());
    }

    /// Makes every following exchange fail at the connection level.
    pub(crate) fn go_offline(&self) {
        self.state.lock().unwrap().unreachable = true;
    }

    pub(crate) fn stored(&self, url: &str) -> Option<WriteForm> {
        self.state.lock().unwrap().entries.get(url).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.state.lock().unwrap().entries.len()
    }

    pub(crate) fn requests(&self) -> Vec<(Verb, String)> {
        self.state.lock().unwrap().requests.clone()
    }

    fn exchange(
        &self,
        verb: Verb,
        url: &str,
        form: Option<&WriteForm>,
    ) -> Result<TransportResponse> {
        let mut state = self.state.lock().unwrap();
        state.requests.push((verb, url.to_string()));

        if state.unreachable {
            return Err(CacheError::Transport("connection refused".to_string()));
        }
        if let Some(status) = state.forced_status.get(&(verb, url.to_string())) {
            return Ok(TransportResponse::status_only(*status));
        }

        let response = match verb {
            Verb::Get => {
                if let Some(body) = state.forced_body.get(url) {
                    TransportResponse::new(200, body.clone())
                } else {
                    match state.entries.get(url) {
                        Some(entry) => {
                            let body = json!({
                                "action": "get",
                                "node": { "key": url, "value": entry.value },
                            });
                            TransportResponse::new(200, body.to_string())
                        }
                        None => not_found(url),
                    }
                }
            }
            Verb::Head => {
                if state.entries.contains_key(url) || state.forced_body.contains_key(url) {
                    TransportResponse::status_only(200)
                } else {
                    TransportResponse::status_only(404)
                }
            }
            Verb::Put => {
                let form = form.cloned().unwrap_or_else(|| WriteForm::new("", Default::default()));
                let created = state.entries.insert(url.to_string(), form).is_none();
                TransportResponse::status_only(if created { 201 } else { 200 })
            }
            Verb::Delete => match state.entries.remove(url) {
                Some(_) => TransportResponse::status_only(200),
                None => not_found(url),
            },
        };
        Ok(response)
    }
}

fn not_found(url: &str) -> TransportResponse {
    let body = json!({ "errorCode": 100, "message": "Key not found", "cause": url });
    TransportResponse::new(404, body.to_string())
}

#[async_trait]
impl Transport for FakeStore {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        self.exchange(Verb::Get, url, None)
    }

    async fn head(&self, url: &str) -> Result<TransportResponse> {
        self.exchange(Verb::Head, url, None)
    }

    async fn put_form(&self, url: &str, form: &WriteForm) -> Result<TransportResponse> {
        self.exchange(Verb::Put, url, Some(form))
    }

    async fn delete(&self, url: &str) -> Result<TransportResponse> {
        self.exchange(Verb::Delete, url, None)
    }
}
