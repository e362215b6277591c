//! Scripted transport for unit tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::poll::PollPolicy;
use crate::transport::{ApiRequest, ApiResponse, Transport};
use crate::TravisClient;

struct Step {
    method: Method,
    path: String,
    outcome: Result<ApiResponse>,
}

/// Replays canned responses in order and records what was sent
///
/// Panics when a request does not match the next scripted step, or when
/// the script is exhausted.
#[derive(Default)]
pub struct ScriptedTransport {
    steps: Mutex<VecDeque<Step>>,
    sent: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Expect `method path` and answer with `status` and a JSON body
    pub fn expect(self: &Arc<Self>, method: Method, path: &str, status: u16, body: Value) -> Arc<Self> {
        let body = if body.is_null() { String::new() } else { body.to_string() };
        self.push(method, path, Ok(ApiResponse::new(status, body)))
    }

    /// Expect `method path` and fail it at the transport level
    ///
    /// The error is a genuine `reqwest::Error`, the same class
    /// [`HttpTransport`](crate::HttpTransport) reports for DNS or connect faults.
    pub fn fail(self: &Arc<Self>, method: Method, path: &str) -> Arc<Self> {
        let fault = reqwest::Client::new()
            .get("not a url")
            .build()
            .expect_err("relative URL must not build");
        self.push(method, path, Err(ClientError::RequestFailed(fault)))
    }

    fn push(self: &Arc<Self>, method: Method, path: &str, outcome: Result<ApiResponse>) -> Arc<Self> {
        self.steps.lock().unwrap().push_back(Step {
            method,
            path: path.to_string(),
            outcome,
        });
        Arc::clone(self)
    }

    /// Requests sent so far
    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }

    /// Steps not consumed yet
    pub fn remaining(&self) -> usize {
        self.steps.lock().unwrap().len()
    }

    /// Client over this script with the default polling policy
    pub fn client(self: &Arc<Self>) -> TravisClient {
        TravisClient::with_transport(Arc::clone(self) as Arc<dyn Transport>, PollPolicy::default())
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let step = self
            .steps
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request: {} {}", request.method, request.path));

        assert_eq!(
            (&step.method, step.path.as_str()),
            (&request.method, request.path.as_str()),
            "request out of script"
        );

        self.sent.lock().unwrap().push(request);
        step.outcome
    }
}

/// Repository payload
pub fn repo_json(active: bool) -> Value {
    serde_json::json!({
        "@type": "repository",
        "id": 1,
        "name": "hello",
        "slug": "cs50/hello",
        "active": active,
        "owner": { "id": 7, "login": "cs50" }
    })
}

/// User payload
pub fn user_json(is_syncing: bool) -> Value {
    serde_json::json!({
        "@type": "user",
        "id": 7,
        "login": "cs50",
        "is_syncing": is_syncing
    })
}
