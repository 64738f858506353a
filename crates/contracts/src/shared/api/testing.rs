//! Recording transport used by the controller and client tests.

use super::{HttpTransport, Method, RawResponse, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

impl RecordedRequest {
    pub fn json(&self) -> Option<Value> {
        self.body.as_deref().and_then(|b| serde_json::from_str(b).ok())
    }
}

#[derive(Default)]
struct MockState {
    requests: Vec<RecordedRequest>,
    responses: VecDeque<Result<RawResponse, TransportError>>,
}

/// Replays queued responses in order and records every request.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, response: RawResponse) {
        self.state.borrow_mut().responses.push_back(Ok(response));
    }

    pub fn respond_text(&self, status: u16, body: &str) {
        self.respond(RawResponse {
            status,
            status_text: String::new(),
            content_length: Some(body.len() as u64),
            body: body.to_string(),
        });
    }

    pub fn respond_json(&self, status: u16, body: Value) {
        self.respond_text(status, &body.to_string());
    }

    pub fn respond_empty(&self, status: u16) {
        self.respond(RawResponse {
            status,
            status_text: String::new(),
            content_length: None,
            body: String::new(),
        });
    }

    pub fn fail_network(&self) {
        self.state
            .borrow_mut()
            .responses
            .push_back(Err(TransportError::Unreachable("connection refused".into())));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn count(&self, method: Method) -> usize {
        self.state
            .borrow()
            .requests
            .iter()
            .filter(|r| r.method == method)
            .count()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<RawResponse, TransportError> {
        let mut state = self.state.borrow_mut();
        state.requests.push(RecordedRequest {
            method,
            url: url.to_string(),
            body,
        });
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no response queued".into())))
    }
}
