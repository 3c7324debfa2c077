//! In-memory doubles for driving `ApiClient` in unit tests

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::shared::errors::SessionError;
use crate::shared::services::api_service::ApiClient;
use crate::shared::services::redirect::AuthRedirect;
use crate::shared::services::session::{MemorySessionStore, SessionStore};
use crate::shared::services::transport::{HttpRequest, HttpResponse, HttpTransport};

pub fn json_response(status: u16, body: &str) -> HttpResponse {
    HttpResponse::new(status, body)
}

/// Replays queued responses in order and records every request
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, String>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn push(&self, response: HttpResponse) {
        self.responses.borrow_mut().push_back(Ok(response));
    }

    pub fn push_network_error(&self, error: &str) {
        self.responses.borrow_mut().push_back(Err(error.to_string()));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("no response queued".to_string()))
    }
}

/// Memory store that counts `clear` calls
#[derive(Default)]
pub struct CountingSessionStore {
    inner: MemorySessionStore,
    clears: Cell<usize>,
}

impl CountingSessionStore {
    pub fn clear_count(&self) -> usize {
        self.clears.get()
    }
}

impl SessionStore for CountingSessionStore {
    fn token(&self) -> Option<String> {
        self.inner.token()
    }

    fn store(&self, token: &str) -> Result<(), SessionError> {
        self.inner.store(token)
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.clears.set(self.clears.get() + 1);
        self.inner.clear()
    }
}

#[derive(Default)]
pub struct RecordingRedirect {
    count: Cell<usize>,
}

impl RecordingRedirect {
    pub fn count(&self) -> usize {
        self.count.get()
    }
}

impl AuthRedirect for RecordingRedirect {
    fn to_login(&self) {
        self.count.set(self.count.get() + 1);
    }
}

/// Client plus handles on each of its seams
pub struct TestHarness {
    pub client: ApiClient,
    pub transport: Rc<MockTransport>,
    pub session: Rc<CountingSessionStore>,
    pub redirect: Rc<RecordingRedirect>,
}

impl TestHarness {
    pub fn new() -> Self {
        let transport = Rc::new(MockTransport::default());
        let session = Rc::new(CountingSessionStore::default());
        let redirect = Rc::new(RecordingRedirect::default());
        let client = ApiClient::new(
            ClientConfig::default(),
            transport.clone(),
            session.clone(),
            redirect.clone(),
        );
        Self {
            client,
            transport,
            session,
            redirect,
        }
    }

    pub fn with_token(token: &str) -> Self {
        let harness = Self::new();
        harness
            .session
            .store(token)
            .expect("memory store never fails");
        harness
    }
}
