//! AI bridge.
//!
//! Hands a sanitized HTML fragment to an external code generator and waits
//! for JavaScript back. The request sits in a single slot until the host
//! (or an [`AiGenerator`]) takes it; the answer travels back over a oneshot
//! channel. A request that is not answered in time is withdrawn from the
//! slot so nothing is left waiting.

mod sanitize;

pub use sanitize::{is_noise_attribute, sanitize_html};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use actionreel_config::BridgeConfig;
use actionreel_protocols::{Action, AiGenerator, AiRequest, AiRequestKind, AiResponse, BridgeError};
use parking_lot::Mutex;
use tokio::sync::{Notify, oneshot};
use tracing::{debug, info, warn};

struct PendingRequest {
    id: u64,
    request: Option<AiRequest>,
    responder: Option<oneshot::Sender<AiResponse>>,
}

struct BridgeInner {
    slot: Mutex<Option<PendingRequest>>,
    request_id: AtomicU64,
    posted: Notify,
    timeout_ms: u64,
    max_html_chars: usize,
}

/// Request/response slot shared by the recorder and the host.
#[derive(Clone)]
pub struct AiBridge {
    inner: Arc<BridgeInner>,
}

impl AiBridge {
    pub fn new(timeout_ms: u64, max_html_chars: usize) -> Self {
        Self {
            inner: Arc::new(BridgeInner {
                slot: Mutex::new(None),
                request_id: AtomicU64::new(1),
                posted: Notify::new(),
                timeout_ms,
                max_html_chars,
            }),
        }
    }

    pub fn from_config(config: &BridgeConfig) -> Self {
        Self::new(config.timeout_ms, config.max_html_chars)
    }

    pub fn timeout_ms(&self) -> u64 {
        self.inner.timeout_ms
    }

    pub fn max_html_chars(&self) -> usize {
        self.inner.max_html_chars
    }

    /// Whether a request is waiting or being answered.
    pub fn is_pending(&self) -> bool {
        self.inner.slot.lock().is_some()
    }

    /// Copy of the request waiting in the slot, if not yet taken.
    pub fn peek_request(&self) -> Option<AiRequest> {
        self.inner
            .slot
            .lock()
            .as_ref()
            .and_then(|p| p.request.clone())
    }

    /// Take the waiting request together with the handle that answers it.
    pub fn take_request(&self) -> Option<(AiRequest, AiResponder)> {
        let mut slot = self.inner.slot.lock();
        let pending = slot.as_mut()?;
        let request = pending.request.take()?;
        let tx = pending.responder.take()?;
        debug!(id = pending.id, kind = ?request.kind, "AI request taken");
        Some((
            request,
            AiResponder {
                id: pending.id,
                tx,
            },
        ))
    }

    /// Wait until a request is posted, then take it.
    pub async fn next_request(&self) -> (AiRequest, AiResponder) {
        loop {
            if let Some(taken) = self.take_request() {
                return taken;
            }
            self.inner.posted.notified().await;
        }
    }

    /// Answer the next request with `generator`. Generator errors become
    /// failure responses.
    pub async fn serve_once(&self, generator: &dyn AiGenerator) -> Result<(), BridgeError> {
        let (request, responder) = self.next_request().await;
        let response = match generator.generate(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Generator {} failed: {}", generator.id(), e);
                AiResponse::failure(e.to_string())
            }
        };
        responder.respond(response)
    }

    /// Post `request` and wait for the response or the timeout.
    pub async fn request(&self, request: AiRequest) -> Result<AiResponse, BridgeError> {
        let id = self.inner.request_id.fetch_add(1, Ordering::SeqCst);
        let (tx, rx) = oneshot::channel();
        {
            let mut slot = self.inner.slot.lock();
            if slot.is_some() {
                return Err(BridgeError::Busy);
            }
            *slot = Some(PendingRequest {
                id,
                request: Some(request),
                responder: Some(tx),
            });
        }
        let _guard = SlotGuard {
            inner: Arc::clone(&self.inner),
            id,
        };
        self.inner.posted.notify_one();
        debug!(id, "AI request posted");

        let timeout = Duration::from_millis(self.inner.timeout_ms);
        match tokio::time::timeout(timeout, rx).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(_)) => Err(BridgeError::Closed),
            Err(_) => {
                warn!(id, "AI request timed out after {}ms", self.inner.timeout_ms);
                Err(BridgeError::Timeout(self.inner.timeout_ms))
            }
        }
    }
}

/// Clears the slot when the waiting side finishes or is dropped.
struct SlotGuard {
    inner: Arc<BridgeInner>,
    id: u64,
}

impl Drop for SlotGuard {
    fn drop(&mut self) {
        let mut slot = self.inner.slot.lock();
        if slot.as_ref().is_some_and(|p| p.id == self.id) {
            *slot = None;
        }
    }
}

/// One-shot handle answering a taken request.
pub struct AiResponder {
    id: u64,
    tx: oneshot::Sender<AiResponse>,
}

impl AiResponder {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Deliver `response`. Fails when the requester already gave up.
    pub fn respond(self, response: AiResponse) -> Result<(), BridgeError> {
        self.tx.send(response).map_err(|_| BridgeError::Closed)
    }
}

/// Code returned by a successful generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCode {
    pub javascript: String,
    pub used_model: Option<String>,
}

/// A prepared AI request, detached from the session that created it.
///
/// Running the job does not borrow the session, so capture continues
/// while the generator works.
pub struct AiJob {
    bridge: AiBridge,
    request: AiRequest,
    template: Action,
}

impl AiJob {
    pub(crate) fn new(bridge: AiBridge, request: AiRequest, template: Action) -> Self {
        Self {
            bridge,
            request,
            template,
        }
    }

    pub fn kind(&self) -> AiRequestKind {
        self.request.kind
    }

    pub fn request(&self) -> &AiRequest {
        &self.request
    }

    /// Send the request and wait for the generator.
    pub async fn run(self) -> AiOutcome {
        let kind = self.request.kind;
        let result = self
            .bridge
            .request(self.request)
            .await
            .and_then(AiResponse::into_code)
            .map(|(javascript, used_model)| GeneratedCode {
                javascript,
                used_model,
            });
        match &result {
            Ok(code) => info!(
                ?kind,
                model = code.used_model.as_deref().unwrap_or("model"),
                "AI code received"
            ),
            Err(e) => warn!(?kind, "AI request failed: {}", e),
        }
        AiOutcome {
            kind,
            template: self.template,
            result,
        }
    }
}

/// Result of an [`AiJob`], applied with
/// [`RecorderSession::apply_ai_outcome`](crate::session::RecorderSession::apply_ai_outcome).
#[derive(Debug)]
pub struct AiOutcome {
    pub kind: AiRequestKind,
    /// Locators and metadata of the selected element.
    pub template: Action,
    pub result: Result<GeneratedCode, BridgeError>,
}

#[cfg(test)]
#[path = "bridge_tests.rs"]
mod tests;
