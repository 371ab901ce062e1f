use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use tokio::sync::watch;
use tracing::{debug, error};

use crate::{
    client::SubmissionClient,
    types::{FormInput, SubmissionResult},
};

/// The form component: current input plus the last published result.
///
/// Cheap to clone; all clones share the same state. The rendering layer
/// subscribes via [`FormSession::subscribe`] and gets one notification per
/// successful submission, carrying both result fields at once. Failures are
/// logged and never touch the published result.
#[derive(Clone)]
pub struct FormSession {
    inner: Arc<FormSessionInner>,
}

struct FormSessionInner {
    client: SubmissionClient,
    input: Mutex<FormInput>,
    result_tx: watch::Sender<Option<SubmissionResult>>,
    next_seq: AtomicU64,
    publish: Mutex<()>,
    latest_only: bool,
}

impl FormSession {
    /// Session with the source behavior: overlapping submissions race and
    /// whichever response handler runs last wins.
    pub fn new(client: SubmissionClient) -> Self {
        Self::with_ordering(client, false)
    }

    /// Session that tags each submission with a sequence number and discards
    /// any response that is not from the latest issued request.
    pub fn latest_only(client: SubmissionClient) -> Self {
        Self::with_ordering(client, true)
    }

    fn with_ordering(client: SubmissionClient, latest_only: bool) -> Self {
        let (result_tx, _) = watch::channel(None);
        Self {
            inner: Arc::new(FormSessionInner {
                client,
                input: Mutex::new(FormInput::default()),
                result_tx,
                next_seq: AtomicU64::new(0),
                publish: Mutex::new(()),
                latest_only,
            }),
        }
    }

    /// Replace the whole form, the "user edited the fields" surface.
    pub fn set_input(&self, input: FormInput) {
        *self.inner.input.lock().expect("form input poisoned") = input;
    }

    /// Snapshot of the current form fields.
    pub fn input(&self) -> FormInput {
        self.inner.input.lock().expect("form input poisoned").clone()
    }

    /// Last published result, absent until the first successful submission.
    pub fn result(&self) -> Option<SubmissionResult> {
        self.inner.result_tx.borrow().clone()
    }

    /// Receiver for the rendering layer; notified once per applied result.
    pub fn subscribe(&self) -> watch::Receiver<Option<SubmissionResult>> {
        self.inner.result_tx.subscribe()
    }

    /// Snapshot the form at call time, POST it, and publish the outcome.
    ///
    /// Exactly one request per invocation, no deduplication and no
    /// cancellation of an earlier in-flight call. Any failure (transport,
    /// non-2xx, malformed body) is written to the log and swallowed; the
    /// published result stays exactly as it was.
    pub async fn submit(&self) {
        let snapshot = self.input();
        let seq = self.inner.next_seq.fetch_add(1, Ordering::SeqCst);

        match self.inner.client.submit(&snapshot).await {
            Ok(result) => self.apply(seq, result),
            Err(e) => error!(seq, error = %e, "submission failed"),
        }
    }

    fn apply(&self, seq: u64, result: SubmissionResult) {
        let _guard = self.inner.publish.lock().expect("publish lock poisoned");

        // Latest issued = next_seq - 1. Responses from earlier submissions
        // are stale once a newer one has been issued.
        if self.inner.latest_only && seq + 1 != self.inner.next_seq.load(Ordering::SeqCst) {
            debug!(seq, "discarding stale response");
            return;
        }

        debug!(seq, prompts = result.prompts.len(), "result applied");
        self.inner.result_tx.send_replace(Some(result));
    }
}
