//! Summarize service. The upload-and-render client.
//!
//! Owns the display state and the submission lifecycle:
//! `Idle -> Loading -> {Success | Error} -> Loading` on the next submission.
//! Each submission runs as an abortable task tagged with a request id; only the
//! latest registered id may write results back.

use crate::domain::{
    DomainError, FileInfo, MeetingSummary, NO_FILE_MESSAGE, RequestId, SelectedFile,
    SummaryResponse, ViewState,
};
use crate::ports::SummarizerPort;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};

struct InFlight {
    id: RequestId,
    abort: AbortHandle,
}

#[derive(Default)]
struct ClientState {
    file: Option<Arc<SelectedFile>>,
    view: ViewState,
    last_id: u64,
    in_flight: Option<InFlight>,
}

/// Leaves loading if the `submit` future is dropped while its id is still current.
struct FlightGuard<'a> {
    service: &'a SummarizeService,
    id: RequestId,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.service.lock();
        if state.in_flight.as_ref().map(|f| f.id) != Some(self.id) {
            return;
        }
        if let Some(in_flight) = state.in_flight.take() {
            in_flight.abort.abort();
            state.view.loading = false;
            debug!(request = %self.id, "submission dropped before resolving");
        }
    }
}

/// Service for uploading one audio file at a time and holding what the UI shows.
///
/// The state mutex is never held across an await.
pub struct SummarizeService {
    backend: Arc<dyn SummarizerPort>,
    state: Mutex<ClientState>,
}

impl SummarizeService {
    /// Create a new service.
    ///
    /// # Arguments
    /// * `backend` - Summarizer port implementation (HTTP, Mock, etc.)
    pub fn new(backend: Arc<dyn SummarizerPort>) -> Self {
        Self {
            backend,
            state: Mutex::new(ClientState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ClientState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store the chosen file, replacing any previous one. Clears the last error.
    ///
    /// Allowed while a submission is in flight; that submission keeps the file it started with.
    pub fn select_file(&self, file: SelectedFile) {
        let info = file.info();
        info!(
            file = %info.file_name,
            mime = %info.mime_type,
            size_bytes = info.size_bytes,
            "file selected"
        );
        let mut state = self.lock();
        state.file = Some(Arc::new(file));
        state.view.selected = Some(info);
        state.view.error = None;
    }

    /// Drop the current selection.
    pub fn clear_file(&self) {
        let mut state = self.lock();
        state.file = None;
        state.view.selected = None;
    }

    pub fn selected_file(&self) -> Option<FileInfo> {
        self.lock().view.selected.clone()
    }

    /// False while a submission is loading. Front-ends hide the submit action then.
    pub fn can_submit(&self) -> bool {
        !self.lock().view.loading
    }

    /// Copy of what the UI should draw right now.
    pub fn snapshot(&self) -> ViewState {
        self.lock().view.clone()
    }

    /// Upload the selected file and wait for the summary.
    ///
    /// Clears the previous result and error, enters loading, then aborts any older
    /// in-flight submission. On resolution the outcome is applied only if this
    /// submission is still the current one.
    ///
    /// # Errors
    /// * `Validation` - nothing selected; no request is sent
    /// * `Transport` / `MalformedResponse` - backend failure, message stored in the view
    /// * `Superseded` / `Cancelled` - a newer submission or `cancel` took over; view untouched
    pub async fn submit(&self) -> Result<MeetingSummary, DomainError> {
        let selected = self.lock().file.clone();
        let Some(file) = selected else {
            warn!("submit requested with no file selected");
            let err = DomainError::Validation(NO_FILE_MESSAGE.to_string());
            self.lock().view.error = Some(err.user_message());
            return Err(err);
        };

        let backend = Arc::clone(&self.backend);
        let upload = Arc::clone(&file);
        let task = tokio::spawn(async move { backend.summarize(&upload).await });

        let id = {
            let mut state = self.lock();
            state.last_id += 1;
            let id = RequestId(state.last_id);
            let previous = state.in_flight.replace(InFlight {
                id,
                abort: task.abort_handle(),
            });
            if let Some(previous) = previous {
                debug!(previous = %previous.id, current = %id, "aborting superseded submission");
                previous.abort.abort();
            }
            state.view.loading = true;
            state.view.error = None;
            state.view.result = None;
            id
        };

        let _guard = FlightGuard { service: self, id };

        info!(
            request = %id,
            file = %file.file_name,
            size_bytes = file.bytes.len(),
            "submitting audio for summarization"
        );

        let outcome = match task.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => {
                debug!(request = %id, "submission task aborted");
                let last_id = self.lock().last_id;
                return Err(stale_error(id, last_id));
            }
            Err(e) => Err(DomainError::network(format!(
                "submission task failed: {}",
                e
            ))),
        };

        self.apply_outcome(id, &file.file_name, outcome)
    }

    /// Write a resolved outcome into the view if `id` is still the current submission.
    fn apply_outcome(
        &self,
        id: RequestId,
        file_name: &str,
        outcome: Result<SummaryResponse, DomainError>,
    ) -> Result<MeetingSummary, DomainError> {
        let mut state = self.lock();
        let current = state.in_flight.as_ref().map(|f| f.id);
        if current != Some(id) {
            debug!(request = %id, "discarding stale submission result");
            return Err(stale_error(id, state.last_id));
        }
        state.in_flight = None;
        state.view.loading = false;

        match outcome {
            Ok(response) => {
                let summary = MeetingSummary::from_response(id, file_name, response);
                info!(
                    request = %id,
                    summary_len = summary.summary.len(),
                    transcript_len = summary.transcript.len(),
                    actions = summary.action_items.len(),
                    "summary received"
                );
                // A validation error raised during the flight no longer applies.
                state.view.error = None;
                state.view.result = Some(summary.clone());
                Ok(summary)
            }
            Err(e) => {
                warn!(request = %id, status = ?e.status(), error = %e, "submission failed");
                state.view.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Abort the in-flight submission, if any, and leave the loading state.
    ///
    /// Returns true if something was cancelled.
    pub fn cancel(&self) -> bool {
        let mut state = self.lock();
        match state.in_flight.take() {
            Some(in_flight) => {
                in_flight.abort.abort();
                state.view.loading = false;
                info!(request = %in_flight.id, "submission cancelled");
                true
            }
            None => false,
        }
    }
}

/// A newer id was issued: superseded. Otherwise only `cancel` can have dropped it.
fn stale_error(id: RequestId, last_id: u64) -> DomainError {
    if last_id > id.0 {
        DomainError::Superseded(id.0)
    } else {
        DomainError::Cancelled(id.0)
    }
}
