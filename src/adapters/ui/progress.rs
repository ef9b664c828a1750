//! Spinner shown while a submission is loading.

use crate::domain::{DomainError, MeetingSummary};
use crate::usecases::SummarizeService;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub const PROCESSING_MESSAGE: &str = "Processing... Please wait, this can take several minutes.";

pub fn processing_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(PROCESSING_MESSAGE);
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Submit with a spinner. Ctrl-C cancels the submission and resolves to `Cancelled`.
pub async fn submit_with_progress(
    service: &SummarizeService,
) -> Result<MeetingSummary, DomainError> {
    let spinner = processing_spinner();
    let submit = service.submit();
    tokio::pin!(submit);

    let result = tokio::select! {
        biased;
        res = &mut submit => res,
        _ = tokio::signal::ctrl_c() => {
            service.cancel();
            submit.await
        }
    };

    spinner.finish_and_clear();
    result
}
