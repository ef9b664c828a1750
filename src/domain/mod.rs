//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod action_items;
pub mod entities;
pub mod errors;
pub mod view_state;

pub use action_items::parse_action_items;
pub use entities::{FileInfo, MeetingSummary, RequestId, SelectedFile, SummaryResponse};
pub use errors::{
    DomainError, MALFORMED_RESPONSE_MESSAGE, NO_FILE_MESSAGE, TRANSPORT_FAILURE_MESSAGE,
};
pub use view_state::{Phase, ViewState};
