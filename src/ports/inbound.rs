//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: TUI/CLI drives the summarize use case.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the front-end until the user is done.
    async fn run(&self) -> Result<(), DomainError>;
}
