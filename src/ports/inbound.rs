//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the interactive front-end drives application use cases.
#[async_trait::async_trait]
pub trait InputPort: Send {
    /// Run the interactive session until the user asks to quit.
    async fn run(&mut self) -> Result<(), DomainError>;
}
