use thiserror::Error;

/// Error raised by a tool handler. Carries the underlying failure's message;
/// the dispatcher converts it into a failure envelope and nothing propagates
/// past that boundary.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("{0}")]
    Message(String),
}

impl From<anyhow::Error> for ToolError {
    fn from(e: anyhow::Error) -> Self {
        ToolError::Message(e.to_string())
    }
}
