use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// At least one field failed its rules; each carries its own message.
    #[error("{issues} field(s) need attention")]
    Blocked { issues: usize },
}
