use thiserror::Error;

/// Failures while reading interactive input.
///
/// The registry itself never faults on a business-rule miss; malformed
/// input is caught at the prompt and reported before any core call is made.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("expected a number, got '{0}'")]
    NotANumber(String),
    #[error("could not read from the terminal: {0}")]
    Io(#[from] std::io::Error),
}
