use thiserror::Error;

/// Failures of the preparation pipeline and the training-session boundary.
///
/// Every variant is terminal for the run: the tool prints the error and
/// exits without emitting a metrics table.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required column is absent from the input header.
    #[error("missing required column `{0}` in input table")]
    Schema(String),

    /// A numeric field fell outside its declared domain.
    #[error("column `{column}` holds `{value}`, expected {expected}")]
    Range {
        column: &'static str,
        value: String,
        expected: &'static str,
    },

    /// An address field could not be parsed during anonymization.
    #[error("cannot anonymize malformed address `{0}`")]
    Format(String),

    /// The training session rejected its inputs.
    #[error("experiment session: {0}")]
    Session(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
