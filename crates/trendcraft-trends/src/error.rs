use thiserror::Error;

/// Fault raised by a single analysis stage.
///
/// Stages surface these through their `Result`; only [`crate::analyze`]
/// swallows them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("{stage}: engagement total overflowed for platform '{platform}'")]
    Overflow {
        stage: &'static str,
        platform: String,
    },
}
