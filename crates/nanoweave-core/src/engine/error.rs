use crate::core::models::error::ModelError;
use thiserror::Error;

/// Errors that abort a construction run.
///
/// Per-directive failures (unknown helices, missing strand coverage, failed
/// overhang placement) are recovered or skipped inside the run and surface in
/// the [`BuildReport`](super::report::BuildReport) instead; only the
/// conditions below terminate a run.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required core parameter is absent or non-positive. Raised before
    /// any model mutation.
    #[error("missing or invalid core parameter: {field}")]
    MissingParameters { field: &'static str },

    /// The model rejected a base-phase operation. Base-phase offsets are
    /// engine-computed, so this indicates parameters no valid lattice can
    /// satisfy (e.g. a total length too short to nick).
    #[error("base phase rejected by the model: {source}")]
    Base {
        #[from]
        source: ModelError,
    },
}
