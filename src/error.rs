//! Engine error taxonomy.
//!
//! Only invariant violations and failed load operations become errors.
//! Recoverable content mistakes (missing texture for a draw, destroying an
//! already-destroyed entity) are logged as warnings at the point of use and
//! never surface here.

use thiserror::Error;

/// Errors produced by engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// `BatchRenderer::begin` was called while a previous batch still has
    /// pending quads. This is a programmer error, not a recoverable state.
    #[error("batch renderer state is invalid: begin() called with {pending} pending quads")]
    InvalidBatchState { pending: usize },

    /// The render system ran without any entity carrying an active main
    /// camera.
    #[error("trying to render without a main camera")]
    MissingCamera,

    /// A load operation (level data, configuration) failed. The engine never
    /// retries; the caller decides what to do.
    #[error("failed to load {what}: {reason}")]
    LoadFailed { what: String, reason: String },
}
