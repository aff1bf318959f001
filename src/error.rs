//! Boundary error taxonomy.
//!
//! The engine's computations are total and raise none of these; they
//! exist for the completion boundary, where the orchestrator maps its
//! own I/O failures into the same taxonomy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed request shape or out-of-domain value. Maps to a
    /// client error.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Referenced session or player is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// Session already completed; rewards must not be applied twice.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Persistence failure after computation. The caller must not have
    /// partially applied rewards when surfacing this.
    #[error("internal error: {0}")]
    Internal(String),
}
