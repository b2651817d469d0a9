//! Engine error types.
//!
//! Expected gameplay outcomes -- a locked door, a missing inventory item, a
//! pack too heavy for one more thing -- are never errors. They come back as
//! unchanged state or as a transient message on the next state. The variants
//! here cover caller mistakes only.

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised for precondition violations when driving the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The selection index does not correspond to any offered choice.
    #[error("invalid choice index: {0}")]
    InvalidChoice(usize),

    /// The area handed to `Door::other` is not one of that door's endpoints.
    #[error("area \"{0}\" is not an endpoint of this door")]
    InvalidEndpoint(String),
}
