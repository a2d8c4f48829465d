//! Error types for reflow-core

use thiserror::Error;

/// Boxed error produced by a fallible reducer.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Core error type
///
/// Supplying a non-invocable reducer or listener is impossible here: the
/// [`Reducer`](crate::Reducer) bound and the closure bound on
/// [`Store::subscribe`](crate::Store::subscribe) rule those values out at
/// compile time, so the only runtime failure left is the reducer itself.
#[derive(Error, Debug)]
pub enum Error {
    /// The reducer failed while computing the next state. The store keeps
    /// its previous state and notifies no listener.
    #[error("reducer failed while handling `{kind}`: {source}")]
    Reducer {
        /// Kind label of the action being reduced
        kind: String,
        source: BoxError,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
