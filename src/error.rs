use thiserror::Error;

/// Errors returned by [`OrderedMap`](crate::OrderedMap) lookups.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The requested key has no entry. The map was not modified.
    #[error("no entry found for key")]
    KeyNotFound,
}

/// Shorthand for results whose error is [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
