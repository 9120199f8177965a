use std::fmt;

/// Precondition violations reported by the disjoint-set structures.
///
/// All of these indicate a caller bug (wrong key, stale reference, merging
/// overlapping key sets), not a recoverable runtime state. Operations fail
/// before mutating anything observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key outside the fixed index range `[0, capacity)`.
    OutOfRange { key: usize, capacity: usize },
    /// Key was never inserted into the ensemble.
    UnknownKey,
    /// Insert or merge would create two mappings for the same key.
    DuplicateKey,
    /// Query on an ensemble with zero components.
    Underflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { key, capacity } => {
                write!(f, "key {} out of range [0, {})", key, capacity)
            }
            Error::UnknownKey => write!(f, "key does not exist in the ensemble"),
            Error::DuplicateKey => write!(f, "duplicate key in the ensemble"),
            Error::Underflow => write!(f, "ensemble has no components"),
        }
    }
}

impl std::error::Error for Error {}
