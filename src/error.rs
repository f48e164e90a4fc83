//! Defines dataset errors.

/// An error type for all fallible operations in the crate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An operation was performed on 2 objects with incompatible shapes.
    #[error("Incompatible shapes {0:?} and {1:?}.")]
    IncompatibleShapes(Vec<usize>, Vec<usize>),
    /// A generator or selector received a parameter outside of its accepted set.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// A specialized [`Result`](std::result::Result) type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl From<String> for Error {
    fn from(err: String) -> Self {
        Self::InvalidParameter(err)
    }
}
