use std::fmt;

/// A basic error type from this library.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A read of `len` bytes starting at `offset` goes past the end of
    /// the data, which is only `data_len` bytes long.
    OutOfBounds {
        offset: usize,
        len: usize,
        data_len: usize,
    },
}

impl Error {
    /// Moves the offset of this error by `base` bytes, for errors raised
    /// on a sub-slice that starts at `base` in the whole packet.
    pub(crate) fn rebase(self, base: usize) -> Self {
        match self {
            Self::OutOfBounds {
                offset,
                len,
                data_len,
            } => Self::OutOfBounds {
                offset: offset + base,
                len,
                data_len: data_len + base,
            },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                offset,
                len,
                data_len,
            } => write!(
                f,
                "out of bounds: reading {} bytes at offset {} of {} bytes",
                len, offset, data_len
            ),
        }
    }
}

impl std::error::Error for Error {}

/// One and only `Result` type from this library crate.
pub type Result<T> = core::result::Result<T, Error>;
