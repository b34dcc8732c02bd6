use thiserror::Error;

/// An error accessing a [`RankedVec`](crate::RankedVec)
#[derive(Debug, Clone, Copy, Error, Eq, PartialEq)]
pub enum Error {
    /// The requested rank does not correspond to a held item.
    #[error("rank {rank} is out of range for a sequence of length {len}")]
    OutOfRange {
        /// The rank that was requested
        rank: usize,
        /// The length of the sequence at the time of the request
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
