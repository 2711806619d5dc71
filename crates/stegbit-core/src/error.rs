use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegError {
    /// Represents a bit position outside the eight bits of a byte
    #[error("Bit position {0} is out of range, expected 0..=7")]
    BitPositionOutOfRange(u8),

    /// Represents a bit value that is neither 0 nor 1
    #[error("Bit value {0} is not a bit, expected 0 or 1")]
    InvalidBitValue(u8),

    /// Represents a data block size of zero, which would make the block loop meaningless
    #[error("Data block size must be at least 1")]
    InvalidBlockSize,

    /// Represents a source byte range that does not lie inside its buffer
    #[error("Source range {start}..={end} is outside the buffer of {len} bytes")]
    SourceRangeOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    /// Represents a buffer-level operation that ran past the end of its input
    #[error("Not enough bytes: {required} required but only {available} available")]
    InsufficientBytes { required: usize, available: usize },

    /// Represents a cover file too small to carry the complete hidden frame
    #[error("Cover too small: {required} bytes required but only {available} available")]
    InsufficientCapacity { required: u64, available: u64 },

    /// Represents fragment declarations that add up to more than the payload holds
    #[error("Declared fragments total {declared} bytes but the payload only has {available}")]
    FragmentsExceedPayload { declared: u64, available: u64 },

    /// Represents a required input path that does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write to the destination.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("No cover file set")]
    CoverNotSet,

    #[error("No payload set")]
    PayloadNotSet,

    #[error("No output target set")]
    TargetNotSet,

    #[error("No stego input set")]
    StegoNotSet,
}
