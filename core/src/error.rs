use thiserror::Error;

/// Result type for filmsim operations
pub type Result<T> = std::result::Result<T, FilmsimError>;

/// Error types for filmsim operations
#[derive(Error, Debug)]
pub enum FilmsimError {
    /// Block does not start with the Fujifilm maker note signature
    #[error("Invalid maker note: missing FUJIFILM signature")]
    InvalidSignature,

    /// A read ran past the end of the block
    #[error("Truncated maker note: needed {needed} bytes at offset {offset}, block is {len} bytes")]
    Truncated {
        offset: usize,
        needed: usize,
        len: usize,
    },

    /// An IFD entry describes a payload that cannot exist
    #[error("Invalid maker note entry for tag {tag:#06x}: {reason}")]
    InvalidEntry { tag: u16, reason: String },

    /// String is not a known film simulation identifier
    #[error("Unknown film simulation: {0}")]
    UnknownSimulation(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
