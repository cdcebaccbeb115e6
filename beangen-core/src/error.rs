use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type for buffer and flush operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the emission engine.
///
/// Selection and position errors are caller bugs in the generator logic;
/// they are reported immediately and never retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("buffer index {index} is out of range (writer has {count} buffers)")]
    BufferOutOfRange { index: usize, count: usize },

    #[error("pop_select called with an empty selection stack")]
    EmptySelectionStack,

    #[error("position belongs to buffer {expected}, but buffer {current} is selected")]
    PositionMismatch { expected: usize, current: usize },

    #[error("position {offset} is past the end of buffer {buffer} ({len} bytes)")]
    PositionOutOfRange {
        buffer: usize,
        offset: usize,
        len: usize,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("formatting error while flushing buffers")]
    Fmt(#[from] std::fmt::Error),
}
