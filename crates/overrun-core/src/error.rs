//! Error types for the overrun demo.
//!
//! These cover the real failures (a buffer that cannot be allocated at
//! all, a transcript that cannot be written), not the planted defects.
//! The planted defects never surface as `Err`; they surface in a Miri
//! or sanitizer report.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors from demo buffer construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// Requested capacity of zero slots.
    ZeroCapacity,
    /// Requested capacity has no valid allocation layout.
    LayoutOverflow {
        /// Number of slots requested.
        requested: usize,
    },
    /// The allocator returned null.
    AllocationFailed {
        /// Size of the failed request in bytes.
        bytes: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "buffer capacity must be at least one slot"),
            Self::LayoutOverflow { requested } => {
                write!(f, "no valid allocation layout for {requested} slots")
            }
            Self::AllocationFailed { bytes } => {
                write!(f, "allocation of {bytes} bytes failed")
            }
        }
    }
}

impl Error for BufferError {}

/// Errors from running the lesson end to end.
#[derive(Debug)]
pub enum LessonError {
    /// Buffer construction failed.
    Buffer(BufferError),
    /// Writing the transcript to the output sink failed.
    Io(io::Error),
}

impl fmt::Display for LessonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer(err) => write!(f, "buffer setup failed: {err}"),
            Self::Io(err) => write!(f, "transcript write failed: {err}"),
        }
    }
}

impl Error for LessonError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Buffer(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<BufferError> for LessonError {
    fn from(err: BufferError) -> Self {
        Self::Buffer(err)
    }
}

impl From<io::Error> for LessonError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
