//! Deliberately defective buffer demo for teaching memory-debugging tools.
//!
//! This crate holds the shared logic behind the two `overrun` binaries:
//! a classroom exercise in which an array of N consecutive integers is
//! built and summed, with the sum cross-checked against the triangular
//! number formula `1 + 2 + ... + N = N*(N+1)/2`.
//!
//! The exercise plants two bugs on purpose:
//!
//! 1. The buffer allocation is never freed ([`RawBuffer`] has no `Drop`).
//! 2. The allocation holds a fixed [`BufferConfig::DEFAULT_CAPACITY`]
//!    slots, while every loop runs to the user-requested logical length
//!    N. Any N above the capacity writes and reads past the allocation.
//!
//! Neither bug is to be fixed. Run the binaries under Miri or
//! AddressSanitizer to watch the tools find them.
//!
//! # Architecture
//!
//! ```text
//! lesson (populate / compute_sum / render_array / run)
//! ├── RawBuffer (zeroed heap allocation, unchecked raw-pointer access)
//! │   └── BufferConfig (fixed capacity, default 5)
//! └── count (C atoi parsing, negative-count clamp)
//! ```
//!
//! This is the only crate in the workspace permitted to contain `unsafe`
//! code: the accessors in [`buffer`] and their call sites in [`lesson`],
//! each carrying a `SAFETY` note marking the deliberate violation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod count;
pub mod error;
pub mod lesson;

// Public re-exports for the primary API surface.
pub use buffer::RawBuffer;
pub use config::BufferConfig;
pub use count::{clamp_count, parse_count};
pub use error::{BufferError, LessonError};
pub use lesson::{compute_sum, populate, render_array, run, triangular};
