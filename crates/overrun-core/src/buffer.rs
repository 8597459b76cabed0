//! Fixed-capacity demo buffer with deliberately unchecked access.
//!
//! [`RawBuffer`] is the undersized container at the heart of the
//! exercise. It allocates exactly `capacity` zero-initialized `i32`
//! slots and exposes raw-pointer accessors that perform no bounds
//! checking. Both planted defects live here:
//!
//! - the allocation is never freed (no `Drop` impl), and
//! - nothing stops an index from running past `capacity`.
//!
//! Keep it that way. The demo binaries exist so students can watch Miri
//! and AddressSanitizer report exactly these two defects.

#![allow(unsafe_code)]

use std::alloc::{alloc_zeroed, Layout};

use crate::config::BufferConfig;
use crate::error::BufferError;

/// A heap allocation of `capacity` zero-initialized `i32` slots.
///
/// The capacity is fixed at construction. Callers track the logical
/// length themselves and the buffer never checks it against the
/// capacity. Holding a raw pointer keeps the type `!Send`/`!Sync`,
/// which suits a single-threaded classroom demo.
#[derive(Debug)]
pub struct RawBuffer {
    ptr: *mut i32,
    capacity: usize,
}

impl RawBuffer {
    /// Allocate a zeroed buffer per `config`.
    ///
    /// Returns [`BufferError::ZeroCapacity`] for empty configs and
    /// [`BufferError::LayoutOverflow`] when the slot count has no valid
    /// allocation layout.
    pub fn new(config: &BufferConfig) -> Result<Self, BufferError> {
        if config.capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }
        let layout = Layout::array::<i32>(config.capacity).map_err(|_| {
            BufferError::LayoutOverflow {
                requested: config.capacity,
            }
        })?;
        log::debug!(
            "allocating {} bytes for {} slots",
            layout.size(),
            config.capacity
        );
        // SAFETY: layout has non-zero size (capacity >= 1 checked above).
        let ptr = unsafe { alloc_zeroed(layout) }.cast::<i32>();
        if ptr.is_null() {
            return Err(BufferError::AllocationFailed {
                bytes: layout.size(),
            });
        }
        Ok(Self {
            ptr,
            capacity: config.capacity,
        })
    }

    /// Number of slots actually allocated.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Write `value` into slot `index` with no bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`capacity`](Self::capacity). The
    /// lesson violates this contract on purpose whenever the requested
    /// logical length exceeds the capacity; the resulting out-of-bounds
    /// write is defect #2.
    pub unsafe fn write_unchecked(&mut self, index: usize, value: i32) {
        *self.ptr.add(index) = value;
    }

    /// Read slot `index` with no bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`capacity`](Self::capacity); see
    /// [`write_unchecked`](Self::write_unchecked).
    pub unsafe fn read_unchecked(&self, index: usize) -> i32 {
        *self.ptr.add(index)
    }
}

// No Drop impl: the allocation is leaked at process exit on purpose.
// This is defect #1, the one Miri reports even for in-bounds runs.
