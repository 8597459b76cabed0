//! The shared demo algorithm: populate, render, and sum the buffer.
//!
//! Both binaries drive [`run`], which reproduces the classroom script:
//! fill slots with `1..=N` (rendering after every single write), show
//! the array, sum it row by row next to the triangular-number column,
//! show it again, say goodbye. All output goes through a
//! caller-supplied sink so tests can capture the transcript.
//!
//! Every loop below runs to the logical count, not the allocated
//! capacity. With N above the capacity the writes and reads leave the
//! allocation. That is the point of the exercise, so none of these
//! functions clamp or check N.

#![allow(unsafe_code)]

use std::io::{self, Write};

use crate::buffer::RawBuffer;
use crate::config::BufferConfig;
use crate::error::LessonError;

/// Closed-form triangular number `value * (value + 1) / 2`.
///
/// Printed next to the running sum as a cross-check column; it is never
/// asserted against the sum. Wrapping arithmetic: slots read from
/// beyond the allocation hold garbage, and the demo should still reach
/// "Bye" instead of aborting on a debug-build overflow.
pub fn triangular(value: i32) -> i32 {
    value.wrapping_mul(value.wrapping_add(1)) / 2
}

/// Print the first `count` logical slots, `%4d,`-style, then a newline.
///
/// Renders the logical length, not the allocated capacity: with
/// `count` above the capacity this reads past the allocation (the read
/// half of defect #2).
pub fn render_array(buf: &RawBuffer, count: i32, out: &mut impl Write) -> io::Result<()> {
    for k in 0..count {
        // SAFETY: in bounds only while k < capacity; the demo knowingly
        // lets k run to the logical count instead.
        let value = unsafe { buf.read_unchecked(k as usize) };
        write!(out, "{value:4},")?;
    }
    writeln!(out)
}

/// Fill slots `0..count` with the values `1..=count`, rendering the
/// full logical array after every single write.
///
/// The render-per-write is intentionally noisy: early lines show the
/// zeroed tail filling up, and under a memory tool each extra render
/// multiplies the out-of-bounds reports. Writes past the capacity are
/// the write half of defect #2.
pub fn populate(buf: &mut RawBuffer, count: i32, out: &mut impl Write) -> io::Result<()> {
    for j in 0..count {
        // SAFETY: in bounds only while j < capacity; the demo knowingly
        // lets j run to the logical count instead.
        unsafe { buf.write_unchecked(j as usize, j + 1) };
        render_array(buf, count, out)?;
    }
    Ok(())
}

/// Sum the first `count` logical slots, printing one table row per
/// slot: the value, the running sum, and [`triangular`] of the value.
///
/// Returns the final accumulated sum. Accumulation wraps for the same
/// reason [`triangular`] does.
pub fn compute_sum(buf: &RawBuffer, count: i32, out: &mut impl Write) -> io::Result<i32> {
    writeln!(out, "{:>6} -> {:>6}    {:>6}", "value", "sum", "(val*(val+1))/2")?;
    writeln!(out, "-----------------------------------")?;
    let mut sum = 0i32;
    for k in 0..count {
        // SAFETY: in bounds only while k < capacity; the demo knowingly
        // lets k run to the logical count instead.
        let value = unsafe { buf.read_unchecked(k as usize) };
        sum = sum.wrapping_add(value);
        writeln!(out, "{value:6} -> {sum:6}    {:6}", triangular(value))?;
    }
    Ok(sum)
}

/// Run the whole lesson for an already-clamped `count`.
///
/// Allocates the fixed-capacity buffer, populates it, prints the
/// array, sums it with the cross-check table, prints the sum and the
/// array once more, and signs off. Returns the final sum. The buffer
/// is leaked on return (defect #1).
pub fn run(config: &BufferConfig, count: i32, out: &mut impl Write) -> Result<i32, LessonError> {
    let mut buf = RawBuffer::new(config)?;

    populate(&mut buf, count, out)?;

    write!(out, "\nThe array is: ")?;
    render_array(&buf, count, out)?;
    writeln!(out)?;

    let total = compute_sum(&buf, count, out)?;
    writeln!(out, "\nThe sum is: {total}")?;

    render_array(&buf, count, out)?;
    writeln!(out, "Bye")?;

    Ok(total)
}
