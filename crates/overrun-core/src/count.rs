//! Count acquisition: C-style integer parsing and the negative clamp.
//!
//! Both binaries funnel user input through these two functions so the
//! variants stay byte-for-byte identical past the point where N is
//! obtained.

/// Parse an integer the way C's `atoi` does.
///
/// Skips leading ASCII whitespace, accepts one optional `+`/`-`,
/// consumes consecutive ASCII digits, and ignores everything after
/// them. No digits means zero, so garbage input quietly becomes an
/// empty run. Saturates at the `i32` limits.
pub fn parse_count(input: &str) -> i32 {
    let rest = input.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let mut chars = rest.chars().peekable();
    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };
    // Accumulate in i64, capped just past i32::MAX so `-2147483648`
    // still lands exactly on i32::MIN.
    const CAP: i64 = i32::MAX as i64 + 1;
    let mut magnitude: i64 = 0;
    for c in chars {
        let Some(digit) = c.to_digit(10) else { break };
        magnitude = (magnitude * 10 + i64::from(digit)).min(CAP);
    }
    let signed = if negative { -magnitude } else { magnitude };
    signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Replace a negative count with the fixed capacity.
///
/// Non-negative counts pass through untouched, including counts larger
/// than the capacity; that hole is exactly what the exercise leaves
/// open.
pub fn clamp_count(count: i32, capacity: usize) -> i32 {
    if count < 0 {
        log::debug!("negative count {count} replaced with capacity {capacity}");
        capacity as i32
    } else {
        count
    }
}
