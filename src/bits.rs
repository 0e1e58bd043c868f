//! Most significant bit lookup.
//!
//! Encoding reasons about per-axis differences (half-width), decoding about
//! code differences (full-width), hence one scanner per width.

/// Returns the index of the highest set bit of `value`, `None` if zero.
///
/// Descending binary search: test the upper half, fold, repeat down to a
/// single bit.
#[must_use]
pub const fn highest_set_bit_u32(mut value: u32) -> Option<u32> {
    if value == 0 {
        return None;
    }
    let mut index = 0;
    let mut width = 16;
    while width > 0 {
        if value >= 1 << width {
            index += width;
            value >>= width;
        }
        width >>= 1;
    }
    Some(index)
}

/// Returns the index of the highest set bit of `value`, `None` if zero.
///
/// Same as [`highest_set_bit_u32`], starting with a 32-bit fold.
#[must_use]
pub const fn highest_set_bit_u64(mut value: u64) -> Option<u32> {
    if value == 0 {
        return None;
    }
    let mut index = 0;
    let mut width = 32;
    while width > 0 {
        if value >= 1 << width {
            index += width;
            value >>= width;
        }
        width >>= 1;
    }
    Some(index)
}

/// Clears the `bits` lowest bits of `value`.
///
/// Shifting by the full width is allowed and yields 0.
pub const fn keep_above_u32(value: u32, bits: u32) -> u32 {
    match value.checked_shr(bits) {
        Some(high) => high << bits,
        None => 0,
    }
}

/// Clears the `bits` lowest bits of `value`.
///
/// Shifting by the full width is allowed and yields 0.
pub const fn keep_above_u64(value: u64, bits: u32) -> u64 {
    match value.checked_shr(bits) {
        Some(high) => high << bits,
        None => 0,
    }
}

// -----------------------------------------------------------------------------
