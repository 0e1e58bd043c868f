//! The 4-state Hilbert transducer.
//!
//! Each state is one of the four rotated/reflected copies of the base "U"
//! pattern; state 0 is the root orientation. The tables are the bit-exact
//! compatibility surface of the codec and must not be reordered.

/// Orientation of the curve pattern at a recursion level, in `0..4`.
pub type State = u8;

/// Orientation used at the top level of every curve.
pub const ROOT_STATE: State = 0;

/// Quadrant digit for `[state][x bit][y bit]`.
const ENCODE_DIGIT: [[[u8; 2]; 2]; 4] = [
    [[0, 1], [3, 2]],
    [[0, 3], [1, 2]],
    [[2, 3], [1, 0]],
    [[2, 1], [3, 0]],
];

/// Next state for `[state][x bit][y bit]`.
const ENCODE_NEXT_STATE: [[[State; 2]; 2]; 4] = [
    [[1, 0], [3, 0]],
    [[0, 2], [1, 1]],
    [[2, 1], [2, 3]],
    [[3, 3], [0, 2]],
];

/// Packed coordinate bits for `[state][digit]`: x in bit 1, y in bit 0.
const DECODE_COORD_BITS: [[u8; 4]; 4] = [
    [0, 1, 3, 2],
    [0, 2, 3, 1],
    [3, 2, 0, 1],
    [3, 1, 0, 2],
];

/// Next state for `[state][digit]`.
const DECODE_NEXT_STATE: [[State; 4]; 4] = [
    [1, 0, 0, 3],
    [0, 1, 1, 2],
    [3, 2, 2, 1],
    [2, 3, 3, 0],
];

/// Consumes one level of coordinate bits.
///
/// Returns the quadrant digit and the state for the level below.
/// Bits must be 0 or 1.
#[inline]
pub const fn encode_step(state: State, x_bit: u32, y_bit: u32) -> (u8, State) {
    let (s, x, y) = (state as usize, x_bit as usize, y_bit as usize);
    (ENCODE_DIGIT[s][x][y], ENCODE_NEXT_STATE[s][x][y])
}

/// Consumes one quadrant digit (in `0..4`).
///
/// Returns the `(x, y)` bits and the state for the level below.
#[inline]
#[allow(clippy::cast_possible_truncation)] // Digit is 2-bit wide.
pub const fn decode_step(state: State, digit: u64) -> (u32, u32, State) {
    let (s, d) = (state as usize, digit as usize);
    let bits = DECODE_COORD_BITS[s][d];
    (((bits >> 1) & 1) as u32, (bits & 1) as u32, DECODE_NEXT_STATE[s][d])
}

// -----------------------------------------------------------------------------
