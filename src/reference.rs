//! Single-point codec.
//!
//! Full walk from the root orientation, without any state carried between
//! calls. Costs `k` steps per point, whatever the input order.

use crate::{
    automaton::{self, ROOT_STATE},
    CurveOrder, Error, Point,
};

/// Computes the Hilbert code of a single point.
///
/// # Errors
///
/// Returns [`Error::CoordinateOutOfRange`] if `point` doesn't fit in the grid.
///
/// # Example
///
/// ```
/// use nahc::{CurveOrder, Point};
///
/// let order = CurveOrder::new(2)?;
/// assert_eq!(nahc::encode_point(order, Point::new(0, 3))?, 5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn encode_point(order: CurveOrder, point: Point) -> Result<u64, Error> {
    if !order.contains(point.x, point.y) {
        return Err(Error::coordinate_out_of_range(point.x, point.y, order));
    }

    let mut state = ROOT_STATE;
    let mut code = 0;
    for level in (0..=order.top_level()).rev() {
        let (digit, next_state) = automaton::encode_step(
            state,
            (point.x >> level) & 1,
            (point.y >> level) & 1,
        );
        code = (code << 2) | u64::from(digit);
        state = next_state;
    }

    Ok(code)
}

/// Computes the point at the given position of the Hilbert curve.
///
/// # Errors
///
/// Returns [`Error::CodeOutOfRange`] if `code` is past the end of the curve.
///
/// # Example
///
/// ```
/// use nahc::{CurveOrder, Point};
///
/// let order = CurveOrder::new(2)?;
/// assert_eq!(nahc::decode_point(order, 5)?, Point::new(0, 3));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn decode_point(order: CurveOrder, code: u64) -> Result<Point, Error> {
    if code > order.max_code() {
        return Err(Error::code_out_of_range(code, order));
    }

    let mut state = ROOT_STATE;
    let (mut x, mut y) = (0, 0);
    for level in (0..=order.top_level()).rev() {
        let (x_bit, y_bit, next_state) =
            automaton::decode_step(state, (code >> (2 * level)) & 0b11);
        x = (x << 1) | x_bit;
        y = (y << 1) | y_bit;
        state = next_state;
    }

    Ok(Point::new(x, y))
}

// -----------------------------------------------------------------------------
