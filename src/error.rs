use crate::CurveOrder;
use std::{error::Error as StdError, fmt};

/// Curve order outside of the supported range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidCurveOrder(u8);

impl InvalidCurveOrder {
    pub(crate) const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the rejected value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for InvalidCurveOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid curve order {}: expected {}..={}",
            self.0,
            CurveOrder::MIN,
            CurveOrder::MAX
        )
    }
}

impl StdError for InvalidCurveOrder {}

// -----------------------------------------------------------------------------

/// Errors related to the encoding and decoding processes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Invalid curve order.
    InvalidCurveOrder(InvalidCurveOrder),
    /// A coordinate doesn't fit in the grid.
    CoordinateOutOfRange {
        /// X coordinate.
        x: u32,
        /// Y coordinate.
        y: u32,
        /// Curve order.
        order: CurveOrder,
    },
    /// A code is past the end of the curve.
    CodeOutOfRange {
        /// Rejected code.
        code: u64,
        /// Curve order.
        order: CurveOrder,
    },
}

impl Error {
    pub(crate) const fn coordinate_out_of_range(
        x: u32,
        y: u32,
        order: CurveOrder,
    ) -> Self {
        Self::CoordinateOutOfRange { x, y, order }
    }

    pub(crate) const fn code_out_of_range(
        code: u64,
        order: CurveOrder,
    ) -> Self {
        Self::CodeOutOfRange { code, order }
    }
}

impl From<InvalidCurveOrder> for Error {
    fn from(value: InvalidCurveOrder) -> Self {
        Self::InvalidCurveOrder(value)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidCurveOrder(ref err) => write!(f, "{err}"),
            Self::CoordinateOutOfRange { x, y, order } => {
                write!(
                    f,
                    "coordinate ({x}, {y}) out of range for order {order} \
                     (max {})",
                    order.max_coordinate()
                )
            }
            Self::CodeOutOfRange { code, order } => {
                write!(
                    f,
                    "code {code} out of range for order {order} (max {})",
                    order.max_code()
                )
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        if let Self::InvalidCurveOrder(ref source) = *self {
            return Some(source);
        }
        None
    }
}
