use crate::InvalidCurveOrder;
use std::fmt;

/// Order of a Hilbert curve, i.e. the number of bit levels per axis.
///
/// A curve of order `k` covers a `2^k x 2^k` grid and its codes are `2k` bits
/// wide. Coordinates are stored on 32 bits and codes on 64 bits, which bounds
/// `k` to `1..=32`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CurveOrder(u8);

impl CurveOrder {
    /// Smallest supported order (2x2 grid).
    pub const MIN: Self = Self(1);
    /// Largest supported order (full 32-bit coordinates, 64-bit codes).
    pub const MAX: Self = Self(32);

    /// Initializes a new curve order.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCurveOrder`] if `value` is not in `1..=32`.
    ///
    /// # Example
    ///
    /// ```
    /// use nahc::CurveOrder;
    ///
    /// let order = CurveOrder::new(16)?;
    /// assert_eq!(order.side(), 65_536);
    /// assert!(CurveOrder::new(33).is_err());
    /// # Ok::<(), nahc::InvalidCurveOrder>(())
    /// ```
    pub const fn new(value: u8) -> Result<Self, InvalidCurveOrder> {
        if value < Self::MIN.0 || value > Self::MAX.0 {
            return Err(InvalidCurveOrder::new(value));
        }
        Ok(Self(value))
    }

    /// Returns the number of bit levels per axis.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index of the coarsest recursion level (`k - 1`).
    pub(crate) const fn top_level(self) -> u32 {
        self.0 as u32 - 1
    }

    /// Returns the width (and height) of the grid.
    #[must_use]
    pub const fn side(self) -> u64 {
        1 << self.0
    }

    /// Returns the largest valid coordinate on either axis.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // side <= 2^32.
    pub const fn max_coordinate(self) -> u32 {
        (self.side() - 1) as u32
    }

    /// Returns the largest valid code.
    #[must_use]
    pub const fn max_code(self) -> u64 {
        match 1_u64.checked_shl(2 * self.0 as u32) {
            Some(count) => count - 1,
            None => u64::MAX,
        }
    }

    /// Checks that both coordinates fit on `k` bits.
    pub(crate) const fn contains(self, x: u32, y: u32) -> bool {
        let max = self.max_coordinate();
        x <= max && y <= max
    }
}

impl TryFrom<u8> for CurveOrder {
    type Error = InvalidCurveOrder;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurveOrder> for u8 {
    fn from(value: CurveOrder) -> Self {
        value.0
    }
}

impl fmt::Display for CurveOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// -----------------------------------------------------------------------------
