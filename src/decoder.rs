//! Neighbor-aware decoding of Hilbert codes into coordinates.
//!
//! # Decoding
//!
//! The mirror image of the encoding: the code is read two bits at a time,
//! from the most significant digit down. Each digit, interpreted in the
//! current orientation, gives one bit of each coordinate and the orientation
//! of the level below.
//!
//! Two codes sharing their leading digits describe points sharing the leading
//! bits of both coordinates. The number of shared digits between the current
//! code and the next one is given by the highest set bit of their XOR (halved,
//! since a level is worth two bits). Above that level, the next call can reuse
//! the coordinates bits we just produced and the orientations we cache.
//!
//! # Example
//!
//! Decoding `7, 6, 5` on a curve of order 3:
//!
//! ```text
//! 7 ^ 6 = 0b001 -> next call starts at level 0
//!
//! level 2: digit 0, state 0 -> bits (0, 0), state 1  (cache[1] = 1)
//! level 1: digit 1, state 1 -> bits (1, 0), state 1  (cache[0] = 1)
//! level 0: digit 3, state 1 -> bits (0, 1), state 2
//!
//! (x, y) = (0b010, 0b001) = (2, 1)
//! ```
//!
//! Then `6` only requires the last digit, decoded from `cache[0]`:
//!
//! ```text
//! level 0: digit 2, state 1 -> bits (1, 1)
//!
//! (x, y) = (0b010 | 1, 0b000 | 1) = (3, 1)
//! ```

use crate::{
    automaton,
    bits::{highest_set_bit_u64, keep_above_u32},
    CurveOrder, Error, OrientationCache, Point, Stats,
};
use tracing::{debug, trace};

/// Decoding cursor over an ordered stream of codes.
///
/// Each call takes the current code and a peek at the next one; the next call
/// must then be made with exactly that code.
#[derive(Clone, Debug)]
pub struct Decoder {
    order: CurveOrder,
    /// Last returned point.
    previous: Point,
    /// Level the next call starts from, `None` when there is nothing to
    /// recompute.
    boundary: Option<u32>,
    pub(crate) cache: OrientationCache,
    stats: Stats,
}

impl Decoder {
    /// Initializes a fresh decoder for a curve of the given order.
    #[must_use]
    pub fn new(order: CurveOrder) -> Self {
        trace!(order = order.get(), "new decoder");
        Self {
            order,
            previous: Point::default(),
            boundary: Some(order.top_level()),
            cache: OrientationCache::new(order),
            stats: Stats::default(),
        }
    }

    /// Decodes `code`, given the code that will be decoded next.
    ///
    /// `next` must be the exact argument of the following call, or `None` if
    /// unknown (the following call then performs a full walk).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CodeOutOfRange`] if `code` is past the end of the
    /// curve. The cursor is reset in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use nahc::{CurveOrder, Decoder, Point};
    ///
    /// let mut decoder = Decoder::new(CurveOrder::new(3)?);
    ///
    /// assert_eq!(decoder.decode(7, Some(6))?, Point::new(2, 1));
    /// assert_eq!(decoder.decode(6, None)?, Point::new(3, 1));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn decode(
        &mut self,
        code: u64,
        next: Option<u64>,
    ) -> Result<Point, Error> {
        if code > self.order.max_code() {
            debug!(
                code,
                order = self.order.get(),
                "code out of range, restarting decoder"
            );
            self.restart();
            return Err(Error::code_out_of_range(code, self.order));
        }

        let top = self.order.top_level();
        // Highest level where the next code diverges from this one.
        let declared = next.map_or(Some(top), |next| {
            highest_set_bit_u64(code ^ next).map(|bit| (bit / 2).min(top))
        });

        // No boundary: same code as before, nothing to recompute.
        let point = self
            .boundary
            .map_or(self.previous, |start| self.walk(code, start, declared));

        self.previous = point;
        self.boundary = declared;

        Ok(point)
    }

    /// Decodes the digits from `start` down to level 0 and splices the bits
    /// into the previous coordinates.
    fn walk(&mut self, code: u64, start: u32, declared: Option<u32>) -> Point {
        let mut state = self.cache.get(start);
        let (mut x, mut y) = (0, 0);

        for level in (0..=start).rev() {
            let digit = (code >> (2 * level)) & 0b11;
            let (x_bit, y_bit, next_state) =
                automaton::decode_step(state, digit);
            x = (x << 1) | x_bit;
            y = (y << 1) | y_bit;
            state = next_state;

            if level > 0 && declared.map_or(true, |boundary| level > boundary)
            {
                self.cache.set(level - 1, state);
                self.stats.cache_writes += 1;
            }
        }
        self.stats.levels += u64::from(start + 1);

        Point::new(
            x | keep_above_u32(self.previous.x, start + 1),
            y | keep_above_u32(self.previous.y, start + 1),
        )
    }

    /// Puts the cursor back in its fresh state and clears the statistics.
    pub fn reset(&mut self) {
        self.restart();
        self.cache.clear();
        self.stats = Stats::default();
    }

    /// Forces a full walk on the next call.
    fn restart(&mut self) {
        trace!(order = self.order.get(), "decoder restart");
        self.previous = Point::default();
        self.boundary = Some(self.order.top_level());
    }

    /// Returns the order of the curve.
    #[must_use]
    pub const fn order(&self) -> CurveOrder {
        self.order
    }

    /// Returns the level the next call starts from.
    ///
    /// `None` means the next code is expected to be identical to the last one.
    #[must_use]
    pub const fn boundary(&self) -> Option<u32> {
        self.boundary
    }

    /// Checks whether the next call performs a full walk.
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        matches!(self.boundary, Some(level) if level == self.order.top_level())
    }

    /// Returns the work counters.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    /// Returns the orientation cache.
    #[must_use]
    pub const fn cache(&self) -> &OrientationCache {
        &self.cache
    }
}

// -----------------------------------------------------------------------------
