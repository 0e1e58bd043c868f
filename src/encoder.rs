//! Neighbor-aware encoding of coordinates into Hilbert codes.
//!
//! # Encoding
//!
//! A code is built by walking the quadtree from the coarsest level (`k - 1`)
//! down to level 0. At each level the pair of coordinate bits selects a
//! quadrant, which the transducer turns into a 2-bit digit and into the
//! orientation to use one level below.
//!
//! Two points that agree on their bits above level `L` follow the same walk
//! down to `L`: same digits, same orientations. When the caller tells us which
//! point comes next, we know that level before the next call happens, and we
//! can keep what the next call will need:
//! - the digits above `L` are already in the previous code.
//! - the orientation in force when entering `L` is stored in the cache.
//!
//! # Example
//!
//! Let's encode `(2, 1)`, `(3, 1)`, `(3, 0)` on a curve of order 3.
//!
//! ```text
//! (2, 1) = x: 0b010, y: 0b001
//! (3, 1) = x: 0b011, y: 0b001
//! ```
//!
//! The cursor is fresh, so the walk starts at the top level (2) in the root
//! orientation. The lookahead `(3, 1)` only differs at level 0, so every
//! state computed above it is worth keeping.
//!
//! ```text
//! level 2: bits (0, 0), state 0 -> digit 0, state 1  (cache[1] = 1)
//! level 1: bits (1, 0), state 1 -> digit 1, state 1  (cache[0] = 1)
//! level 0: bits (0, 1), state 1 -> digit 3, state 2
//!
//! code = 0b00_01_11 = 7
//! ```
//!
//! The second call starts at level 0, loads `cache[0]` and does a single step:
//!
//! ```text
//! level 0: bits (1, 1), state 1 -> digit 2
//!
//! code = 0b00_01_00 (from 7) | 0b10 = 6
//! ```
//!
//! The third point `(3, 0)` also differs from `(3, 1)` at level 0 only, and
//! gets `5` for the same price.

use crate::{
    automaton,
    bits::{highest_set_bit_u32, keep_above_u64},
    CurveOrder, Error, OrientationCache, Point, Stats,
};
use tracing::{debug, trace};

/// Encoding cursor over an ordered stream of points.
///
/// Each call takes the current point and a peek at the next one; the next
/// call must then be made with exactly that point.
#[derive(Clone, Debug)]
pub struct Encoder {
    order: CurveOrder,
    /// Last returned code.
    previous: u64,
    /// Level the next call starts from, `None` when there is nothing to
    /// recompute.
    boundary: Option<u32>,
    pub(crate) cache: OrientationCache,
    stats: Stats,
}

impl Encoder {
    /// Initializes a fresh encoder for a curve of the given order.
    #[must_use]
    pub fn new(order: CurveOrder) -> Self {
        trace!(order = order.get(), "new encoder");
        Self {
            order,
            previous: 0,
            boundary: Some(order.top_level()),
            cache: OrientationCache::new(order),
            stats: Stats::default(),
        }
    }

    /// Encodes `point`, given the point that will be encoded next.
    ///
    /// `next` must be the exact argument of the following call, or `None` if
    /// unknown (the following call then performs a full walk).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordinateOutOfRange`] if `point` doesn't fit in the
    /// grid. The cursor is reset in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use nahc::{CurveOrder, Encoder, Point};
    ///
    /// let mut encoder = Encoder::new(CurveOrder::new(3)?);
    ///
    /// let a = encoder.encode(Point::new(2, 1), Some(Point::new(3, 1)))?;
    /// let b = encoder.encode(Point::new(3, 1), None)?;
    /// assert_eq!((a, b), (7, 6));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn encode(
        &mut self,
        point: Point,
        next: Option<Point>,
    ) -> Result<u64, Error> {
        if !self.order.contains(point.x, point.y) {
            debug!(
                x = point.x,
                y = point.y,
                order = self.order.get(),
                "coordinate out of range, restarting encoder"
            );
            self.restart();
            return Err(Error::coordinate_out_of_range(
                point.x, point.y, self.order,
            ));
        }

        let top = self.order.top_level();
        // Highest level where the next point diverges from this one.
        let declared = next.map_or(Some(top), |next| {
            let diff = (next.x ^ point.x).max(next.y ^ point.y);
            highest_set_bit_u32(diff).map(|level| level.min(top))
        });

        // No boundary: same point as before, nothing to recompute.
        let code = self
            .boundary
            .map_or(self.previous, |start| self.walk(point, start, declared));

        self.previous = code;
        self.boundary = declared;

        Ok(code)
    }

    /// Computes the digits from `start` down to level 0 and splices them into
    /// the previous code.
    fn walk(&mut self, point: Point, start: u32, declared: Option<u32>) -> u64 {
        let mut state = self.cache.get(start);
        let mut code = 0;

        for level in (0..=start).rev() {
            let x_bit = (point.x >> level) & 1;
            let y_bit = (point.y >> level) & 1;
            let (digit, next_state) =
                automaton::encode_step(state, x_bit, y_bit);
            code = (code << 2) | u64::from(digit);
            state = next_state;

            // Shared with the next point: keep the state entering the level
            // below.
            if level > 0 && declared.map_or(true, |boundary| level > boundary)
            {
                self.cache.set(level - 1, state);
                self.stats.cache_writes += 1;
            }
        }
        self.stats.levels += u64::from(start + 1);

        code | keep_above_u64(self.previous, 2 * (start + 1))
    }

    /// Puts the cursor back in its fresh state and clears the statistics.
    pub fn reset(&mut self) {
        self.restart();
        self.cache.clear();
        self.stats = Stats::default();
    }

    /// Forces a full walk on the next call.
    fn restart(&mut self) {
        trace!(order = self.order.get(), "encoder restart");
        self.previous = 0;
        self.boundary = Some(self.order.top_level());
    }

    /// Returns the order of the curve.
    #[must_use]
    pub const fn order(&self) -> CurveOrder {
        self.order
    }

    /// Returns the level the next call starts from.
    ///
    /// `None` means the next point is expected to be identical to the last
    /// one, and will be encoded without any work.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn order(value: u8) -> CurveOrder {
        CurveOrder::new(value).expect("valid order")
    }

    /// Encodes the points in sequence, with a perfect lookahead.
    fn run_encode(encoder: &mut Encoder, points: &[Point]) -> Vec<u64> {
        points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                encoder
                    .encode(*point, points.get(i + 1).copied())
                    .expect("valid point")
            })
            .collect()
    }

    fn points(coords: &[(u32, u32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    /// Random walk mixing unit moves, jumps and repeated points.
    fn random_walk(
        rng: &mut StdRng,
        order: CurveOrder,
        len: usize,
    ) -> Vec<Point> {
        let max = order.max_coordinate();
        let mut point =
            Point::new(rng.gen_range(0..=max), rng.gen_range(0..=max));

        (0..len)
            .map(|_| {
                match rng.gen_range(0..10) {
                    0..=2 => {
                        point = Point::new(
                            rng.gen_range(0..=max),
                            rng.gen_range(0..=max),
                        );
                    }
                    3 | 4 => (),
                    _ => {
                        point.x = step(rng, point.x, max);
                        point.y = step(rng, point.y, max);
                    }
                }
                point
            })
            .collect()
    }

    fn step(rng: &mut StdRng, value: u32, max: u32) -> u32 {
        match rng.gen_range(0..3) {
            0 => value.saturating_sub(1),
            1 => value,
            _ => value.saturating_add(1).min(max),
        }
    }

    #[test]
    fn u_path() {
        let mut encoder = Encoder::new(order(1));
        let path = points(&[(0, 0), (0, 1), (1, 1), (1, 0)]);

        let codes = run_encode(&mut encoder, &path);

        assert_eq!(codes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn order_two_traversal() {
        #[rustfmt::skip]
        let path = points(&[
            (0, 0), (1, 0), (1, 1), (0, 1),
            (0, 2), (0, 3), (1, 3), (1, 2),
            (2, 2), (2, 3), (3, 3), (3, 2),
            (3, 1), (2, 1), (2, 0), (3, 0),
        ]);
        let mut encoder = Encoder::new(order(2));

        let codes = run_encode(&mut encoder, &path);

        assert_eq!(codes, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn worked_example() {
        let mut encoder = Encoder::new(order(3));
        let path = points(&[(2, 1), (3, 1), (3, 0), (4, 0)]);

        let codes = run_encode(&mut encoder, &path);

        assert_eq!(codes, vec![7, 6, 5, 58]);
        // 3 levels for the first and last points, 1 for the others.
        assert_eq!(encoder.stats().levels, 3 + 1 + 1 + 3);
    }

    #[test]
    fn matches_reference() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for value in (1..=10).chain([16, 31, 32]) {
            let order = order(value);
            for _ in 0..10 {
                let path = random_walk(&mut rng, order, 200);
                let mut encoder = Encoder::new(order);

                let codes = run_encode(&mut encoder, &path);

                for (point, code) in path.iter().zip(codes) {
                    let expected =
                        reference::encode_point(order, *point).expect("valid");
                    assert_eq!(
                        code,
                        expected,
                        "order {value}, point ({}, {})",
                        point.x,
                        point.y
                    );
                }
            }
        }
    }

    #[test]
    fn repeated_point() {
        let mut encoder = Encoder::new(order(3));
        let point = Point::new(1, 1);

        let first = encoder.encode(point, Some(point)).expect("valid point");
        assert_eq!(encoder.boundary(), None);
        assert_eq!(encoder.stats().levels, 3);

        // Everything is reused: no level is walked, but the code is intact.
        let second = encoder
            .encode(point, Some(Point::new(1, 2)))
            .expect("valid point");
        assert_eq!(second, first);
        assert_eq!(encoder.stats().levels, 3);
        assert_eq!(encoder.boundary(), Some(1));

        let third =
            encoder.encode(Point::new(1, 2), None).expect("valid point");
        assert_eq!(
            third,
            reference::encode_point(order(3), Point::new(1, 2)).expect("valid")
        );
        assert!(encoder.is_fresh());
    }

    // States written ahead of time survive a detour through deeper levels.
    #[test]
    fn long_range_reuse() {
        let order = order(8);
        // Small moves inside a block, then a move that only flips a mid level.
        let path = points(&[
            (100, 100),
            (101, 100),
            (101, 101),
            (102, 101),
            (110, 101),
            (111, 101),
            (100, 100),
        ]);
        let mut encoder = Encoder::new(order);

        let codes = run_encode(&mut encoder, &path);

        let expected = path
            .iter()
            .map(|point| reference::encode_point(order, *point).expect("valid"))
            .collect::<Vec<_>>();
        assert_eq!(codes, expected);
    }

    #[test]
    fn row_scan_is_cheap() {
        let order = order(8);
        let side = 256;
        let path = (0..side)
            .flat_map(|y| (0..side).map(move |x| Point::new(x, y)))
            .collect::<Vec<_>>();
        let mut encoder = Encoder::new(order);

        let codes = run_encode(&mut encoder, &path);

        let expected =
            reference::encode_point(order, path[1000]).expect("valid");
        assert_eq!(codes[1000], expected);
        let full_cost = path.len() as u64 * u64::from(order.get());
        assert!(encoder.stats().levels * 3 < full_cost);
    }

    #[test]
    fn out_of_range() {
        let mut encoder = Encoder::new(order(4));
        encoder
            .encode(Point::new(3, 3), Some(Point::new(16, 3)))
            .expect("valid point");
        // Lookahead is clamped to the top level.
        assert!(encoder.is_fresh());

        let err = encoder
            .encode(Point::new(16, 3), None)
            .expect_err("out of range");
        assert!(matches!(err, Error::CoordinateOutOfRange { x: 16, y: 3, .. }));
        assert!(encoder.is_fresh());

        // Still usable afterwards.
        let code = encoder.encode(Point::new(5, 9), None).expect("valid point");
        let expected =
            reference::encode_point(order(4), Point::new(5, 9)).expect("valid");
        assert_eq!(code, expected);
    }

    #[test]
    fn reset() {
        let mut encoder = Encoder::new(order(5));
        encoder
            .encode(Point::new(7, 7), Some(Point::new(7, 8)))
            .expect("valid point");
        assert!(!encoder.is_fresh());

        encoder.reset();

        assert!(encoder.is_fresh());
        assert_eq!(encoder.stats(), Stats::default());
        assert_eq!(encoder.cache(), &OrientationCache::new(order(5)));
    }
}
