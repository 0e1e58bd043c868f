use crate::{CurveOrder, Decoder, Encoder, Error, Point, Stats};
use std::iter::Peekable;

/// Streaming encoder over a sequence of points.
///
/// The lookahead is taken from the sequence itself, so the ordering contract
/// of [`Encoder`] always holds.
#[derive(Debug)]
pub struct EncodeIter<I: Iterator<Item = Point>> {
    points: Peekable<I>,
    encoder: Encoder,
}

impl<I: Iterator<Item = Point>> EncodeIter<I> {
    /// Initializes a new encoding iterator.
    pub fn new(
        order: CurveOrder,
        points: impl IntoIterator<Item = Point, IntoIter = I>,
    ) -> Self {
        Self {
            points: points.into_iter().peekable(),
            encoder: Encoder::new(order),
        }
    }

    /// Returns the work counters so far.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.encoder.stats()
    }
}

impl<I: Iterator<Item = Point>> Iterator for EncodeIter<I> {
    type Item = Result<u64, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.points.next()?;
        let next = self.points.peek().copied();

        Some(self.encoder.encode(point, next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

// -----------------------------------------------------------------------------

/// Streaming decoder over a sequence of codes.
///
/// The lookahead is taken from the sequence itself, so the ordering contract
/// of [`Decoder`] always holds.
#[derive(Debug)]
pub struct DecodeIter<I: Iterator<Item = u64>> {
    codes: Peekable<I>,
    decoder: Decoder,
}

impl<I: Iterator<Item = u64>> DecodeIter<I> {
    /// Initializes a new decoding iterator.
    pub fn new(
        order: CurveOrder,
        codes: impl IntoIterator<Item = u64, IntoIter = I>,
    ) -> Self {
        Self {
            codes: codes.into_iter().peekable(),
            decoder: Decoder::new(order),
        }
    }

    /// Returns the work counters so far.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.decoder.stats()
    }
}

impl<I: Iterator<Item = u64>> Iterator for DecodeIter<I> {
    type Item = Result<Point, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let code = self.codes.next()?;
        let next = self.codes.peek().copied();

        Some(self.decoder.decode(code, next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.codes.size_hint()
    }
}
