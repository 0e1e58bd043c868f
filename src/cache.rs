use crate::{
    automaton::{State, ROOT_STATE},
    CurveOrder,
};

/// Per-level orientation states carried from one point to the next.
///
/// Slot `L` holds the state in force when a walk enters level `L`, as computed
/// for the most recent point whose bits above `L` are shared with the point
/// being processed. The slot of the top level always holds the root state.
///
/// A cache belongs to exactly one cursor: interleaving two sequences (or an
/// encoding and a decoding sequence) on the same slots silently corrupts both.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrientationCache {
    states: Box<[State]>,
}

impl OrientationCache {
    /// Allocates one slot per level of the curve.
    #[must_use]
    pub fn new(order: CurveOrder) -> Self {
        Self {
            states: vec![ROOT_STATE; usize::from(order.get())].into(),
        }
    }

    /// Returns the number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: a curve has at least one level.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the state to start from at `level`.
    ///
    /// `level` is bounded by the curve order, which the cursors guarantee.
    #[inline]
    pub(crate) fn get(&self, level: u32) -> State {
        self.states[level as usize]
    }

    /// Records the state to start from at `level`.
    #[inline]
    pub(crate) fn set(&mut self, level: u32, state: State) {
        self.states[level as usize] = state;
    }

    /// Resets every slot to the root state.
    pub fn clear(&mut self) {
        self.states.fill(ROOT_STATE);
    }
}
