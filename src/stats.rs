/// Work counters of a cursor.
///
/// A full walk costs `k` levels per point; a well-ordered stream of neighbors
/// costs a small constant on average.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    /// Number of recursion levels processed.
    pub levels: u64,
    /// Number of orientation states written into the cache.
    pub cache_writes: u64,
}
