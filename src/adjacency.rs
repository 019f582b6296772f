//! Lazily sampled random graph over particle indices.
//!
//! Each unordered pair `(i, j)` starts out [`Link::Unknown`]. The first time
//! the pair is queried a Bernoulli draw decides whether it is an edge, and
//! the answer sticks until [`AdjacencyCache::reset`].
//!
//! Only the upper triangle (`i < j`) is stored, packed row by row, so a
//! 1000-particle cache takes ~500k entries instead of a full N×N table.

use rand::Rng;

/// Default probability that a pair is connected.
pub const DEFAULT_EDGE_PROBABILITY: f32 = 0.001;

/// State of one particle pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Link {
    /// Not queried yet in this generation.
    #[default]
    Unknown,
    Edge,
    NoEdge,
}

/// Symmetric tri-state relation over `0..len` particle indices.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyCache {
    len: usize,
    links: Vec<Link>,
}

impl AdjacencyCache {
    /// Cache for `len` particles, all pairs unknown.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            links: vec![Link::Unknown; pair_count(len)],
        }
    }

    /// Number of particles this cache covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forget every decision.
    pub fn reset(&mut self) {
        self.links.fill(Link::Unknown);
    }

    /// Resize to `len` particles and forget every decision.
    pub fn reset_to(&mut self, len: usize) {
        self.len = len;
        self.links.clear();
        self.links.resize(pair_count(len), Link::Unknown);
    }

    /// Current state of a pair without sampling.
    ///
    /// # Panics
    ///
    /// Panics if `i == j` or either index is out of range.
    pub fn peek(&self, i: usize, j: usize) -> Link {
        self.links[self.slot(i, j)]
    }

    /// Whether `i` and `j` are connected, sampling the pair on first use.
    ///
    /// `edge_probability` is clamped to `[0, 1]`; NaN counts as 0. Argument
    /// order does not matter.
    ///
    /// # Panics
    ///
    /// Panics if `i == j` or either index is out of range.
    pub fn query<R: Rng + ?Sized>(
        &mut self,
        i: usize,
        j: usize,
        edge_probability: f32,
        rng: &mut R,
    ) -> bool {
        let slot = self.slot(i, j);
        if self.links[slot] == Link::Unknown {
            let p = if edge_probability.is_nan() {
                0.0
            } else {
                f64::from(edge_probability.clamp(0.0, 1.0))
            };
            self.links[slot] = if rng.gen_bool(p) {
                Link::Edge
            } else {
                Link::NoEdge
            };
        }
        self.links[slot] == Link::Edge
    }

    /// Number of pairs already decided.
    pub fn resolved(&self) -> usize {
        self.links.iter().filter(|l| **l != Link::Unknown).count()
    }

    /// Number of pairs decided as edges.
    pub fn edge_count(&self) -> usize {
        self.links.iter().filter(|l| **l == Link::Edge).count()
    }

    fn slot(&self, i: usize, j: usize) -> usize {
        assert!(i != j, "a particle is never paired with itself ({})", i);
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        assert!(hi < self.len, "pair ({}, {}) out of range for {} particles", i, j, self.len);
        // Rows before `lo` hold (len-1) + (len-2) + ... + (len-lo) entries.
        lo * (2 * self.len - lo - 1) / 2 + (hi - lo - 1)
    }
}

fn pair_count(len: usize) -> usize {
    // Halve the even factor first so the product fits whenever the result does.
    let (a, b) = (len, len.saturating_sub(1));
    if a % 2 == 0 {
        (a / 2) * b
    } else {
        a * (b / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_cache_is_unknown() {
        let cache = AdjacencyCache::new(10);
        assert_eq!(cache.len(), 10);
        assert_eq!(cache.resolved(), 0);
        for i in 0..10 {
            for j in (i + 1)..10 {
                assert_eq!(cache.peek(i, j), Link::Unknown);
            }
        }
    }

    #[test]
    fn test_slots_are_unique_and_dense() {
        let cache = AdjacencyCache::new(7);
        let mut seen = vec![false; pair_count(7)];
        for i in 0..7 {
            for j in (i + 1)..7 {
                let slot = cache.slot(i, j);
                assert!(!seen[slot], "slot {} reused", slot);
                seen[slot] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_query_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut cache = AdjacencyCache::new(40);

        let first: Vec<bool> = (1..40).map(|j| cache.query(0, j, 0.5, &mut rng)).collect();
        for _ in 0..5 {
            let again: Vec<bool> = (1..40).map(|j| cache.query(0, j, 0.5, &mut rng)).collect();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_query_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut cache = AdjacencyCache::new(30);
        for i in 0..30 {
            for j in (i + 1)..30 {
                let forward = cache.query(i, j, 0.5, &mut rng);
                let backward = cache.query(j, i, 0.5, &mut rng);
                assert_eq!(forward, backward);
            }
        }
    }

    #[test]
    fn test_probability_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut cache = AdjacencyCache::new(20);
        for i in 0..20 {
            for j in (i + 1)..20 {
                assert!(cache.query(i, j, 1.0, &mut rng));
            }
        }
        assert_eq!(cache.edge_count(), pair_count(20));

        cache.reset();
        for i in 0..20 {
            for j in (i + 1)..20 {
                assert!(!cache.query(i, j, 0.0, &mut rng));
            }
        }
        assert_eq!(cache.edge_count(), 0);
    }

    #[test]
    fn test_decisions_ignore_later_probability_changes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut cache = AdjacencyCache::new(5);
        assert!(!cache.query(1, 3, 0.0, &mut rng));
        assert!(!cache.query(1, 3, 1.0, &mut rng));
        assert_eq!(cache.peek(3, 1), Link::NoEdge);
    }

    #[test]
    fn test_reset_forgets_everything() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut cache = AdjacencyCache::new(12);
        for j in 1..12 {
            cache.query(0, j, 1.0, &mut rng);
        }
        assert_eq!(cache.resolved(), 11);

        cache.reset();
        assert_eq!(cache.resolved(), 0);
        assert_eq!(cache.peek(0, 5), Link::Unknown);
    }

    #[test]
    fn test_out_of_range_probability_is_clamped() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut cache = AdjacencyCache::new(3);
        assert!(cache.query(0, 1, 1.7, &mut rng));
        assert!(!cache.query(0, 2, -0.3, &mut rng));
    }

    #[test]
    fn test_nan_probability_never_connects() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut cache = AdjacencyCache::new(3);
        assert!(!cache.query(0, 1, f32::NAN, &mut rng));
        assert_eq!(cache.peek(0, 1), Link::NoEdge);
    }

    #[test]
    fn test_pair_count() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(4), 6);
        assert_eq!(pair_count(7), 21);
        assert_eq!(pair_count(65_536), 2_147_450_880);
    }

    #[test]
    fn test_reset_to_resizes() {
        let mut cache = AdjacencyCache::new(4);
        cache.reset_to(9);
        assert_eq!(cache.len(), 9);
        assert_eq!(cache.peek(7, 8), Link::Unknown);
    }

    #[test]
    #[should_panic]
    fn test_self_pair_panics() {
        let cache = AdjacencyCache::new(4);
        cache.peek(2, 2);
    }
}
