//! Multi-source shortest paths with anchor tracking.
//!
//! Distances propagate along the particle graph from every attachment island
//! at once. Each particle keeps up to `k` labels, at most one per island, and
//! each label records the anchor its shortest path started from. A particle
//! is settled at most `k` times, so the cost does not grow with the number of
//! islands beyond the size of the initial frontier.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::ParticleGraph;

/// Shortest path from one island to a particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    /// Path length along the graph.
    pub distance: f64,
    /// Attached particle the path starts from.
    pub anchor: u32,
    /// Island the anchor belongs to.
    pub island: u32,
}

/// The `k` nearest islands of every particle.
#[derive(Debug, Clone)]
pub struct NearestIslands {
    k: usize,
    counts: Vec<usize>,
    labels: Vec<Label>,
}

impl NearestIslands {
    fn new(particle_count: usize, k: usize) -> Self {
        let empty = Label {
            distance: f64::INFINITY,
            anchor: u32::MAX,
            island: u32::MAX,
        };
        Self {
            k,
            counts: vec![0; particle_count],
            labels: vec![empty; particle_count * k],
        }
    }

    /// Labels of a particle, nearest first.
    ///
    /// Ordered by distance, then anchor index. Empty for out-of-range
    /// particles.
    #[must_use]
    pub fn get(&self, particle: usize) -> &[Label] {
        match self.counts.get(particle) {
            Some(&count) => &self.labels[particle * self.k..particle * self.k + count],
            None => &[],
        }
    }

    /// Whether the particle can still take a label from `island`.
    fn accepts(&self, particle: usize, island: u32) -> bool {
        self.counts[particle] < self.k && self.get(particle).iter().all(|l| l.island != island)
    }

    /// Record a label if the particle accepts it.
    fn settle(&mut self, particle: usize, label: Label) -> bool {
        if !self.accepts(particle, label.island) {
            return false;
        }
        let count = self.counts[particle];
        self.labels[particle * self.k + count] = label;
        self.counts[particle] = count + 1;
        true
    }
}

/// Priority queue entry.
///
/// Ordered by distance, then origin, then particle, reversed so that
/// `BinaryHeap` pops the smallest label first. The order is total, which
/// makes propagation deterministic.
#[derive(Debug, Clone, Copy)]
struct State {
    distance: f64,
    origin: u32,
    island: u32,
    particle: u32,
}

impl State {
    fn key(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.origin.cmp(&other.origin))
            .then(self.particle.cmp(&other.particle))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.key(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other.key(self)
    }
}

/// Run Dijkstra seeded simultaneously from every island, keeping the `k`
/// nearest islands per particle.
///
/// Labels pop in `(distance, anchor)` order. The first label a particle
/// accepts from an island is that island's shortest path, and equal-length
/// paths resolve to the lower anchor index. Once a particle holds `k` labels
/// it stops relaying, since every path through it is beaten at the next
/// particle by the `k` labels it already holds.
///
/// Sources outside the graph are ignored.
///
/// # Performance
///
/// Time complexity: O(k (V + E) log(k E)). Memory: O(k V).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
// Truncation: island count is bounded by particle count, which fits u32
pub fn propagate(graph: &ParticleGraph, islands: &[Vec<u32>], k: usize) -> NearestIslands {
    let particle_count = graph.particle_count();
    let mut nearest = NearestIslands::new(particle_count, k);
    if k == 0 {
        return nearest;
    }

    let mut heap = BinaryHeap::new();
    for (island, members) in islands.iter().enumerate() {
        for &source in members {
            if (source as usize) < particle_count {
                heap.push(State {
                    distance: 0.0,
                    origin: source,
                    island: island as u32,
                    particle: source,
                });
            }
        }
    }

    while let Some(State {
        distance,
        origin,
        island,
        particle,
    }) = heap.pop()
    {
        let idx = particle as usize;
        let label = Label {
            distance,
            anchor: origin,
            island,
        };

        // Full, or already reached by this island along a better path
        if !nearest.settle(idx, label) {
            continue;
        }

        for &(neighbor, edge_length) in graph.neighbors(idx) {
            if nearest.accepts(neighbor as usize, island) {
                heap.push(State {
                    distance: distance + edge_length,
                    origin,
                    island,
                    particle: neighbor,
                });
            }
        }
    }

    nearest
}
