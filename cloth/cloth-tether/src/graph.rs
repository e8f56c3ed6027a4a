//! Particle adjacency graph.
//!
//! Provides neighbor lookup with edge lengths for shortest-path propagation
//! over a cloth mesh.

use cloth_types::ClothMeshDesc;

/// Weighted, undirected particle graph.
///
/// Nodes are particles. Edges are the polygon edges of the mesh plus both
/// diagonals of every quad, weighted by rest length.
#[derive(Debug, Clone)]
pub struct ParticleGraph {
    /// For each particle, list of (neighbor index, edge length) pairs.
    neighbors: Vec<Vec<(u32, f64)>>,
}

impl ParticleGraph {
    /// Build the graph from a cloth descriptor.
    ///
    /// Neighbor order follows the first occurrence of each edge in the face
    /// list, so the graph is identical for identical descriptors.
    #[must_use]
    pub fn from_desc(desc: &ClothMeshDesc) -> Self {
        let particles = desc.particles();
        let mut neighbors: Vec<Vec<(u32, f64)>> = vec![Vec::new(); particles.len()];

        let mut link = |a: u32, b: u32| {
            if a == b {
                return;
            }
            let length = particles[a as usize].distance_to(&particles[b as usize]);
            Self::add_edge(&mut neighbors, a, b, length);
        };

        for &[i0, i1, i2] in desc.triangles() {
            link(i0, i1);
            link(i1, i2);
            link(i2, i0);
        }

        for &[i0, i1, i2, i3] in desc.quads() {
            link(i0, i1);
            link(i1, i2);
            link(i2, i3);
            link(i3, i0);
            // Diagonals lie on the quad surface
            link(i0, i2);
            link(i1, i3);
        }

        Self { neighbors }
    }

    /// Add an edge between two particles (if not already present).
    fn add_edge(neighbors: &mut [Vec<(u32, f64)>], v0: u32, v1: u32, length: f64) {
        if !neighbors[v0 as usize].iter().any(|&(n, _)| n == v1) {
            neighbors[v0 as usize].push((v1, length));
        }
        if !neighbors[v1 as usize].iter().any(|&(n, _)| n == v0) {
            neighbors[v1 as usize].push((v0, length));
        }
    }

    /// Number of particles.
    #[inline]
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Neighbors of a particle as (neighbor index, edge length) pairs.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, particle: usize) -> &[(u32, f64)] {
        self.neighbors.get(particle).map_or(&[], Vec::as_slice)
    }

    /// Total number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        // Each edge is stored twice (once for each direction)
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }
}
