//! Edge topology checks for geodesic cooking.
//!
//! Counts how often every polygon edge is used, and in which direction, to
//! detect non-manifold edges and inconsistent winding.

use cloth_types::ClothMeshDesc;
use hashbrown::HashMap;

use crate::status::CookerStatus;

/// Directed usage of one undirected edge.
#[derive(Debug, Clone, Copy, Default)]
struct EdgeUse {
    /// Faces traversing the edge from the lower to the higher index.
    forward: u32,
    /// Faces traversing the edge from the higher to the lower index.
    backward: u32,
}

impl EdgeUse {
    fn face_count(self) -> u32 {
        self.forward + self.backward
    }
}

/// Edge usage report for a cloth mesh.
///
/// A quad contributes its four boundary edges; its diagonals are not
/// topological edges. Degenerate edges (both ends on the same particle) are
/// skipped.
#[derive(Debug, Clone, Default)]
pub struct TopologyReport {
    /// Number of distinct undirected edges.
    pub edge_count: usize,
    /// Edges shared by only one face.
    pub boundary_edge_count: usize,
    /// Edges shared by more than two faces.
    pub non_manifold_edge_count: usize,
    /// Manifold edges traversed twice in the same direction.
    pub inconsistent_edge_count: usize,
}

impl TopologyReport {
    /// Build the report for a descriptor.
    ///
    /// # Example
    ///
    /// ```
    /// use cloth_tether::TopologyReport;
    /// use cloth_types::ClothMeshDesc;
    ///
    /// let report = TopologyReport::build(&ClothMeshDesc::grid(1, 1, 1.0));
    /// assert_eq!(report.edge_count, 5);
    /// assert_eq!(report.boundary_edge_count, 4);
    /// assert!(report.status().is_success());
    /// ```
    #[must_use]
    pub fn build(desc: &ClothMeshDesc) -> Self {
        let mut edges: HashMap<(u32, u32), EdgeUse> = HashMap::new();

        for polygon in desc.faces() {
            let n = polygon.len();
            for i in 0..n {
                let a = polygon[i];
                let b = polygon[(i + 1) % n];
                if a == b {
                    continue;
                }
                let entry = edges.entry(normalize_edge(a, b)).or_default();
                if a < b {
                    entry.forward += 1;
                } else {
                    entry.backward += 1;
                }
            }
        }

        let mut report = Self {
            edge_count: edges.len(),
            ..Self::default()
        };
        for usage in edges.values() {
            match usage.face_count() {
                1 => report.boundary_edge_count += 1,
                2 if usage.forward != 1 => report.inconsistent_edge_count += 1,
                n if n > 2 => report.non_manifold_edge_count += 1,
                _ => {}
            }
        }
        report
    }

    /// Whether every edge is shared by at most two faces.
    #[inline]
    #[must_use]
    pub fn is_manifold(&self) -> bool {
        self.non_manifold_edge_count == 0
    }

    /// Whether every shared edge is traversed once in each direction.
    #[inline]
    #[must_use]
    pub fn is_consistently_wound(&self) -> bool {
        self.inconsistent_edge_count == 0
    }

    /// Cooker status implied by this report. Non-manifold input takes
    /// precedence over winding.
    #[must_use]
    pub fn status(&self) -> CookerStatus {
        if !self.is_manifold() {
            CookerStatus::NonManifoldInput
        } else if !self.is_consistently_wound() {
            CookerStatus::InconsistentWinding
        } else {
            CookerStatus::Success
        }
    }
}

/// Normalize edge direction so v0 < v1.
#[inline]
fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 { (v0, v1) } else { (v1, v0) }
}
