//! Geodesic tether cooker.
//!
//! Rest lengths are shortest-path distances along the cloth surface rather
//! than straight lines, which keeps tethers slack-free on curved or folded
//! cloth.
//!
//! # Algorithm
//!
//! 1. Reject non-manifold or inconsistently wound input before any distance
//!    work.
//! 2. Group attached particles into islands (connected attached regions).
//! 3. Run one Dijkstra seeded from every island at once. Each particle keeps
//!    the nearest `K` islands, recording the anchor each shortest path
//!    starts from.
//!
//! Distances follow mesh edges (and quad diagonals), so they are an upper
//! bound on the true surface geodesic and never shorter than the straight
//! line to the anchor.

use cloth_types::ClothMeshDesc;
use tracing::{debug, info, warn};

use crate::config::TetherConfig;
use crate::cooker::TetherCooker;
use crate::data::TetherData;
use crate::dijkstra::propagate;
use crate::error::TetherResult;
use crate::graph::ParticleGraph;
use crate::islands::attachment_islands;
use crate::status::CookerStatus;
use crate::topology::TopologyReport;

/// Tethers every particle to the nearest anchor of each attached island,
/// measured along the mesh.
///
/// The number of tethers per particle `K` is the number of attachment
/// islands, capped by [`TetherConfig::max_tethers_per_particle`]. Particles
/// that reach fewer than `K` islands have unused trailing slots. With no
/// attached particles `K` is zero and no tether data is produced.
///
/// # Failure
///
/// If the mesh has an edge shared by more than two faces, or two faces that
/// traverse a shared edge in the same direction, the status reports it and
/// all `N * K` slots are left unused.
///
/// # Example
///
/// ```
/// use cloth_tether::{GeodesicTetherCooker, TetherCooker};
/// use cloth_types::ClothMeshDesc;
///
/// // Flag pinned along its left edge
/// let desc = ClothMeshDesc::grid(2, 4, 0.5).with_attached(&[0, 5, 10]).unwrap();
/// let cooker = GeodesicTetherCooker::new(&desc);
///
/// assert!(cooker.status().is_success());
/// assert_eq!(cooker.tethers_per_particle(), 1);
/// assert_eq!(cooker.tether_data().anchor(4, 0), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct GeodesicTetherCooker {
    status: CookerStatus,
    island_count: usize,
    data: TetherData,
}

impl GeodesicTetherCooker {
    /// Cook tethers with the default configuration.
    #[must_use]
    pub fn new(desc: &ClothMeshDesc) -> Self {
        Self::cook_capped(desc, TetherConfig::default().max_tethers_per_particle)
    }

    /// Cook tethers with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TetherError::InvalidConfig`](crate::TetherError::InvalidConfig)
    /// if the configuration fails [`TetherConfig::validate`].
    pub fn with_config(desc: &ClothMeshDesc, config: &TetherConfig) -> TetherResult<Self> {
        config.validate()?;
        Ok(Self::cook_capped(desc, config.max_tethers_per_particle))
    }

    /// Cook with a cap already known to be at least one.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: rest lengths are stored as f32
    pub(crate) fn cook_capped(desc: &ClothMeshDesc, max_tethers: usize) -> Self {
        let particle_count = desc.particle_count();
        let report = TopologyReport::build(desc);
        let status = report.status();
        let islands = attachment_islands(desc);
        let tethers = islands.len().min(max_tethers);

        let mut data = TetherData::empty(particle_count, tethers);
        if islands.is_empty() {
            info!(particles = particle_count, "no attached particles, nothing to cook");
            return Self {
                status: CookerStatus::Success,
                island_count: 0,
                data,
            };
        }

        if !status.is_success() {
            warn!(
                %status,
                non_manifold_edges = report.non_manifold_edge_count,
                inconsistent_edges = report.inconsistent_edge_count,
                "geodesic tether cooking rejected mesh"
            );
            return Self {
                status,
                island_count: islands.len(),
                data,
            };
        }

        let graph = ParticleGraph::from_desc(desc);
        debug!(
            particles = particle_count,
            edges = graph.edge_count(),
            islands = islands.len(),
            tethers_per_particle = tethers,
            "cooking geodesic tethers"
        );

        let nearest = propagate(&graph, &islands, tethers);
        for particle in 0..particle_count {
            for (slot, label) in nearest.get(particle).iter().enumerate() {
                data.set(particle, slot, label.anchor, label.distance as f32);
            }
        }

        info!(
            particles = particle_count,
            islands = islands.len(),
            tethers_per_particle = tethers,
            "geodesic tethers cooked"
        );

        Self {
            status,
            island_count: islands.len(),
            data,
        }
    }

    /// Number of attachment islands found, before capping.
    #[inline]
    #[must_use]
    pub fn island_count(&self) -> usize {
        self.island_count
    }

    /// Consume the cooker and return its tether data.
    #[must_use]
    pub fn into_tether_data(self) -> TetherData {
        self.data
    }
}

impl TetherCooker for GeodesicTetherCooker {
    fn status(&self) -> CookerStatus {
        self.status
    }

    fn tethers_per_particle(&self) -> usize {
        self.data.tethers_per_particle()
    }

    fn tether_data(&self) -> &TetherData {
        &self.data
    }
}
