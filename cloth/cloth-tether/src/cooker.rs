//! Common cooker interface and strategy dispatch.

use cloth_types::ClothMeshDesc;
use rayon::prelude::*;
use tracing::debug;

use crate::config::{TetherConfig, TetherStrategy};
use crate::data::TetherData;
use crate::error::TetherResult;
use crate::geodesic::GeodesicTetherCooker;
use crate::simple::SimpleTetherCooker;
use crate::status::CookerStatus;

/// Read access to a finished tether cook.
///
/// All cooking happens when the cooker is constructed; these methods only
/// report the result.
pub trait TetherCooker {
    /// Outcome of the cook.
    fn status(&self) -> CookerStatus;

    /// Tether slots per particle.
    fn tethers_per_particle(&self) -> usize;

    /// The cooked tethers.
    fn tether_data(&self) -> &TetherData;

    /// Copy the tethers into caller-owned buffers of at least
    /// `particle_count * tethers_per_particle` elements each.
    ///
    /// # Errors
    ///
    /// Returns [`TetherError::BufferTooSmall`](crate::TetherError::BufferTooSmall)
    /// if either buffer is too short.
    fn write_tether_data(&self, anchors: &mut [u32], lengths: &mut [f32]) -> TetherResult<()> {
        self.tether_data().write_into(anchors, lengths)
    }
}

/// A finished cook of either strategy.
#[derive(Debug, Clone)]
pub enum CookedTethers {
    /// Euclidean result.
    Simple(SimpleTetherCooker),
    /// Geodesic result.
    Geodesic(GeodesicTetherCooker),
}

impl CookedTethers {
    /// Strategy that produced this result.
    #[must_use]
    pub fn strategy(&self) -> TetherStrategy {
        match self {
            Self::Simple(_) => TetherStrategy::Simple,
            Self::Geodesic(_) => TetherStrategy::Geodesic,
        }
    }

    /// Consume and return the tether data.
    #[must_use]
    pub fn into_tether_data(self) -> TetherData {
        match self {
            Self::Simple(c) => c.into_tether_data(),
            Self::Geodesic(c) => c.into_tether_data(),
        }
    }
}

impl TetherCooker for CookedTethers {
    fn status(&self) -> CookerStatus {
        match self {
            Self::Simple(c) => c.status(),
            Self::Geodesic(c) => c.status(),
        }
    }

    fn tethers_per_particle(&self) -> usize {
        match self {
            Self::Simple(c) => c.tethers_per_particle(),
            Self::Geodesic(c) => c.tethers_per_particle(),
        }
    }

    fn tether_data(&self) -> &TetherData {
        match self {
            Self::Simple(c) => c.tether_data(),
            Self::Geodesic(c) => c.tether_data(),
        }
    }
}

/// Cook tethers for one mesh with the configured strategy.
///
/// # Errors
///
/// Returns [`TetherError::InvalidConfig`](crate::TetherError::InvalidConfig)
/// if the configuration is invalid. Rejected geometry is not an error; check
/// [`TetherCooker::status`].
///
/// # Example
///
/// ```
/// use cloth_tether::{cook, TetherConfig, TetherCooker};
/// use cloth_types::ClothMeshDesc;
///
/// let desc = ClothMeshDesc::grid(4, 4, 0.1).with_attached(&[20, 24]).unwrap();
/// let cooked = cook(&desc, &TetherConfig::default()).unwrap();
///
/// assert!(cooked.status().is_success());
/// assert_eq!(cooked.tethers_per_particle(), 2);
/// ```
pub fn cook(desc: &ClothMeshDesc, config: &TetherConfig) -> TetherResult<CookedTethers> {
    config.validate()?;
    Ok(cook_validated(desc, config))
}

/// Cook tethers for many independent meshes.
///
/// Meshes are cooked in parallel when [`TetherConfig::parallel`] is set.
/// Output order matches input order.
///
/// # Errors
///
/// Returns [`TetherError::InvalidConfig`](crate::TetherError::InvalidConfig)
/// if the configuration is invalid.
pub fn cook_batch(
    descs: &[ClothMeshDesc],
    config: &TetherConfig,
) -> TetherResult<Vec<CookedTethers>> {
    config.validate()?;

    debug!(
        meshes = descs.len(),
        parallel = config.parallel,
        strategy = ?config.strategy,
        "cooking tether batch"
    );

    let cooked: Vec<CookedTethers> = if config.parallel {
        descs
            .par_iter()
            .map(|desc| cook_validated(desc, config))
            .collect()
    } else {
        descs
            .iter()
            .map(|desc| cook_validated(desc, config))
            .collect()
    };

    Ok(cooked)
}

fn cook_validated(desc: &ClothMeshDesc, config: &TetherConfig) -> CookedTethers {
    match config.strategy {
        TetherStrategy::Simple => CookedTethers::Simple(SimpleTetherCooker::new(desc)),
        TetherStrategy::Geodesic => {
            CookedTethers::Geodesic(GeodesicTetherCooker::cook_capped(
                desc,
                config.max_tethers_per_particle,
            ))
        }
    }
}
