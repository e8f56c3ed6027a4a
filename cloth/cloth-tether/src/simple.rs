//! Euclidean tether cooker.

use cloth_types::ClothMeshDesc;
use tracing::{debug, info};

use crate::cooker::TetherCooker;
use crate::data::TetherData;
use crate::status::CookerStatus;

/// Tethers every particle to its closest attached particle by straight-line
/// distance.
///
/// There is exactly one tether per particle. When several attached particles
/// are equally close, the one with the lowest index wins. An attached
/// particle is tethered to itself with a rest length of zero.
///
/// With no attached particles every slot is left unused; this is not a
/// failure. The simple cooker never rejects input.
///
/// # Performance
///
/// O(N * A) for N particles and A attached particles.
///
/// # Example
///
/// ```
/// use cloth_tether::{SimpleTetherCooker, TetherCooker};
/// use cloth_types::ClothMeshDesc;
///
/// let desc = ClothMeshDesc::grid(1, 2, 1.0).with_attached(&[0]).unwrap();
/// let cooker = SimpleTetherCooker::new(&desc);
///
/// assert!(cooker.status().is_success());
/// assert_eq!(cooker.tether_data().anchor(2, 0), Some(0));
/// assert_eq!(cooker.tether_data().length(2, 0), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleTetherCooker {
    data: TetherData,
}

impl SimpleTetherCooker {
    /// Cook tethers for a descriptor.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: rest lengths are stored as f32
    pub fn new(desc: &ClothMeshDesc) -> Self {
        let particles = desc.particles();
        let attached = desc.attached_indices();
        let mut data = TetherData::empty(particles.len(), 1);

        debug!(
            particles = particles.len(),
            attached = attached.len(),
            "cooking euclidean tethers"
        );

        for (index, particle) in particles.iter().enumerate() {
            let mut best: Option<(u32, f64)> = None;
            for &anchor in &attached {
                let distance = particle.distance_to(&particles[anchor as usize]);
                // Strict comparison keeps the lowest index on ties
                if best.is_none_or(|(_, d)| distance < d) {
                    best = Some((anchor, distance));
                }
            }
            if let Some((anchor, distance)) = best {
                data.set(index, 0, anchor, distance as f32);
            }
        }

        info!(particles = particles.len(), "euclidean tethers cooked");

        Self { data }
    }

    /// Consume the cooker and return its tether data.
    #[must_use]
    pub fn into_tether_data(self) -> TetherData {
        self.data
    }
}

impl TetherCooker for SimpleTetherCooker {
    fn status(&self) -> CookerStatus {
        CookerStatus::Success
    }

    fn tethers_per_particle(&self) -> usize {
        1
    }

    fn tether_data(&self) -> &TetherData {
        &self.data
    }
}
