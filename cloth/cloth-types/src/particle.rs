//! Cloth particles.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single cloth particle: a rest position and an inverse mass.
///
/// A particle with zero inverse mass is pinned in place. Pinned particles
/// are the anchors that tethers are cooked against.
///
/// # Example
///
/// ```
/// use cloth_types::ClothParticle;
///
/// let pinned = ClothParticle::attached(0.0, 1.0, 0.0);
/// let free = ClothParticle::free(0.0, 0.0, 0.0);
///
/// assert!(pinned.is_attached());
/// assert!(!free.is_attached());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClothParticle {
    /// Rest position.
    pub position: Point3<f32>,
    /// Inverse mass. Zero marks an attached particle.
    pub inv_mass: f32,
}

impl ClothParticle {
    /// Create a particle from a position and an inverse mass.
    #[inline]
    #[must_use]
    pub fn new(position: Point3<f32>, inv_mass: f32) -> Self {
        Self { position, inv_mass }
    }

    /// Create a free particle with unit inverse mass.
    #[inline]
    #[must_use]
    pub fn free(x: f32, y: f32, z: f32) -> Self {
        Self::new(Point3::new(x, y, z), 1.0)
    }

    /// Create an attached (pinned) particle.
    #[inline]
    #[must_use]
    pub fn attached(x: f32, y: f32, z: f32) -> Self {
        Self::new(Point3::new(x, y, z), 0.0)
    }

    /// Whether this particle is pinned and acts as a tether anchor.
    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_attached(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// Euclidean distance to another particle, accumulated in `f64`.
    #[inline]
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = f64::from(self.position.x) - f64::from(other.position.x);
        let dy = f64::from(self.position.y) - f64::from(other.position.y);
        let dz = f64::from(self.position.z) - f64::from(other.position.z);
        dz.mul_add(dz, dx.mul_add(dx, dy * dy)).sqrt()
    }
}

impl From<Point3<f32>> for ClothParticle {
    fn from(position: Point3<f32>) -> Self {
        Self::new(position, 1.0)
    }
}
