//! Cloth mesh descriptor.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ClothMeshError, ClothMeshResult};
use crate::particle::ClothParticle;

/// A cloth mesh prepared for cooking.
///
/// Holds the particles and the polygon topology (triangles and quads) of a
/// cloth. Face indices are checked against the particle count on
/// construction, so every descriptor in circulation is index-safe.
///
/// # Winding Order
///
/// Faces are expected to share one consistent winding. The descriptor does
/// not enforce this; the geodesic tether cooker detects violations.
///
/// # Example
///
/// ```
/// use cloth_types::{ClothMeshDesc, ClothParticle};
///
/// let particles = vec![
///     ClothParticle::attached(0.0, 0.0, 0.0),
///     ClothParticle::free(1.0, 0.0, 0.0),
///     ClothParticle::free(0.0, 1.0, 0.0),
/// ];
/// let desc = ClothMeshDesc::new(particles, vec![[0, 1, 2]], Vec::new()).unwrap();
///
/// assert_eq!(desc.particle_count(), 3);
/// assert_eq!(desc.attached_indices(), vec![0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawClothMeshDesc"))]
pub struct ClothMeshDesc {
    particles: Vec<ClothParticle>,
    triangles: Vec<[u32; 3]>,
    quads: Vec<[u32; 4]>,
}

impl ClothMeshDesc {
    /// Create a descriptor, validating particles and face indices.
    ///
    /// # Errors
    ///
    /// Returns [`ClothMeshError`] if a face index is out of range, an inverse
    /// mass is negative or non-finite, or a position is non-finite.
    pub fn new(
        particles: Vec<ClothParticle>,
        triangles: Vec<[u32; 3]>,
        quads: Vec<[u32; 4]>,
    ) -> ClothMeshResult<Self> {
        let desc = Self {
            particles,
            triangles,
            quads,
        };
        desc.validate()?;
        Ok(desc)
    }

    /// Create a triangle-only descriptor where every particle is free.
    ///
    /// # Errors
    ///
    /// See [`ClothMeshDesc::new`].
    pub fn from_positions(
        positions: impl IntoIterator<Item = Point3<f32>>,
        triangles: Vec<[u32; 3]>,
    ) -> ClothMeshResult<Self> {
        let particles = positions.into_iter().map(ClothParticle::from).collect();
        Self::new(particles, triangles, Vec::new())
    }

    /// Pin the given particles by zeroing their inverse mass.
    ///
    /// # Errors
    ///
    /// Returns [`ClothMeshError::InvalidAttachment`] if an index is out of
    /// range.
    pub fn with_attached(mut self, indices: &[u32]) -> ClothMeshResult<Self> {
        let particle_count = self.particles.len();
        for &index in indices {
            let particle = self.particles.get_mut(index as usize).ok_or(
                ClothMeshError::InvalidAttachment {
                    index,
                    particle_count,
                },
            )?;
            particle.inv_mass = 0.0;
        }
        Ok(self)
    }

    /// Check every invariant of the descriptor.
    ///
    /// # Errors
    ///
    /// See [`ClothMeshDesc::new`].
    pub fn validate(&self) -> ClothMeshResult<()> {
        for (particle, p) in self.particles.iter().enumerate() {
            if !(p.position.x.is_finite() && p.position.y.is_finite() && p.position.z.is_finite())
            {
                return Err(ClothMeshError::NonFinitePosition { particle });
            }
            if !p.inv_mass.is_finite() || p.inv_mass < 0.0 {
                return Err(ClothMeshError::InvalidInverseMass {
                    particle,
                    inv_mass: p.inv_mass,
                });
            }
        }

        let particle_count = self.particles.len();
        for (face, polygon) in self.faces().enumerate() {
            if let Some(&index) = polygon.iter().find(|&&i| i as usize >= particle_count) {
                return Err(ClothMeshError::InvalidIndex {
                    face,
                    index,
                    particle_count,
                });
            }
        }

        Ok(())
    }

    /// Number of particles.
    #[inline]
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Number of faces (triangles plus quads).
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.triangles.len() + self.quads.len()
    }

    /// Whether the descriptor has no particles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// All particles.
    #[inline]
    #[must_use]
    pub fn particles(&self) -> &[ClothParticle] {
        &self.particles
    }

    /// Particle rest positions in index order.
    pub fn positions(&self) -> impl Iterator<Item = &Point3<f32>> + '_ {
        self.particles.iter().map(|p| &p.position)
    }

    /// Triangle faces.
    #[inline]
    #[must_use]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Quad faces.
    #[inline]
    #[must_use]
    pub fn quads(&self) -> &[[u32; 4]] {
        &self.quads
    }

    /// Iterate over every face as a polygon, triangles first, then quads.
    ///
    /// Face numbering used by errors and diagnostics follows this order.
    pub fn faces(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.triangles
            .iter()
            .map(<[u32; 3]>::as_slice)
            .chain(self.quads.iter().map(<[u32; 4]>::as_slice))
    }

    /// Whether the particle at `index` is attached. Out-of-range is `false`.
    #[inline]
    #[must_use]
    pub fn is_attached(&self, index: usize) -> bool {
        self.particles.get(index).is_some_and(ClothParticle::is_attached)
    }

    /// Indices of all attached particles, ascending.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: particle indices are u32 throughout the descriptor
    pub fn attached_indices(&self) -> Vec<u32> {
        self.particles
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_attached())
            .map(|(i, _)| i as u32)
            .collect()
    }

    /// Generate a flat grid of free particles in the XY plane.
    ///
    /// The grid has `rows * cols` cells and `(rows + 1) * (cols + 1)`
    /// particles in row-major order. Each cell is split into two
    /// counter-clockwise triangles.
    ///
    /// # Example
    ///
    /// ```
    /// use cloth_types::ClothMeshDesc;
    ///
    /// let grid = ClothMeshDesc::grid(2, 2, 1.0);
    /// assert_eq!(grid.particle_count(), 9);
    /// assert_eq!(grid.face_count(), 8);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn grid(rows: u32, cols: u32, spacing: f32) -> Self {
        let stride = cols + 1;
        let mut particles = Vec::with_capacity(((rows + 1) * stride) as usize);
        for r in 0..=rows {
            for c in 0..=cols {
                particles.push(ClothParticle::free(
                    c as f32 * spacing,
                    r as f32 * spacing,
                    0.0,
                ));
            }
        }

        let mut triangles = Vec::with_capacity((rows * cols * 2) as usize);
        for r in 0..rows {
            for c in 0..cols {
                let i0 = r * stride + c;
                let i1 = i0 + 1;
                let i2 = i0 + stride + 1;
                let i3 = i0 + stride;
                triangles.push([i0, i1, i2]);
                triangles.push([i0, i2, i3]);
            }
        }

        Self {
            particles,
            triangles,
            quads: Vec::new(),
        }
    }
}

/// Unvalidated wire form, checked on deserialization.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawClothMeshDesc {
    particles: Vec<ClothParticle>,
    #[serde(default)]
    triangles: Vec<[u32; 3]>,
    #[serde(default)]
    quads: Vec<[u32; 4]>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawClothMeshDesc> for ClothMeshDesc {
    type Error = ClothMeshError;

    fn try_from(raw: RawClothMeshDesc) -> ClothMeshResult<Self> {
        Self::new(raw.particles, raw.triangles, raw.quads)
    }
}
