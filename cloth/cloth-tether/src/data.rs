//! Cooked tether data.

use crate::error::{TetherError, TetherResult};

/// Anchor index marking an unused tether slot.
pub const NO_ANCHOR: u32 = u32::MAX;

/// Tether anchors and rest lengths for every particle of a cloth.
///
/// Storage is slot-major: the tether in slot `s` of particle `p` lives at
/// index `s * particle_count + p` of both [`anchors`](Self::anchors) and
/// [`lengths`](Self::lengths).
///
/// Within one particle, used slots come first in order of increasing rest
/// length. Unused slots hold [`NO_ANCHOR`] and a length of zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TetherData {
    particle_count: usize,
    tethers_per_particle: usize,
    anchors: Vec<u32>,
    lengths: Vec<f32>,
}

impl TetherData {
    /// Create data with every slot unused.
    #[must_use]
    pub fn empty(particle_count: usize, tethers_per_particle: usize) -> Self {
        let len = particle_count * tethers_per_particle;
        Self {
            particle_count,
            tethers_per_particle,
            anchors: vec![NO_ANCHOR; len],
            lengths: vec![0.0; len],
        }
    }

    /// Record a tether. Out-of-range particles or slots are ignored.
    pub(crate) fn set(&mut self, particle: usize, slot: usize, anchor: u32, length: f32) {
        if particle >= self.particle_count || slot >= self.tethers_per_particle {
            return;
        }
        let index = slot * self.particle_count + particle;
        self.anchors[index] = anchor;
        self.lengths[index] = length;
    }

    /// Number of particles.
    #[inline]
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    /// Number of tether slots per particle.
    #[inline]
    #[must_use]
    pub fn tethers_per_particle(&self) -> usize {
        self.tethers_per_particle
    }

    /// Total number of slots (`particle_count * tethers_per_particle`).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Whether there are no slots at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// All anchor indices, slot-major.
    #[inline]
    #[must_use]
    pub fn anchors(&self) -> &[u32] {
        &self.anchors
    }

    /// All rest lengths, slot-major.
    #[inline]
    #[must_use]
    pub fn lengths(&self) -> &[f32] {
        &self.lengths
    }

    /// Anchor of a slot, or `None` if the slot is unused or out of range.
    #[must_use]
    pub fn anchor(&self, particle: usize, slot: usize) -> Option<u32> {
        self.index(particle, slot)
            .map(|i| self.anchors[i])
            .filter(|&a| a != NO_ANCHOR)
    }

    /// Rest length of a slot. Unused or out-of-range slots report zero.
    #[must_use]
    pub fn length(&self, particle: usize, slot: usize) -> f32 {
        self.index(particle, slot).map_or(0.0, |i| self.lengths[i])
    }

    /// Iterate over the used `(anchor, rest length)` slots of one particle.
    pub fn tethers(&self, particle: usize) -> impl Iterator<Item = (u32, f32)> + '_ {
        (0..self.tethers_per_particle).filter_map(move |slot| {
            self.anchor(particle, slot)
                .map(|anchor| (anchor, self.length(particle, slot)))
        })
    }

    /// Copy the data into caller-owned buffers.
    ///
    /// Both buffers must hold at least [`len`](Self::len) elements; extra
    /// elements are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TetherError::BufferTooSmall`] if either buffer is too short.
    /// Nothing is written in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use cloth_tether::{TetherData, NO_ANCHOR};
    ///
    /// let data = TetherData::empty(3, 1);
    /// let mut anchors = [0u32; 3];
    /// let mut lengths = [1.0f32; 3];
    /// data.write_into(&mut anchors, &mut lengths).unwrap();
    ///
    /// assert_eq!(anchors, [NO_ANCHOR; 3]);
    /// assert_eq!(lengths, [0.0; 3]);
    /// ```
    pub fn write_into(&self, anchors: &mut [u32], lengths: &mut [f32]) -> TetherResult<()> {
        let required = self.len();
        if anchors.len() < required || lengths.len() < required {
            return Err(TetherError::BufferTooSmall {
                required,
                anchors: anchors.len(),
                lengths: lengths.len(),
            });
        }
        anchors[..required].copy_from_slice(&self.anchors);
        lengths[..required].copy_from_slice(&self.lengths);
        Ok(())
    }

    /// Consume and return `(anchors, lengths)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<u32>, Vec<f32>) {
        (self.anchors, self.lengths)
    }

    fn index(&self, particle: usize, slot: usize) -> Option<usize> {
        (particle < self.particle_count && slot < self.tethers_per_particle)
            .then(|| slot * self.particle_count + particle)
    }
}
