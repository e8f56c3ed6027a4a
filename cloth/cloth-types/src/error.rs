//! Error types for cloth mesh descriptors.

use thiserror::Error;

/// Result type for descriptor construction.
pub type ClothMeshResult<T> = Result<T, ClothMeshError>;

/// Errors detected while validating a cloth mesh descriptor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClothMeshError {
    /// A face references a particle that does not exist.
    #[error("face {face} references particle {index} (descriptor has {particle_count} particles)")]
    InvalidIndex {
        /// Index of the offending face (triangles first, then quads).
        face: usize,
        /// The out-of-range particle index.
        index: u32,
        /// Total number of particles in the descriptor.
        particle_count: usize,
    },

    /// An attachment request names a particle that does not exist.
    #[error("cannot attach particle {index} (descriptor has {particle_count} particles)")]
    InvalidAttachment {
        /// The out-of-range particle index.
        index: u32,
        /// Total number of particles in the descriptor.
        particle_count: usize,
    },

    /// A particle has a negative or non-finite inverse mass.
    #[error("particle {particle} has invalid inverse mass {inv_mass}")]
    InvalidInverseMass {
        /// Index of the offending particle.
        particle: usize,
        /// The rejected inverse mass.
        inv_mass: f32,
    },

    /// A particle position contains NaN or infinity.
    #[error("particle {particle} has a non-finite position")]
    NonFinitePosition {
        /// Index of the offending particle.
        particle: usize,
    },
}
