//! Cloth mesh descriptor types.
//!
//! This crate provides the input side of tether cooking:
//!
//! - [`ClothParticle`] - A rest position with an inverse mass
//! - [`ClothMeshDesc`] - Particles plus triangle and quad topology
//! - [`ClothMeshError`] - Descriptor validation failures
//!
//! # Attachment
//!
//! A particle with zero inverse mass is **attached**: it is pinned in place
//! and acts as an anchor that other particles are tethered to.
//!
//! # Units
//!
//! Positions are `f32` and unit-agnostic. Distances derived from them are
//! accumulated in `f64` before being narrowed back.
//!
//! # Example
//!
//! ```
//! use cloth_types::ClothMeshDesc;
//!
//! // 2x2 cells, top row pinned
//! let desc = ClothMeshDesc::grid(2, 2, 0.1)
//!     .with_attached(&[6, 7, 8])
//!     .unwrap();
//!
//! assert_eq!(desc.particle_count(), 9);
//! assert_eq!(desc.attached_indices(), vec![6, 7, 8]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod desc;
mod error;
mod particle;

pub use desc::ClothMeshDesc;
pub use error::{ClothMeshError, ClothMeshResult};
pub use particle::ClothParticle;

// Re-export nalgebra types for convenience
pub use nalgebra::Point3;
