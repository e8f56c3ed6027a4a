//! Tether constraint cooking for cloth meshes.
//!
//! A tether limits how far a cloth particle may drift from an attached
//! (pinned) particle. Before simulation, every particle needs its anchor(s)
//! and the rest distance to each. This crate computes them:
//!
//! - [`SimpleTetherCooker`] - One tether to the closest anchor by
//!   straight-line distance. Fast; fine for flat cloth and flags.
//! - [`GeodesicTetherCooker`] - One tether per attached island, with rest
//!   lengths measured along the mesh. Slower; better on curved or folded
//!   cloth, but requires manifold, consistently wound input.
//!
//! Cooking runs to completion when the cooker is constructed. Results are
//! read back through the [`TetherCooker`] trait.
//!
//! # Failure Model
//!
//! Bad geometry never panics and never returns `Err`. The geodesic cooker
//! reports it through [`CookerStatus`] and leaves every tether slot set to
//! [`NO_ANCHOR`] with a zero rest length.
//!
//! # Example
//!
//! ```
//! use cloth_tether::{GeodesicTetherCooker, TetherCooker, NO_ANCHOR};
//! use cloth_types::ClothMeshDesc;
//!
//! // Curtain pinned at its two top corners
//! let desc = ClothMeshDesc::grid(4, 4, 0.25)
//!     .with_attached(&[20, 24])
//!     .unwrap();
//!
//! let cooker = GeodesicTetherCooker::new(&desc);
//! assert!(cooker.status().is_success());
//!
//! let k = cooker.tethers_per_particle();
//! let mut anchors = vec![NO_ANCHOR; desc.particle_count() * k];
//! let mut lengths = vec![0.0; desc.particle_count() * k];
//! cooker.write_tether_data(&mut anchors, &mut lengths).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod config;
mod cooker;
mod data;
mod dijkstra;
mod error;
mod geodesic;
mod graph;
mod islands;
mod simple;
mod status;
mod topology;

pub use config::{TetherConfig, TetherStrategy};
pub use cooker::{CookedTethers, TetherCooker, cook, cook_batch};
pub use data::{NO_ANCHOR, TetherData};
pub use error::{TetherError, TetherResult};
pub use geodesic::GeodesicTetherCooker;
pub use graph::ParticleGraph;
pub use simple::SimpleTetherCooker;
pub use status::CookerStatus;
pub use topology::TopologyReport;
