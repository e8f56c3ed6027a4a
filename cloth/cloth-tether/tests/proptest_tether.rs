//! Property-based tests for tether cooking.
//!
//! Run with: cargo test -p cloth-tether -- proptest

use cloth_tether::{
    CookerStatus, GeodesicTetherCooker, NO_ANCHOR, ParticleGraph, SimpleTetherCooker,
    TetherConfig, TetherCooker,
};
use cloth_types::{ClothMeshDesc, ClothParticle};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// A grid with a random subset of particles pinned.
fn arb_pinned_grid() -> impl Strategy<Value = ClothMeshDesc> {
    (1u32..6, 1u32..6, 0.1f32..2.0).prop_flat_map(|(rows, cols, spacing)| {
        let count = ((rows + 1) * (cols + 1)) as usize;
        prop::collection::vec(any::<bool>(), count).prop_map(move |mask| {
            let pinned: Vec<u32> = mask
                .iter()
                .enumerate()
                .filter(|(_, m)| **m)
                .map(|(i, _)| i as u32)
                .collect();
            ClothMeshDesc::grid(rows, cols, spacing)
                .with_attached(&pinned)
                .unwrap()
        })
    })
}

/// A grid bent into a half-pipe, with at least one pinned particle.
fn arb_curved_grid() -> impl Strategy<Value = ClothMeshDesc> {
    (2u32..6, 2u32..8, 0.0f32..1.0).prop_flat_map(|(rows, cols, bend)| {
        let count = (rows + 1) * (cols + 1);
        prop::collection::vec(0..count, 1..4).prop_map(move |pinned| {
            let flat = ClothMeshDesc::grid(rows, cols, 1.0);
            let particles = flat
                .particles()
                .iter()
                .map(|p| {
                    let x = p.position.x;
                    ClothParticle::free(x, p.position.y, bend * x * x)
                })
                .collect();
            ClothMeshDesc::new(particles, flat.triangles().to_vec(), Vec::new())
                .unwrap()
                .with_attached(&pinned)
                .unwrap()
        })
    })
}

/// An arbitrary triangle soup: random positions, random faces, random pins.
fn arb_soup() -> impl Strategy<Value = ClothMeshDesc> {
    (3usize..20).prop_flat_map(|n| {
        let particles = prop::collection::vec(
            (prop::array::uniform3(-10.0f32..10.0), any::<bool>()).prop_map(|([x, y, z], pin)| {
                if pin {
                    ClothParticle::attached(x, y, z)
                } else {
                    ClothParticle::free(x, y, z)
                }
            }),
            n,
        );
        let faces = prop::collection::vec(prop::array::uniform3(0..n as u32), 0..30);
        (particles, faces).prop_map(|(particles, faces)| {
            ClothMeshDesc::new(particles, faces, Vec::new()).unwrap()
        })
    })
}

fn euclidean(desc: &ClothMeshDesc, a: usize, b: usize) -> f64 {
    desc.particles()[a].distance_to(&desc.particles()[b])
}

// =============================================================================
// Simple cooker
// =============================================================================

proptest! {
    /// The assigned anchor is at least as close as every other anchor.
    #[test]
    fn simple_picks_global_minimum(desc in arb_pinned_grid()) {
        let attached = desc.attached_indices();
        let data = SimpleTetherCooker::new(&desc).into_tether_data();

        for p in 0..desc.particle_count() {
            match data.anchor(p, 0) {
                Some(anchor) => {
                    let best = euclidean(&desc, p, anchor as usize);
                    for &other in &attached {
                        prop_assert!(best <= euclidean(&desc, p, other as usize));
                    }
                    prop_assert!((f64::from(data.length(p, 0)) - best).abs() < 1e-4);
                }
                None => prop_assert!(attached.is_empty()),
            }
        }
    }

    /// Cooking twice gives bit-identical output.
    #[test]
    fn simple_is_deterministic(desc in arb_pinned_grid()) {
        let a = SimpleTetherCooker::new(&desc).into_tether_data();
        let b = SimpleTetherCooker::new(&desc).into_tether_data();

        prop_assert_eq!(a.anchors(), b.anchors());
        let bits_a: Vec<u32> = a.lengths().iter().map(|l| l.to_bits()).collect();
        let bits_b: Vec<u32> = b.lengths().iter().map(|l| l.to_bits()).collect();
        prop_assert_eq!(bits_a, bits_b);
    }
}

// =============================================================================
// Geodesic cooker
// =============================================================================

proptest! {
    /// A path along the surface is never shorter than the straight line.
    #[test]
    fn geodesic_not_shorter_than_euclidean(desc in arb_curved_grid()) {
        let cooker = GeodesicTetherCooker::new(&desc);
        prop_assert_eq!(cooker.status(), CookerStatus::Success);

        let data = cooker.tether_data();
        for p in 0..desc.particle_count() {
            for (anchor, length) in data.tethers(p) {
                let straight = euclidean(&desc, p, anchor as usize);
                prop_assert!(f64::from(length) >= straight - 1e-4);
            }
        }
    }

    /// Neighbouring particles differ in nearest-anchor distance by at most
    /// the edge between them, so distance grows steadily away from anchors.
    #[test]
    fn geodesic_distance_is_edge_lipschitz(desc in arb_curved_grid()) {
        let data = GeodesicTetherCooker::new(&desc).into_tether_data();
        let graph = ParticleGraph::from_desc(&desc);

        for p in 0..desc.particle_count() {
            let dp = f64::from(data.length(p, 0));
            for &(q, edge) in graph.neighbors(p) {
                let dq = f64::from(data.length(q as usize, 0));
                prop_assert!(dq <= dp + edge + 1e-4);
            }
        }
    }

    /// Slots within a particle are sorted by rest length, sentinels last.
    #[test]
    fn geodesic_slots_are_ordered(desc in arb_pinned_grid()) {
        let data = GeodesicTetherCooker::new(&desc).into_tether_data();
        let k = data.tethers_per_particle();

        for p in 0..desc.particle_count() {
            let mut seen_unused = false;
            let mut last = 0.0f32;
            for slot in 0..k {
                match data.anchor(p, slot) {
                    Some(_) => {
                        prop_assert!(!seen_unused);
                        prop_assert!(data.length(p, slot) >= last);
                        last = data.length(p, slot);
                    }
                    None => seen_unused = true,
                }
            }
        }
    }

    /// Cooking twice gives bit-identical output.
    #[test]
    fn geodesic_is_deterministic(desc in arb_pinned_grid()) {
        let config = TetherConfig::default().with_max_tethers_per_particle(3);
        let a = GeodesicTetherCooker::with_config(&desc, &config)
            .unwrap()
            .into_tether_data();
        let b = GeodesicTetherCooker::with_config(&desc, &config)
            .unwrap()
            .into_tether_data();

        prop_assert_eq!(a.anchors(), b.anchors());
        let bits_a: Vec<u32> = a.lengths().iter().map(|l| l.to_bits()).collect();
        let bits_b: Vec<u32> = b.lengths().iter().map(|l| l.to_bits()).collect();
        prop_assert_eq!(bits_a, bits_b);
    }

    /// Arbitrary soups never panic, and rejected input is inert.
    #[test]
    fn geodesic_never_panics_on_soup(desc in arb_soup()) {
        let cooker = GeodesicTetherCooker::new(&desc);
        let len = desc.particle_count() * cooker.tethers_per_particle();

        let mut anchors = vec![0u32; len];
        let mut lengths = vec![1.0f32; len];
        prop_assert!(cooker.write_tether_data(&mut anchors, &mut lengths).is_ok());

        if !cooker.status().is_success() {
            prop_assert!(anchors.iter().all(|&a| a == NO_ANCHOR));
            prop_assert!(lengths.iter().all(|&l| l == 0.0));
        }
    }
}
