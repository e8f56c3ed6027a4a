//! Attachment islands.
//!
//! An island is a connected group of attached particles. The geodesic cooker
//! gives each particle one tether per island it can reach.

use cloth_types::ClothMeshDesc;

/// Group attached particles into islands.
///
/// Two attached particles belong to the same island when a path of mesh
/// edges joins them through attached particles only. Quad diagonals count as
/// edges, matching the distance graph. Attached particles not referenced by
/// any face form islands of their own.
///
/// Islands are ordered by their lowest particle index and each island's
/// members are sorted ascending. Only connectivity is needed here, so no
/// edge lengths are computed.
#[must_use]
pub fn attachment_islands(desc: &ClothMeshDesc) -> Vec<Vec<u32>> {
    let particle_count = desc.particle_count();
    let mut links: Vec<Vec<u32>> = vec![Vec::new(); particle_count];

    for face in desc.faces() {
        for (a, b) in face_links(face) {
            if a != b && desc.is_attached(a as usize) && desc.is_attached(b as usize) {
                links[a as usize].push(b);
                links[b as usize].push(a);
            }
        }
    }

    let mut visited = vec![false; particle_count];
    let mut islands = Vec::new();
    let mut stack = Vec::new();

    for seed in desc.attached_indices() {
        if visited[seed as usize] {
            continue;
        }
        visited[seed as usize] = true;
        stack.push(seed);

        let mut island = Vec::new();
        while let Some(particle) = stack.pop() {
            island.push(particle);
            for &neighbor in &links[particle as usize] {
                let idx = neighbor as usize;
                if !visited[idx] {
                    visited[idx] = true;
                    stack.push(neighbor);
                }
            }
        }

        island.sort_unstable();
        islands.push(island);
    }

    islands
}

/// Polygon edges of a face, plus both diagonals for quads.
fn face_links(face: &[u32]) -> impl Iterator<Item = (u32, u32)> + '_ {
    let n = face.len();
    let diagonals = (n == 4).then(|| [(face[0], face[2]), (face[1], face[3])]);
    (0..n)
        .map(move |i| (face[i], face[(i + 1) % n]))
        .chain(diagonals.into_iter().flatten())
}
