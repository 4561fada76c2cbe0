//! Lattice triangulation.
//!
//! Every quad of the sampled lattice is split into two triangles. With the
//! slice origin `pt` and ring `curr`, the quad looks like this:
//!
//! ```text
//! pt+next ------------ pt+next+R+1
//!    |  \                  |
//!    |     \               |
//!    |        \            |
//! pt+curr ------------ pt+curr+R+1
//! ```
//!
//! The first triangle is `(pt+curr, pt+next, pt+curr+R+1)`. The second reuses
//! the first one's last two corners, `(pt+next, pt+next+R+1, pt+curr+R+1)`, so
//! both halves share the diagonal exactly. Both are wound clockwise seen from
//! outside the surface.

use super::sample::Lattice;
use crate::mesh::Triangle;

/// Triangulate a lattice previously sampled with
/// [`sample_lattice`](super::sample::sample_lattice).
///
/// Produces `2 * rings * slices` triangles, two per quad, in slice-major
/// order. The ring neighbour is taken modulo `rings + 1`. The lattice is not
/// wrapped along the slice axis: closed surfaces close themselves through the
/// periodicity of their parametric function.
///
/// # Panics
/// Panics if the lattice has more vertices than a `u32` index can address
/// (see [`Lattice::fits_u32_indices`]).
///
/// # Example
///
/// ```
/// use parasurf::algo::sample::Lattice;
/// use parasurf::algo::triangulate::triangulate_lattice;
/// use parasurf::mesh::Triangle;
///
/// let triangles = triangulate_lattice(Lattice::new(2, 2));
/// assert_eq!(triangles.len(), 8);
/// assert_eq!(triangles[0], Triangle::new(0, 1, 3));
/// assert_eq!(triangles[1], Triangle::new(1, 4, 3));
/// ```
pub fn triangulate_lattice(lattice: Lattice) -> Vec<Triangle> {
    assert!(
        lattice.fits_u32_indices(),
        "{} x {} lattice exceeds 32-bit vertex indices",
        lattice.rings,
        lattice.slices
    );

    let stride = lattice.stride();
    let mut triangles = Vec::with_capacity(lattice.triangle_count());

    for pt in (0..lattice.slices * stride).step_by(stride) {
        for curr_ring in 0..lattice.rings {
            let next_ring = (curr_ring + 1) % stride;

            let t1 = Triangle::new(
                (pt + curr_ring) as u32,
                (pt + next_ring) as u32,
                (pt + curr_ring + stride) as u32,
            );
            let t2 = Triangle::new(t1.i1, (pt + next_ring + stride) as u32, t1.i2);

            triangles.push(t1);
            triangles.push(t2);
        }
    }

    triangles
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_two_by_two() {
        let triangles = triangulate_lattice(Lattice::new(2, 2));
        assert_eq!(triangles.len(), 8);
        assert_eq!(triangles[0], Triangle::new(0, 1, 3));
        assert_eq!(triangles[1], Triangle::new(1, 4, 3));
        assert_eq!(triangles[2], Triangle::new(1, 2, 4));
        assert_eq!(triangles[3], Triangle::new(2, 5, 4));
        // second slice starts at pt = 3
        assert_eq!(triangles[4], Triangle::new(3, 4, 6));
        assert_eq!(triangles[7], Triangle::new(5, 8, 7));
    }

    #[test]
    fn test_counts_and_bounds() {
        for (r, s) in [(1, 1), (2, 3), (5, 1), (7, 4), (32, 16)] {
            let lattice = Lattice::new(r, s);
            let triangles = triangulate_lattice(lattice);
            assert_eq!(triangles.len(), 2 * r * s);

            let n = lattice.vertex_count() as u32;
            for t in &triangles {
                assert!(t.indices().iter().all(|&i| i < n), "{:?} out of range", t);
                assert!(!t.is_degenerate(), "{:?} is degenerate", t);
            }
        }
    }

    #[test]
    fn test_quad_halves_share_diagonal() {
        let triangles = triangulate_lattice(Lattice::new(4, 3));
        for pair in triangles.chunks(2) {
            assert_eq!(pair[1].i0, pair[0].i1);
            assert_eq!(pair[1].i2, pair[0].i2);
        }
    }

    #[test]
    fn test_interior_edges_shared_with_opposite_direction() {
        // Consistent winding: every interior edge is used once in each direction
        let triangles = triangulate_lattice(Lattice::new(6, 5));
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        for t in &triangles {
            let [a, b, c] = t.indices();
            for e in [(a, b), (b, c), (c, a)] {
                *directed.entry(e).or_insert(0) += 1;
            }
        }
        for (&(a, b), &count) in &directed {
            assert_eq!(count, 1, "edge ({}, {}) used twice in the same direction", a, b);
        }
    }

    #[test]
    #[should_panic(expected = "exceeds 32-bit vertex indices")]
    fn test_lattice_too_large_for_u32_indices() {
        triangulate_lattice(Lattice::new(65535, 65535));
    }

    #[test]
    fn test_empty_lattice() {
        assert!(triangulate_lattice(Lattice::new(0, 4)).is_empty());
        assert!(triangulate_lattice(Lattice::new(4, 0)).is_empty());
    }
}
