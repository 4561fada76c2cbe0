//! Parametric lattice sampling.
//!
//! A surface is sampled on a regular grid of two angles. `theta` advances
//! once per slice, `phi` once per ring. Sampling `R` rings and `S` slices
//! yields `(R + 1) * (S + 1)` vertices laid out slice by slice:
//!
//! ```text
//! <ring 0 .. ring R> <ring 0 .. ring R> ... <ring 0 .. ring R>
//!      slice 0            slice 1                slice S
//! ```
//!
//! The vertex at slice `i`, ring `j` lives at index `i * (R + 1) + j`. The
//! [triangulator](super::triangulate) relies on exactly this addressing.

use nalgebra::Point3;

use crate::mesh::Vertex;

/// A parametric surface: maps `(theta, phi)` to a point.
///
/// Closures of the form `Fn(f32, f32) -> Point3<f32>` implement this trait.
pub trait ParametricSurface {
    /// Evaluate the surface at the given angles.
    fn point(&self, theta: f32, phi: f32) -> Point3<f32>;
}

impl<F> ParametricSurface for F
where
    F: Fn(f32, f32) -> Point3<f32>,
{
    #[inline]
    fn point(&self, theta: f32, phi: f32) -> Point3<f32> {
        self(theta, phi)
    }
}

/// Dimensions of a ring × slice sampling lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lattice {
    /// Number of ring steps (quads around the ring axis).
    pub rings: usize,
    /// Number of slice steps (quads along the slice axis).
    pub slices: usize,
}

impl Lattice {
    /// Create a lattice with the given number of rings and slices.
    pub const fn new(rings: usize, slices: usize) -> Self {
        Self { rings, slices }
    }

    /// Vertices in one slice (`rings + 1`).
    #[inline]
    pub const fn stride(&self) -> usize {
        self.rings + 1
    }

    /// Number of vertices the sampler produces.
    #[inline]
    pub const fn vertex_count(&self) -> usize {
        (self.rings + 1) * (self.slices + 1)
    }

    /// Number of triangles the triangulator produces.
    #[inline]
    pub const fn triangle_count(&self) -> usize {
        2 * self.rings * self.slices
    }

    /// Whether every vertex of the lattice can be addressed by a `u32`
    /// triangle index.
    pub fn fits_u32_indices(&self) -> bool {
        (self.rings + 1)
            .checked_mul(self.slices + 1)
            .is_some_and(|n| n <= u32::MAX as usize)
    }

    /// Flat vertex index of slice `slice`, ring `ring`.
    #[inline]
    pub const fn index(&self, slice: usize, ring: usize) -> usize {
        slice * self.stride() + ring
    }
}

/// Sample `surface` on the lattice.
///
/// `pstep` is the `phi` increment per ring and `tstep` the `theta` increment
/// per slice; both angles start at zero. Texture coordinates are normalized
/// to `[0, 1]` over the sampled range: `u = phi / (rings * pstep)` and
/// `v = theta / (slices * tstep)`. Normals are left at zero.
///
/// # Example
///
/// ```
/// use parasurf::algo::sample::{sample_lattice, Lattice};
/// use nalgebra::Point3;
///
/// let plane = |theta: f32, phi: f32| Point3::new(phi, theta, 0.0);
/// let vertices = sample_lattice(Lattice::new(4, 2), &plane, 0.25, 0.5);
///
/// assert_eq!(vertices.len(), 15);
/// assert_eq!(vertices[14].tex_coord, [1.0, 1.0]);
/// ```
pub fn sample_lattice<S>(lattice: Lattice, surface: &S, pstep: f32, tstep: f32) -> Vec<Vertex>
where
    S: ParametricSurface + ?Sized,
{
    let mut vertices = Vec::with_capacity(lattice.vertex_count());

    let umap = 1.0 / (lattice.rings as f32 * pstep);
    let vmap = 1.0 / (lattice.slices as f32 * tstep);

    // Angles accumulate by addition so that sampled points match a step-by-step walk
    let mut theta = 0.0f32;
    for _ in 0..=lattice.slices {
        let mut phi = 0.0f32;
        for _ in 0..=lattice.rings {
            let p = surface.point(theta, phi);
            vertices.push(Vertex::new(p, [phi * umap, theta * vmap]));
            phi += pstep;
        }
        theta += tstep;
    }

    vertices
}
