//! Vertex normal synthesis.
//!
//! Two methods are provided:
//!
//! - [`compute_vertex_normals`]: weighted average of incident face normals,
//!   usable on any triangle list
//! - [`compute_sphere_normals`]: `normalize(position)`, only valid for
//!   surfaces centered on the origin with outward radial normals
//!
//! # Weighted average
//!
//! For a vertex `v`, the first triangle in list order that references `v`
//! seeds the normal `n` with its unit face normal. Every later incident
//! triangle with unit face normal `q` is added as `n += area * q`, but only if
//! `dot(n, q) > 0.1`, so faces folding away at close to a right angle do not
//! bleed into each other. The weight is `0.5 * |p2 - p0| * |p1 - p0|`, which
//! treats every lattice triangle as a right triangle. The sum is normalized.
//!
//! Vertices that no triangle references keep their normal unchanged.
//!
//! # Example
//!
//! ```
//! use parasurf::algo::normals::{compute_vertex_normals, NormalOptions};
//! use parasurf::algo::sample::{sample_lattice, Lattice};
//! use parasurf::algo::triangulate::triangulate_lattice;
//! use nalgebra::Point3;
//!
//! let lattice = Lattice::new(4, 4);
//! let plane = |theta: f32, phi: f32| Point3::new(phi, theta, 0.0);
//! let mut vertices = sample_lattice(lattice, &plane, 1.0, 1.0);
//! let triangles = triangulate_lattice(lattice);
//!
//! compute_vertex_normals(&mut vertices, &triangles, &NormalOptions::default());
//! assert_eq!(vertices[7].normal, [0.0, 0.0, 1.0]);
//! ```

use nalgebra::Vector3;
use rayon::prelude::*;

use crate::mesh::{Triangle, Vertex};

/// Incident faces whose normal is at most this cosine away from the running
/// normal are ignored.
pub const COSINE_THRESHOLD: f32 = 0.1;

/// Options for the weighted normal synthesizer.
#[derive(Debug, Clone)]
pub struct NormalOptions {
    /// Whether to use parallel execution (default: true).
    pub parallel: bool,

    /// Whether to build a vertex-to-triangle index first (default: true).
    ///
    /// Without it, every vertex scans the whole triangle list. Both paths
    /// visit incident triangles in list order and give identical results.
    pub adjacency: bool,
}

impl Default for NormalOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            adjacency: true,
        }
    }
}

impl NormalOptions {
    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set whether to precompute the vertex-to-triangle index.
    pub fn with_adjacency(mut self, adjacency: bool) -> Self {
        self.adjacency = adjacency;
        self
    }
}

/// Compute per-vertex normals as a weighted average of incident face normals.
///
/// Normals are written into `vertices` in place; positions are only read.
/// Each vertex is computed independently, so with `options.parallel` the work
/// is spread over the rayon thread pool.
///
/// # Panics
///
/// Panics if a triangle references a vertex index outside `vertices`.
pub fn compute_vertex_normals(
    vertices: &mut [Vertex],
    triangles: &[Triangle],
    options: &NormalOptions,
) {
    let num_vertices = vertices.len();
    let normals: Vec<Option<Vector3<f32>>> = {
        let positions: &[Vertex] = vertices;

        if options.adjacency {
            let incidence = Incidence::build(num_vertices, triangles);
            let compute = |v: usize| {
                let incident = incidence.triangles_of(v).iter().map(|&t| &triangles[t as usize]);
                weighted_normal(positions, incident)
            };
            if options.parallel {
                (0..num_vertices).into_par_iter().map(compute).collect()
            } else {
                (0..num_vertices).map(compute).collect()
            }
        } else {
            let compute = |v: usize| {
                let incident = triangles.iter().filter(|t| t.contains(v as u32));
                weighted_normal(positions, incident)
            };
            if options.parallel {
                (0..num_vertices).into_par_iter().map(compute).collect()
            } else {
                (0..num_vertices).map(compute).collect()
            }
        }
    };

    for (vertex, normal) in vertices.iter_mut().zip(normals) {
        if let Some(n) = normal {
            vertex.set_normal(n);
        }
    }

    log::debug!(
        "Computed weighted normals for {} vertices over {} triangles",
        num_vertices,
        triangles.len()
    );
}

/// Set each vertex normal to its normalized position.
///
/// Only correct for surfaces centered on the origin whose outward normal is
/// radial, i.e. spheres. Triangles are not consulted.
pub fn compute_sphere_normals(vertices: &mut [Vertex]) {
    for vertex in vertices.iter_mut() {
        let n = Vector3::from(vertex.position).normalize();
        vertex.set_normal(n);
    }
}

/// Accumulate the normal of one vertex from its incident triangles, given in
/// list order. Returns `None` when there are none.
fn weighted_normal<'a, I>(vertices: &[Vertex], mut incident: I) -> Option<Vector3<f32>>
where
    I: Iterator<Item = &'a Triangle>,
{
    let first = incident.next()?;
    let mut n = face_normal(vertices, first);

    for tri in incident {
        let q = face_normal(vertices, tri);
        if n.dot(&q) > COSINE_THRESHOLD {
            n += lattice_area(vertices, tri) * q;
        }
    }

    Some(n.normalize())
}

/// Unit normal of a triangle, from `cross(p1 - p0, p2 - p0)`.
fn face_normal(vertices: &[Vertex], tri: &Triangle) -> Vector3<f32> {
    let [p0, p1, p2] = corners(vertices, tri);
    (p1 - p0).cross(&(p2 - p0)).normalize()
}

/// Area of a triangle assuming a right angle at `p0`.
fn lattice_area(vertices: &[Vertex], tri: &Triangle) -> f32 {
    let [p0, p1, p2] = corners(vertices, tri);
    0.5 * (p2 - p0).norm() * (p1 - p0).norm()
}

#[inline]
fn corners(vertices: &[Vertex], tri: &Triangle) -> [Vector3<f32>; 3] {
    tri.indices()
        .map(|i| Vector3::from(vertices[i as usize].position))
}

/// Triangles incident to each vertex, in triangle-list order, stored
/// compactly: the triangles of vertex `v` are
/// `triangles[offsets[v]..offsets[v + 1]]`.
struct Incidence {
    offsets: Vec<usize>,
    triangles: Vec<u32>,
}

impl Incidence {
    fn build(num_vertices: usize, triangles: &[Triangle]) -> Self {
        let mut counts = vec![0usize; num_vertices + 1];
        for tri in triangles {
            for v in distinct_corners(tri) {
                counts[v as usize + 1] += 1;
            }
        }

        // Prefix sum into offsets
        for i in 1..counts.len() {
            counts[i] += counts[i - 1];
        }
        let offsets = counts;

        let mut cursor = offsets.clone();
        let mut incident = vec![0u32; offsets[num_vertices]];
        for (ti, tri) in triangles.iter().enumerate() {
            for v in distinct_corners(tri) {
                let slot = &mut cursor[v as usize];
                incident[*slot] = ti as u32;
                *slot += 1;
            }
        }

        Self {
            offsets,
            triangles: incident,
        }
    }

    #[inline]
    fn triangles_of(&self, v: usize) -> &[u32] {
        &self.triangles[self.offsets[v]..self.offsets[v + 1]]
    }
}

/// Corners of a triangle with repeated indices removed, so a degenerate
/// triangle is listed once per vertex.
fn distinct_corners(tri: &Triangle) -> impl Iterator<Item = u32> {
    let [a, b, c] = tri.indices();
    let b = (b != a).then_some(b);
    let c = (c != a && c != tri.i1).then_some(c);
    std::iter::once(a).chain(b).chain(c)
}
