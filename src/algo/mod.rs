//! Surface generation algorithms.
//!
//! The generation pipeline runs in three stages, each in its own module:
//!
//! - **Sampling** ([`sample`]): evaluate a parametric surface on a ring × slice
//!   angle lattice, producing positions and texture coordinates
//! - **Triangulation** ([`triangulate`]): split every lattice quad into two
//!   consistently wound triangles
//! - **Normals** ([`normals`]): weighted face-normal averaging, or the radial
//!   shortcut for spheres
//!
//! [`crate::surfaces::generate`] chains the three stages into a finished
//! [`TriangleMesh`](crate::mesh::TriangleMesh).

pub mod normals;
pub mod sample;
pub mod triangulate;

pub use normals::{compute_sphere_normals, compute_vertex_normals, NormalOptions};
pub use sample::{sample_lattice, Lattice, ParametricSurface};
pub use triangulate::triangulate_lattice;
