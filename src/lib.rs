//! # Parasurf
//!
//! Triangle meshes from parametric surfaces.
//!
//! Parasurf samples a surface `f(theta, phi)` on a regular angle lattice,
//! triangulates the lattice into consistently wound triangles, synthesizes
//! per-vertex shading normals, and stores the result in a compact binary
//! `.mesh` file.
//!
//! ## Features
//!
//! - **Lattice sampling**: row-major vertex layout with normalized texture coordinates
//! - **Lattice triangulation**: two triangles per quad, closed around the ring axis
//! - **Normal synthesis**: weighted face-normal averaging (parallel with rayon)
//!   and a closed-form radial method for spheres
//! - **Binary I/O**: fixed, padding-free layout read and written with `bytemuck`
//!
//! ## Quick Start
//!
//! ```no_run
//! use parasurf::prelude::*;
//!
//! // Generate a torus and save it
//! let mesh = Surface::Torus.generate(64, 32, &NormalOptions::default()).unwrap();
//! parasurf::io::save(&mesh, "torus.mesh").unwrap();
//!
//! // Load it back
//! let loaded = parasurf::io::load("torus.mesh").unwrap();
//! assert_eq!(loaded, mesh);
//! ```
//!
//! ## Custom Surfaces
//!
//! Any closure `Fn(f32, f32) -> Point3<f32>` is a [`ParametricSurface`](algo::ParametricSurface):
//!
//! ```
//! use parasurf::prelude::*;
//! use nalgebra::Point3;
//! use std::f32::consts::TAU;
//!
//! let funnel = |theta: f32, phi: f32| {
//!     let r = 1.0 + theta;
//!     Point3::new(r * phi.cos(), r * phi.sin(), -theta)
//! };
//! let lattice = Lattice::new(32, 8);
//! let mesh = generate(
//!     lattice,
//!     &funnel,
//!     TAU / 32.0,
//!     1.0 / 8.0,
//!     NormalMethod::Weighted,
//!     &NormalOptions::default(),
//! );
//!
//! assert_eq!(mesh.num_vertices(), 33 * 9);
//! assert_eq!(mesh.num_triangles(), 2 * 32 * 8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod io;
pub mod mesh;
pub mod surfaces;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use parasurf::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::{
        compute_sphere_normals, compute_vertex_normals, sample_lattice, triangulate_lattice,
        Lattice, NormalOptions, ParametricSurface,
    };
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{Triangle, TriangleMesh, Vertex};
    pub use crate::surfaces::{generate, NormalMethod, Surface};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
