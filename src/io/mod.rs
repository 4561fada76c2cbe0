//! Mesh file I/O.
//!
//! Meshes are persisted in a single compact binary layout, described in
//! [`binary`]. The functions re-exported here are the usual entry points:
//!
//! ```no_run
//! use parasurf::io::{load, save};
//!
//! let mesh = load("torus.mesh").unwrap();
//! save(&mesh, "copy.mesh").unwrap();
//! ```
//!
//! Every failure (unopenable path, truncated section, failed allocation,
//! failed write) is returned as a [`MeshError`](crate::error::MeshError)
//! naming the section involved. Nothing is returned on failure, so a caller
//! never sees a partially populated mesh.

pub mod binary;

pub use binary::{load, read_from, save, write_to};
