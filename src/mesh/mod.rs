//! Core mesh data structures.
//!
//! This module provides the indexed triangle mesh produced by the generators
//! and stored by the binary codec.
//!
//! # Overview
//!
//! - [`Vertex`] - position, texture coordinate and normal (32 bytes)
//! - [`Triangle`] - three `u32` vertex indices (12 bytes)
//! - [`TriangleMesh`] - owns a vertex list and a triangle list
//!
//! The record types are plain-old-data, so the vertex and triangle lists can
//! be written to and read from disk as raw bytes.
//!
//! # Construction
//!
//! ```
//! use parasurf::mesh::{Triangle, TriangleMesh, Vertex};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Vertex::new(Point3::new(0.0, 0.0, 0.0), [0.0, 0.0]),
//!     Vertex::new(Point3::new(1.0, 0.0, 0.0), [1.0, 0.0]),
//!     Vertex::new(Point3::new(0.5, 1.0, 0.0), [0.5, 1.0]),
//! ];
//! let triangles = vec![Triangle::new(0, 1, 2)];
//!
//! let mesh = TriangleMesh::from_parts(vertices, triangles);
//! assert_eq!(mesh.num_vertices(), 3);
//! assert!(mesh.validate().is_ok());
//! ```

mod elements;
mod trimesh;

pub use elements::{Triangle, Vertex};
pub use trimesh::TriangleMesh;
