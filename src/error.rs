//! Error types for parasurf.
//!
//! This module defines all error types used throughout the library. The binary
//! codec reports every failure as a distinct variant naming the section of the
//! file it was working on, so callers can tell an unopenable path from a
//! truncated vertex array.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// A region of the binary mesh layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The leading 4-byte vertex count.
    VertexCount,
    /// The 4-byte triangle count following the vertex count.
    TriangleCount,
    /// The packed vertex records.
    Vertices,
    /// The packed triangle records.
    Triangles,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::VertexCount => "vertex count",
            Section::TriangleCount => "triangle count",
            Section::Vertices => "vertex array",
            Section::Triangles => "triangle array",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during mesh operations.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The mesh file could not be opened or created.
    #[error("could not open '{path}': {source}")]
    Open {
        /// The file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Fewer bytes were available than the section requires.
    #[error("could not load mesh file: {section} is truncated (expected {expected} bytes, read {actual})")]
    ShortRead {
        /// The section being read.
        section: Section,
        /// Bytes required.
        expected: usize,
        /// Bytes actually read.
        actual: usize,
    },

    /// A section could not be written in full.
    #[error("could not write to mesh file: {section}: {source}")]
    ShortWrite {
        /// The section being written.
        section: Section,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Storage for a section could not be obtained.
    #[error("could not allocate memory for {section} (count = {count})")]
    Allocation {
        /// The section being allocated.
        section: Section,
        /// The declared element count.
        count: usize,
    },

    /// A triangle references an invalid vertex index.
    #[error("triangle {triangle} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The triangle index.
        triangle: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A triangle has duplicate vertex indices.
    #[error("triangle {triangle} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The triangle index.
        triangle: usize,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl MeshError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
