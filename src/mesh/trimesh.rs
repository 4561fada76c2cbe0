//! The owning triangle mesh container.

use nalgebra::Point3;

use super::elements::{Triangle, Vertex};
use crate::error::{MeshError, Result};

/// An indexed triangle mesh.
///
/// The mesh exclusively owns its vertex and triangle storage. It is populated
/// once, either by the generation pipeline or by the binary reader, by moving
/// finished buffers in through [`TriangleMesh::from_parts`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<Vertex>,
    triangles: Vec<Triangle>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of finished vertex and triangle buffers.
    ///
    /// Triangle indices are not checked here; see [`TriangleMesh::validate`].
    pub fn from_parts(vertices: Vec<Vertex>, triangles: Vec<Triangle>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Give the buffers back to the caller.
    pub fn into_parts(self) -> (Vec<Vertex>, Vec<Triangle>) {
        (self.vertices, self.triangles)
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Check if the mesh has no vertices and no triangles.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.triangles.is_empty()
    }

    /// All vertices, in index order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All triangles, in list order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Iterate over vertex positions.
    pub fn positions(&self) -> impl Iterator<Item = Point3<f32>> + '_ {
        self.vertices.iter().map(Vertex::point)
    }

    /// Compute the axis-aligned bounding box, or `None` for a mesh without
    /// vertices.
    pub fn bounding_box(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        let first = self.vertices.first()?.point();
        let mut min = first;
        let mut max = first;

        for p in self.positions() {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }

        Some((min, max))
    }

    /// Check that every triangle references existing, distinct vertices.
    ///
    /// Meshes produced by the generators always pass. Meshes read from disk
    /// are not checked automatically.
    pub fn validate(&self) -> Result<()> {
        let n = self.vertices.len();
        for (ti, tri) in self.triangles.iter().enumerate() {
            for vi in tri.indices() {
                if vi as usize >= n {
                    return Err(MeshError::InvalidVertexIndex {
                        triangle: ti,
                        vertex: vi as usize,
                    });
                }
            }
            if tri.is_degenerate() {
                return Err(MeshError::DegenerateFace { triangle: ti });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_single_triangle() -> TriangleMesh {
        let vertices = vec![
            Vertex::new(Point3::new(0.0, 0.0, 0.0), [0.0, 0.0]),
            Vertex::new(Point3::new(1.0, 0.0, 0.0), [1.0, 0.0]),
            Vertex::new(Point3::new(0.5, 1.0, -2.0), [0.5, 1.0]),
        ];
        TriangleMesh::from_parts(vertices, vec![Triangle::new(0, 1, 2)])
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = TriangleMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.num_vertices(), 0);
        assert_eq!(mesh.num_triangles(), 0);
        assert!(mesh.bounding_box().is_none());
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_counts_and_bounds() {
        let mesh = create_single_triangle();
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_triangles(), 1);

        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, Point3::new(0.0, 0.0, -2.0));
        assert_eq!(max, Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_into_parts_returns_buffers() {
        let mesh = create_single_triangle();
        let (vertices, triangles) = mesh.into_parts();
        assert_eq!(vertices.len(), 3);
        assert_eq!(triangles, vec![Triangle::new(0, 1, 2)]);
    }

    #[test]
    fn test_validate_out_of_range() {
        let (vertices, _) = create_single_triangle().into_parts();
        let mesh = TriangleMesh::from_parts(vertices, vec![Triangle::new(0, 1, 2), Triangle::new(2, 1, 3)]);
        match mesh.validate() {
            Err(MeshError::InvalidVertexIndex { triangle, vertex }) => {
                assert_eq!(triangle, 1);
                assert_eq!(vertex, 3);
            }
            other => panic!("expected InvalidVertexIndex, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_degenerate() {
        let (vertices, _) = create_single_triangle().into_parts();
        let mesh = TriangleMesh::from_parts(vertices, vec![Triangle::new(0, 2, 2)]);
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::DegenerateFace { triangle: 0 })
        ));
    }
}
