//! Vertex and triangle records.
//!
//! Both types are `#[repr(C)]` and [`Pod`], so a slice of them has exactly the
//! byte layout of the corresponding array in a `.mesh` file.

use bytemuck::{Pod, Zeroable};
use nalgebra::{Point3, Vector3};

/// A mesh vertex: position, texture coordinate and shading normal.
///
/// Occupies 32 bytes (eight `f32`s) with no padding.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in model space.
    pub position: [f32; 3],
    /// Texture coordinate, normalized to `[0, 1]` by the lattice sampler.
    pub tex_coord: [f32; 2],
    /// Shading normal. Zero until a normal synthesizer has run.
    pub normal: [f32; 3],
}

impl Vertex {
    /// Create a vertex at `position` with the given texture coordinate and a
    /// zero normal.
    pub fn new(position: Point3<f32>, tex_coord: [f32; 2]) -> Self {
        Self {
            position: [position.x, position.y, position.z],
            tex_coord,
            normal: [0.0; 3],
        }
    }

    /// The position as a point.
    #[inline]
    pub fn point(&self) -> Point3<f32> {
        Point3::from(self.position)
    }

    /// The normal as a vector.
    #[inline]
    pub fn normal_vector(&self) -> Vector3<f32> {
        Vector3::from(self.normal)
    }

    /// Overwrite the normal.
    #[inline]
    pub fn set_normal(&mut self, n: Vector3<f32>) {
        self.normal = [n.x, n.y, n.z];
    }
}

/// A triangle as three indices into the owning mesh's vertex list.
///
/// Triangles are wound clockwise when seen from the outside of the surface.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Triangle {
    /// First vertex index.
    pub i0: u32,
    /// Second vertex index.
    pub i1: u32,
    /// Third vertex index.
    pub i2: u32,
}

impl Triangle {
    /// Create a triangle from three vertex indices.
    #[inline]
    pub const fn new(i0: u32, i1: u32, i2: u32) -> Self {
        Self { i0, i1, i2 }
    }

    /// The indices in winding order.
    #[inline]
    pub fn indices(&self) -> [u32; 3] {
        [self.i0, self.i1, self.i2]
    }

    /// Whether `v` is one of this triangle's corners.
    #[inline]
    pub fn contains(&self, v: u32) -> bool {
        self.i0 == v || self.i1 == v || self.i2 == v
    }

    /// Whether any two corners share an index.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.i0 == self.i1 || self.i1 == self.i2 || self.i0 == self.i2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sizes_match_file_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        assert_eq!(std::mem::size_of::<Triangle>(), 12);
    }

    #[test]
    fn test_vertex_field_order() {
        let v = Vertex {
            position: [1.0, 2.0, 3.0],
            tex_coord: [4.0, 5.0],
            normal: [6.0, 7.0, 8.0],
        };
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_triangle_contains() {
        let t = Triangle::new(0, 1, 3);
        assert!(t.contains(0));
        assert!(t.contains(3));
        assert!(!t.contains(2));
        assert!(!t.is_degenerate());
        assert!(Triangle::new(4, 4, 1).is_degenerate());
    }
}
