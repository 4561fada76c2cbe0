//! Ready-made parametric surfaces and the generation pipeline.
//!
//! [`generate`] turns any [`ParametricSurface`] into a finished mesh. The
//! [`Surface`] catalogue wraps it for the four built-in surfaces, each with
//! the angle ranges and normal method that suit it.
//!
//! # Example
//!
//! ```
//! use parasurf::algo::NormalOptions;
//! use parasurf::surfaces::Surface;
//!
//! let torus = Surface::Torus.generate(16, 8, &NormalOptions::default()).unwrap();
//! assert_eq!(torus.num_vertices(), 17 * 9);
//! assert_eq!(torus.num_triangles(), 2 * 16 * 8);
//! ```

use std::f32::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use nalgebra::Point3;

use crate::algo::normals::{compute_sphere_normals, compute_vertex_normals, NormalOptions};
use crate::algo::sample::{sample_lattice, Lattice, ParametricSurface};
use crate::algo::triangulate::triangulate_lattice;
use crate::error::{MeshError, Result};
use crate::mesh::TriangleMesh;

/// How vertex normals are derived for a generated surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalMethod {
    /// Weighted average of incident face normals.
    Weighted,
    /// Normalized position; only valid for origin-centred spheres.
    Spherical,
}

/// Sample, triangulate and shade `surface`, then move the result into a mesh.
///
/// `pstep` advances `phi` once per ring and `tstep` advances `theta` once per
/// slice.
///
/// # Panics
/// Panics if the lattice has more vertices than a `u32` index can address
/// (see [`Lattice::fits_u32_indices`]). [`Surface::generate`] reports this
/// as an error instead.
pub fn generate<S>(
    lattice: Lattice,
    surface: &S,
    pstep: f32,
    tstep: f32,
    method: NormalMethod,
    options: &NormalOptions,
) -> TriangleMesh
where
    S: ParametricSurface + ?Sized,
{
    let triangles = triangulate_lattice(lattice);
    let mut vertices = sample_lattice(lattice, surface, pstep, tstep);

    match method {
        NormalMethod::Weighted => compute_vertex_normals(&mut vertices, &triangles, options),
        NormalMethod::Spherical => compute_sphere_normals(&mut vertices),
    }

    TriangleMesh::from_parts(vertices, triangles)
}

/// The built-in surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Unit sphere centred on the origin, poles on the y axis.
    Sphere,
    /// Torus with major radius 1 and minor radius 0.5 around the z axis.
    Torus,
    /// Klein bottle built from a bulb half and a tube half.
    Klein,
    /// "Bagel" (figure-8) immersion of the Klein bottle.
    BagelKlein,
}

impl Surface {
    /// All built-in surfaces.
    pub const ALL: [Surface; 4] = [
        Surface::Sphere,
        Surface::Torus,
        Surface::Klein,
        Surface::BagelKlein,
    ];

    /// The canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Surface::Sphere => "sphere",
            Surface::Torus => "torus",
            Surface::Klein => "klein",
            Surface::BagelKlein => "bagel-klein",
        }
    }

    /// Normal method suited to this surface.
    pub fn normal_method(&self) -> NormalMethod {
        match self {
            Surface::Sphere => NormalMethod::Spherical,
            _ => NormalMethod::Weighted,
        }
    }

    /// `(pstep, tstep)` covering the surface's parameter domain.
    ///
    /// `phi` always spans a full turn over the rings. `theta` spans half a
    /// turn for the sphere (pole to pole) and a full turn otherwise.
    ///
    /// The torus and bagel Klein bottle step `theta` by `2π / slices`, not by
    /// `2π / rings`. With the per-ring step their meshes only close when
    /// `rings == slices`, so output differs from generators that use it
    /// whenever the two counts differ.
    pub fn steps(&self, rings: usize, slices: usize) -> (f32, f32) {
        let pstep = TAU / rings as f32;
        let tstep = match self {
            Surface::Sphere => PI / slices as f32,
            _ => TAU / slices as f32,
        };
        (pstep, tstep)
    }

    /// Generate this surface with `rings` × `slices` quads.
    ///
    /// Fails if either count is zero or the lattice has too many vertices for
    /// 32-bit triangle indices.
    pub fn generate(&self, rings: usize, slices: usize, options: &NormalOptions) -> Result<TriangleMesh> {
        if rings == 0 {
            return Err(MeshError::invalid_param("rings", rings, "must be at least 1"));
        }
        if slices == 0 {
            return Err(MeshError::invalid_param("slices", slices, "must be at least 1"));
        }
        let lattice = Lattice::new(rings, slices);
        if !lattice.fits_u32_indices() {
            return Err(MeshError::invalid_param(
                "rings x slices",
                format!("{} x {}", rings, slices),
                "lattice exceeds 32-bit vertex indices",
            ));
        }

        log::info!(
            "Generating {} mesh ({} rings, {} slices)",
            self.name(),
            rings,
            slices
        );
        let start = Instant::now();

        let (pstep, tstep) = self.steps(rings, slices);
        let mesh = generate(lattice, self, pstep, tstep, self.normal_method(), options);

        log::debug!(
            "Generated {} vertices, {} triangles in {:.2?}",
            mesh.num_vertices(),
            mesh.num_triangles(),
            start.elapsed()
        );
        Ok(mesh)
    }
}

impl ParametricSurface for Surface {
    fn point(&self, theta: f32, phi: f32) -> Point3<f32> {
        match self {
            Surface::Sphere => sphere_point(theta, phi),
            Surface::Torus => torus_point(theta, phi),
            Surface::Klein => klein_point(theta, phi),
            Surface::BagelKlein => bagel_klein_point(theta, phi),
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Surface {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sphere" => Ok(Surface::Sphere),
            "torus" => Ok(Surface::Torus),
            "klein" => Ok(Surface::Klein),
            "bagel-klein" | "bagel" => Ok(Surface::BagelKlein),
            _ => Err(MeshError::invalid_param(
                "surface",
                s,
                "expected sphere, torus, klein or bagel-klein",
            )),
        }
    }
}

/// `theta` is the polar angle from +y, `phi` the azimuth.
pub fn sphere_point(theta: f32, phi: f32) -> Point3<f32> {
    Point3::new(theta.sin() * phi.cos(), theta.cos(), -theta.sin() * phi.sin())
}

/// `theta` goes around the tube, `phi` around the z axis.
pub fn torus_point(theta: f32, phi: f32) -> Point3<f32> {
    let r = 1.0 + 0.5 * theta.cos();
    Point3::new(r * phi.cos(), r * phi.sin(), 0.5 * theta.sin())
}

/// Bulb half for `u < pi`, tube half otherwise; `v` goes around the tube.
pub fn klein_point(u: f32, v: f32) -> Point3<f32> {
    let r = 2.0 * (1.0 - u.cos() / 2.0);
    let (x, z) = if u < PI {
        (
            3.0 * u.cos() * (1.0 + u.sin()) + r * u.cos() * v.cos(),
            -8.0 * u.sin() - r * u.sin() * v.cos(),
        )
    } else {
        (3.0 * u.cos() * (1.0 + u.sin()) + r * (v + PI).cos(), -8.0 * u.sin())
    };
    let y = -r * v.sin();
    Point3::new(x, y, z)
}

/// Figure-8 cross-section swept once around the z axis by `v`.
pub fn bagel_klein_point(u: f32, v: f32) -> Point3<f32> {
    let (half_sin, half_cos) = (v / 2.0).sin_cos();
    let r = 1.0 + half_cos * u.sin() - half_sin * (2.0 * u).sin();
    Point3::new(
        r * v.cos(),
        r * v.sin(),
        half_sin * u.sin() + half_cos * (2.0 * u).sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_for_all_surfaces() {
        for surface in Surface::ALL {
            let mesh = surface.generate(6, 4, &NormalOptions::default()).unwrap();
            assert_eq!(mesh.num_vertices(), 7 * 5, "{}", surface);
            assert_eq!(mesh.num_triangles(), 2 * 6 * 4, "{}", surface);
            assert!(mesh.validate().is_ok(), "{}", surface);
        }
    }

    #[test]
    fn test_sphere_uses_radial_normals() {
        let mesh = Surface::Sphere.generate(12, 6, &NormalOptions::default()).unwrap();
        for v in mesh.vertices() {
            let len = v.point().coords.norm();
            assert!((len - 1.0).abs() < 1e-5);
            let expected = v.point().coords.normalize();
            assert_eq!(v.normal, [expected.x, expected.y, expected.z]);
        }
    }

    #[test]
    fn test_sphere_poles() {
        let mesh = Surface::Sphere.generate(8, 4, &NormalOptions::default()).unwrap();
        let lattice = Lattice::new(8, 4);
        let north = mesh.vertices()[lattice.index(0, 3)].position;
        let south = mesh.vertices()[lattice.index(4, 5)].position;
        assert!((north[1] - 1.0).abs() < 1e-6);
        assert!((south[1] + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_torus_normals_point_away_from_tube_centre() {
        let mesh = Surface::Torus.generate(24, 24, &NormalOptions::default()).unwrap();
        for v in mesh.vertices() {
            let p = v.point();
            let n = v.normal_vector();
            assert!((n.norm() - 1.0).abs() < 1e-5);

            // Closest point on the tube's centre circle
            let axis = nalgebra::Vector3::new(p.x, p.y, 0.0).normalize();
            let radial = p.coords - axis;
            assert!(n.dot(&radial.normalize()).abs() > 0.9);
        }
    }

    #[test]
    fn test_weighted_normals_unit_length() {
        for surface in [Surface::Torus, Surface::BagelKlein] {
            let mesh = surface.generate(20, 20, &NormalOptions::default()).unwrap();
            for v in mesh.vertices() {
                let len = v.normal_vector().norm();
                assert!((len - 1.0).abs() < 1e-4, "{}: normal length {}", surface, len);
            }
        }
    }

    #[test]
    fn test_generate_custom_surface() {
        let cylinder = |theta: f32, phi: f32| Point3::new(phi.cos(), phi.sin(), theta);
        let lattice = Lattice::new(16, 3);
        let mesh = generate(
            lattice,
            &cylinder,
            TAU / 16.0,
            1.0,
            NormalMethod::Weighted,
            &NormalOptions::default(),
        );
        assert_eq!(mesh.num_vertices(), lattice.vertex_count());
        for v in mesh.vertices() {
            let n = v.normal_vector();
            assert!(n.z.abs() < 1e-4);
            assert!((n.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_invalid_dimensions() {
        let options = NormalOptions::default();
        assert!(matches!(
            Surface::Torus.generate(0, 4, &options),
            Err(MeshError::InvalidParameter { name: "rings", .. })
        ));
        assert!(matches!(
            Surface::Torus.generate(4, 0, &options),
            Err(MeshError::InvalidParameter { name: "slices", .. })
        ));
    }

    #[test]
    fn test_lattice_beyond_u32_indices_rejected() {
        assert!(matches!(
            Surface::Torus.generate(65535, 65535, &NormalOptions::default()),
            Err(MeshError::InvalidParameter {
                name: "rings x slices",
                ..
            })
        ));
    }

    #[test]
    #[should_panic(expected = "exceeds 32-bit vertex indices")]
    fn test_generate_panics_beyond_u32_indices() {
        let flat = |theta: f32, phi: f32| Point3::new(phi, theta, 0.0);
        generate(
            Lattice::new(65535, 65535),
            &flat,
            1.0,
            1.0,
            NormalMethod::Weighted,
            &NormalOptions::default(),
        );
    }

    #[test]
    fn test_steps_cover_parameter_domain() {
        let (pstep, tstep) = Surface::Sphere.steps(8, 4);
        assert_eq!(pstep, TAU / 8.0);
        assert_eq!(tstep, PI / 4.0);

        // theta follows the slice count, not the ring count
        for surface in [Surface::Torus, Surface::Klein, Surface::BagelKlein] {
            let (pstep, tstep) = surface.steps(8, 4);
            assert_eq!(pstep, TAU / 8.0);
            assert_eq!(tstep, TAU / 4.0);
        }
    }

    #[test]
    fn test_parse_names() {
        for surface in Surface::ALL {
            assert_eq!(surface.name().parse::<Surface>().unwrap(), surface);
        }
        assert_eq!("Bagel".parse::<Surface>().unwrap(), Surface::BagelKlein);
        assert!("cube".parse::<Surface>().is_err());
    }
}
