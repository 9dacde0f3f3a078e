use crate::{MassMatrix, Material, Plane, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Returned by [`Sphere::density_from_mass`] when no meaningful density exists.
pub const INVALID_DENSITY: f32 = -1.0;

/// A solid sphere of uniform material centered on the origin.
///
/// Planes given to the cut queries are expressed relative to the sphere's center,
/// so the plane offset is the signed distance from the center to the plane.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    radius: f32,
    #[serde(default)]
    material: Material,
}

impl Sphere {
    #[inline]
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            material: Material::default(),
        }
    }

    #[inline]
    pub fn with_material(radius: f32, material: Material) -> Self {
        Self { radius, material }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    #[inline]
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    #[inline]
    pub fn volume(&self) -> f32 {
        4.0 / 3.0 * PI * self.radius.powi(3)
    }

    /// Density a sphere of this size would need to weigh `mass`.
    /// Returns a negative value if the mass or the volume is not strictly positive,
    /// or if the density would not be finite.
    pub fn density_from_mass(&self, mass: f32) -> f32 {
        let volume = self.volume();
        if !(volume > 0.0 && mass > 0.0) {
            return INVALID_DENSITY;
        }
        let density = mass / volume;
        if !density.is_finite() {
            return INVALID_DENSITY;
        }
        density
    }

    /// Sets the material density so that the sphere weighs `mass`.
    /// The material is left untouched and false is returned if no valid density exists.
    pub fn set_density_from_mass(&mut self, mass: f32) -> bool {
        let density = self.density_from_mass(mass);
        if !(density > 0.0) {
            log::debug!(
                "cannot derive a density for mass {} and radius {}",
                mass,
                self.radius
            );
            return false;
        }
        self.material.set_density(density);
        true
    }

    /// Mass matrix of the sphere about its center, using the material density.
    pub fn mass_matrix(&self) -> Option<MassMatrix> {
        MassMatrix::from_sphere(self.material.density() * self.volume(), self.radius)
    }

    /// Writes the mass matrix to `out` and returns true, or leaves `out` untouched and returns false.
    pub fn fill_mass_matrix(&self, out: &mut MassMatrix) -> bool {
        match self.mass_matrix() {
            Some(m) => {
                *out = m;
                true
            }
            None => false,
        }
    }

    /// Volume of the part of the sphere below the plane, i.e. where n·x <= offset.
    pub fn volume_below(&self, plane: &Plane) -> f32 {
        let r = self.radius;
        let d = plane.o;

        if d >= r {
            return self.volume();
        }
        if d <= -r {
            return 0.0;
        }

        let h = cap_height(r, d);
        PI * h * h * (3.0 * r - h) / 3.0
    }

    /// Centroid of the part of the sphere below the plane, relative to the sphere's center.
    /// None if nothing is below the plane.
    pub fn center_of_volume_below(&self, plane: &Plane) -> Option<Vec3> {
        debug_assert!((plane.n.mag2() - 1.0).abs() <= 1e-4);
        let r = self.radius;
        let d = plane.o;

        if d <= -r {
            return None;
        }
        if d >= r {
            return Some(Vec3::ZERO);
        }

        let h = cap_height(r, d);
        // distance from the center to the centroid of a cap of height h
        let c = 3.0 * (2.0 * r - h).powi(2) / (4.0 * (3.0 * r - h));

        // the cap below the plane extends towards -n
        Some(-c * plane.n)
    }
}

/// Height of the cap lying below a plane at signed distance d from the center.
#[inline]
fn cap_height(r: f32, d: f32) -> f32 {
    (r + d).max(0.0).min(2.0 * r)
}
