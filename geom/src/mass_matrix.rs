use crate::{vec3, Matrix3, Sphere, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Multiplier of f32::EPSILON used by the validity checks when none is given.
pub const DEFAULT_TOLERANCE: f32 = 10.0;

/// A mass paired with a symmetric inertia tensor about the center of mass.
///
/// Setters never refuse a value, they store it and report whether the
/// resulting matrix is physically valid (see [`MassMatrix::is_valid`]).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MassMatrix {
    mass: f32,
    /// (Ixx, Iyy, Izz)
    diag: Vec3,
    /// (Ixy, Ixz, Iyz)
    off_diag: Vec3,
}

impl MassMatrix {
    #[inline]
    pub const fn new(mass: f32, diag: Vec3, off_diag: Vec3) -> Self {
        Self {
            mass,
            diag,
            off_diag,
        }
    }

    /// Mass matrix of a solid sphere of uniform density centered on the origin.
    /// None if the mass or the radius is not strictly positive, or if the result is not valid.
    pub fn from_sphere(mass: f32, radius: f32) -> Option<Self> {
        if !(mass > 0.0 && radius > 0.0) {
            log::debug!(
                "refusing sphere mass matrix with mass {} and radius {}",
                mass,
                radius
            );
            return None;
        }
        let i = 0.4 * mass * radius * radius;
        let m = Self::new(mass, Vec3::splat(i), Vec3::ZERO);
        m.is_valid().then_some(m)
    }

    /// Same as [`MassMatrix::from_sphere`] but the mass is derived from a density.
    pub fn from_sphere_density(density: f32, radius: f32) -> Option<Self> {
        Self::from_sphere(density * Sphere::new(radius).volume(), radius)
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f32) -> bool {
        self.mass = mass;
        self.is_valid()
    }

    pub fn set_inertia_matrix(
        &mut self,
        ixx: f32,
        iyy: f32,
        izz: f32,
        ixy: f32,
        ixz: f32,
        iyz: f32,
    ) -> bool {
        self.diag = vec3(ixx, iyy, izz);
        self.off_diag = vec3(ixy, ixz, iyz);
        self.is_valid()
    }

    #[inline]
    pub fn diagonal_moments(&self) -> Vec3 {
        self.diag
    }

    #[inline]
    pub fn off_diagonal_moments(&self) -> Vec3 {
        self.off_diag
    }

    pub fn set_diagonal_moments(&mut self, diag: Vec3) -> bool {
        self.diag = diag;
        self.is_valid()
    }

    pub fn set_off_diagonal_moments(&mut self, off_diag: Vec3) -> bool {
        self.off_diag = off_diag;
        self.is_valid()
    }

    #[inline]
    pub fn ixx(&self) -> f32 {
        self.diag.x
    }

    #[inline]
    pub fn iyy(&self) -> f32 {
        self.diag.y
    }

    #[inline]
    pub fn izz(&self) -> f32 {
        self.diag.z
    }

    #[inline]
    pub fn ixy(&self) -> f32 {
        self.off_diag.x
    }

    #[inline]
    pub fn ixz(&self) -> f32 {
        self.off_diag.y
    }

    #[inline]
    pub fn iyz(&self) -> f32 {
        self.off_diag.z
    }

    /// Moment of inertia matrix
    pub fn moi(&self) -> Matrix3 {
        Matrix3::from_symmetric(self.diag, self.off_diag)
    }

    /// Numerical slack for moments of this magnitude. Half the sum of the moments
    /// bounds any of the principal moments of a valid tensor.
    pub fn epsilon(moments: Vec3, tolerance: f32) -> f32 {
        let max_possible = 0.5 * (moments.x + moments.y + moments.z).abs();
        tolerance * f32::EPSILON * max_possible
    }

    /// Mass is strictly positive and the inertia tensor is positive definite.
    pub fn is_positive(&self, tolerance: f32) -> bool {
        let eps = Self::epsilon(self.diag, tolerance);
        let (minor1, minor2, det) = self.leading_minors();
        self.mass > 0.0 && minor1 > eps && minor2 > eps && det > eps
    }

    /// Mass is non negative and the inertia tensor is positive semi-definite within tolerance.
    pub fn is_near_positive(&self, tolerance: f32) -> bool {
        let eps = Self::epsilon(self.diag, tolerance);
        let (minor1, minor2, det) = self.leading_minors();
        self.mass >= 0.0 && minor1 + eps >= 0.0 && minor2 + eps >= 0.0 && det + eps >= 0.0
    }

    fn leading_minors(&self) -> (f32, f32, f32) {
        let d = self.diag;
        let o = self.off_diag;
        (d.x, d.x * d.y - o.x * o.x, self.moi().determinant())
    }

    /// Principal moments must be non negative and satisfy the triangle inequality.
    pub fn valid_moments(moments: Vec3, tolerance: f32) -> bool {
        let eps = Self::epsilon(moments, tolerance);
        moments.x + eps >= 0.0
            && moments.y + eps >= 0.0
            && moments.z + eps >= 0.0
            && moments.x + moments.y + eps >= moments.z
            && moments.y + moments.z + eps >= moments.x
            && moments.z + moments.x + eps >= moments.y
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_tol(DEFAULT_TOLERANCE)
    }

    pub fn is_valid_tol(&self, tolerance: f32) -> bool {
        self.mass.is_finite()
            && self.diag.is_finite()
            && self.off_diag.is_finite()
            && self.is_near_positive(tolerance)
            && Self::valid_moments(self.principal_moments(tolerance), tolerance)
    }

    /// Eigenvalues of the inertia tensor in ascending order.
    pub fn principal_moments(&self, tolerance: f32) -> Vec3 {
        let d = self.diag;
        let o = self.off_diag;
        let eps = Self::epsilon(d, tolerance);

        if o.abs().max_element() <= eps {
            return d.sorted();
        }

        // closed form eigenvalues of a real symmetric 3x3 matrix
        let p1 = o.mag2();
        let q = (d.x + d.y + d.z) / 3.0;
        let shifted = d - Vec3::splat(q);
        let p2 = shifted.mag2() + 2.0 * p1;
        let p = (p2 / 6.0).sqrt();

        let b = Matrix3::from_symmetric(shifted / p, o / p);
        let r = (b.determinant() / 2.0).clamp(-1.0, 1.0);
        let phi = r.acos() / 3.0;

        let largest = q + 2.0 * p * phi.cos();
        let smallest = q + 2.0 * p * (phi + 2.0 * PI / 3.0).cos();
        let middle = 3.0 * q - largest - smallest;

        vec3(smallest, middle, largest).sorted()
    }
}
