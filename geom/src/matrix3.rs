// Copyright 2013-2014 The CGMath Developers.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// Modified for the Egregoria project by the Egregoria developers.

use crate::{vec3, Vec3};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Column major matrix
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Matrix3 {
    pub x: Vec3,
    pub y: Vec3,
    pub z: Vec3,
}

impl Matrix3 {
    pub const IDENTITY: Self = Self {
        x: Vec3::X,
        y: Vec3::Y,
        z: Vec3::Z,
    };

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn diagonal(d: Vec3) -> Self {
        Self {
            x: Vec3::x(d.x),
            y: Vec3::y(d.y),
            z: Vec3::z(d.z),
        }
    }

    /// Builds the symmetric matrix with the given diagonal and
    /// off diagonal terms, ordered as (xy, xz, yz).
    pub fn from_symmetric(diag: Vec3, off: Vec3) -> Self {
        Self {
            x: vec3(diag.x, off.x, off.y),
            y: vec3(off.x, diag.y, off.z),
            z: vec3(off.y, off.z, diag.z),
        }
    }

    pub fn transpose(&self) -> Self {
        Self {
            x: vec3(self.x.x, self.y.x, self.z.x),
            y: vec3(self.x.y, self.y.y, self.z.y),
            z: vec3(self.x.z, self.y.z, self.z.z),
        }
    }

    pub fn determinant(&self) -> f32 {
        self.x.dot(self.y.cross(self.z))
    }

    pub fn is_symmetric(&self) -> bool {
        self.x.y == self.y.x && self.x.z == self.z.x && self.y.z == self.z.y
    }
}

impl Mul<Vec3> for Matrix3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl<'a> Mul<Vec3> for &'a Matrix3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Matrix3 {
            x: &self * rhs.x,
            y: &self * rhs.y,
            z: &self * rhs.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinant() {
        assert_eq!(Matrix3::IDENTITY.determinant(), 1.0);
        assert_eq!(Matrix3::diagonal(vec3(2.0, 3.0, 4.0)).determinant(), 24.0);
        assert_eq!(Matrix3::zero().determinant(), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let m = Matrix3::from_symmetric(vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0));
        assert!(m.is_symmetric());
        assert_eq!(m, m.transpose());
        assert_eq!(m * Vec3::Y, vec3(4.0, 2.0, 6.0));
        assert_eq!(m * Matrix3::IDENTITY, m);
    }
}
