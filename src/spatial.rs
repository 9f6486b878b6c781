//! Spatial-algebra primitives used to describe the chassis tree.
//!
//! Transforms and inertias are stored in structured form (3×3 blocks plus
//! vectors) and can be expanded into the 6×6 Plücker matrices expected by
//! spatial-algebra dynamics engines via `to_matrix`.

use bevy_heavy::ComputeMassProperties3d as _;
use bevy_math::primitives::Cuboid;
use glam::{DMat3, DVec3};
use nalgebra::Matrix6;
use serde::{Deserialize, Serialize};

/// One of the three coordinate axes of a body frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinateAxis {
    X,
    Y,
    Z,
}

impl CoordinateAxis {
    pub fn unit(self) -> DVec3 {
        match self {
            Self::X => DVec3::X,
            Self::Y => DVec3::Y,
            Self::Z => DVec3::Z,
        }
    }
}

/// Coordinate rotation of `theta` radians about `axis`.
///
/// This is the *passive* rotation: it maps coordinates expressed in the parent
/// frame into the rotated frame, so about Z it reads `[[c, s, 0], [-s, c, 0], [0, 0, 1]]`.
pub fn coordinate_rotation(axis: CoordinateAxis, theta: f64) -> DMat3 {
    let (s, c) = theta.sin_cos();
    let rows = match axis {
        CoordinateAxis::X => [[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]],
        CoordinateAxis::Y => [[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]],
        CoordinateAxis::Z => [[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]],
    };
    DMat3::from_cols_array_2d(&rows).transpose()
}

/// Skew-symmetric cross-product matrix, `skew(v) * w == v.cross(w)`.
pub fn skew(v: DVec3) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(0.0, v.z, -v.y),
        DVec3::new(-v.z, 0.0, v.x),
        DVec3::new(v.y, -v.x, 0.0),
    )
}

fn put_block(m: &mut Matrix6<f64>, row: usize, col: usize, block: &DMat3) {
    for j in 0..3 {
        let column = block.col(j);
        for i in 0..3 {
            m[(row + i, col + j)] = column[i];
        }
    }
}

/// A spatial coordinate transform from a parent frame to a child frame.
///
/// The child frame is located at `translation` (in parent coordinates) and its
/// orientation is given by the coordinate rotation `rotation`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpatialTransform {
    pub rotation: DMat3,
    pub translation: DVec3,
}

impl SpatialTransform {
    pub const IDENTITY: Self = Self {
        rotation: DMat3::IDENTITY,
        translation: DVec3::ZERO,
    };

    pub fn new(rotation: DMat3, translation: DVec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Expands the transform into the 6×6 motion transform `[[E, 0], [-E·skew(r), E]]`.
    pub fn to_matrix(&self) -> Matrix6<f64> {
        let mut m = Matrix6::zeros();
        let lower = -(self.rotation * skew(self.translation));
        put_block(&mut m, 0, 0, &self.rotation);
        put_block(&mut m, 3, 0, &lower);
        put_block(&mut m, 3, 3, &self.rotation);
        m
    }
}

/// Rigid-body spatial inertia: mass, center of mass, and rotational inertia
/// about the center of mass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpatialInertia {
    mass: f64,
    com: DVec3,
    rotational_inertia: DMat3,
}

impl Default for SpatialInertia {
    fn default() -> Self {
        Self {
            mass: 0.0,
            com: DVec3::ZERO,
            rotational_inertia: DMat3::ZERO,
        }
    }
}

impl SpatialInertia {
    pub fn new(mass: f64, com: DVec3, rotational_inertia: DMat3) -> Self {
        Self {
            mass,
            com,
            rotational_inertia,
        }
    }

    /// Inertia of a uniformly dense box centered on the body origin.
    ///
    /// `dims` holds the full edge lengths along x, y and z. The principal
    /// inertia is computed by `bevy_heavy` in f32, so expect single-precision
    /// accuracy.
    pub fn from_box(mass: f64, dims: DVec3) -> Self {
        let cuboid = Cuboid::new(dims.x as f32, dims.y as f32, dims.z as f32);
        let unit_inertia = cuboid.unit_principal_angular_inertia().as_dvec3();
        Self::new(mass, DVec3::ZERO, DMat3::from_diagonal(unit_inertia * mass))
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn com(&self) -> DVec3 {
        self.com
    }

    pub fn rotational_inertia(&self) -> DMat3 {
        self.rotational_inertia
    }

    /// Inertia of the body reflected across the plane perpendicular to `axis`.
    ///
    /// The center-of-mass component along `axis` changes sign, as do the
    /// products of inertia that involve `axis`.
    pub fn flip_along_axis(&self, axis: CoordinateAxis) -> Self {
        let flip = DMat3::from_diagonal(DVec3::ONE - 2.0 * axis.unit());
        Self {
            mass: self.mass,
            com: flip * self.com,
            rotational_inertia: flip * self.rotational_inertia * flip,
        }
    }

    /// Expands into the 6×6 spatial inertia `[[Ī + m·C·Cᵀ, m·C], [m·Cᵀ, m·1]]`.
    pub fn to_matrix(&self) -> Matrix6<f64> {
        let c = skew(self.com);
        let mc = c * self.mass;
        let upper_left = self.rotational_inertia + mc * c.transpose();
        let mut m = Matrix6::zeros();
        put_block(&mut m, 0, 0, &upper_left);
        put_block(&mut m, 0, 3, &mc);
        put_block(&mut m, 3, 0, &mc.transpose());
        put_block(&mut m, 3, 3, &(DMat3::IDENTITY * self.mass));
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn sample_inertia() -> SpatialInertia {
        let inertia = DMat3::from_cols(
            DVec3::new(0.02, 0.001, 0.002),
            DVec3::new(0.001, 0.03, 0.003),
            DVec3::new(0.002, 0.003, 0.04),
        );
        SpatialInertia::new(1.5, DVec3::new(0.01, 0.02, -0.03), inertia)
    }

    #[test]
    fn half_turn_about_z_negates_x_and_y() {
        let r = coordinate_rotation(CoordinateAxis::Z, PI);
        let v = r * DVec3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(v.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, -2.0, epsilon = 1e-12);
        assert_relative_eq!(v.z, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn coordinate_rotation_is_passive() {
        // A frame rotated +90° about Z sees the parent's X axis along its -Y.
        let r = coordinate_rotation(CoordinateAxis::Z, PI / 2.0);
        let v = r * DVec3::X;
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn skew_matches_cross_product() {
        let a = DVec3::new(0.3, -1.2, 2.0);
        let b = DVec3::new(-0.7, 0.4, 1.1);
        let expected = a.cross(b);
        let got = skew(a) * b;
        assert_relative_eq!(got.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(got.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(got.z, expected.z, epsilon = 1e-12);
    }

    #[test]
    fn pure_translation_transform_layout() {
        let x = SpatialTransform::new(DMat3::IDENTITY, DVec3::new(1.0, 2.0, 3.0)).to_matrix();
        // Upper-right block is always zero for a motion transform.
        for i in 0..3 {
            for j in 3..6 {
                assert_eq!(x[(i, j)], 0.0);
            }
            assert_eq!(x[(i, i)], 1.0);
            assert_eq!(x[(i + 3, i + 3)], 1.0);
        }
        // Lower-left block is -skew(r).
        assert_eq!(x[(3, 1)], 3.0);
        assert_eq!(x[(4, 0)], -3.0);
        assert_eq!(x[(3, 2)], -2.0);
        assert_eq!(x[(5, 1)], -1.0);
    }

    #[test]
    fn flip_along_y_negates_com_y_and_y_products() {
        let original = sample_inertia();
        let flipped = original.flip_along_axis(CoordinateAxis::Y);

        assert_eq!(flipped.mass(), original.mass());
        assert_eq!(flipped.com(), DVec3::new(0.01, -0.02, -0.03));

        let i = flipped.rotational_inertia();
        assert_relative_eq!(i.col(0)[0], 0.02);
        assert_relative_eq!(i.col(1)[1], 0.03);
        assert_relative_eq!(i.col(2)[2], 0.04);
        assert_relative_eq!(i.col(0)[1], -0.001);
        assert_relative_eq!(i.col(1)[2], -0.003);
        assert_relative_eq!(i.col(0)[2], 0.002);
    }

    #[test]
    fn flipping_twice_restores_inertia() {
        let original = sample_inertia();
        let back = original
            .flip_along_axis(CoordinateAxis::Y)
            .flip_along_axis(CoordinateAxis::Y);
        assert_eq!(back, original);
    }

    #[test]
    fn spatial_inertia_matrix_is_symmetric() {
        let m = sample_inertia().to_matrix();
        assert_relative_eq!(m, m.transpose(), epsilon = 1e-12);
        assert_relative_eq!(m[(3, 3)], 1.5);
        assert_relative_eq!(m[(5, 5)], 1.5);
    }

    #[test]
    fn box_inertia_matches_closed_form() {
        let (l, w, h) = (0.5, 0.4, 0.2);
        let inertia = SpatialInertia::from_box(12.0, DVec3::new(l, w, h));
        let i = inertia.rotational_inertia();
        assert_relative_eq!(i.col(0)[0], 12.0 * (w * w + h * h) / 12.0, max_relative = 1e-5);
        assert_relative_eq!(i.col(1)[1], 12.0 * (l * l + h * h) / 12.0, max_relative = 1e-5);
        assert_relative_eq!(i.col(2)[2], 12.0 * (l * l + w * w) / 12.0, max_relative = 1e-5);
        assert_eq!(inertia.com(), DVec3::ZERO);
    }
}
