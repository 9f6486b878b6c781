//! Leg enumeration and left/right sign mirroring.
//!
//! Offsets and inertias are defined once for a canonical leg. The other legs
//! are derived by flipping signs according to the quadrant each leg occupies.

use crate::error::ChassisError;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Number of wheel assemblies on the chassis.
pub const NUM_LEGS: usize = 4;

/// Side sign of each leg, indexed by leg index. Legs with a negative sign
/// receive Y-mirrored inertias.
///
/// Must stay in step with the match in [`with_leg_signs`].
pub const SIDE_SIGN: [f64; NUM_LEGS] = [-1.0, 1.0, 1.0, -1.0];

/// The four wheel assemblies in construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Leg {
    FrontRight,
    FrontLeft,
    RearLeft,
    RearRight,
}

impl Leg {
    pub const ALL: [Leg; NUM_LEGS] = [
        Leg::FrontRight,
        Leg::FrontLeft,
        Leg::RearLeft,
        Leg::RearRight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn side_sign(self) -> f64 {
        SIDE_SIGN[self.index()]
    }

    /// Whether this leg's inertias are mirrored from the canonical ones.
    pub fn is_mirrored(self) -> bool {
        self.side_sign() < 0.0
    }
}

impl TryFrom<usize> for Leg {
    type Error = ChassisError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Leg::ALL
            .get(index)
            .copied()
            .ok_or(ChassisError::InvalidLegIndex(index))
    }
}

/// Applies the quadrant signs of leg `leg_index` to the canonical offset `v`.
///
/// | leg | x | y | z |
/// |-----|---|---|---|
/// | 0   | + | − | + |
/// | 1   | + | + | + |
/// | 2   | − | + | + |
/// | 3   | − | − | + |
pub fn with_leg_signs(v: DVec3, leg_index: usize) -> Result<DVec3, ChassisError> {
    match leg_index {
        0 => Ok(DVec3::new(v.x, -v.y, v.z)),
        1 => Ok(DVec3::new(v.x, v.y, v.z)),
        2 => Ok(DVec3::new(-v.x, v.y, v.z)),
        3 => Ok(DVec3::new(-v.x, -v.y, v.z)),
        _ => Err(ChassisError::InvalidLegIndex(leg_index)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const V: DVec3 = DVec3::new(0.2, 0.15, -0.05);

    #[test]
    fn sign_table() {
        assert_eq!(with_leg_signs(V, 0), Ok(DVec3::new(0.2, -0.15, -0.05)));
        assert_eq!(with_leg_signs(V, 1), Ok(DVec3::new(0.2, 0.15, -0.05)));
        assert_eq!(with_leg_signs(V, 2), Ok(DVec3::new(-0.2, 0.15, -0.05)));
        assert_eq!(with_leg_signs(V, 3), Ok(DVec3::new(-0.2, -0.15, -0.05)));
    }

    #[test]
    fn pairs_share_x_and_oppose_y() {
        let m = |i| with_leg_signs(V, i).unwrap();
        assert_eq!(m(0).x, m(1).x);
        assert_eq!(m(0).y, -m(1).y);
        assert_eq!(m(2).x, m(3).x);
        assert_eq!(m(2).y, -m(3).y);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(with_leg_signs(V, 4), Err(ChassisError::InvalidLegIndex(4)));
        assert_eq!(
            with_leg_signs(V, usize::MAX),
            Err(ChassisError::InvalidLegIndex(usize::MAX))
        );
        assert_eq!(Leg::try_from(7), Err(ChassisError::InvalidLegIndex(7)));
    }

    #[test]
    fn mirrored_legs_are_the_negative_y_legs() {
        for leg in Leg::ALL {
            let y = with_leg_signs(DVec3::ONE, leg.index()).unwrap().y;
            assert_eq!(leg.is_mirrored(), y < 0.0, "{leg:?}");
        }
        assert_eq!(Leg::try_from(2), Ok(Leg::RearLeft));
    }
}
