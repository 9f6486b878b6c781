//! Chassis parameters: geometry, inertias, joint placements and actuation.

use crate::spatial::SpatialInertia;
use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

/// Complete physical description of the chassis.
///
/// Inertias and offsets describe a single canonical leg (leg 1, front-left).
/// The remaining legs are derived from it by sign mirroring, so there is
/// exactly one source of truth per quantity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChassisParameters {
    // --- Body geometry ---
    /// Length of the body box along x (m).
    pub body_length: f64,
    /// Width of the body box along y (m).
    pub body_width: f64,
    /// Height of the body box along z (m).
    pub body_height: f64,
    /// Body mass (kg), used only when `body_inertia` is not given.
    pub body_mass: f64,

    // --- Inertias ---
    /// Body inertia. When `None` a uniform box of `body_mass` is assumed.
    pub body_inertia: Option<SpatialInertia>,
    pub suspension_inertia: SpatialInertia,
    pub suspension_rotor_inertia: SpatialInertia,
    pub wheel_inertia: SpatialInertia,
    pub wheel_rotor_inertia: SpatialInertia,

    // --- Joint placements (canonical leg frame) ---
    /// Suspension joint location in the body frame.
    pub suspension_location: DVec3,
    pub suspension_rotor_location: DVec3,
    /// Wheel joint location in the suspension frame.
    pub wheel_location: DVec3,
    pub wheel_rotor_location: DVec3,

    // --- Wheel ---
    pub wheel_radius: f64,

    // --- Actuation ---
    pub wheel_gear_ratio: f64,
    /// Motor torque constant (N·m/A).
    pub motor_kt: f64,
    /// Motor winding resistance (Ω).
    pub motor_r: f64,
    /// Supply voltage (V).
    pub battery_v: f64,
    /// Viscous joint damping (N·m·s/rad).
    pub joint_damping: f64,
    /// Dry joint friction (N·m).
    pub joint_dry_friction: f64,
    /// Max motor torque (N·m), motor side.
    pub motor_tau_max: f64,
}

impl ChassisParameters {
    pub fn body_dims(&self) -> DVec3 {
        DVec3::new(self.body_length, self.body_width, self.body_height)
    }

    /// The configured body inertia, or a uniform box inertia if none was given.
    pub fn resolved_body_inertia(&self) -> SpatialInertia {
        self.body_inertia
            .unwrap_or_else(|| SpatialInertia::from_box(self.body_mass, self.body_dims()))
    }
}

impl Default for ChassisParameters {
    /// A 4-wheel mecanum chassis with 19:1 geared hub motors on a 24 V pack.
    fn default() -> Self {
        let diag = |x: f64, y: f64, z: f64| DMat3::from_diagonal(DVec3::new(x, y, z));

        Self {
            body_length: 0.50,
            body_width: 0.40,
            body_height: 0.15,
            body_mass: 12.0,
            body_inertia: None,

            suspension_inertia: SpatialInertia::new(
                0.35,
                DVec3::new(-0.06, 0.02, -0.01),
                diag(2.1e-4, 6.4e-4, 5.8e-4),
            ),
            suspension_rotor_inertia: SpatialInertia::new(
                0.055,
                DVec3::ZERO,
                diag(3.3e-5, 6.0e-5, 3.3e-5),
            ),
            wheel_inertia: SpatialInertia::new(
                0.65,
                DVec3::new(0.0, 0.02, 0.0),
                diag(1.0e-3, 1.9e-3, 1.0e-3),
            ),
            wheel_rotor_inertia: SpatialInertia::new(
                0.06,
                DVec3::ZERO,
                diag(3.3e-5, 6.0e-5, 3.3e-5),
            ),

            suspension_location: DVec3::new(0.17, 0.16, -0.03),
            suspension_rotor_location: DVec3::new(0.17, 0.12, -0.03),
            wheel_location: DVec3::new(-0.12, 0.05, -0.04),
            wheel_rotor_location: DVec3::new(-0.12, 0.02, -0.04),

            wheel_radius: 0.076,

            wheel_gear_ratio: 19.0,
            motor_kt: 0.0157,
            motor_r: 0.194,
            battery_v: 24.0,
            joint_damping: 0.01,
            joint_dry_friction: 0.2,
            motor_tau_max: 0.16,
        }
    }
}
