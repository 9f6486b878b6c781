//! Actuator descriptors handed to the torque-limiting layer.

use crate::params::ChassisParameters;
use serde::{Deserialize, Serialize};

/// Electrical and frictional model of a geared joint motor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActuatorModel {
    pub gear_ratio: f64,
    /// Torque constant (N·m/A).
    pub motor_kt: f64,
    /// Winding resistance (Ω).
    pub motor_r: f64,
    /// Supply voltage (V).
    pub battery_v: f64,
    pub damping: f64,
    pub dry_friction: f64,
    /// Max motor-side torque (N·m).
    pub tau_max: f64,
}

impl ActuatorModel {
    pub fn wheel(params: &ChassisParameters) -> Self {
        Self {
            gear_ratio: params.wheel_gear_ratio,
            motor_kt: params.motor_kt,
            motor_r: params.motor_r,
            battery_v: params.battery_v,
            damping: params.joint_damping,
            dry_friction: params.joint_dry_friction,
            tau_max: params.motor_tau_max,
        }
    }
}

/// One descriptor per distinct actuator type.
///
/// All four wheels share the same motor, so the list holds a single wheel
/// descriptor that applies to every wheel joint.
pub fn build_actuator_models(params: &ChassisParameters) -> Vec<ActuatorModel> {
    vec![ActuatorModel::wheel(params)]
}
