//! Builds the floating-base dynamics tree of the chassis.
//!
//! The entry point is [`Chassis`]. Construct it from [`ChassisParameters`] and
//! call [`Chassis::build_model`] for a [`FloatingBaseModel`], or
//! [`Chassis::build_model_into`] to populate any other [`DynamicsTree`].

use crate::actuator::{ActuatorModel, build_actuator_models};
use crate::error::ChassisError;
use crate::legs::{Leg, with_leg_signs};
use crate::params::ChassisParameters;
use crate::spatial::{CoordinateAxis, SpatialInertia, SpatialTransform, coordinate_rotation};
use crate::tree::{BodyId, DynamicsTree, FloatingBaseModel, JointType};
use glam::{DMat3, DVec3};
use std::f64::consts::PI;
use tracing::debug;

/// Reduction between the suspension rotor and the suspension joint.
/// Fixed by the chassis design, independent of the wheel gearing.
pub const SUSPENSION_GEAR_RATIO: f64 = 6.0;

/// Number of nominal contact angles around each wheel.
pub const WHEEL_CONTACT_SEGMENTS: usize = 16;

/// Contact points generated per nominal angle (nominal, +offset, -offset).
pub const CONTACTS_PER_SEGMENT: usize = 3;

/// Angular offset of the two extra points around each nominal angle (rad).
pub const WHEEL_CONTACT_OFFSET: f64 = PI / 0.0111;

/// Gravity applied to every built model (m/s²), along -Z.
pub const GRAVITY: DVec3 = DVec3::new(0.0, 0.0, -9.81);

/// Contact points sampling the rolling surface of a wheel, in the wheel frame.
///
/// The wheel spins about its Y axis, so every point lies in the XZ plane at
/// distance `radius` from the origin: `(r·sin θ, 0, r·cos θ)`.
pub fn wheel_contact_ring(radius: f64) -> Vec<DVec3> {
    let step = 2.0 * PI / WHEEL_CONTACT_SEGMENTS as f64;
    let on_rim = |angle: f64| DVec3::new(radius * angle.sin(), 0.0, radius * angle.cos());

    (0..WHEEL_CONTACT_SEGMENTS)
        .flat_map(|i| {
            let angle = step * i as f64;
            [
                on_rim(angle),
                on_rim(angle + WHEEL_CONTACT_OFFSET),
                on_rim(angle - WHEEL_CONTACT_OFFSET),
            ]
        })
        .collect()
}

/// Identifiers of the two bodies created for one leg.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegBodies {
    pub leg: Leg,
    pub suspension: BodyId,
    pub wheel: BodyId,
}

/// A four-wheeled chassis: floating body, four suspension arms, four wheels.
#[derive(Clone, Debug)]
pub struct Chassis {
    params: ChassisParameters,
}

impl Chassis {
    pub fn new(params: ChassisParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ChassisParameters {
        &self.params
    }

    /// Builds a fresh [`FloatingBaseModel`] of the chassis.
    pub fn build_model(&self) -> Result<FloatingBaseModel, ChassisError> {
        let mut model = FloatingBaseModel::new();
        self.build_model_into(&mut model)?;
        debug!(
            bodies = model.bodies().len(),
            contacts = model.contact_points().len(),
            "built chassis model"
        );
        Ok(model)
    }

    /// Populates an empty `tree` with the chassis and returns the per-leg body ids.
    ///
    /// On error the tree is left partially built and should be discarded.
    ///
    /// # Tree layout
    ///
    /// 1. The base, with the eight corners of the body box as reference points.
    /// 2. For each leg in [`Leg::ALL`] order, a suspension body on the base,
    ///    then a wheel body on that suspension, both revolute about Y.
    /// 3. A ring of contact points on every wheel (see [`wheel_contact_ring`]).
    pub fn build_model_into<T: DynamicsTree>(
        &self,
        tree: &mut T,
    ) -> Result<Vec<LegBodies>, ChassisError> {
        let p = &self.params;

        let base = tree.add_base(p.resolved_body_inertia());
        tree.add_ground_contact_box_points(base, p.body_dims());

        let contact_ring = wheel_contact_ring(p.wheel_radius);
        let half_turn = coordinate_rotation(CoordinateAxis::Z, PI);

        let mut legs = Vec::with_capacity(Leg::ALL.len());
        for leg in Leg::ALL {
            let i = leg.index();
            let mirror = |inertia: SpatialInertia| {
                if leg.is_mirrored() {
                    inertia.flip_along_axis(CoordinateAxis::Y)
                } else {
                    inertia
                }
            };

            // Suspension
            let x_suspension =
                SpatialTransform::new(half_turn, with_leg_signs(p.suspension_location, i)?);
            let x_suspension_rotor =
                SpatialTransform::new(half_turn, with_leg_signs(p.suspension_rotor_location, i)?);
            let suspension = tree.add_body(
                mirror(p.suspension_inertia),
                mirror(p.suspension_rotor_inertia),
                SUSPENSION_GEAR_RATIO,
                base,
                JointType::Revolute,
                CoordinateAxis::Y,
                x_suspension,
                x_suspension_rotor,
            );

            // Wheel
            let x_wheel =
                SpatialTransform::new(DMat3::IDENTITY, with_leg_signs(p.wheel_location, i)?);
            let x_wheel_rotor =
                SpatialTransform::new(DMat3::IDENTITY, with_leg_signs(p.wheel_rotor_location, i)?);
            let wheel = tree.add_body(
                mirror(p.wheel_inertia),
                mirror(p.wheel_rotor_inertia),
                p.wheel_gear_ratio,
                suspension,
                JointType::Revolute,
                CoordinateAxis::Y,
                x_wheel,
                x_wheel_rotor,
            );

            for &point in &contact_ring {
                tree.add_ground_contact_point(wheel, point, true);
            }

            debug!(
                leg = ?leg,
                suspension,
                wheel,
                mirrored = leg.is_mirrored(),
                "added leg"
            );
            legs.push(LegBodies {
                leg,
                suspension,
                wheel,
            });
        }

        tree.set_gravity(GRAVITY);

        Ok(legs)
    }

    /// Actuator descriptors for the chassis joints. See [`build_actuator_models`].
    pub fn build_actuator_models(&self) -> Vec<ActuatorModel> {
        build_actuator_models(&self.params)
    }
}
