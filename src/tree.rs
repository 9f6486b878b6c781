//! The dynamics-tree container interface and an in-memory implementation.
//!
//! Chassis construction talks to a [`DynamicsTree`], so any rigid-body engine
//! can be populated directly. [`FloatingBaseModel`] is the container used when
//! the caller just wants the resulting description.

use crate::spatial::{CoordinateAxis, SpatialInertia, SpatialTransform};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Identifier of a body in the tree. Assigned in construction order.
pub type BodyId = usize;

/// Number of coordinates of the floating base joint.
pub const FLOATING_BASE_DOF: usize = 6;

/// Identifier of the floating base body. The base claims the first
/// [`FLOATING_BASE_DOF`] identifiers, the last of which is the body itself.
pub const FLOATING_BASE_ID: BodyId = FLOATING_BASE_DOF - 1;

/// Types of joints connecting a body to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JointType {
    /// Unconstrained 6-DOF joint of the base.
    FloatingBase,
    /// Rotates around a single axis.
    Revolute,
}

/// Mutation interface of a rigid-body tree container.
pub trait DynamicsTree {
    /// Registers the floating base and returns its body identifier.
    fn add_base(&mut self, inertia: SpatialInertia) -> BodyId;

    /// Appends a body jointed to `parent` and returns its identifier.
    #[allow(clippy::too_many_arguments)]
    fn add_body(
        &mut self,
        inertia: SpatialInertia,
        rotor_inertia: SpatialInertia,
        gear_ratio: f64,
        parent: BodyId,
        joint_type: JointType,
        joint_axis: CoordinateAxis,
        x_tree: SpatialTransform,
        x_rotor: SpatialTransform,
    ) -> BodyId;

    /// Attaches a point fixed in the frame of `body`.
    fn add_ground_contact_point(&mut self, body: BodyId, local_position: DVec3, is_contact: bool);

    /// Attaches the eight corners of a `dims`-sized box centered on `body`.
    fn add_ground_contact_box_points(&mut self, body: BodyId, dims: DVec3) {
        let half = dims / 2.0;
        for z in [1.0, -1.0] {
            for (x, y) in [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)] {
                self.add_ground_contact_point(body, half * DVec3::new(x, y, z), false);
            }
        }
    }

    fn set_gravity(&mut self, gravity: DVec3);
}

/// A body and the joint attaching it to its parent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    /// `None` only for the floating base.
    pub parent: Option<BodyId>,
    pub joint_type: JointType,
    pub joint_axis: Option<CoordinateAxis>,
    pub inertia: SpatialInertia,
    pub rotor_inertia: SpatialInertia,
    pub gear_ratio: f64,
    /// Placement of the joint frame relative to the parent.
    pub x_tree: SpatialTransform,
    /// Placement of the rotor frame relative to the parent.
    pub x_rotor: SpatialTransform,
}

/// A point fixed in a body frame, used for ground contact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroundContactPoint {
    pub body: BodyId,
    pub local_position: DVec3,
    /// `false` for reference points that never generate contact forces.
    pub is_contact: bool,
}

/// In-memory floating-base tree.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FloatingBaseModel {
    bodies: Vec<Body>,
    contact_points: Vec<GroundContactPoint>,
    gravity: DVec3,
    next_id: BodyId,
}

impl FloatingBaseModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bodies in construction order, base first.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn contact_points(&self) -> &[GroundContactPoint] {
        &self.contact_points
    }

    pub fn contact_points_on(&self, body: BodyId) -> impl Iterator<Item = &GroundContactPoint> {
        self.contact_points.iter().filter(move |p| p.body == body)
    }

    pub fn gravity(&self) -> DVec3 {
        self.gravity
    }

    /// Degrees of freedom: six for the base plus one per jointed body.
    pub fn n_dof(&self) -> usize {
        self.next_id
    }
}

impl DynamicsTree for FloatingBaseModel {
    fn add_base(&mut self, inertia: SpatialInertia) -> BodyId {
        debug_assert!(self.bodies.is_empty(), "base must be the first body");
        self.next_id = FLOATING_BASE_DOF;
        self.bodies.push(Body {
            id: FLOATING_BASE_ID,
            parent: None,
            joint_type: JointType::FloatingBase,
            joint_axis: None,
            inertia,
            rotor_inertia: SpatialInertia::default(),
            gear_ratio: 1.0,
            x_tree: SpatialTransform::IDENTITY,
            x_rotor: SpatialTransform::IDENTITY,
        });
        FLOATING_BASE_ID
    }

    fn add_body(
        &mut self,
        inertia: SpatialInertia,
        rotor_inertia: SpatialInertia,
        gear_ratio: f64,
        parent: BodyId,
        joint_type: JointType,
        joint_axis: CoordinateAxis,
        x_tree: SpatialTransform,
        x_rotor: SpatialTransform,
    ) -> BodyId {
        debug_assert!(self.body(parent).is_some(), "unknown parent body {parent}");
        let id = self.next_id;
        self.next_id += 1;
        self.bodies.push(Body {
            id,
            parent: Some(parent),
            joint_type,
            joint_axis: Some(joint_axis),
            inertia,
            rotor_inertia,
            gear_ratio,
            x_tree,
            x_rotor,
        });
        id
    }

    fn add_ground_contact_point(&mut self, body: BodyId, local_position: DVec3, is_contact: bool) {
        self.contact_points.push(GroundContactPoint {
            body,
            local_position,
            is_contact,
        });
    }

    fn set_gravity(&mut self, gravity: DVec3) {
        self.gravity = gravity;
    }
}
