//! # wheel-chassis
//!
//! Parametric description of a four-wheeled chassis for rigid-body dynamics
//! engines: one floating base plus four identical suspension/wheel chains.
//!
//! A single set of [`ChassisParameters`] describes one canonical leg. The
//! [`Chassis`] builder mirrors it into all four quadrants, places every joint,
//! samples each wheel rim with ground-contact points, and writes the result into
//! any [`DynamicsTree`]. The matching actuator descriptors come from
//! [`Chassis::build_actuator_models`].

pub mod actuator;
pub mod chassis;
pub mod error;
pub mod legs;
pub mod params;
pub mod spatial;
pub mod tree;

pub use actuator::*;
pub use chassis::*;
pub use error::*;
pub use legs::*;
pub use params::*;
pub use spatial::*;
pub use tree::*;
