use thiserror::Error;

/// Errors raised while building a chassis model.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChassisError {
    /// A leg index outside `0..4` was used to mirror an offset.
    #[error("Invalid leg index: {0} (expected 0..=3)")]
    InvalidLegIndex(usize),
}
