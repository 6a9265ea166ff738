use crate::core::data::bounds_policy::OutOfBounds;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarkerError {
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),
}
