use thiserror::Error;

use crate::animation::KeyframeError;

#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("invalid animation curve: {0}")]
    Keyframes(#[from] KeyframeError),
}
