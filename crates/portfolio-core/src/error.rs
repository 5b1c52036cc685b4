use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("color cycle palette is empty")]
    EmptyPalette,
    #[error("color cycle segment duration must be positive and finite, got {0}")]
    InvalidSegmentDuration(f32),
    #[error("particle spread must be positive and finite, got {0}")]
    InvalidParticleSpread(f32),
}
