#[derive(thiserror::Error, Debug, PartialEq)]
pub enum IdenticonError {
    #[error("image size must be greater than or equal to {0}")]
    ImageSizeTooSmall(u32),

    #[error("image size must be less than or equal to {0}")]
    ImageSizeTooLarge(u32),

    #[error("{0}")]
    InvalidGridSize(&'static str),
}
