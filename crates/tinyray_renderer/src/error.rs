use thiserror::Error;
use tinyray_core::SceneError;

/// Errors from loading scenes and writing images.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

pub type RenderResult<T> = Result<T, RenderError>;
