use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClassifyError>;

/// Reasons an image cannot be classified.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// An in-memory buffer is not a decodable image.
    #[error("cannot decode image: {0}")]
    ImageDecode(#[from] image::ImageError),
    /// An image file is missing, unreadable or not a decodable image.
    #[error("cannot decode image {}: {source}", path.display())]
    ImageFile {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The decoded image has zero width or height.
    #[error("image has no pixels")]
    EmptyImage,
}
