use crate::Pt;
use std::path::PathBuf;
use thiserror::Error;

/// The article could not be laid out. Nothing is written when this happens.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("article title is empty")]
    /// The article has no title to put on the first page and in the running header
    EmptyTitle,

    #[error("failed to read image {}", path.display())]
    /// An image file could not be opened or read
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {}", path.display())]
    /// [image] could not recognise or decode the image
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image {} has no pixels", path.display())]
    /// The image decoded to zero width or height, so it can't be scaled
    EmptyImage { path: PathBuf },

    #[error("{what} is {height}pt tall but a page only has {available}pt of room")]
    /// A single unit of content is taller than the usable area of a fresh page
    DoesNotFit {
        what: String,
        height: Pt,
        available: Pt,
    },
}

/// The composed document could not be stored. Layout succeeded, so the same
/// [Document](crate::Document) can be handed to the writer again.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to create upload directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove previous artifact {}", path.display())]
    RemoveExisting {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration could not be loaded
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    #[error("`{field}` is {value} but {expected}")]
    /// A setting parsed but is outside the range layout can work with
    Invalid {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },
}

/// All errors that composing an article can produce
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ComposeError {
    /// Whether the failure happened while storing an already laid-out document
    pub fn is_storage(&self) -> bool {
        matches!(self, ComposeError::Storage(_))
    }
}
