//! Composes structured articles into paginated PDF documents.
//!
//! An [Article] is laid out onto US Letter pages by a [ContentRenderer], decorated
//! with a watermark, running header, page-numbered footer and border by a
//! [DecorationPass], and stored by a [DocumentWriter]. [ArticleComposer] runs all
//! three from a single [ComposerConfig].

mod article;
pub use article::*;

mod colour;
pub use colour::*;

mod compose;
pub use compose::*;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Utility functions and structures to lay objects (mostly text) out on pages
pub mod layout;

mod outline;
pub use outline::*;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

mod writer;
pub use writer::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
