//! Turning an [Article] into a stored document.
//!
//! Composition runs in three steps: [ContentRenderer] lays the article out onto
//! pages, [DecorationPass] adds the running elements to each page, and
//! [DocumentWriter] stores the result. [ArticleComposer] wires the three together.

mod decoration;
mod renderer;

pub use decoration::*;
pub use renderer::*;

use crate::article::Article;
use crate::config::ComposerConfig;
use crate::document::Document;
use crate::error::{ComposeError, ContentError};
use crate::writer::DocumentWriter;
use log::info;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ArticleComposer {
    renderer: ContentRenderer,
    decoration: DecorationPass,
    writer: DocumentWriter,
}

impl ArticleComposer {
    pub fn new(config: ComposerConfig) -> ArticleComposer {
        ArticleComposer {
            renderer: ContentRenderer::new(config.layout),
            decoration: DecorationPass::new(config.decoration, config.watermark_path),
            writer: DocumentWriter::new(config.upload_dir),
        }
    }

    pub fn writer(&self) -> &DocumentWriter {
        &self.writer
    }

    /// Lay out and decorate the article without storing it
    pub fn layout(&self, article: &Article) -> Result<Document, ContentError> {
        let mut document = self.renderer.render(article)?;
        self.decoration.decorate(&mut document, &article.title)?;
        Ok(document)
    }

    /// Compose the article and store it, returning the artifact path. Nothing is
    /// written unless layout succeeds.
    pub fn compose(&self, article: &Article) -> Result<PathBuf, ComposeError> {
        let document = self.layout(article)?;
        let path = self.writer.write(&document, article)?;
        info!("composed article {} into {}", article.id, path.display());
        Ok(path)
    }
}
