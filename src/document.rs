use crate::{
    font::BuiltinFont,
    image::Image,
    info::Info,
    outline::Outline,
    page::Page,
    refs::{ObjectReferences, RefType},
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

/// An extended graphics state. Only constant opacity is needed to paint
/// translucent watermarks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GraphicsState {
    /// Constant alpha applied to strokes and fills, from 0.0 to 1.0
    pub alpha: f32,
}

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
///
/// Pages live in an append-only arena; `page_order` records the order in which
/// they were laid out, which is also the order they are numbered and written in.
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub images: Arena<Image>,
    pub graphics_states: Arena<GraphicsState>,
    pub outline: Outline,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Iterate over the pages in document order
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.page_order.iter().map(|id| &self.pages[*id])
    }

    /// Get the page at a 0-based position in the document
    pub fn page(&self, page_index: usize) -> Option<&Page> {
        self.page_order.get(page_index).map(|id| &self.pages[*id])
    }

    /// Add an image to the document structure. Images are stored "globally"
    /// within the document, such that any page can re-use them by referring
    /// to their id.
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    pub fn add_graphics_state(&mut self, state: GraphicsState) -> Id<GraphicsState> {
        self.graphics_states.alloc(state)
    }

    /// Add a bookmark in the document outline pointing to the page with the given 0-based index
    pub fn add_bookmark<S: ToString>(&mut self, title: S, page_index: usize) {
        self.outline.add_bookmark(page_index, title.to_string());
    }

    /// Write the entire document to the writer. The document is rendered in memory
    /// first and then written in a single call.
    ///
    /// Writing does not consume the document, so a failed write can be retried without
    /// laying the article out again.
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), std::io::Error> {
        let bytes = self.to_bytes()?;
        w.write_all(bytes.as_slice())
    }

    /// Render the document to PDF bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, std::io::Error> {
        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..self.page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for font in BuiltinFont::ALL {
            font.write(&mut refs, &mut writer);
        }

        for (i, image) in self.images.iter() {
            image.write(&mut refs, i.index(), &mut writer);
        }

        for (i, state) in self.graphics_states.iter() {
            let id = refs.gen(RefType::GraphicsState(i.index()));
            writer
                .ext_graphics(id)
                .non_stroking_alpha(state.alpha)
                .stroking_alpha(state.alpha);
        }

        for (page_index, page) in self.pages().enumerate() {
            page.write(
                &mut refs,
                page_index,
                &self.images,
                &self.graphics_states,
                &mut writer,
            )?;
        }

        let outlines_id = self.outline.write(&mut refs, &mut writer);

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if let Some(outlines_id) = outlines_id {
            catalog.outlines(outlines_id);
        }
        catalog.finish();

        Ok(writer.finish())
    }
}
