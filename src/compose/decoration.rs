use crate::colour::colours;
use crate::config::DecorationSettings;
use crate::document::{Document, GraphicsState};
use crate::error::ContentError;
use crate::font::BuiltinFont;
use crate::image::Image;
use crate::page::{ImageLayout, LineLayout, PageContents, RectLayout, SpanFont, SpanLayout};
use crate::rect::Rect;
use crate::units::Pt;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Adds the running elements to every page of a laid-out document: a translucent
/// watermark, the title as a header, a footer with the page number, and a border.
///
/// Decoration happens once all content is placed, so nothing drawn afterwards can
/// cover the footer. Pages only ever gain draw operations here.
#[derive(Debug, Clone)]
pub struct DecorationPass {
    settings: DecorationSettings,
    watermark: PathBuf,
}

impl DecorationPass {
    pub fn new<P: Into<PathBuf>>(settings: DecorationSettings, watermark: P) -> DecorationPass {
        DecorationPass {
            settings,
            watermark: watermark.into(),
        }
    }

    pub fn watermark_path(&self) -> &Path {
        &self.watermark
    }

    /// Decorate every page of `document`, numbering them from 1 in document order.
    /// Pages that already carry a number are left untouched.
    pub fn decorate(&self, document: &mut Document, title: &str) -> Result<(), ContentError> {
        let s = &self.settings;

        let pending = document
            .pages()
            .filter(|page| page.number().is_none())
            .count();
        if pending == 0 {
            warn!("all {} pages are already decorated", document.page_count());
            return Ok(());
        }

        let watermark = Image::load(&self.watermark)?;
        let watermark_height = watermark.scaled_height(s.watermark_width);
        let watermark = document.add_image(watermark);
        let translucent = document.add_graphics_state(GraphicsState {
            alpha: s.watermark_alpha,
        });

        let title = title.split_whitespace().collect::<Vec<_>>().join(" ");

        for (index, id) in document.page_order.iter().enumerate() {
            let number = index + 1;
            let page = &mut document.pages[*id];
            if let Some(existing) = page.number() {
                warn!("page {existing} is already decorated, skipping it");
                continue;
            }

            let (width, height) = (page.width(), page.height());
            let decorations = vec![
                PageContents::Image(ImageLayout {
                    image: watermark,
                    position: Rect::from_origin(
                        (width - s.watermark_width) / 2.0,
                        (height - watermark_height) / 2.0,
                        s.watermark_width,
                        watermark_height,
                    ),
                    state: Some(translucent),
                }),
                self.span(
                    title.clone(),
                    BuiltinFont::HelveticaBold,
                    s.header_size,
                    (s.left, s.header_y),
                ),
                self.span(
                    format!("Page {number}"),
                    BuiltinFont::Helvetica,
                    s.footer_size,
                    (width - s.page_number_inset, s.footer_y),
                ),
                self.span(
                    s.footer_label.clone(),
                    BuiltinFont::Helvetica,
                    s.footer_size,
                    (s.left, s.footer_y),
                ),
                PageContents::Line(LineLayout {
                    from: (s.left, s.footer_rule_y),
                    to: (width - s.right, s.footer_rule_y),
                    width: Pt(1.0),
                    colour: colours::BLACK,
                }),
                PageContents::Rectangle(RectLayout {
                    rect: page.media_box.inset(s.border_inset),
                    width: s.border_width,
                    colour: colours::BLACK,
                }),
            ];
            page.decorate(number, decorations);
        }

        debug!("decorated {} pages", document.page_count());
        Ok(())
    }

    fn span(&self, text: String, font: BuiltinFont, size: Pt, coords: (Pt, Pt)) -> PageContents {
        PageContents::Text(SpanLayout {
            text,
            font: SpanFont { font, size },
            colour: colours::BLACK,
            coords,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Margins;
    use crate::page::PageBuilder;
    use crate::pagesize::LETTER;
    use image::{DynamicImage, ImageFormat};

    fn document_with_pages(count: usize) -> Document {
        let mut document = Document::default();
        for _ in 0..count {
            document.add_page(PageBuilder::new(LETTER, &Margins::all(Pt(50.0))).finish());
        }
        document
    }

    fn watermark(dir: &Path) -> PathBuf {
        let path = dir.join("logo.png");
        DynamicImage::new_rgba8(600, 200)
            .save_with_format(&path, ImageFormat::Png)
            .expect("can write png");
        path
    }

    #[test]
    fn every_page_is_numbered_and_decorated_once() {
        let dir = tempfile::tempdir().expect("temp dir");
        let pass = DecorationPass::new(DecorationSettings::default(), watermark(dir.path()));

        let mut document = document_with_pages(3);
        pass.decorate(&mut document, "Intro").expect("decorates");
        // a second pass must not stack another set of decorations
        pass.decorate(&mut document, "Intro").expect("decorates");

        assert_eq!(document.images.len(), 1);
        assert_eq!(document.graphics_states.len(), 1);

        for (i, page) in document.pages().enumerate() {
            assert_eq!(page.number(), Some(i + 1));
            assert_eq!(page.contents().len(), 6);

            let page_label = format!("Page {}", i + 1);
            assert_eq!(page.spans().filter(|s| s.text == page_label).count(), 1);
            assert_eq!(page.spans().filter(|s| s.text == "Intro").count(), 1);
            assert_eq!(page.images().filter(|i| i.state.is_some()).count(), 1);
        }
    }

    #[test]
    fn watermark_is_centered_and_keeps_its_aspect() {
        let dir = tempfile::tempdir().expect("temp dir");
        let pass = DecorationPass::new(DecorationSettings::default(), watermark(dir.path()));

        let mut document = document_with_pages(1);
        pass.decorate(&mut document, "Intro").expect("decorates");

        let page = document.page(0).expect("page");
        let PageContents::Image(mark) = &page.contents()[0] else {
            panic!("watermark is drawn first");
        };
        assert_eq!(mark.position.width(), Pt(300.0));
        assert_eq!(mark.position.height(), Pt(100.0));
        assert_eq!(mark.position.x1, Pt(156.0));
        assert_eq!(mark.position.y1, Pt(346.0));

        let PageContents::Rectangle(border) = &page.contents()[5] else {
            panic!("border is drawn last");
        };
        assert_eq!(border.rect, Rect::from_origin(Pt(20.0), Pt(20.0), Pt(572.0), Pt(752.0)));
    }

    #[test]
    fn header_sits_between_the_content_and_the_border() {
        let dir = tempfile::tempdir().expect("temp dir");
        let pass = DecorationPass::new(DecorationSettings::default(), watermark(dir.path()));

        let mut document = Document::default();
        let margins = crate::config::LayoutSettings::default().margins;
        document.add_page(PageBuilder::new(LETTER, &margins).finish());
        pass.decorate(&mut document, "Intro").expect("decorates");

        let page = document.page(0).expect("page");
        let PageContents::Text(header) = &page.contents()[1] else {
            panic!("header follows the watermark");
        };
        let PageContents::Rectangle(border) = &page.contents()[5] else {
            panic!("border is drawn last");
        };
        let y = header.coords.1;
        assert!(y > page.content_box.y2, "header at {y} overlaps content");
        assert!(y + Pt(10.0) < border.rect.y2, "header at {y} crosses the border");
        assert!(y < page.height());
    }

    #[test]
    fn unreadable_watermark_is_a_content_error() {
        let pass = DecorationPass::new(DecorationSettings::default(), "/definitely/not/logo.png");
        let mut document = document_with_pages(1);
        let err = pass.decorate(&mut document, "Intro").err();
        assert!(matches!(err, Some(ContentError::ImageRead { .. })));
        assert_eq!(document.page(0).and_then(|p| p.number()), None);
    }
}
