use crate::article::Article;
use crate::colour::colours;
use crate::config::LayoutSettings;
use crate::document::Document;
use crate::error::ContentError;
use crate::font::BuiltinFont;
use crate::image::Image;
use crate::info::Info;
use crate::layout::{wrap, PageCursor};
use crate::page::{ImageLayout, LineLayout, PageBuilder, SpanFont, SpanLayout};
use crate::pagesize::LETTER;
use crate::rect::Rect;
use crate::units::Pt;
use log::{debug, info};

/// Lays an article out onto pages: title, description, separator, then every
/// section with its heading, optional image and wrapped text. Produces an
/// undecorated [Document].
#[derive(Debug, Clone)]
pub struct ContentRenderer {
    settings: LayoutSettings,
}

/// The page being written plus everything already finished. A page break
/// finishes the current builder, appends it to the document and starts a new one.
struct Flow<'s> {
    settings: &'s LayoutSettings,
    document: Document,
    builder: PageBuilder,
    cursor: PageCursor,
}

impl<'s> Flow<'s> {
    fn new(settings: &'s LayoutSettings) -> Flow<'s> {
        let builder = PageBuilder::new(LETTER, &settings.margins);
        let cursor = PageCursor::within(&builder.content_box(), settings.leading);
        Flow {
            settings,
            document: Document::default(),
            builder,
            cursor,
        }
    }

    /// 0-based index of the page currently being written
    fn page_index(&self) -> usize {
        self.document.page_count()
    }

    fn break_page(&mut self) {
        let next = PageBuilder::new(LETTER, &self.settings.margins);
        let page = std::mem::replace(&mut self.builder, next).finish();
        self.document.add_page(page);
        self.cursor.reset();
        debug!("page break, now on page {}", self.page_index() + 1);
    }

    /// Break unless at least `space` is left. A page that is still empty is
    /// never abandoned, so this can't produce blank pages.
    fn ensure_space(&mut self, space: Pt) {
        if self.cursor.needs_break(space) && !self.builder.is_empty() {
            self.break_page();
        }
    }

    fn text(&mut self, text: String, font: BuiltinFont, size: Pt, x: Pt) {
        self.builder.add_span(SpanLayout {
            text,
            font: SpanFont { font, size },
            colour: colours::BLACK,
            coords: (x, self.cursor.y()),
        });
    }

    /// Write wrapped text one line at a time, breaking whenever the cursor has
    /// passed the bottom margin
    fn paragraph(&mut self, text: &str, size: Pt) {
        for line in wrap(text, self.settings.max_line_chars) {
            self.ensure_space(Pt(0.0));
            let x = self.cursor.left();
            self.text(line, BuiltinFont::Helvetica, size, x);
            self.cursor.advance();
        }
    }

    fn finish(mut self) -> Document {
        let page = self.builder.finish();
        self.document.add_page(page);
        self.document
    }
}

impl ContentRenderer {
    pub fn new(settings: LayoutSettings) -> ContentRenderer {
        ContentRenderer { settings }
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Lay the article out. Any image that can't be loaded, or content that can't
    /// fit on a page even after a break, fails the whole render.
    pub fn render(&self, article: &Article) -> Result<Document, ContentError> {
        let title = article.title.split_whitespace().collect::<Vec<_>>().join(" ");
        if title.is_empty() {
            return Err(ContentError::EmptyTitle);
        }

        let s = &self.settings;
        let mut flow = Flow::new(s);

        let mut info = Info::new();
        info.title(&title).created(article.created_at);
        if let Some(author_id) = article.author_id {
            info.author(format!("author #{author_id}"));
        }
        flow.document.set_info(info);

        // title, centered on the page
        let page_width = flow.builder.media_box().width();
        let title_width = BuiltinFont::HelveticaBold.width_of_text(&title, s.title_size);
        let title_x = ((page_width - title_width) / 2.0).max(flow.cursor.left());
        flow.text(title, BuiltinFont::HelveticaBold, s.title_size, title_x);
        flow.cursor.advance_by(s.title_block);

        flow.paragraph(&article.description, s.description_size);
        flow.cursor.advance_by(s.description_gap);

        // separator across the content width
        flow.ensure_space(Pt(0.0));
        let y = flow.cursor.y();
        flow.builder.add_line(LineLayout {
            from: (flow.cursor.left(), y),
            to: (page_width - s.margins.right, y),
            width: s.separator_width,
            colour: colours::BLACK,
        });
        flow.cursor.advance_by(s.separator_gap);

        let sections = article.ordered_sections();
        for (i, section) in sections.iter().enumerate() {
            let heading = section.heading(i + 1);

            // keep the heading together with at least its first line
            flow.ensure_space(s.heading_block + s.leading);
            let x = flow.cursor.left();
            flow.text(heading.clone(), BuiltinFont::HelveticaBold, s.heading_size, x);
            let page_index = flow.page_index();
            flow.document.add_bookmark(&heading, page_index);
            flow.cursor.advance_by(s.heading_block);

            if let Some(path) = section.image_path() {
                let image = Image::load(path)?;
                let height = image.scaled_height(s.image_width);
                if !flow.cursor.fits_on_fresh_page(height) {
                    return Err(ContentError::DoesNotFit {
                        what: format!("image {} of section \"{}\"", path.display(), heading),
                        height,
                        available: flow.cursor.usable_height(),
                    });
                }
                flow.ensure_space(height);
                debug!(
                    "placing {}x{} image at {}x{} on page {}",
                    image.width,
                    image.height,
                    s.image_width,
                    height,
                    flow.page_index() + 1
                );

                let top = flow.cursor.y();
                let position =
                    Rect::from_origin(flow.cursor.left(), top - height, s.image_width, height);
                let image = flow.document.add_image(image);
                flow.builder.add_image(ImageLayout {
                    image,
                    position,
                    state: None,
                });
                flow.cursor.advance_by(height + s.image_gap);
            }

            flow.paragraph(&section.explanation, s.body_size);
            flow.cursor.advance_by(s.section_gap);
        }

        let document = flow.finish();
        info!(
            "laid out article {} with {} sections over {} pages",
            article.id,
            sections.len(),
            document.page_count()
        );
        Ok(document)
    }
}

impl Default for ContentRenderer {
    fn default() -> Self {
        ContentRenderer::new(LayoutSettings::default())
    }
}
