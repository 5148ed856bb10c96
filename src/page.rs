use crate::colour::Colour;
use crate::content::render_contents;
use crate::document::GraphicsState;
use crate::font::BuiltinFont;
use crate::image::Image;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf};

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub font: BuiltinFont,
    pub size: Pt,
}

/// A single run of text, drawn with its baseline starting at `coords`
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// An image stretched over `position`, optionally painted through a graphics
/// state (used to make watermarks translucent)
#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image: Id<Image>,
    pub position: Rect,
    pub state: Option<Id<GraphicsState>>,
}

/// A straight stroked line
#[derive(Clone, PartialEq, Debug)]
pub struct LineLayout {
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
    pub width: Pt,
    pub colour: Colour,
}

/// The outline of a rectangle
#[derive(Clone, PartialEq, Debug)]
pub struct RectLayout {
    pub rect: Rect,
    pub width: Pt,
    pub colour: Colour,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(SpanLayout),
    Image(ImageLayout),
    Line(LineLayout),
    Rectangle(RectLayout),
}

/// A page whose content is complete. Pages are produced by finishing a
/// [PageBuilder]; afterwards the only thing that can happen to them is a single
/// decoration pass which numbers the page and appends its running elements.
#[derive(Debug)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    contents: Vec<PageContents>,
    number: Option<usize>,
}

impl Page {
    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    /// Everything drawn on the page, in painting order
    pub fn contents(&self) -> &[PageContents] {
        &self.contents
    }

    /// The 1-based page number, once the page has been decorated
    pub fn number(&self) -> Option<usize> {
        self.number
    }

    pub fn spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.contents.iter().filter_map(|c| match c {
            PageContents::Text(span) => Some(span),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageLayout> {
        self.contents.iter().filter_map(|c| match c {
            PageContents::Image(image) => Some(image),
            _ => None,
        })
    }

    pub(crate) fn decorate(&mut self, number: usize, decorations: Vec<PageContents>) {
        self.number = Some(number);
        self.contents.extend(decorations);
    }

    /// Render the page contents to a PDF content stream
    pub fn render(&self) -> Result<Vec<u8>, std::io::Error> {
        render_contents(&self.contents)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        images: &Arena<Image>,
        states: &Arena<GraphicsState>,
        writer: &mut Pdf,
    ) -> Result<(), std::io::Error> {
        let id = refs
            .get(RefType::Page(page_index))
            .expect("page refs are generated before pages are written");
        let page_tree = refs
            .get(RefType::PageTree)
            .expect("page tree ref is generated first");
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(page_tree);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for font in BuiltinFont::ALL {
            if let Some(font_ref) = refs.get(RefType::Font(font.index())) {
                resource_fonts.pair(Name(format!("F{}", font.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();

        let mut resource_xobjects = resources.x_objects();
        for (i, _) in images.iter() {
            if let Some(image_ref) = refs.get(RefType::Image(i.index())) {
                resource_xobjects.pair(Name(format!("I{}", i.index()).as_bytes()), image_ref);
            }
        }
        resource_xobjects.finish();

        let mut resource_states = resources.ext_g_states();
        for (i, _) in states.iter() {
            if let Some(state_ref) = refs.get(RefType::GraphicsState(i.index())) {
                resource_states.pair(Name(format!("GS{}", i.index()).as_bytes()), state_ref);
            }
        }
        resource_states.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = self.render()?;
        writer.stream(content_id, rendered.as_slice());
        Ok(())
    }
}

/// A page that is still receiving content. Finishing the builder yields an
/// immutable [Page]; this is done exactly at each page break.
#[derive(Debug)]
pub struct PageBuilder {
    page: Page,
}

impl PageBuilder {
    pub fn new(size: PageSize, margins: &Margins) -> PageBuilder {
        let (width, height) = size;
        PageBuilder {
            page: Page {
                media_box: Rect {
                    x1: Pt(0.0),
                    y1: Pt(0.0),
                    x2: width,
                    y2: height,
                },
                content_box: Rect {
                    x1: margins.left,
                    y1: margins.bottom,
                    x2: width - margins.right,
                    y2: height - margins.top,
                },
                contents: Vec::default(),
                number: None,
            },
        }
    }

    pub fn media_box(&self) -> Rect {
        self.page.media_box
    }

    pub fn content_box(&self) -> Rect {
        self.page.content_box
    }

    pub fn is_empty(&self) -> bool {
        self.page.contents.is_empty()
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.page.contents.push(PageContents::Text(span));
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.page.contents.push(PageContents::Image(image));
    }

    pub fn add_line(&mut self, line: LineLayout) {
        self.page.contents.push(PageContents::Line(line));
    }

    pub fn finish(self) -> Page {
        self.page
    }
}
