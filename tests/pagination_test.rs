//! Integration tests for page breaking in the content pass.

use article_pdf::{
    Article, ContentError, ContentRenderer, Document, LayoutSettings, PageContents, Pt, Section,
};
use chrono::{NaiveDate, NaiveDateTime};
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};

fn created() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .and_then(|d| d.and_hms_opt(3, 4, 5))
        .expect("valid date")
}

/// `lines` full body lines of text: 18 four-letter words fill 89 of the 90 columns
fn body_lines(lines: usize) -> String {
    vec!["word"; lines * 18].join(" ")
}

fn png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    DynamicImage::new_rgb8(width, height)
        .save_with_format(&path, ImageFormat::Png)
        .expect("can write png");
    path
}

/// Index of the page carrying the span with exactly this text
fn page_of(document: &Document, text: &str) -> Option<usize> {
    document
        .pages()
        .position(|page| page.spans().any(|span| span.text == text))
}

#[test]
fn scenario_a_single_text_section() {
    let article = Article::new(1, "Intro", "Hello world", created())
        .with_section(Section::new("setup", "word ".repeat(200), 1));
    let document = ContentRenderer::default().render(&article).expect("renders");

    assert!(document.page_count() >= 1);
    assert_eq!(page_of(&document, "1. SETUP"), Some(0));
    assert_eq!(document.pages().flat_map(|page| page.images()).count(), 0);
}

/// With a 48pt top margin content starts at y=744. The first section's text then
/// starts at y=578, so 34 lines put the last baseline exactly on the 50pt margin.
fn boundary_settings() -> LayoutSettings {
    let mut settings = LayoutSettings::default();
    settings.margins.top = Pt(48.0);
    settings
}

#[test]
fn scenario_b_text_ending_on_the_margin_pushes_the_next_heading_over() {
    let article = Article::new(2, "Intro", "Hello world", created())
        .with_section(Section::new("first", body_lines(34), 1))
        .with_section(Section::new("second", "short", 2));
    let document = ContentRenderer::new(boundary_settings())
        .render(&article)
        .expect("renders");

    assert_eq!(document.page_count(), 2);
    let first = document.page(0).expect("first page");
    let lowest = first
        .spans()
        .map(|span| (span.coords.1).0)
        .fold(f32::MAX, f32::min);
    assert_eq!(lowest, 50.0);

    assert_eq!(page_of(&document, "1. FIRST"), Some(0));
    assert_eq!(page_of(&document, "2. SECOND"), Some(1));
    let heading = document
        .page(1)
        .and_then(|page| page.spans().next().cloned())
        .expect("heading opens page 2");
    assert_eq!(heading.text, "2. SECOND");
    assert_eq!(heading.coords.1, Pt(744.0));
}

#[test]
fn one_line_past_the_margin_starts_a_new_page() {
    let article = Article::new(2, "Intro", "Hello world", created())
        .with_section(Section::new("first", body_lines(35), 1));
    let document = ContentRenderer::new(boundary_settings())
        .render(&article)
        .expect("renders");

    assert_eq!(document.page_count(), 2);
    let overflow: Vec<_> = document.page(1).expect("page 2").spans().collect();
    assert_eq!(overflow.len(), 1);
    assert_eq!(overflow[0].coords, (Pt(50.0), Pt(744.0)));
}

#[test]
fn scenario_c_images_keep_their_aspect_ratio() {
    let dir = tempfile::tempdir().expect("temp dir");
    let image = png(dir.path(), "wide.png", 200, 100);
    let article = Article::new(3, "Intro", "Hello world", created())
        .with_section(Section::new("diagram", "below the picture", 1).with_image(&image));
    let document = ContentRenderer::default().render(&article).expect("renders");

    let placed: Vec<_> = document.pages().flat_map(|page| page.images()).collect();
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].position.width(), Pt(400.0));
    assert_eq!(placed[0].position.height(), Pt(200.0));
    assert!(placed[0].state.is_none());
}

#[test]
fn images_follow_their_heading_and_precede_the_text() {
    let dir = tempfile::tempdir().expect("temp dir");
    let image = png(dir.path(), "wide.png", 200, 100);
    let article = Article::new(3, "Intro", "Hello world", created())
        .with_section(Section::new("diagram", "below the picture", 1).with_image(&image));
    let document = ContentRenderer::default().render(&article).expect("renders");

    let contents = document.page(0).expect("page").contents();
    let kinds: Vec<&str> = contents
        .iter()
        .skip(3)
        .map(|c| match c {
            PageContents::Text(_) => "text",
            PageContents::Image(_) => "image",
            PageContents::Line(_) => "line",
            PageContents::Rectangle(_) => "rect",
        })
        .collect();
    assert_eq!(kinds, vec!["text", "image", "text"]);
}

#[test]
fn an_image_that_does_not_fit_moves_whole_to_the_next_page() {
    let dir = tempfile::tempdir().expect("temp dir");
    let image = png(dir.path(), "wide.png", 200, 100);
    // 20 lines leave the second heading at y=234: room for it, not for a 200pt image
    let article = Article::new(4, "Intro", "Hello world", created())
        .with_section(Section::new("text", body_lines(20), 1))
        .with_section(Section::new("diagram", "caption", 2).with_image(&image));
    let document = ContentRenderer::default().render(&article).expect("renders");

    assert_eq!(page_of(&document, "2. DIAGRAM"), Some(0));
    assert_eq!(document.page(0).expect("page").images().count(), 0);

    let second = document.page(1).expect("page 2");
    let placed: Vec<_> = second.images().collect();
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].position.y2, Pt(750.0));
    assert_eq!(placed[0].position.y1, Pt(550.0));
    let (content, image) = (second.content_box, placed[0].position);
    assert!(image.x1 >= content.x1 && image.x2 <= content.x2);
    assert!(image.y1 >= content.y1 && image.y2 <= content.y2);
}

#[test]
fn an_image_taller_than_a_page_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let image = png(dir.path(), "tall.png", 100, 300);
    let article = Article::new(5, "Intro", "Hello world", created())
        .with_section(Section::new("poster", "", 1).with_image(&image));

    let err = ContentRenderer::default().render(&article).err();
    match err {
        Some(ContentError::DoesNotFit {
            height, available, ..
        }) => {
            assert_eq!(height, Pt(1200.0));
            assert_eq!(available, Pt(700.0));
        }
        other => panic!("expected DoesNotFit, got {other:?}"),
    }
}

#[test]
fn missing_images_fail_the_whole_render() {
    let article = Article::new(6, "Intro", "Hello world", created())
        .with_section(Section::new("first", "fine", 1))
        .with_section(Section::new("second", "", 2).with_image("/definitely/not/here.png"));
    let err = ContentRenderer::default().render(&article).err();
    assert!(matches!(err, Some(ContentError::ImageRead { .. })));
}

#[test]
fn headings_appear_in_position_order() {
    let keys = ["delta", "alpha", "echo", "charlie", "bravo"];
    let mut article = Article::new(7, "Intro", lipsum::lipsum(40), created());
    for (i, key) in keys.iter().enumerate() {
        // positions 5, 4, 3, 2, 1 so the render order reverses the input order
        let position = (keys.len() - i) as i32;
        article = article.with_section(Section::new(*key, lipsum::lipsum(400), position));
    }
    let document = ContentRenderer::default().render(&article).expect("renders");

    let headings: Vec<String> = document
        .pages()
        .flat_map(|page| page.spans())
        .filter(|span| span.font.size == Pt(16.0))
        .map(|span| span.text.clone())
        .collect();
    assert_eq!(
        headings,
        vec!["1. BRAVO", "2. CHARLIE", "3. ECHO", "4. ALPHA", "5. DELTA"]
    );
}

#[test]
fn headings_are_never_left_alone_at_the_bottom_of_a_page() {
    let mut article = Article::new(8, "Intro", "Hello world", created());
    for i in 0..12 {
        article = article.with_section(Section::new(
            format!("part {i}"),
            lipsum::lipsum(30 + i * 37),
            i as i32,
        ));
    }
    let settings = LayoutSettings::default();
    let document = ContentRenderer::new(settings.clone())
        .render(&article)
        .expect("renders");
    assert!(document.page_count() > 1);

    for page in document.pages() {
        for span in page.spans().filter(|span| span.font.size == settings.heading_size) {
            let room_below = span.coords.1 - settings.margins.bottom;
            assert!(
                room_below >= settings.heading_block,
                "{} has no room for its first line",
                span.text
            );
        }
    }
}
