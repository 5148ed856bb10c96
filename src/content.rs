//! Content stream rendering: turns the draw operations of a page into PDF operators.

use crate::colour::Colour;
use crate::font::encode_win_ansi;
use crate::page::{ImageLayout, LineLayout, PageContents, RectLayout, SpanLayout};
use std::io::Write;

/// Renders page contents to a PDF content stream. Every operation is wrapped in its
/// own `q`/`Q` pair so that no graphics state leaks from one operation into the next.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(contents: &[PageContents]) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(span) => render_span(&mut content, span)?,
            PageContents::Image(image) => render_image(&mut content, image)?,
            PageContents::Line(line) => render_line(&mut content, line)?,
            PageContents::Rectangle(rect) => render_rect(&mut content, rect)?,
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_span(content: &mut Vec<u8>, span: &SpanLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    write!(content, "/F{} {} Tf\n", span.font.font.index(), span.font.size)?;
    write_fill_colour(content, span.colour)?;
    write!(content, "BT\n")?;
    write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
    write!(content, "<")?;
    for ch in span.text.chars() {
        write!(content, "{:02x}", encode_win_ansi(ch))?;
    }
    write!(content, "> Tj\n")?;
    write!(content, "ET\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_image(content: &mut Vec<u8>, image: &ImageLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    if let Some(state) = image.state {
        write!(content, "/GS{} gs\n", state.index())?;
    }
    write!(
        content,
        "{} 0 0 {} {} {} cm\n",
        image.position.width(),
        image.position.height(),
        image.position.x1,
        image.position.y1
    )?;
    write!(content, "/I{} Do\n", image.image.index())?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_line(content: &mut Vec<u8>, line: &LineLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    write!(content, "{} w\n", line.width)?;
    write_stroke_colour(content, line.colour)?;
    write!(content, "{} {} m\n", line.from.0, line.from.1)?;
    write!(content, "{} {} l\n", line.to.0, line.to.1)?;
    write!(content, "S\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_rect(content: &mut Vec<u8>, rect: &RectLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    write!(content, "{} w\n", rect.width)?;
    write_stroke_colour(content, rect.colour)?;
    write!(
        content,
        "{} {} {} {} re\n",
        rect.rect.x1,
        rect.rect.y1,
        rect.rect.width(),
        rect.rect.height()
    )?;
    write!(content, "S\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::CMYK { c, m, y, k } => write!(content, "{c} {m} {y} {k} k\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[allow(clippy::write_with_newline)]
fn write_stroke_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} RG\n"),
        Colour::CMYK { c, m, y, k } => write!(content, "{c} {m} {y} {k} K\n"),
        Colour::Grey { g } => write!(content, "{g} G\n"),
    }
}
