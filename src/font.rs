use crate::{
    refs::{ObjectReferences, RefType},
    Pt,
};
use pdf_writer::{Name, Pdf};

/// Advance widths (in 1/1000 em) for the printable ASCII range 0x20..=0x7E of Helvetica,
/// taken from the Adobe font metrics shipped with every PDF viewer.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Advance widths (in 1/1000 em) for the printable ASCII range of Helvetica-Bold.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// One of the standard 14 PDF fonts used to typeset articles. These fonts are never
/// embedded: every conforming viewer ships them, so only their metrics are needed here.
///
/// Fonts are referred to in content streams as `/F{index}`, where the index is the
/// position of the font in [BuiltinFont::ALL].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
}

impl BuiltinFont {
    /// Every font that is written to the resources of each page
    pub const ALL: [BuiltinFont; 2] = [BuiltinFont::Helvetica, BuiltinFont::HelveticaBold];

    /// The PostScript name of the font
    pub fn base_font(self) -> &'static [u8] {
        match self {
            BuiltinFont::Helvetica => b"Helvetica",
            BuiltinFont::HelveticaBold => b"Helvetica-Bold",
        }
    }

    /// The index of the font within the page resources
    pub fn index(self) -> usize {
        match self {
            BuiltinFont::Helvetica => 0,
            BuiltinFont::HelveticaBold => 1,
        }
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            BuiltinFont::Helvetica => &HELVETICA_WIDTHS,
            BuiltinFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// Advance width of a single character, in 1/1000 em. Characters outside of the
    /// ASCII table fall back to the width of a digit, which is close to the average
    /// width of the lowercase Latin alphabet in both faces.
    pub fn char_width(self, ch: char) -> u16 {
        let widths = self.widths();
        match ch {
            ' '..='~' => widths[ch as usize - 0x20],
            _ => widths[usize::from(b'0' - 0x20)],
        }
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(self, text: &str, size: Pt) -> Pt {
        let units: u32 = text.chars().map(|ch| u32::from(self.char_width(ch))).sum();
        size * (units as f32 / 1000.0)
    }

    pub(crate) fn write(self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(self.index()));
        writer
            .type1_font(id)
            .base_font(Name(self.base_font()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

/// Map a character onto its WinAnsiEncoding byte. Characters that have no
/// representation in the encoding are replaced with `?`.
pub fn encode_win_ansi(ch: char) -> u8 {
    match ch {
        ' '..='~' | '\u{A0}'..='\u{FF}' => ch as u8,
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        _ => b'?',
    }
}
