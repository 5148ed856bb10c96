//! Layout primitives shared by the content renderer: margins, the page cursor
//! that decides where page breaks fall, and the greedy word wrapper.
//!
//! # Example
//!
//! ```
//! use article_pdf::layout::{wrap, PageCursor};
//! use article_pdf::Pt;
//!
//! let mut cursor = PageCursor::new(Pt(750.0), Pt(50.0), Pt(50.0), Pt(16.0));
//! for _line in wrap("a few words that wrap onto several lines", 12) {
//!     if cursor.needs_break(Pt(0.0)) {
//!         cursor.reset();
//!     }
//!     cursor.advance();
//! }
//! assert_eq!(cursor.y(), Pt(750.0 - 4.0 * 16.0));
//! ```

mod cursor;
mod margins;
mod wrap;

pub use cursor::*;
pub use margins::*;
pub use wrap::*;
