use crate::rect::Rect;
use crate::units::Pt;

/// Tracks the vertical write position on the page currently being laid out.
///
/// `y` only ever decreases while a page is written; [PageCursor::reset] moves it
/// back to the top when a new page starts. One cursor belongs to one render.
#[derive(Debug, Clone, PartialEq)]
pub struct PageCursor {
    y: Pt,
    top: Pt,
    bottom: Pt,
    left: Pt,
    leading: Pt,
}

impl PageCursor {
    pub fn new(top: Pt, bottom: Pt, left: Pt, leading: Pt) -> PageCursor {
        PageCursor {
            y: top,
            top,
            bottom,
            left,
            leading,
        }
    }

    /// A cursor starting at the top-left of a page's content box
    pub fn within(content_box: &Rect, leading: Pt) -> PageCursor {
        PageCursor::new(content_box.y2, content_box.y1, content_box.x1, leading)
    }

    pub fn y(&self) -> Pt {
        self.y
    }

    pub fn left(&self) -> Pt {
        self.left
    }

    /// Move down by one line
    pub fn advance(&mut self) {
        self.y -= self.leading;
    }

    /// Move down by an arbitrary distance
    pub fn advance_by(&mut self, dy: Pt) {
        debug_assert!(dy >= Pt(0.0), "cursor only moves down the page");
        self.y -= dy;
    }

    /// Space left between the cursor and the bottom margin. Negative once the
    /// cursor has passed the margin.
    pub fn remaining(&self) -> Pt {
        self.y - self.bottom
    }

    /// Whether fewer than `min_space` points remain above the bottom margin
    pub fn needs_break(&self, min_space: Pt) -> bool {
        self.remaining() < min_space
    }

    /// Height between the top of the content area and the bottom margin
    pub fn usable_height(&self) -> Pt {
        self.top - self.bottom
    }

    /// Whether something `height` tall fits on a page that has nothing on it yet
    pub fn fits_on_fresh_page(&self, height: Pt) -> bool {
        self.usable_height() >= height
    }

    /// Back to the top of the content area, for a new page
    pub fn reset(&mut self) {
        self.y = self.top;
    }
}
