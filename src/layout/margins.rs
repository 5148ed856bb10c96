use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Page margins. The top margin sets where content starts on every page and the
/// bottom margin where the renderer breaks to a new one; together they become the
/// `ArtBox` of each written [Page](crate::Page). Running headers and footers are
/// drawn outside them.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Clockwise from the top, in the order CSS uses
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all(value: Pt) -> Margins {
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}
