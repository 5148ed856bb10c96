//! Page dimensions. Articles are always laid out on US Letter in portrait
//! orientation, matching the default page of the systems that consume them.

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
