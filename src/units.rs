use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// A length in PDF points (1/72 of an inch). All page geometry in this crate is
/// expressed in points, with the origin at the bottom-left corner of the page.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Pt(pub f32);

impl Pt {
    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Self::Output {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Self::Output {
        Pt(self.0 / rhs)
    }
}

impl Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> Self::Output {
        self.0 / rhs.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_stays_in_points() {
        let mut y = Pt(750.0);
        y -= Pt(16.0);
        assert_eq!(y, Pt(734.0));
        assert_eq!(Pt(400.0) * 0.5, Pt(200.0));
        assert_eq!(Pt(612.0) / 2.0, Pt(306.0));
        assert_eq!(Pt(300.0) / Pt(600.0), 0.5);
        assert_eq!(Pt(10.0).max(Pt(20.0)), Pt(20.0));
    }

    #[test]
    fn sums_and_converts() {
        let total: Pt = [Pt(1.0), Pt(2.5), Pt(3.5)].into_iter().sum();
        assert_eq!(total, Pt(7.0));
        let raw: f32 = total.into();
        assert_eq!(raw, 7.0);
        assert_eq!(format!("{}", Pt(1.5)), "1.5");
    }
}
