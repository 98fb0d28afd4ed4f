use derive_more::{Add, AddAssign, Deref, Display, From, Into, Sub, SubAssign, Sum};

/// A length in points. Every distance the layout engine consumes or produces
/// is expressed in this unit; hosts map it onto whatever their drawing surface
/// uses (pixels, points, etc.).
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
    From,
    Into,
    Display,
)]
#[display("{_0}pt")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Pt(pub f32);

impl Pt {
    pub const ZERO: Pt = Pt(0.0);

    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }
}
