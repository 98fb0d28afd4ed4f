use crate::units::Pt;

/// Spacing is the gap left between neighbouring items in a flow layout.
/// `horizontal` separates items on the same row, and `vertical` separates
/// one row from the next. No spacing is added before the first item of a
/// row or after the last row.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Spacing {
    pub horizontal: Pt,
    pub vertical: Pt,
}

impl Spacing {
    /// Create spacing by specifying the horizontal and vertical gaps
    pub fn new(horizontal: Pt, vertical: Pt) -> Spacing {
        Spacing {
            horizontal,
            vertical,
        }
    }

    /// Create spacing where both gaps are equal
    pub fn all<D: Into<Pt>>(value: D) -> Spacing {
        let value: Pt = value.into();
        Spacing {
            horizontal: value,
            vertical: value,
        }
    }

    /// Create spacing by specifying vertical and horizontal gaps, in the same
    /// order as the CSS `gap` shorthand (row gap first)
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Spacing {
        Spacing {
            horizontal,
            vertical,
        }
    }

    /// Create spacing where both gaps are 0.0
    pub fn empty() -> Spacing {
        Spacing {
            horizontal: Pt(0.0),
            vertical: Pt(0.0),
        }
    }

    /// Replace the gap between items on the same row
    pub fn with_horizontal(&self, horizontal: Pt) -> Spacing {
        Spacing {
            horizontal,
            vertical: self.vertical,
        }
    }

    /// Replace the gap between rows
    pub fn with_vertical(&self, vertical: Pt) -> Spacing {
        Spacing {
            horizontal: self.horizontal,
            vertical,
        }
    }
}
