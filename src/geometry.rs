use crate::units::Pt;

/// The pre-measured footprint of one item, excluding any spacing around it.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: Pt,
    pub height: Pt,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Size {
        Size {
            width: Pt(width),
            height: Pt(height),
        }
    }

    /// A size with no extent in either direction
    pub fn zero() -> Size {
        Size {
            width: Pt::ZERO,
            height: Pt::ZERO,
        }
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Size::new(width, height)
    }
}

impl From<(Pt, Pt)> for Size {
    fn from((width, height): (Pt, Pt)) -> Self {
        Size { width, height }
    }
}

/// The top-left placement of an item, relative to the container's origin.
/// `y` grows downward.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: Pt,
    pub y: Pt,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Position {
        Position { x: Pt(x), y: Pt(y) }
    }

    pub fn origin() -> Position {
        Position {
            x: Pt::ZERO,
            y: Pt::ZERO,
        }
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Position::new(x, y)
    }
}

impl From<Position> for (Pt, Pt) {
    fn from(p: Position) -> Self {
        (p.x, p.y)
    }
}
