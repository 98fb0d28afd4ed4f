use crate::geometry::{Position, Size};
use crate::units::*;

/// A rectangle, specified by two opposite corners in a y-down space.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The x-coordinate of the top-left corner.
    pub x1: Pt,
    /// The y-coordinate of the top-left corner.
    pub y1: Pt,
    /// The x-coordinate of the bottom-right corner.
    pub x2: Pt,
    /// The y-coordinate of the bottom-right corner.
    pub y2: Pt,
}

impl Rect {
    /// The frame occupied by an item of `size` placed at `origin`
    pub fn new(origin: Position, size: Size) -> Rect {
        Rect {
            x1: origin.x,
            y1: origin.y,
            x2: origin.x + size.width,
            y2: origin.y + size.height,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    pub fn origin(&self) -> Position {
        Position {
            x: self.x1,
            y: self.y1,
        }
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Whether the two rectangles share any interior area. Rectangles that
    /// merely touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x1 < other.x2 && other.x1 < self.x2 && self.y1 < other.y2 && other.y1 < self.y2
    }
}

impl From<(Position, Size)> for Rect {
    fn from((origin, size): (Position, Size)) -> Self {
        Rect::new(origin, size)
    }
}

impl From<&(Position, Size)> for Rect {
    fn from((origin, size): &(Position, Size)) -> Self {
        Rect::new(*origin, *size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_from_origin_and_size() {
        let r = Rect::new(Position::new(50.0, 25.0), Size::new(40.0, 20.0));
        assert_eq!(r.x2, Pt(90.0));
        assert_eq!(r.y2, Pt(45.0));
        assert_eq!(r.size(), Size::new(40.0, 20.0));
        assert_eq!(r.origin(), Position::new(50.0, 25.0));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(Position::new(0.0, 0.0), Size::new(40.0, 20.0));
        let b = Rect::new(Position::new(40.0, 0.0), Size::new(40.0, 20.0));
        let c = Rect::new(Position::new(39.0, 19.0), Size::new(5.0, 5.0));
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(c.intersects(&b));
    }
}
