use std::ops::Range;

use crate::geometry::{Position, Size};
use crate::rect::Rect;
use crate::units::Pt;

/// The outcome of a flow layout pass: one [`Position`] per input item, in the
/// same order, plus the extent of the laid out content.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutResult {
    pub(crate) positions: Vec<Position>,
    pub(crate) rows: Vec<Range<usize>>,
    pub(crate) total_height: Pt,
    pub(crate) content_width: Pt,
}

impl LayoutResult {
    /// The top-left position of each item; index `i` belongs to input item `i`
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Height of all rows together, without trailing vertical spacing
    pub fn total_height(&self) -> Pt {
        self.total_height
    }

    /// Width of the widest row, measured to the far edge of its last item
    pub fn content_width(&self) -> Pt {
        self.content_width
    }

    pub fn content_size(&self) -> Size {
        Size {
            width: self.content_width,
            height: self.total_height,
        }
    }

    /// The index range of the items on each row, top to bottom
    pub fn rows(&self) -> &[Range<usize>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Which row the item at `index` landed on, if it exists
    pub fn row_of(&self, index: usize) -> Option<usize> {
        if index >= self.positions.len() {
            return None;
        }
        // rows are contiguous and ordered, so the first row ending past
        // `index` holds it
        Some(self.rows.partition_point(|row| row.end <= index))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Pair every position with the size it was computed from, giving the
    /// frame each item occupies. `items` should be the slice the layout was
    /// computed from; any surplus on either side is ignored.
    pub fn frames(&self, items: &[Size]) -> Vec<Rect> {
        self.positions
            .iter()
            .zip(items.iter())
            .map(|(position, size)| Rect::new(*position, *size))
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }
}

impl<'a> IntoIterator for &'a LayoutResult {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}
