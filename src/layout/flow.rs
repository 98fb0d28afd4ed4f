use crate::error::{FlowError, Result};
use crate::geometry::{Position, Size};
use crate::layout::result::LayoutResult;
use crate::layout::spacing::Spacing;
use crate::units::Pt;

/// A flow layout packs items left to right, starting a new row whenever the
/// next item would overflow the container width. Rows stack downward, each as
/// tall as its tallest item.
///
/// The spacing is fixed when the layout is constructed; the same `FlowLayout`
/// can then be applied to any number of item lists and container widths.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowLayout {
    pub spacing: Spacing,
}

impl FlowLayout {
    pub fn new(spacing: Spacing) -> FlowLayout {
        FlowLayout { spacing }
    }

    /// Replace the spacing used between items and rows
    pub fn with_spacing(mut self, spacing: Spacing) -> FlowLayout {
        self.spacing = spacing;
        self
    }

    /// Place `items` in order inside a container `container_width` wide.
    ///
    /// An item only wraps onto a new row if the current row already holds
    /// something, so an item wider than the container sits alone at `x = 0`
    /// and overflows to the right.
    ///
    /// Fails with [`FlowError::InvalidInput`] if the container width is not
    /// positive, or if a spacing or any item dimension is negative or NaN.
    pub fn layout(&self, items: &[Size], container_width: Pt) -> Result<LayoutResult> {
        validate(items, container_width, self.spacing).inspect_err(|e| {
            log::warn!("rejecting flow layout: {e}");
        })?;

        let Spacing {
            horizontal,
            vertical,
        } = self.spacing;

        let mut positions: Vec<Position> = Vec::with_capacity(items.len());
        let mut rows = Vec::new();
        let mut content_width = Pt::ZERO;

        let mut row_start: usize = 0;
        let mut row_consumed = Pt::ZERO;
        let mut row_height = Pt::ZERO;
        let mut row_extent = Pt::ZERO;
        let mut cursor_y = Pt::ZERO;

        for (i, item) in items.iter().enumerate() {
            if i > row_start && row_consumed + item.width > container_width {
                rows.push(row_start..i);
                content_width = content_width.max(row_extent);

                cursor_y += row_height + vertical;
                row_start = i;
                row_consumed = Pt::ZERO;
                row_height = Pt::ZERO;
                log::trace!("wrapping at item {i}, new row at y = {cursor_y}");
            }

            if i == row_start && item.width > container_width {
                log::trace!(
                    "item {i} is {} wide, wider than the {container_width} container",
                    item.width
                );
            }

            positions.push(Position {
                x: row_consumed,
                y: cursor_y,
            });

            row_extent = row_consumed + item.width;
            row_consumed += item.width + horizontal;
            row_height = row_height.max(item.height);
        }

        let total_height = if items.is_empty() {
            Pt::ZERO
        } else {
            rows.push(row_start..items.len());
            content_width = content_width.max(row_extent);
            cursor_y + row_height
        };

        log::debug!(
            "laid out {} items in {} rows, {total_height} tall",
            items.len(),
            rows.len()
        );

        Ok(LayoutResult {
            positions,
            rows,
            total_height,
            content_width,
        })
    }
}

/// Lay out `items` with the given spacing; see [`FlowLayout::layout`].
pub fn layout(
    items: &[Size],
    container_width: Pt,
    horizontal_spacing: Pt,
    vertical_spacing: Pt,
) -> Result<LayoutResult> {
    FlowLayout::new(Spacing::new(horizontal_spacing, vertical_spacing))
        .layout(items, container_width)
}

fn validate(items: &[Size], container_width: Pt, spacing: Spacing) -> Result<()> {
    // `!(x > 0)` rather than `x <= 0` so NaN is rejected too
    if !(container_width > Pt::ZERO) {
        return Err(FlowError::InvalidInput(format!(
            "container width must be positive, got {container_width}"
        )));
    }
    if !(spacing.horizontal >= Pt::ZERO) {
        return Err(FlowError::InvalidInput(format!(
            "horizontal spacing must not be negative, got {}",
            spacing.horizontal
        )));
    }
    if !(spacing.vertical >= Pt::ZERO) {
        return Err(FlowError::InvalidInput(format!(
            "vertical spacing must not be negative, got {}",
            spacing.vertical
        )));
    }
    for (i, item) in items.iter().enumerate() {
        if !(item.width >= Pt::ZERO) || !(item.height >= Pt::ZERO) {
            return Err(FlowError::InvalidInput(format!(
                "item {i} has a negative size: {} x {}",
                item.width, item.height
            )));
        }
    }
    Ok(())
}
