//! Content extent and scroll-centering derived from the hex packing.

use kurbo::{Size, Vec2};
use serde::Serialize;

use crate::options::LayoutOptions;

use super::boundary::ROW_PACKING;

/// Vertical overlap of consecutive rows relative to the item size (`1 - 0.866`).
pub const ROW_OVERLAP: f64 = 0.134;

/// Dimensions a renderer needs to position rows without re-deriving the packing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    /// Width of the widest row: `size * columns + gutter * (columns - 1)`.
    pub content_width: f64,
    pub content_height: f64,
    /// Margin between consecutive rows (negative when rows overlap).
    pub row_offset: f64,
    /// Top margin of each row; the first row has none.
    pub row_offsets: Vec<f64>,
    /// Space kept clear on each side, subtracted from half the viewport width.
    pub horizontal_inset: f64,
    pub vertical_inset: f64,
}

impl ContentMetrics {
    pub fn new(options: &LayoutOptions, columns: usize, row_count: usize) -> Self {
        if columns == 0 || row_count == 0 {
            return Self::default();
        }

        let size = options.item_size;
        let row_offset = size * -ROW_OVERLAP + options.gutter * ROW_PACKING;
        let row_offsets = (0..row_count)
            .map(|i| if i > 0 { row_offset } else { 0.0 })
            .collect();

        let correction = options.corner_correction();
        Self {
            content_width: size * columns as f64 + options.gutter * (columns as f64 - 1.0),
            content_height: size * row_count as f64 + row_offset * (row_count as f64 - 1.0),
            row_offset,
            row_offsets,
            horizontal_inset: options.x_radius + size / 2.0 - correction,
            vertical_inset: options.y_radius + size / 2.0 - correction,
        }
    }

    /// Padding on each side so the outer ring can scroll to the viewport center.
    pub fn padding(&self, viewport: Size) -> Vec2 {
        Vec2::new(
            (viewport.width / 2.0 - self.horizontal_inset).max(0.0),
            (viewport.height / 2.0 - self.vertical_inset).max(0.0),
        )
    }

    /// Total scrollable extent inside `viewport`.
    pub fn extent(&self, viewport: Size) -> Size {
        let padding = self.padding(viewport);
        Size::new(
            self.content_width + padding.x * 2.0,
            self.content_height + padding.y * 2.0,
        )
    }

    /// Scroll offset that centers the content in `viewport`.
    pub fn centered_scroll(&self, viewport: Size) -> Vec2 {
        let extent = self.extent(viewport);
        Vec2::new(
            ((extent.width - viewport.width) / 2.0).max(0.0),
            ((extent.height - viewport.height) / 2.0).max(0.0),
        )
    }
}
