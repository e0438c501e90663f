//! Layout engine core implementation.

use kurbo::Vec2;
use tracing::{debug, trace};

use crate::geometry::distance;
use crate::guides::Guides;
use crate::item::{BubbleContent, BubbleMetadata, Slot};
use crate::options::{LayoutOptions, OptionsError};

use super::boundary::{classify, grid_offset};
use super::metrics::ContentMetrics;
use super::resolve::resolve;
use super::rows::RowCache;
use super::types::{BubbleProperties, Layout, PlacedBubble};

/// Layout engine configuration and computation.
///
/// Each pass is a pure function of the options, the item sequence and the
/// scroll offset. The engine only remembers the last row partitioning, which
/// depends on item count and column count alone.
#[derive(Debug)]
pub struct LayoutEngine {
    options: LayoutOptions,
    rows: RowCache,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            options: LayoutOptions::default(),
            rows: RowCache::new(),
        }
    }
}

impl LayoutEngine {
    /// Create an engine after checking every configuration invariant.
    pub fn new(options: LayoutOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            options,
            rows: RowCache::new(),
        })
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Replace the options; the cached rows are dropped if the column count changed.
    pub fn set_options(&mut self, options: LayoutOptions) -> Result<(), OptionsError> {
        options.validate()?;
        if options.column_count != self.options.column_count {
            self.rows.clear();
        }
        self.options = options;
        Ok(())
    }

    /// Compute the layout of `items` with the viewport scrolled to `scroll`.
    pub fn layout<'a, T: BubbleContent>(&self, items: &'a [T], scroll: Vec2) -> Layout<'a, T> {
        let options = &self.options;
        let columns = options.effective_columns(items.len());
        if columns == 0 {
            debug!("layout pass over empty item sequence");
            return Layout::empty();
        }

        let plan = self.rows.plan(items.len(), columns);
        let slot_rows = plan.slots(items);
        debug!(
            items = items.len(),
            columns,
            rows = slot_rows.len(),
            scroll_x = scroll.x,
            scroll_y = scroll.y,
            "layout pass"
        );

        let rows = slot_rows
            .into_iter()
            .enumerate()
            .map(|(row, slots)| {
                let row_len = slots.len();
                slots
                    .into_iter()
                    .enumerate()
                    .map(|(col, slot)| {
                        let offset = grid_offset(row, col, row_len, columns, options) - scroll;
                        let properties = self.properties_at(offset);
                        trace!(
                            row,
                            col,
                            scale = properties.scale,
                            tx = properties.translate_x,
                            ty = properties.translate_y,
                            "bubble resolved"
                        );
                        PlacedBubble {
                            metadata: self.metadata_for(&slot, &properties),
                            slot,
                            row,
                            col,
                            properties,
                        }
                    })
                    .collect()
            })
            .collect();

        Layout {
            rows,
            metrics: ContentMetrics::new(options, columns, plan.row_count()),
            guides: options.show_guides.then(|| Guides::new(options)),
        }
    }

    /// Transform for a slot whose offset from the boundary center is `offset`.
    pub fn properties_at(&self, offset: Vec2) -> BubbleProperties {
        let classification = classify(offset, &self.options);
        resolve(offset, &classification, distance(offset), &self.options)
    }

    /// Content metrics for `item_count` items without running a full pass.
    pub fn metrics(&self, item_count: usize) -> ContentMetrics {
        let columns = self.options.effective_columns(item_count);
        if columns == 0 {
            return ContentMetrics::default();
        }
        let plan = self.rows.plan(item_count, columns);
        ContentMetrics::new(&self.options, columns, plan.row_count())
    }

    fn metadata_for<T: BubbleContent>(
        &self,
        slot: &Slot<'_, T>,
        properties: &BubbleProperties,
    ) -> Option<BubbleMetadata> {
        if !self.options.provide_props {
            return None;
        }
        let content = slot.content()?;
        if !content.accepts_metadata() {
            return None;
        }
        Some(BubbleMetadata {
            scale: properties.scale,
            bubble_size: properties.scale * self.options.item_size,
            distance_to_center: properties.distance_to_center,
            max_size: self.options.item_size,
            min_size: self.options.min_item_size,
        })
    }
}
