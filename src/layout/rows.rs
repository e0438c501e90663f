//! Partitioning of a flat item sequence into staggered honeycomb rows.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::item::Slot;

/// A contiguous run of items forming one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub start: usize,
    pub len: usize,
    /// Row carries one trailing placeholder slot.
    pub padded: bool,
}

impl RowSpan {
    /// Slots in the row, placeholder included.
    pub fn slot_count(&self) -> usize {
        self.len + usize::from(self.padded)
    }
}

/// Row structure for a given item count and column count.
///
/// Depends only on those two numbers, never on item content or scroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPlan {
    pub item_count: usize,
    pub columns: usize,
    pub rows: Vec<RowSpan>,
}

impl RowPlan {
    /// Rows alternate between `columns - 1` and `columns` items, starting short.
    ///
    /// A zero quota (single column) never closes its row, so every item lands
    /// in the first row. When the final two rows share length parity, the last
    /// one gets a placeholder so the stagger stays symmetric.
    pub fn new(item_count: usize, columns: usize) -> Self {
        let mut rows: Vec<RowSpan> = Vec::new();
        let mut start = 0;

        while start < item_count {
            let quota = if rows.len() % 2 == 0 {
                columns.saturating_sub(1)
            } else {
                columns
            };
            let remaining = item_count - start;
            let len = if quota == 0 {
                remaining
            } else {
                quota.min(remaining)
            };
            rows.push(RowSpan {
                start,
                len,
                padded: false,
            });
            start += len;
        }

        if let [.., second_last, last] = rows.as_mut_slice() {
            if last.len % 2 == second_last.len % 2 {
                last.padded = true;
            }
        }

        Self {
            item_count,
            columns,
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Slot count of each row, placeholders included.
    pub fn row_lengths(&self) -> Vec<usize> {
        self.rows.iter().map(RowSpan::slot_count).collect()
    }

    /// Materialize the rows over `items`.
    ///
    /// `items` must hold exactly `item_count` elements.
    pub fn slots<'a, T>(&self, items: &'a [T]) -> Vec<Vec<Slot<'a, T>>> {
        debug_assert_eq!(items.len(), self.item_count);
        self.rows
            .iter()
            .map(|span| {
                let mut row: Vec<Slot<'a, T>> = items[span.start..span.start + span.len]
                    .iter()
                    .enumerate()
                    .map(|(i, content)| Slot::Item {
                        index: span.start + i,
                        content,
                    })
                    .collect();
                if span.padded {
                    row.push(Slot::Empty);
                }
                row
            })
            .collect()
    }
}

/// Partition `items` into honeycomb rows of `columns` (already clamped to the item count).
pub fn partition<T>(items: &[T], columns: usize) -> Vec<Vec<Slot<'_, T>>> {
    RowPlan::new(items.len(), columns).slots(items)
}

/// Last computed [`RowPlan`], reused while item count and column count stay put.
#[derive(Debug, Default)]
pub struct RowCache {
    plan: Mutex<Option<Arc<RowPlan>>>,
}

impl RowCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plan(&self, item_count: usize, columns: usize) -> Arc<RowPlan> {
        // A poisoned lock only means another pass panicked; the cached plan is still whole.
        let mut guard = self
            .plan
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(plan) = guard.as_ref() {
            if plan.item_count == item_count && plan.columns == columns {
                debug!(item_count, columns, "row plan cache hit");
                return Arc::clone(plan);
            }
            debug!(
                item_count,
                columns,
                previous_items = plan.item_count,
                previous_columns = plan.columns,
                "row plan invalidated"
            );
        }

        let plan = Arc::new(RowPlan::new(item_count, columns));
        *guard = Some(Arc::clone(&plan));
        plan
    }

    pub fn clear(&self) {
        let mut guard = self
            .plan
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = None;
    }
}
