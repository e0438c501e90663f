//! Data structures for layout computation.

use serde::Serialize;

use crate::guides::Guides;
use crate::item::{BubbleMetadata, Slot};

use super::metrics::ContentMetrics;

/// Which band around the boundary a point falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Inside the axis-aligned half-extents.
    Interior,
    /// Outside the boundary but within the fringe band.
    Fringe,
    Exterior,
}

/// Position of one point relative to the boundary shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryClassification {
    pub tier: Tier,
    /// Signed distance past the boundary; `0` for ordinary interior points.
    pub distance_from_edge: f64,
    pub in_corner_region: bool,
}

/// Render-ready transform of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BubbleProperties {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    /// Euclidean distance from the boundary center, as currently scrolled.
    pub distance_to_center: f64,
}

impl Default for BubbleProperties {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            distance_to_center: 0.0,
        }
    }
}

/// A slot together with its grid coordinates and computed transform.
#[derive(Debug, Clone)]
pub struct PlacedBubble<'a, T> {
    pub slot: Slot<'a, T>,
    pub row: usize,
    pub col: usize,
    pub properties: BubbleProperties,
    /// Present only when metadata was requested and the item accepts it.
    pub metadata: Option<BubbleMetadata>,
}

/// The complete layout result for one pass.
#[derive(Debug, Clone)]
pub struct Layout<'a, T> {
    pub rows: Vec<Vec<PlacedBubble<'a, T>>>,
    pub metrics: ContentMetrics,
    pub guides: Option<Guides>,
}

impl<'a, T> Layout<'a, T> {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            metrics: ContentMetrics::default(),
            guides: None,
        }
    }

    /// Every slot in row-major order, placeholders included.
    pub fn bubbles(&self) -> impl Iterator<Item = &PlacedBubble<'a, T>> {
        self.rows.iter().flatten()
    }

    /// Real items only, in item order.
    pub fn items(&self) -> impl Iterator<Item = &PlacedBubble<'a, T>> {
        self.bubbles().filter(|b| !b.slot.is_empty())
    }

    pub fn slot_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}
