//! Content-free, serializable summary of a layout pass.

use serde::Serialize;

use crate::guides::Guides;
use crate::item::BubbleMetadata;
use crate::layout::{BubbleProperties, ContentMetrics, Layout};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotReport {
    /// Item index, or `None` for the padding placeholder.
    pub index: Option<usize>,
    pub row: usize,
    pub col: usize,
    #[serde(flatten)]
    pub properties: BubbleProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BubbleMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    pub rows: Vec<Vec<SlotReport>>,
    pub metrics: ContentMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guides: Option<Guides>,
}

impl LayoutReport {
    pub fn from_layout<T>(layout: &Layout<'_, T>) -> Self {
        let rows = layout
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|b| SlotReport {
                        index: b.slot.index(),
                        row: b.row,
                        col: b.col,
                        properties: b.properties,
                        metadata: b.metadata,
                    })
                    .collect()
            })
            .collect();

        Self {
            rows,
            metrics: layout.metrics.clone(),
            guides: layout.guides,
        }
    }

    /// `[scale, translateX, translateY, distance]` per slot, row-major.
    pub fn transforms(&self) -> Vec<f64> {
        self.rows
            .iter()
            .flatten()
            .flat_map(|s| {
                let p = &s.properties;
                [p.scale, p.translate_x, p.translate_y, p.distance_to_center]
            })
            .collect()
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutEngine;
    use kurbo::Vec2;

    #[test]
    fn test_report_marks_placeholder() {
        let items: Vec<String> = (0..15).map(|i| i.to_string()).collect();
        let layout = LayoutEngine::default().layout(&items, Vec2::ZERO);
        let report = LayoutReport::from_layout(&layout);
        assert_eq!(report.rows[2].last().unwrap().index, None);
        assert_eq!(report.transforms().len(), 16 * 4);
    }

    #[test]
    fn test_report_json_shape() {
        let items = vec![String::from("only")];
        let layout = LayoutEngine::default().layout(&items, Vec2::ZERO);
        let json = LayoutReport::from_layout(&layout).to_json(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let slot = &value["rows"][0][0];
        assert_eq!(slot["index"], 0);
        assert!(slot.get("translateX").is_some());
        assert!(slot.get("distanceToCenter").is_some());
        assert!(value["metrics"].get("contentWidth").is_some());
        assert!(value.get("guides").is_none());
    }
}
