//! Layout configuration and its validation.

use serde::{Deserialize, Serialize};

/// Outline of the full-size region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Ellipse,
    #[serde(alias = "rounded-rectangle")]
    Rectangle,
}

impl Shape {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ellipse" => Some(Self::Ellipse),
            "rectangle" | "rounded-rectangle" => Some(Self::Rectangle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("itemSize must be greater than zero, got {0}")]
    ZeroItemSize(f64),
    #[error("minItemSize ({min}) must not exceed itemSize ({size})")]
    MinExceedsSize { min: f64, size: f64 },
    #[error("columnCount must be at least 1")]
    NoColumns,
    #[error("cornerRadius ({corner}) must not exceed the smaller radius ({limit})")]
    CornerTooLarge { corner: f64, limit: f64 },
}

/// Configuration snapshot for one layout pass.
///
/// Field names serialize in camelCase; the short names `size`, `minSize`
/// and `numCols` are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    #[serde(alias = "size")]
    pub item_size: f64,
    #[serde(alias = "minSize")]
    pub min_item_size: f64,
    pub gutter: f64,
    /// Inject [`BubbleMetadata`](crate::item::BubbleMetadata) into items that accept it.
    pub provide_props: bool,
    #[serde(alias = "numCols")]
    pub column_count: usize,
    pub fringe_width: f64,
    pub y_radius: f64,
    pub x_radius: f64,
    pub corner_radius: f64,
    pub show_guides: bool,
    /// Pull shrunk items toward the center to close gaps.
    pub compact: bool,
    pub gravitation: f64,
    pub shape: Shape,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            item_size: 200.0,
            min_item_size: 20.0,
            gutter: 16.0,
            provide_props: false,
            column_count: 6,
            fringe_width: 100.0,
            y_radius: 200.0,
            x_radius: 200.0,
            corner_radius: 100.0,
            show_guides: false,
            compact: false,
            gravitation: 0.0,
            shape: Shape::Ellipse,
        }
    }
}

impl LayoutOptions {
    /// Check every configuration invariant, reporting the first violation.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let fields = [
            ("itemSize", self.item_size),
            ("minItemSize", self.min_item_size),
            ("gutter", self.gutter),
            ("fringeWidth", self.fringe_width),
            ("yRadius", self.y_radius),
            ("xRadius", self.x_radius),
            ("cornerRadius", self.corner_radius),
            ("gravitation", self.gravitation),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(OptionsError::NotFinite { field, value });
            }
        }
        // gravitation is a signed tuning knob; everything else is a length
        for &(field, value) in &fields[..7] {
            if value < 0.0 {
                return Err(OptionsError::Negative { field, value });
            }
        }
        if self.item_size == 0.0 {
            return Err(OptionsError::ZeroItemSize(self.item_size));
        }
        if self.min_item_size > self.item_size {
            return Err(OptionsError::MinExceedsSize {
                min: self.min_item_size,
                size: self.item_size,
            });
        }
        if self.column_count < 1 {
            return Err(OptionsError::NoColumns);
        }
        let limit = self.x_radius.min(self.y_radius);
        if self.corner_radius > limit {
            return Err(OptionsError::CornerTooLarge {
                corner: self.corner_radius,
                limit,
            });
        }
        Ok(())
    }

    /// Columns actually used for `item_count` items.
    pub fn effective_columns(&self, item_count: usize) -> usize {
        self.column_count.min(item_count)
    }

    /// Scale at full shrink.
    pub fn min_proportion(&self) -> f64 {
        self.min_item_size / self.item_size
    }

    /// Center-to-center distance between neighbouring columns.
    pub fn pitch(&self) -> f64 {
        self.item_size + self.gutter
    }

    /// Correction for the rounded corner's effective radius along the diagonal.
    pub fn corner_correction(&self) -> f64 {
        self.corner_radius * (1.414 - 1.0) / 1.414
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(LayoutOptions::default().validate().is_ok());
    }

    #[test]
    fn test_min_exceeds_size() {
        let options = LayoutOptions {
            min_item_size: 250.0,
            ..Default::default()
        };
        assert_eq!(
            options.validate(),
            Err(OptionsError::MinExceedsSize {
                min: 250.0,
                size: 200.0
            })
        );
    }

    #[test]
    fn test_negative_fringe() {
        let options = LayoutOptions {
            fringe_width: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(OptionsError::Negative {
                field: "fringeWidth",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_columns() {
        let options = LayoutOptions {
            column_count: 0,
            ..Default::default()
        };
        assert_eq!(options.validate(), Err(OptionsError::NoColumns));
    }

    #[test]
    fn test_corner_too_large() {
        let options = LayoutOptions {
            x_radius: 80.0,
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(OptionsError::CornerTooLarge { .. })
        ));
    }

    #[test]
    fn test_nan_rejected() {
        let options = LayoutOptions {
            gutter: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(OptionsError::NotFinite { field: "gutter", .. })
        ));
    }

    #[test]
    fn test_negative_gravitation_allowed() {
        let options = LayoutOptions {
            gravitation: -2.0,
            ..Default::default()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_effective_columns_clamped() {
        let options = LayoutOptions::default();
        assert_eq!(options.effective_columns(3), 3);
        assert_eq!(options.effective_columns(40), 6);
        assert_eq!(options.effective_columns(0), 0);
    }

    #[test]
    fn test_deserialize_short_names() {
        let json = r#"{"size": 120, "minSize": 20, "numCols": 5, "shape": "rectangle", "compact": true}"#;
        let options: LayoutOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.item_size, 120.0);
        assert_eq!(options.min_item_size, 20.0);
        assert_eq!(options.column_count, 5);
        assert_eq!(options.shape, Shape::Rectangle);
        assert!(options.compact);
        assert_eq!(options.gutter, 16.0);
    }

    #[test]
    fn test_shape_from_str() {
        assert_eq!(Shape::from_str("ellipse"), Some(Shape::Ellipse));
        assert_eq!(Shape::from_str("rounded-rectangle"), Some(Shape::Rectangle));
        assert_eq!(Shape::from_str("hexagon"), None);
    }
}
