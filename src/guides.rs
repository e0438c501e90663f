//! Debug overlay describing the boundary and the outer edge of the fringe band.

use serde::Serialize;

use crate::options::{LayoutOptions, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "radius")]
pub enum Rounding {
    /// Fully elliptical outline (CSS `border-radius: 50%`).
    Elliptical,
    Radius(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuideShape {
    pub width: f64,
    pub height: f64,
    pub rounding: Rounding,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Guides {
    pub boundary: GuideShape,
    pub fringe: GuideShape,
}

impl Guides {
    pub fn new(options: &LayoutOptions) -> Self {
        let fringe = options.fringe_width;
        let (inner, outer) = match options.shape {
            Shape::Ellipse => (Rounding::Elliptical, Rounding::Elliptical),
            Shape::Rectangle => (
                Rounding::Radius(options.corner_radius),
                Rounding::Radius(options.corner_radius + fringe),
            ),
        };

        Self {
            boundary: GuideShape {
                width: options.x_radius * 2.0,
                height: options.y_radius * 2.0,
                rounding: inner,
            },
            fringe: GuideShape {
                width: (options.x_radius + fringe) * 2.0,
                height: (options.y_radius + fringe) * 2.0,
                rounding: outer,
            },
        }
    }
}
