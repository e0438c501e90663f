//! Scale and translation derived from a boundary classification.

use std::f64::consts::PI;

use kurbo::Vec2;

use crate::geometry::{corner_offset, interpolate, sign};
use crate::options::LayoutOptions;

use super::types::{BoundaryClassification, BubbleProperties};

/// Sensitivity divisor applied to `gravitation`.
pub const GRAVITATION_SCALE: f64 = 10.0;

/// Size multiplier for a given distance past the boundary.
pub fn scale_for(distance_from_edge: f64, options: &LayoutOptions) -> f64 {
    let fringe = options.fringe_width;
    interpolate(
        0.0,
        fringe,
        distance_from_edge.clamp(0.0, fringe),
        1.0,
        options.min_proportion(),
    )
}

/// Displacement magnitude before direction is applied.
pub fn translation_magnitude(distance_from_edge: f64, options: &LayoutOptions) -> f64 {
    let fringe = options.fringe_width;
    let full = if options.compact {
        (options.item_size - options.min_item_size) / 2.0
    } else {
        0.0
    };

    if distance_from_edge > 0.0 && distance_from_edge <= fringe {
        interpolate(0.0, fringe, distance_from_edge, 0.0, full)
    } else if distance_from_edge > fringe {
        let excess = (distance_from_edge - fringe - options.item_size / 2.0).max(0.0);
        full + excess * options.gravitation / GRAVITATION_SCALE
    } else {
        0.0
    }
}

/// Angle from the inner corner pivot toward `offset`.
///
/// For `dx <= 0, dy <= 0` the correction amounts to `PI - theta`.
pub fn corner_angle(offset: Vec2, options: &LayoutOptions) -> f64 {
    let pivot = corner_offset(
        offset,
        Vec2::new(options.x_radius, options.y_radius),
        options.corner_radius,
    );
    let mut theta = (-pivot.y / pivot.x).atan();

    if offset.x > 0.0 {
        if offset.y > 0.0 {
            theta *= -1.0;
        }
    } else if offset.y > 0.0 {
        theta += PI;
    } else {
        theta += PI - 2.0 * theta;
    }
    theta
}

/// Resolve the full transform of a slot at `offset` from the boundary center.
pub fn resolve(
    offset: Vec2,
    classification: &BoundaryClassification,
    distance_to_center: f64,
    options: &LayoutOptions,
) -> BubbleProperties {
    let d = classification.distance_from_edge;
    let magnitude = translation_magnitude(d, options);
    let mut translate = Vec2::new(magnitude, magnitude);

    if classification.in_corner_region {
        let theta = corner_angle(offset, options);
        translate.x *= -theta.cos();
        translate.y *= -theta.sin();
    } else if offset.x.abs() > options.x_radius {
        translate.x *= -sign(offset.x);
        translate.y = 0.0;
    } else if offset.y.abs() > options.y_radius {
        translate.y *= -sign(offset.y);
        translate.x = 0.0;
    }

    BubbleProperties {
        scale: scale_for(d, options),
        translate_x: translate.x,
        translate_y: translate.y,
        distance_to_center,
    }
}
