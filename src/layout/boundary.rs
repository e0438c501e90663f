//! Grid placement and classification against the rounded boundary.

use kurbo::Vec2;

use crate::geometry::{corner_offset, distance};
use crate::options::LayoutOptions;

use super::types::{BoundaryClassification, Tier};

/// Vertical packing ratio of hexagon rows (about √3/2).
pub const ROW_PACKING: f64 = 0.866;

/// Un-scrolled offset of slot `(row, col)` from the boundary center.
///
/// `row_len` is the slot count of the row, placeholder included; shorter rows
/// are centered by half of the missing column width.
pub fn grid_offset(
    row: usize,
    col: usize,
    row_len: usize,
    columns: usize,
    options: &LayoutOptions,
) -> Vec2 {
    let pitch = options.pitch();
    let size = options.item_size;
    let correction = options.corner_correction();
    let missing = columns as f64 - row_len as f64;

    let y = pitch * ROW_PACKING * row as f64 - size + correction - (options.y_radius - size);
    let x = pitch * col as f64 + missing * pitch / 2.0 - size + correction
        - (options.x_radius - size);
    Vec2::new(x, y)
}

/// Classify an offset `(dx, dy)` measured from the boundary center.
pub fn classify(offset: Vec2, options: &LayoutOptions) -> BoundaryClassification {
    let ax = offset.x.abs();
    let ay = offset.y.abs();
    let radii = Vec2::new(options.x_radius, options.y_radius);
    let corner = options.corner_radius;
    let fringe = options.fringe_width;

    let in_corner_zone = ay > radii.y - corner && ax > radii.x - corner;
    let corner_distance = || distance(corner_offset(offset, radii, corner)) - corner;
    let edge_distance = (ax - radii.x).max(ay - radii.y);

    if ax <= radii.x && ay <= radii.y {
        // Inside the half-extents; only the part past a corner arc counts.
        if in_corner_zone {
            let past_arc = corner_distance();
            if past_arc > 0.0 {
                return BoundaryClassification {
                    tier: Tier::Interior,
                    distance_from_edge: past_arc,
                    in_corner_region: true,
                };
            }
        }
        return BoundaryClassification {
            tier: Tier::Interior,
            distance_from_edge: 0.0,
            in_corner_region: false,
        };
    }

    let tier = if ax <= radii.x + fringe && ay <= radii.y + fringe {
        Tier::Fringe
    } else {
        Tier::Exterior
    };

    BoundaryClassification {
        tier,
        distance_from_edge: if in_corner_zone {
            corner_distance()
        } else {
            edge_distance
        },
        in_corner_region: in_corner_zone,
    }
}
