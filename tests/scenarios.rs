//! End-to-end layout scenarios with the default configuration.

use bubblelens::layout::boundary::classify;
use bubblelens::layout::{Layout, LayoutEngine, PlacedBubble, Tier};
use bubblelens::options::LayoutOptions;
use kurbo::Vec2;

fn labels(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Bubble {i}")).collect()
}

fn nearest<'a>(layout: &Layout<'a, String>) -> PlacedBubble<'a, String> {
    layout
        .items()
        .min_by(|a, b| {
            a.properties
                .distance_to_center
                .total_cmp(&b.properties.distance_to_center)
        })
        .cloned()
        .expect("layout has bubbles")
}

#[test]
fn twelve_items_default_ellipse() {
    let engine = LayoutEngine::default();
    let items = labels(12);
    let layout = engine.layout(&items, Vec2::ZERO);

    let lengths: Vec<usize> = layout.rows.iter().map(Vec::len).collect();
    assert_eq!(lengths, vec![5, 6, 1]);

    let center = nearest(&layout);
    assert!((center.properties.scale - 1.0).abs() < 1e-12);
    assert!(center.properties.translate_x.abs() < 1e-12);
    assert!(center.properties.translate_y.abs() < 1e-12);
    assert_eq!((center.row, center.col), (1, 1));
}

#[test]
fn fringe_edge_on_horizontal_axis() {
    let offset = Vec2::new(300.0, 0.0);

    let relaxed = LayoutEngine::default();
    let c = classify(offset, relaxed.options());
    assert_eq!(c.tier, Tier::Fringe);
    assert!(!c.in_corner_region);
    assert_eq!(c.distance_from_edge, 100.0);

    let p = relaxed.properties_at(offset);
    assert!((p.scale - 0.1).abs() < 1e-12);
    assert_eq!(p.translate_x, 0.0);
    assert_eq!(p.translate_y, 0.0);
    assert_eq!(p.distance_to_center, 300.0);

    let compact = LayoutEngine::new(LayoutOptions {
        compact: true,
        ..Default::default()
    })
    .unwrap();
    let p = compact.properties_at(offset);
    assert!((p.scale - 0.1).abs() < 1e-12);
    assert_eq!(p.translate_x, -90.0);
    assert_eq!(p.translate_y, 0.0);
}

#[test]
fn single_item() {
    let engine = LayoutEngine::default();
    let items = labels(1);
    let layout = engine.layout(&items, Vec2::ZERO);

    assert_eq!(layout.rows.len(), 1);
    assert_eq!(layout.rows[0].len(), 1);
    assert!(!layout.rows[0][0].slot.is_empty());
    assert_eq!(layout.metrics.content_width, 200.0);
    assert_eq!(layout.metrics.row_offsets, vec![0.0]);
}

#[test]
fn sample_page_configuration() {
    let options = LayoutOptions {
        item_size: 120.0,
        min_item_size: 20.0,
        gutter: 8.0,
        column_count: 5,
        corner_radius: 50.0,
        compact: true,
        gravitation: 5.0,
        ..Default::default()
    };
    let engine = LayoutEngine::new(options).unwrap();
    let items = labels(40);
    let layout = engine.layout(&items, Vec2::new(120.0, 200.0));

    assert_eq!(layout.items().count(), 40);
    let floor = 20.0 / 120.0;
    for bubble in layout.bubbles() {
        let p = bubble.properties;
        assert!(p.scale <= 1.0 + 1e-12);
        assert!(p.scale >= floor - 1e-12);
        assert!(p.translate_x.is_finite() && p.translate_y.is_finite());
    }
    // Some bubbles must fall outside the fringe at this size.
    assert!(layout.bubbles().any(|b| (b.properties.scale - floor).abs() < 1e-12));
}

#[test]
fn auto_center_scroll_keeps_middle_full_size() {
    let engine = LayoutEngine::default();
    let items = labels(30);
    let viewport = kurbo::Size::new(900.0, 700.0);
    let scroll = engine.metrics(items.len()).centered_scroll(viewport);
    let layout = engine.layout(&items, scroll);

    let center = nearest(&layout);
    assert_eq!(center.properties.scale, 1.0);
}
