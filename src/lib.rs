pub mod config;
pub mod geometry;
pub mod guides;
pub mod item;
pub mod layout;
pub mod logging;
pub mod options;
pub mod report;

use kurbo::Vec2;
use wasm_bindgen::prelude::*;

use layout::LayoutEngine;
use options::LayoutOptions;
use report::LayoutReport;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

fn report_for(
    item_count: usize,
    options_json: Option<String>,
    scroll_left: f64,
    scroll_top: f64,
) -> Result<LayoutReport, String> {
    let options: LayoutOptions = match options_json.as_deref() {
        Some(json) => serde_json::from_str(json).map_err(|e| e.to_string())?,
        None => LayoutOptions::default(),
    };
    let engine = LayoutEngine::new(options).map_err(|e| e.to_string())?;

    // Content is opaque to the engine; only the count matters here.
    let items = vec![(); item_count];
    let layout = engine.layout(&items, Vec2::new(scroll_left, scroll_top));
    Ok(LayoutReport::from_layout(&layout))
}

/// Lay out `itemCount` bubbles and return the report as JSON
#[wasm_bindgen(js_name = "bubbleLayout")]
pub fn bubble_layout(
    item_count: usize,
    options_json: Option<String>,
    scroll_left: f64,
    scroll_top: f64,
) -> Result<String, String> {
    report_for(item_count, options_json, scroll_left, scroll_top)?
        .to_json(false)
        .map_err(|e| e.to_string())
}

/// Flat `[scale, translateX, translateY, distance]` per slot, row-major
#[wasm_bindgen(js_name = "bubbleTransforms")]
pub fn bubble_transforms(
    item_count: usize,
    options_json: Option<String>,
    scroll_left: f64,
    scroll_top: f64,
) -> Result<js_sys::Float64Array, String> {
    let report = report_for(item_count, options_json, scroll_left, scroll_top)?;
    Ok(js_sys::Float64Array::from(report.transforms().as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_layout_defaults() {
        let json = bubble_layout(12, None, 0.0, 0.0).unwrap();
        assert!(json.contains("\"rows\""));
    }

    #[test]
    fn test_bubble_layout_reports_bad_options() {
        let err = bubble_layout(3, Some(r#"{"numCols": 0}"#.to_string()), 0.0, 0.0).unwrap_err();
        assert!(err.contains("columnCount"));
    }

    #[test]
    fn test_bubble_layout_reports_bad_json() {
        assert!(bubble_layout(3, Some("{".to_string()), 0.0, 0.0).is_err());
    }
}
