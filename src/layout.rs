//! Honeycomb layout: rows, boundary classification, scale and translation.
//!
//! A pass runs in phases:
//! 1. partition the items into staggered rows ([`rows`]),
//! 2. place each slot on the hex grid and classify it against the
//!    boundary ([`boundary`]),
//! 3. turn the classification into scale and translation ([`resolve`]),
//! 4. derive the content metrics a renderer needs ([`metrics`]).
//!
//! [`LayoutEngine`] drives all four.

pub mod boundary;
mod engine;
pub mod metrics;
pub mod resolve;
pub mod rows;
mod types;

pub use engine::LayoutEngine;
pub use metrics::ContentMetrics;
pub use rows::{partition, RowCache, RowPlan, RowSpan};
pub use types::{BoundaryClassification, BubbleProperties, Layout, PlacedBubble, Tier};
