//! Grid slots and the optional layout-metadata capability of item content.

use serde::Serialize;

/// Content that can be placed in the honeycomb.
///
/// Items that want their computed size and distance report it through
/// [`accepts_metadata`](BubbleContent::accepts_metadata); the engine only hands
/// out [`BubbleMetadata`] when that returns `true` and
/// [`LayoutOptions::provide_props`](crate::options::LayoutOptions::provide_props) is set.
pub trait BubbleContent {
    fn accepts_metadata(&self) -> bool {
        false
    }
}

impl BubbleContent for str {}
impl BubbleContent for String {}
impl BubbleContent for () {}

impl<T: BubbleContent + ?Sized> BubbleContent for &T {
    fn accepts_metadata(&self) -> bool {
        (**self).accepts_metadata()
    }
}

impl<T: BubbleContent + ?Sized> BubbleContent for Box<T> {
    fn accepts_metadata(&self) -> bool {
        (**self).accepts_metadata()
    }
}

/// One cell of a hex row: a borrowed item or the padding placeholder.
#[derive(Debug)]
pub enum Slot<'a, T> {
    Item { index: usize, content: &'a T },
    Empty,
}

// Manual impls: `T` itself need not be `Clone`.
impl<T> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<'_, T> {}

impl<'a, T> Slot<'a, T> {
    pub fn index(&self) -> Option<usize> {
        match self {
            Slot::Item { index, .. } => Some(*index),
            Slot::Empty => None,
        }
    }

    pub fn content(&self) -> Option<&'a T> {
        match self {
            Slot::Item { content, .. } => Some(*content),
            Slot::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

/// Layout values handed to items that opted into them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BubbleMetadata {
    pub scale: f64,
    /// Rendered edge length in pixels (`scale * max_size`).
    pub bubble_size: f64,
    pub distance_to_center: f64,
    pub max_size: f64,
    pub min_size: f64,
}
