//! Layout Types
//!
//! Output types read back from a host after a layout pass.

/// Position and size of one node, relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Computed layout result.
///
/// Contains parallel arrays indexed by node index.
/// Each index maps to the computed position and size of that node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedLayout {
    /// X position of each node, relative to its parent.
    pub x: Vec<f32>,

    /// Y position of each node, relative to its parent.
    pub y: Vec<f32>,

    /// Width of each node.
    pub width: Vec<f32>,

    /// Height of each node.
    pub height: Vec<f32>,

    /// Width of the root the layout was computed from.
    pub content_width: f32,

    /// Height of the root the layout was computed from.
    pub content_height: f32,
}

impl ComputedLayout {
    /// Create a new empty computed layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the position and size of a node.
    ///
    /// Returns zeros if index is out of bounds.
    pub fn get(&self, index: usize) -> Layout {
        Layout {
            x: self.x.get(index).copied().unwrap_or(0.0),
            y: self.y.get(index).copied().unwrap_or(0.0),
            width: self.width.get(index).copied().unwrap_or(0.0),
            height: self.height.get(index).copied().unwrap_or(0.0),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub(crate) fn push(&mut self, layout: Layout) {
        self.x.push(layout.x);
        self.y.push(layout.y);
        self.width.push(layout.width);
        self.height.push(layout.height);
    }
}
