//! Core types for spark-flex.
//!
//! The vocabulary shared by the layout pass and its hosts: axes, measure
//! modes, alignments and per-item styles.

// =============================================================================
// Axis
// =============================================================================

/// Direction in which a container places its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Axis {
    /// Children are laid out horizontally.
    #[default]
    Row,
    /// Children are laid out vertically.
    Column,
}

impl Axis {
    /// The axis perpendicular to this one.
    #[inline]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::Column => Self::Row,
        }
    }
}

// =============================================================================
// Measure Mode
// =============================================================================

/// Layout requirement a parent imposes on a child along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum MeasureMode {
    /// No constraint; the size value carries no meaning.
    #[default]
    Unspecified,
    /// The child must be exactly the given size.
    Exactly,
    /// The child may be as large as it wants up to the given size.
    AtMost,
}

impl MeasureMode {
    /// Mode handed down to a child that is not forced to an exact size.
    ///
    /// An unconstrained parent stays unconstrained; a bounded one bounds.
    #[inline]
    pub const fn propagate(self) -> Self {
        match self {
            Self::Unspecified => Self::Unspecified,
            Self::Exactly | Self::AtMost => Self::AtMost,
        }
    }
}

// =============================================================================
// Alignment
// =============================================================================

/// Alignment policy.
///
/// Used both as the per-item cross-axis alignment (`Start`, `End`, `Center`,
/// `Stretch`) and as the container's main-axis content distribution
/// (`Start`, `End`, `Center`, `SpaceBetween`, `SpaceAround`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Align {
    /// The start margin edge of the item is flush with the start of the line.
    #[default]
    Start,
    /// The end margin edge of the item is flush with the end of the line.
    End,
    /// The margin box of the item is centered.
    Center,
    /// Free space is split equally between items.
    SpaceBetween,
    /// Free space is split equally around items.
    SpaceAround,
    /// The item fills the line.
    Stretch,
}

// =============================================================================
// Item Style
// =============================================================================

/// Margin space around an item, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub const ZERO: Self = Self::uniform(0.0);

    /// Same margin on all four sides.
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Options that control how one item is laid out inside its container.
///
/// A positive `flex` makes the item grow by that weight into free space.
/// A negative `flex` makes the item shrink on overflow, in proportion to its
/// basis (the magnitude is not used). Zero makes the item inflexible.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemStyle {
    /// Alignment in the container's cross axis.
    pub align: Align,
    pub flex: f32,
    /// Definite width, or `None` to size from content.
    pub width: Option<f32>,
    /// Definite height, or `None` to size from content.
    pub height: Option<f32>,
    pub margin: Margins,
}

impl ItemStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_flex(mut self, flex: f32) -> Self {
        self.flex = flex;
        self
    }

    /// Set a definite width. A non-finite value leaves the width undefined.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width).filter(|w| w.is_finite());
        self
    }

    /// Set a definite height. A non-finite value leaves the height undefined.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height).filter(|h| h.is_finite());
        self
    }

    pub fn with_size(self, width: f32, height: f32) -> Self {
        self.with_width(width).with_height(height)
    }

    pub fn with_margin(mut self, margin: Margins) -> Self {
        self.margin = margin;
        self
    }
}

// =============================================================================
// Size
// =============================================================================

/// A width/height pair, as reported by leaf measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
