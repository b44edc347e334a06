//! # spark-flex
//!
//! Single-pass flexbox layout for the children of one container.
//!
//! The algorithm resolves each child's base size, grows or shrinks children
//! into the container's free space, places them along the main axis and
//! aligns them on the cross axis. The widget tree stays with the host; the
//! pass reaches it only through [`LayoutContext`].
//!
//! ## Architecture
//!
//! ```text
//! host tree → LayoutContext → layout_flex → setters (x, y, width, height)
//!                  ↑                │
//!                  └── layout() ────┘  (nested containers recurse)
//! ```
//!
//! Not supported: wrapping, baseline alignment, ordering, min/max clamping,
//! aspect ratios and text measurement. Leaves are measured by the host.
//!
//! ## Modules
//!
//! - [`types`] - Axis, MeasureMode, Align, ItemStyle
//! - [`layout`] - The flex pass and its output types
//! - [`engine`] - LayoutContext, CallbackContext, FlexTree
//! - [`config`] - FlexConfig
//! - [`error`] - FlexError

pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::FlexConfig;

pub use error::{FlexError, Result};

pub use engine::{
    CallbackContext, CallbackContextBuilder, Capabilities, FlexTree, LayoutContext, MeasureFunc,
    NodeId,
};

pub use layout::{layout_flex, layout_flex_with_config, ComputedLayout, Layout};
