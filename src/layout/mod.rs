//! Layout Module
//!
//! One flexbox pass over the children of a single container.
//!
//! # Architecture
//!
//! The pass never touches a widget tree directly. It talks to the host
//! through [`LayoutContext`](crate::engine::LayoutContext):
//!
//! 1. Reads child count, children and their [`ItemStyle`](crate::ItemStyle)
//! 2. Asks the host to lay out each child under computed constraints
//! 3. Writes positions of children and the container's final size
//!
//! Nested containers recurse by having the host's `layout` call back into
//! [`layout_flex`] for that node.
//!
//! # Example
//!
//! ```
//! use spark_flex::{layout_flex, Align, Axis, FlexTree, ItemStyle, MeasureMode};
//!
//! let mut tree = FlexTree::new();
//! let root = tree.new_container(ItemStyle::default(), Axis::Row, Align::SpaceBetween);
//! let a = tree.new_leaf(ItemStyle::new().with_size(30.0, 10.0));
//! let b = tree.new_leaf(ItemStyle::new().with_size(20.0, 10.0));
//! tree.add_child(root, a).unwrap();
//! tree.add_child(root, b).unwrap();
//!
//! layout_flex(&mut tree, root, 100.0, MeasureMode::Exactly, 10.0, MeasureMode::Exactly,
//!             Axis::Row, Align::SpaceBetween);
//!
//! assert_eq!(tree.get_layout(b).unwrap().x, 80.0);
//! ```

mod axis;
mod flex;
mod types;

pub use flex::{layout_flex, layout_flex_with_config};
pub use types::*;
