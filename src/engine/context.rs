//! LayoutContext - the capability set a host exposes to the layout pass.
//!
//! The layout pass never owns nodes. It reaches the host's widget tree only
//! through these methods, and writes its results back through the setters.

use std::fmt::Debug;

use crate::types::{ItemStyle, MeasureMode};

/// Host-provided access to a widget tree.
///
/// `layout` lays out a node's own subtree under the given constraints and
/// must leave the node's final size readable through [`width`](Self::width)
/// and [`height`](Self::height). For flex containers it typically re-enters
/// [`layout_flex`](crate::layout_flex).
///
/// A layout pass mutates geometry in place, so a single pass needs exclusive
/// access to the subtree it touches. `&mut self` enforces that.
pub trait LayoutContext {
    /// Handle identifying a node in the host's tree.
    type Node: Copy + Debug;

    fn set_x(&mut self, node: Self::Node, x: f32);

    fn set_y(&mut self, node: Self::Node, y: f32);

    /// Width set by [`set_width`](Self::set_width) or the most recent layout.
    fn width(&self, node: Self::Node) -> f32;

    fn set_width(&mut self, node: Self::Node, width: f32);

    /// Height set by [`set_height`](Self::set_height) or the most recent layout.
    fn height(&self, node: Self::Node) -> f32;

    fn set_height(&mut self, node: Self::Node, height: f32);

    /// Lay out `node` under the given constraints.
    fn layout(
        &mut self,
        node: Self::Node,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    );

    fn child_count(&self, container: Self::Node) -> usize;

    /// Child at a zero-based index. Order is significant.
    fn child_at(&self, container: Self::Node, index: usize) -> Self::Node;

    /// Layout parameters of `node`. Must be available for every child.
    fn layout_params(&self, node: Self::Node) -> ItemStyle;
}
