//! FlexTree - an arena-backed host for the layout pass.
//!
//! Nodes are indices into a `Vec` owned by the tree; the layout pass only
//! ever sees [`NodeId`] handles. Containers recurse into the flex pass,
//! leaves size themselves from an optional measure function.
//!
//! ```text
//! NodeId(0): Container (Column, Start)   children=[1, 2]
//! NodeId(1): Leaf      (width=30)        parent=0
//! NodeId(2): Container (Row, Center)     parent=0, children=[...]
//! ```

use log::{debug, trace};

use crate::config::FlexConfig;
use crate::engine::LayoutContext;
use crate::error::{FlexError, Result};
use crate::layout::{layout_flex_with_config, ComputedLayout, Layout};
use crate::types::{Align, Axis, ItemStyle, MeasureMode, Size};

/// Handle to a node in a [`FlexTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Index of the node in the tree's arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Measures a leaf's content under the given constraints.
///
/// Arguments are `(width, width_mode, height, height_mode)`.
pub type MeasureFunc = Box<dyn Fn(f32, MeasureMode, f32, MeasureMode) -> Size>;

enum NodeKind {
    Container { direction: Axis, justify: Align },
    Leaf { measure: Option<MeasureFunc> },
}

struct NodeData {
    style: ItemStyle,
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    layout: Layout,
    layout_calls: usize,
}

/// Widget tree owning its nodes.
///
/// Node handles are only meaningful for the tree that created them; the
/// [`LayoutContext`] impl indexes directly and panics on a foreign handle.
#[derive(Default)]
pub struct FlexTree {
    nodes: Vec<NodeData>,
    config: FlexConfig,
}

impl FlexTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FlexConfig) -> Self {
        Self {
            nodes: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &FlexConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // =========================================================================
    // Node creation
    // =========================================================================

    fn insert(&mut self, style: ItemStyle, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            style,
            kind,
            parent: None,
            children: Vec::new(),
            layout: Layout::default(),
            layout_calls: 0,
        });
        id
    }

    /// Create a flex container placing its children along `direction`.
    pub fn new_container(&mut self, style: ItemStyle, direction: Axis, justify: Align) -> NodeId {
        self.insert(style, NodeKind::Container { direction, justify })
    }

    /// Create a leaf with no content; it measures as zero.
    pub fn new_leaf(&mut self, style: ItemStyle) -> NodeId {
        self.insert(style, NodeKind::Leaf { measure: None })
    }

    /// Create a leaf whose content size comes from `measure`.
    pub fn new_measured_leaf<F>(&mut self, style: ItemStyle, measure: F) -> NodeId
    where
        F: Fn(f32, MeasureMode, f32, MeasureMode) -> Size + 'static,
    {
        self.insert(
            style,
            NodeKind::Leaf {
                measure: Some(Box::new(measure)),
            },
        )
    }

    /// Append `child` to `parent`'s children.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(child)?;
        if !matches!(self.node(parent)?.kind, NodeKind::Container { .. }) {
            return Err(FlexError::NotAContainer(parent));
        }
        if let Some(existing) = self.nodes[child.0].parent {
            return Err(FlexError::AlreadyParented {
                child,
                parent: existing,
            });
        }

        // Walk up from the parent; meeting the child means a cycle
        let mut ancestor = Some(parent);
        while let Some(a) = ancestor {
            if a == child {
                return Err(FlexError::CycleDetected { parent, child });
            }
            ancestor = self.nodes[a.0].parent;
        }

        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    fn node(&self, id: NodeId) -> Result<&NodeData> {
        self.nodes.get(id.0).ok_or(FlexError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData> {
        self.nodes.get_mut(id.0).ok_or(FlexError::UnknownNode(id))
    }

    pub fn children(&self, node: NodeId) -> Result<&[NodeId]> {
        Ok(&self.node(node)?.children)
    }

    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(node)?.parent)
    }

    pub fn style(&self, node: NodeId) -> Result<ItemStyle> {
        Ok(self.node(node)?.style)
    }

    pub fn set_style(&mut self, node: NodeId, style: ItemStyle) -> Result<()> {
        self.node_mut(node)?.style = style;
        Ok(())
    }

    /// Position (relative to the parent) and size from the last layout.
    pub fn get_layout(&self, node: NodeId) -> Result<Layout> {
        Ok(self.node(node)?.layout)
    }

    /// Number of times `node` was laid out since the last reset.
    pub fn layout_calls(&self, node: NodeId) -> Result<usize> {
        Ok(self.node(node)?.layout_calls)
    }

    /// Position of `node` relative to the root of its tree.
    pub fn absolute_position(&self, node: NodeId) -> Result<(f32, f32)> {
        let mut current = self.node(node)?;
        let (mut x, mut y) = (current.layout.x, current.layout.y);
        while let Some(parent) = current.parent {
            current = &self.nodes[parent.0];
            x += current.layout.x;
            y += current.layout.y;
        }
        Ok((x, y))
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Lay out the subtree under `root` with the root placed at the origin.
    pub fn compute_layout(
        &mut self,
        root: NodeId,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) -> Result<()> {
        let data = self.node_mut(root)?;
        data.layout.x = 0.0;
        data.layout.y = 0.0;

        debug!("compute_layout: {root:?} width={width}({width_mode:?}) height={height}({height_mode:?})");
        LayoutContext::layout(self, root, width, width_mode, height, height_mode);
        Ok(())
    }

    /// Snapshot of every node's geometry, sized from `root`.
    pub fn computed(&self, root: NodeId) -> Result<ComputedLayout> {
        let root_layout = self.node(root)?.layout;
        let mut out = ComputedLayout::new();
        for data in &self.nodes {
            out.push(data.layout);
        }
        out.content_width = root_layout.width;
        out.content_height = root_layout.height;
        Ok(out)
    }

    /// Clear all geometry and layout counters.
    pub fn reset_layout(&mut self) {
        for data in &mut self.nodes {
            data.layout = Layout::default();
            data.layout_calls = 0;
        }
    }
}

/// Size a leaf takes along one axis.
fn resolve_leaf_size(available: f32, mode: MeasureMode, measured: f32) -> f32 {
    match mode {
        MeasureMode::Exactly => available,
        MeasureMode::AtMost => measured.min(available),
        MeasureMode::Unspecified => measured,
    }
}

impl LayoutContext for FlexTree {
    type Node = NodeId;

    fn set_x(&mut self, node: NodeId, x: f32) {
        self.nodes[node.0].layout.x = x;
    }

    fn set_y(&mut self, node: NodeId, y: f32) {
        self.nodes[node.0].layout.y = y;
    }

    fn width(&self, node: NodeId) -> f32 {
        self.nodes[node.0].layout.width
    }

    fn set_width(&mut self, node: NodeId, width: f32) {
        self.nodes[node.0].layout.width = width;
    }

    fn height(&self, node: NodeId) -> f32 {
        self.nodes[node.0].layout.height
    }

    fn set_height(&mut self, node: NodeId, height: f32) {
        self.nodes[node.0].layout.height = height;
    }

    fn layout(
        &mut self,
        node: NodeId,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) {
        self.nodes[node.0].layout_calls += 1;

        let container = match &self.nodes[node.0].kind {
            NodeKind::Container { direction, justify } => Some((*direction, *justify)),
            NodeKind::Leaf { .. } => None,
        };

        if let Some((direction, justify)) = container {
            let config = self.config;
            layout_flex_with_config(
                &config,
                self,
                node,
                width,
                width_mode,
                height,
                height_mode,
                direction,
                justify,
            );
            return;
        }

        let data = &mut self.nodes[node.0];
        let measured = match &data.kind {
            NodeKind::Leaf { measure: Some(measure) } => {
                measure(width, width_mode, height, height_mode)
            }
            _ => Size::ZERO,
        };
        data.layout.width = resolve_leaf_size(width, width_mode, measured.width);
        data.layout.height = resolve_leaf_size(height, height_mode, measured.height);
        trace!(
            "leaf {node:?}: measured {}x{} -> {}x{}",
            measured.width, measured.height, data.layout.width, data.layout.height
        );
    }

    fn child_count(&self, container: NodeId) -> usize {
        self.nodes[container.0].children.len()
    }

    fn child_at(&self, container: NodeId, index: usize) -> NodeId {
        self.nodes[container.0].children[index]
    }

    fn layout_params(&self, node: NodeId) -> ItemStyle {
        self.nodes[node.0].style
    }
}
