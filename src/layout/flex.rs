//! Flex layout pass
//!
//! Lays out the children of a single flex container.
//!
//! # Algorithm
//!
//! 1. **Basis**: resolve each child's main-axis base size (style size, zero
//!    for flexible items in a definite container, or measured by layout)
//! 2. **Distribute**: grow or shrink children into the remaining space, then
//!    lay each one out with an exact main size
//! 3. **Place**: walk children along the main axis, applying `justify` when
//!    nothing grew into the free space
//! 4. **Finalize**: an exactly constrained container takes its available size
//! 5. **Align**: stretch or offset each child on the cross axis
//!
//! Nested containers recurse through [`LayoutContext::layout`]. A child is
//! laid out at most three times per pass: measure, exact main, stretch.

use log::{debug, trace};

use crate::config::FlexConfig;
use crate::engine::LayoutContext;
use crate::types::{Align, Axis, ItemStyle, MeasureMode};

use super::axis::{
    grow_factor, is_definite, is_flex_basis_auto, layout_size, leading_margin, margin_sum,
    shrink_factor, style_size,
};

/// A size paired with the mode it is imposed under.
type Constraint = (f32, MeasureMode);

// =============================================================================
// WORKING STATE (call-scoped)
// =============================================================================

/// One child of the container being laid out.
struct FlexItem<N> {
    node: N,
    style: ItemStyle,
    /// Main size before distribution, then after.
    basis: f32,
}

/// Aggregates collected while resolving bases.
#[derive(Debug, Default)]
struct FlexTotals {
    /// Sum of bases plus main-axis margins.
    size_consumed: f32,
    grow: f32,
    /// Sum of shrink eligibility times basis.
    shrink_scaled: f32,
}

/// The container's constraints viewed along its main and cross axes.
struct FlexFrame {
    main_axis: Axis,
    cross_axis: Axis,
    available_main: f32,
    available_cross: f32,
    main_mode: MeasureMode,
    cross_mode: MeasureMode,
}

impl FlexFrame {
    fn new(
        direction: Axis,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) -> Self {
        let (available_main, main_mode, available_cross, cross_mode) = match direction {
            Axis::Row => (width, width_mode, height, height_mode),
            Axis::Column => (height, height_mode, width, width_mode),
        };
        Self {
            main_axis: direction,
            cross_axis: direction.perpendicular(),
            available_main,
            available_cross,
            main_mode,
            cross_mode,
        }
    }

    fn available(&self, axis: Axis) -> Constraint {
        if axis == self.main_axis {
            (self.available_main, self.main_mode)
        } else {
            (self.available_cross, self.cross_mode)
        }
    }

    /// Constraint handed to a child along `axis` when its size is not yet
    /// decided by distribution.
    ///
    /// A definite style size wins. A stretching item in an exactly sized
    /// cross axis takes that size. Everything else inherits the container's
    /// bound, loosened to `AtMost`.
    fn child_constraint(&self, style: &ItemStyle, axis: Axis) -> Constraint {
        let (size, mode) = self.available(axis);
        if let Some(own) = style_size(style, axis) {
            (own, MeasureMode::Exactly)
        } else if axis == self.cross_axis
            && mode == MeasureMode::Exactly
            && style.align == Align::Stretch
        {
            (size, MeasureMode::Exactly)
        } else {
            (size, mode.propagate())
        }
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Lay out a flex container with the default [`FlexConfig`].
///
/// # Arguments
///
/// * `ctx` - Host access to the widget tree
/// * `container` - The flex container
/// * `width`, `width_mode` - Available width and how it constrains
/// * `height`, `height_mode` - Available height and how it constrains
/// * `direction` - Axis the children are placed along
/// * `justify` - Main-axis distribution of free space
///
/// Results are written through the context's setters: position and size of
/// every child, and the size of `container`.
#[allow(clippy::too_many_arguments)]
pub fn layout_flex<C: LayoutContext>(
    ctx: &mut C,
    container: C::Node,
    width: f32,
    width_mode: MeasureMode,
    height: f32,
    height_mode: MeasureMode,
    direction: Axis,
    justify: Align,
) {
    layout_flex_with_config(
        &FlexConfig::default(),
        ctx,
        container,
        width,
        width_mode,
        height,
        height_mode,
        direction,
        justify,
    );
}

/// Lay out a flex container. See [`layout_flex`].
#[allow(clippy::too_many_arguments)]
pub fn layout_flex_with_config<C: LayoutContext>(
    config: &FlexConfig,
    ctx: &mut C,
    container: C::Node,
    width: f32,
    width_mode: MeasureMode,
    height: f32,
    height_mode: MeasureMode,
    direction: Axis,
    justify: Align,
) {
    debug!(
        "layout_flex: {container:?} {direction:?} justify={justify:?} \
         width={width}({width_mode:?}) height={height}({height_mode:?})"
    );

    let frame = FlexFrame::new(direction, width, width_mode, height, height_mode);
    let mut items = collect_items(ctx, container);

    // =========================================================================
    // PASS 1: Resolve bases
    // =========================================================================

    let totals = resolve_bases(ctx, &frame, &mut items);
    let remaining_space = if is_definite(frame.available_main, frame.main_mode) {
        frame.available_main - totals.size_consumed
    } else {
        0.0
    };
    trace!("layout_flex: {totals:?} remaining={remaining_space}");

    // =========================================================================
    // PASS 2: Distribute free space and lay out children
    // =========================================================================

    distribute(ctx, config, &frame, &mut items, &totals, remaining_space);

    // =========================================================================
    // PASS 3: Main-axis placement
    // =========================================================================

    let (leading, between) = if totals.grow == 0.0
        && remaining_space > 0.0
        && frame.main_mode == MeasureMode::Exactly
    {
        justify_offsets(justify, remaining_space, items.len())
    } else {
        (0.0, 0.0)
    };
    trace!("layout_flex: leading={leading} between={between}");

    let (mut main_size, mut cross_size) = place_main(ctx, &frame, &items, leading, between);

    // =========================================================================
    // PASS 4: Exact constraints override content size
    // =========================================================================

    if frame.main_mode == MeasureMode::Exactly {
        main_size = frame.available_main;
    }
    if frame.cross_mode == MeasureMode::Exactly {
        cross_size = frame.available_cross;
    }

    // =========================================================================
    // PASS 5: Cross-axis alignment
    // =========================================================================

    align_cross(ctx, &frame, &items, cross_size);

    let (final_width, final_height) = match frame.main_axis {
        Axis::Row => (main_size, cross_size),
        Axis::Column => (cross_size, main_size),
    };
    trace!("layout_flex: {container:?} final size {final_width}x{final_height}");
    ctx.set_width(container, final_width);
    ctx.set_height(container, final_height);
}

// =============================================================================
// PASSES
// =============================================================================

fn collect_items<C: LayoutContext>(ctx: &C, container: C::Node) -> Vec<FlexItem<C::Node>> {
    (0..ctx.child_count(container))
        .map(|i| {
            let node = ctx.child_at(container, i);
            FlexItem {
                node,
                style: ctx.layout_params(node),
                basis: 0.0,
            }
        })
        .collect()
}

fn resolve_bases<C: LayoutContext>(
    ctx: &mut C,
    frame: &FlexFrame,
    items: &mut [FlexItem<C::Node>],
) -> FlexTotals {
    let mut totals = FlexTotals::default();
    let main_definite = is_definite(frame.available_main, frame.main_mode);

    for item in items.iter_mut() {
        item.basis = if let Some(size) = style_size(&item.style, frame.main_axis) {
            size
        } else if !is_flex_basis_auto(&item.style) && main_definite {
            0.0
        } else {
            let main = frame.child_constraint(&item.style, frame.main_axis);
            let cross = frame.child_constraint(&item.style, frame.cross_axis);
            layout_child(ctx, item.node, frame.main_axis, main, cross);
            layout_size(ctx, item.node, frame.main_axis)
        };

        totals.size_consumed += item.basis + margin_sum(&item.style, frame.main_axis);
        totals.grow += grow_factor(&item.style);
        totals.shrink_scaled += shrink_factor(&item.style) * item.basis;
    }

    totals
}

fn distribute<C: LayoutContext>(
    ctx: &mut C,
    config: &FlexConfig,
    frame: &FlexFrame,
    items: &mut [FlexItem<C::Node>],
    totals: &FlexTotals,
    remaining_space: f32,
) {
    for item in items.iter_mut() {
        if remaining_space < 0.0 {
            let shrink_scaled = shrink_factor(&item.style) * item.basis;
            if shrink_scaled != 0.0 && totals.shrink_scaled != 0.0 {
                item.basis += remaining_space / totals.shrink_scaled * shrink_scaled;
            }
        } else if remaining_space > 0.0 {
            let grow = grow_factor(&item.style);
            if grow != 0.0 && totals.grow != 0.0 {
                item.basis += remaining_space / totals.grow * grow;
            }
        }

        if config.clamp_negative_basis && item.basis < 0.0 {
            trace!("layout_flex: clamping {:?} basis {} to zero", item.node, item.basis);
            item.basis = 0.0;
        }

        let cross = frame.child_constraint(&item.style, frame.cross_axis);
        layout_child(
            ctx,
            item.node,
            frame.main_axis,
            (item.basis, MeasureMode::Exactly),
            cross,
        );
    }
}

/// Leading offset and inter-item gap for the free space left on the main axis.
fn justify_offsets(justify: Align, remaining_space: f32, count: usize) -> (f32, f32) {
    if count == 0 {
        return (0.0, 0.0);
    }
    match justify {
        Align::Center => (remaining_space / 2.0, 0.0),
        Align::End => (remaining_space, 0.0),
        Align::SpaceBetween if count > 1 => (0.0, remaining_space / (count - 1) as f32),
        Align::SpaceAround => {
            let gap = remaining_space / count as f32;
            (gap / 2.0, gap)
        }
        _ => (0.0, 0.0), // Start
    }
}

/// Position children along the main axis.
///
/// Returns the accumulated main size and the largest cross extent.
fn place_main<C: LayoutContext>(
    ctx: &mut C,
    frame: &FlexFrame,
    items: &[FlexItem<C::Node>],
    leading: f32,
    between: f32,
) -> (f32, f32) {
    let mut cursor = leading;
    let mut cross_size: f32 = 0.0;

    for item in items {
        let position = cursor + leading_margin(&item.style, frame.main_axis);
        set_position(ctx, item.node, frame.main_axis, position);

        cursor += between
            + layout_size(ctx, item.node, frame.main_axis)
            + margin_sum(&item.style, frame.main_axis);
        cross_size = cross_size.max(
            layout_size(ctx, item.node, frame.cross_axis)
                + margin_sum(&item.style, frame.cross_axis),
        );
    }

    (cursor, cross_size)
}

fn align_cross<C: LayoutContext>(
    ctx: &mut C,
    frame: &FlexFrame,
    items: &[FlexItem<C::Node>],
    cross_size: f32,
) {
    let cross_axis = frame.cross_axis;

    for item in items {
        let margins = margin_sum(&item.style, cross_axis);
        let leading = match item.style.align {
            Align::Stretch => {
                if style_size(&item.style, cross_axis).is_none() {
                    let main = layout_size(ctx, item.node, frame.main_axis);
                    let stretched = (cross_size - margins).max(0.0);
                    layout_child(
                        ctx,
                        item.node,
                        frame.main_axis,
                        (main, MeasureMode::Exactly),
                        (stretched, MeasureMode::Exactly),
                    );
                }
                0.0
            }
            Align::Center => (cross_size - layout_size(ctx, item.node, cross_axis) - margins) / 2.0,
            Align::End => cross_size - layout_size(ctx, item.node, cross_axis) - margins,
            _ => 0.0,
        };
        set_position(
            ctx,
            item.node,
            cross_axis,
            leading + leading_margin(&item.style, cross_axis),
        );
    }
}

// =============================================================================
// CONTEXT PLUMBING
// =============================================================================

/// Invoke the host's layout with constraints given per logical axis.
fn layout_child<C: LayoutContext>(
    ctx: &mut C,
    node: C::Node,
    main_axis: Axis,
    main: Constraint,
    cross: Constraint,
) {
    let ((width, width_mode), (height, height_mode)) = match main_axis {
        Axis::Row => (main, cross),
        Axis::Column => (cross, main),
    };
    ctx.layout(node, width, width_mode, height, height_mode);
}

fn set_position<C: LayoutContext>(ctx: &mut C, node: C::Node, axis: Axis, value: f32) {
    match axis {
        Axis::Row => ctx.set_x(node, value),
        Axis::Column => ctx.set_y(node, value),
    }
}
