//! Axis and sizing helpers.
//!
//! Pure accessors mapping a logical axis onto an item's style or a node's
//! geometry. No state, no side effects.

use crate::engine::LayoutContext;
use crate::types::{Axis, ItemStyle, MeasureMode};

#[inline]
pub(crate) fn leading_margin(style: &ItemStyle, axis: Axis) -> f32 {
    match axis {
        Axis::Row => style.margin.left,
        Axis::Column => style.margin.top,
    }
}

#[inline]
pub(crate) fn trailing_margin(style: &ItemStyle, axis: Axis) -> f32 {
    match axis {
        Axis::Row => style.margin.right,
        Axis::Column => style.margin.bottom,
    }
}

/// Leading plus trailing margin along `axis`.
#[inline]
pub(crate) fn margin_sum(style: &ItemStyle, axis: Axis) -> f32 {
    leading_margin(style, axis) + trailing_margin(style, axis)
}

/// The item's declared size along `axis`, if definite.
///
/// Fields written directly with a non-finite value count as undefined.
#[inline]
pub(crate) fn style_size(style: &ItemStyle, axis: Axis) -> Option<f32> {
    let size = match axis {
        Axis::Row => style.width,
        Axis::Column => style.height,
    };
    size.filter(|v| v.is_finite())
}

/// The node's current size along `axis`, as last written by layout.
#[inline]
pub(crate) fn layout_size<C: LayoutContext>(ctx: &C, node: C::Node, axis: Axis) -> f32 {
    match axis {
        Axis::Row => ctx.width(node),
        Axis::Column => ctx.height(node),
    }
}

#[inline]
pub(crate) fn grow_factor(style: &ItemStyle) -> f32 {
    style.flex.max(0.0)
}

/// Shrink eligibility: negative flex gives a fixed weight of one.
#[inline]
pub(crate) fn shrink_factor(style: &ItemStyle) -> f32 {
    if style.flex < 0.0 { 1.0 } else { 0.0 }
}

/// Whether the item sizes its basis from content rather than from free space.
#[inline]
pub(crate) fn is_flex_basis_auto(style: &ItemStyle) -> bool {
    style.flex <= 0.0
}

/// An available size is usable for distribution only when it is bounded,
/// finite and nonzero.
#[inline]
pub(crate) fn is_definite(size: f32, mode: MeasureMode) -> bool {
    mode != MeasureMode::Unspecified && size.is_finite() && size != 0.0
}
