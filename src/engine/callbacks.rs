//! CallbackContext - a layout context assembled from individual closures.
//!
//! For hosts that cannot implement [`LayoutContext`] on a single type, the
//! capability table can be wired one closure at a time. The table is checked
//! for completeness once, in [`CallbackContextBuilder::build`], so a missing
//! entry is reported up front instead of surfacing mid-layout.
//!
//! # Example
//!
//! ```
//! use spark_flex::engine::{CallbackContext, Capabilities};
//! use spark_flex::FlexError;
//!
//! let err = CallbackContext::<usize>::builder()
//!     .set_x(|_, _| {})
//!     .set_y(|_, _| {})
//!     .build()
//!     .err();
//!
//! let Some(FlexError::MissingCapabilities(missing)) = err else { panic!() };
//! assert!(missing.contains(Capabilities::LAYOUT));
//! assert!(!missing.contains(Capabilities::SET_X));
//! ```

use std::fmt::Debug;

use crate::engine::LayoutContext;
use crate::error::{FlexError, Result};
use crate::types::{ItemStyle, MeasureMode};

bitflags::bitflags! {
    /// The entries of a layout capability table.
    ///
    /// `Capabilities::all()` is a complete table.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u16 {
        const SET_X = 1 << 0;
        const SET_Y = 1 << 1;
        const GET_WIDTH = 1 << 2;
        const SET_WIDTH = 1 << 3;
        const GET_HEIGHT = 1 << 4;
        const SET_HEIGHT = 1 << 5;
        const LAYOUT = 1 << 6;
        const CHILD_COUNT = 1 << 7;
        const CHILD_AT = 1 << 8;
        const LAYOUT_PARAMS = 1 << 9;
    }
}

type SetFn<'a, N> = Box<dyn FnMut(N, f32) + 'a>;
type GetFn<'a, N> = Box<dyn Fn(N) -> f32 + 'a>;
type LayoutFn<'a, N> = Box<dyn FnMut(N, f32, MeasureMode, f32, MeasureMode) + 'a>;
type ChildCountFn<'a, N> = Box<dyn Fn(N) -> usize + 'a>;
type ChildAtFn<'a, N> = Box<dyn Fn(N, usize) -> N + 'a>;
type ParamsFn<'a, N> = Box<dyn Fn(N) -> ItemStyle + 'a>;

/// A complete, validated capability table.
pub struct CallbackContext<'a, N> {
    set_x: SetFn<'a, N>,
    set_y: SetFn<'a, N>,
    get_width: GetFn<'a, N>,
    set_width: SetFn<'a, N>,
    get_height: GetFn<'a, N>,
    set_height: SetFn<'a, N>,
    layout: LayoutFn<'a, N>,
    child_count: ChildCountFn<'a, N>,
    child_at: ChildAtFn<'a, N>,
    layout_params: ParamsFn<'a, N>,
}

impl<'a, N: Copy + Debug> CallbackContext<'a, N> {
    pub fn builder() -> CallbackContextBuilder<'a, N> {
        CallbackContextBuilder::new()
    }
}

impl<N: Copy + Debug> LayoutContext for CallbackContext<'_, N> {
    type Node = N;

    fn set_x(&mut self, node: N, x: f32) {
        (self.set_x)(node, x)
    }

    fn set_y(&mut self, node: N, y: f32) {
        (self.set_y)(node, y)
    }

    fn width(&self, node: N) -> f32 {
        (self.get_width)(node)
    }

    fn set_width(&mut self, node: N, width: f32) {
        (self.set_width)(node, width)
    }

    fn height(&self, node: N) -> f32 {
        (self.get_height)(node)
    }

    fn set_height(&mut self, node: N, height: f32) {
        (self.set_height)(node, height)
    }

    fn layout(
        &mut self,
        node: N,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) {
        (self.layout)(node, width, width_mode, height, height_mode)
    }

    fn child_count(&self, container: N) -> usize {
        (self.child_count)(container)
    }

    fn child_at(&self, container: N, index: usize) -> N {
        (self.child_at)(container, index)
    }

    fn layout_params(&self, node: N) -> ItemStyle {
        (self.layout_params)(node)
    }
}

/// Collects capability closures for a [`CallbackContext`].
pub struct CallbackContextBuilder<'a, N> {
    set_x: Option<SetFn<'a, N>>,
    set_y: Option<SetFn<'a, N>>,
    get_width: Option<GetFn<'a, N>>,
    set_width: Option<SetFn<'a, N>>,
    get_height: Option<GetFn<'a, N>>,
    set_height: Option<SetFn<'a, N>>,
    layout: Option<LayoutFn<'a, N>>,
    child_count: Option<ChildCountFn<'a, N>>,
    child_at: Option<ChildAtFn<'a, N>>,
    layout_params: Option<ParamsFn<'a, N>>,
}

impl<'a, N: Copy + Debug> Default for CallbackContextBuilder<'a, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, N: Copy + Debug> CallbackContextBuilder<'a, N> {
    pub fn new() -> Self {
        Self {
            set_x: None,
            set_y: None,
            get_width: None,
            set_width: None,
            get_height: None,
            set_height: None,
            layout: None,
            child_count: None,
            child_at: None,
            layout_params: None,
        }
    }

    pub fn set_x(mut self, f: impl FnMut(N, f32) + 'a) -> Self {
        self.set_x = Some(Box::new(f));
        self
    }

    pub fn set_y(mut self, f: impl FnMut(N, f32) + 'a) -> Self {
        self.set_y = Some(Box::new(f));
        self
    }

    pub fn get_width(mut self, f: impl Fn(N) -> f32 + 'a) -> Self {
        self.get_width = Some(Box::new(f));
        self
    }

    pub fn set_width(mut self, f: impl FnMut(N, f32) + 'a) -> Self {
        self.set_width = Some(Box::new(f));
        self
    }

    pub fn get_height(mut self, f: impl Fn(N) -> f32 + 'a) -> Self {
        self.get_height = Some(Box::new(f));
        self
    }

    pub fn set_height(mut self, f: impl FnMut(N, f32) + 'a) -> Self {
        self.set_height = Some(Box::new(f));
        self
    }

    pub fn layout(
        mut self,
        f: impl FnMut(N, f32, MeasureMode, f32, MeasureMode) + 'a,
    ) -> Self {
        self.layout = Some(Box::new(f));
        self
    }

    pub fn child_count(mut self, f: impl Fn(N) -> usize + 'a) -> Self {
        self.child_count = Some(Box::new(f));
        self
    }

    pub fn child_at(mut self, f: impl Fn(N, usize) -> N + 'a) -> Self {
        self.child_at = Some(Box::new(f));
        self
    }

    pub fn layout_params(mut self, f: impl Fn(N) -> ItemStyle + 'a) -> Self {
        self.layout_params = Some(Box::new(f));
        self
    }

    /// Capabilities wired so far.
    pub fn provided(&self) -> Capabilities {
        let mut caps = Capabilities::empty();
        caps.set(Capabilities::SET_X, self.set_x.is_some());
        caps.set(Capabilities::SET_Y, self.set_y.is_some());
        caps.set(Capabilities::GET_WIDTH, self.get_width.is_some());
        caps.set(Capabilities::SET_WIDTH, self.set_width.is_some());
        caps.set(Capabilities::GET_HEIGHT, self.get_height.is_some());
        caps.set(Capabilities::SET_HEIGHT, self.set_height.is_some());
        caps.set(Capabilities::LAYOUT, self.layout.is_some());
        caps.set(Capabilities::CHILD_COUNT, self.child_count.is_some());
        caps.set(Capabilities::CHILD_AT, self.child_at.is_some());
        caps.set(Capabilities::LAYOUT_PARAMS, self.layout_params.is_some());
        caps
    }

    /// Finish the table, failing with every missing entry if incomplete.
    pub fn build(self) -> Result<CallbackContext<'a, N>> {
        let missing = Capabilities::all().difference(self.provided());

        let (
            Some(set_x),
            Some(set_y),
            Some(get_width),
            Some(set_width),
            Some(get_height),
            Some(set_height),
            Some(layout),
            Some(child_count),
            Some(child_at),
            Some(layout_params),
        ) = (
            self.set_x,
            self.set_y,
            self.get_width,
            self.set_width,
            self.get_height,
            self.set_height,
            self.layout,
            self.child_count,
            self.child_at,
            self.layout_params,
        )
        else {
            log::warn!("layout context rejected, missing {missing:?}");
            return Err(FlexError::MissingCapabilities(missing));
        };

        Ok(CallbackContext {
            set_x,
            set_y,
            get_width,
            set_width,
            get_height,
            set_height,
            layout,
            child_count,
            child_at,
            layout_params,
        })
    }
}
