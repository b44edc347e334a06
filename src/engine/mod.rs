//! Layout Engine - host-side plumbing for the flex pass.
//!
//! The engine holds everything that sits between a widget tree and the
//! layout algorithm:
//! - LayoutContext: the capability set the pass talks to
//! - CallbackContext: a capability table built from closures, validated once
//! - FlexTree: an arena-backed tree implementing the capability set
//!
//! # Architecture
//!
//! Nodes are NOT objects handed to the algorithm. They are opaque handles the
//! host resolves:
//!
//! ```text
//! layout_flex(ctx, container)
//!   ├── ctx.child_at(container, i)  → handle
//!   ├── ctx.layout_params(handle)   → ItemStyle
//!   └── ctx.layout(handle, ...)     → host recurses (leaf measure or nested flex)
//! ```

mod callbacks;
mod context;
mod tree;

pub use callbacks::*;
pub use context::*;
pub use tree::*;
