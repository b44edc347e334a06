//! Errors raised by hosts when their side of the layout contract is broken.
//!
//! The layout pass itself never fails. Everything it depends on is either
//! enforced by types or checked once when a context is assembled.

use thiserror::Error;

use crate::engine::{Capabilities, NodeId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlexError {
    #[error("Layout context is missing required capabilities: {0:?}")]
    MissingCapabilities(Capabilities),
    #[error("Node {0:?} does not belong to this tree.")]
    UnknownNode(NodeId),
    #[error("Node {child:?} is already a child of {parent:?}.")]
    AlreadyParented { child: NodeId, parent: NodeId },
    #[error("Adding {child:?} under {parent:?} would create a cycle.")]
    CycleDetected { parent: NodeId, child: NodeId },
    #[error("Node {0:?} is a leaf and cannot hold children.")]
    NotAContainer(NodeId),
}

pub type Result<T> = std::result::Result<T, FlexError>;
