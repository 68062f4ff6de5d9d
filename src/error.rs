use thiserror::Error;

use crate::arena::NodeId;

/// Convenience alias for results produced by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Contract violations reported by a [`Tree`][crate::arena::Tree].
///
/// A value that simply isn't in the tree is never an error. Lookups return `None` for that.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The id was not handed out by this tree.
    #[error("node {0:?} does not belong to this tree")]
    UnknownNode(NodeId),

    /// Only standalone nodes can be inserted.
    #[error("node {0:?} is already linked into the tree")]
    AlreadyLinked(NodeId),

    /// The root was found with a parent link.
    #[error("root {0:?} has a parent")]
    RootHasParent(NodeId),

    /// A child link doesn't point back at its parent.
    #[error("node {child:?} is a child of {parent:?} but does not link back to it")]
    BrokenParentLink {
        /// The child whose `parent` is wrong.
        child: NodeId,
        /// The node holding `child` in one of its slots.
        parent: NodeId,
    },

    /// A value sits on the wrong side of one of its ancestors.
    #[error("value of node {0:?} is out of order")]
    OrderViolation(NodeId),

    /// The nodes reachable from the root don't match the tree's count. This also catches cycles.
    #[error("expected {expected} reachable nodes but found {found}")]
    CountMismatch {
        /// How many nodes the tree believes are attached.
        expected: usize,
        /// How many were reached (the walk stops early on a cycle).
        found: usize,
    },
}
