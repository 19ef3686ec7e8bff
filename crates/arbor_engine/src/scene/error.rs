//! Scene graph error types

use crate::scene::object::ObjectId;

/// Errors produced by scene graph operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The object id does not refer to a live object
    #[error("object {0:?} is not alive in this scene")]
    ObjectNotAlive(ObjectId),

    /// A component index was out of range for the owner's component list
    #[error("component index {index} out of range for object {owner:?} ({len} components)")]
    ComponentIndexOutOfRange {
        /// Object whose component list was addressed
        owner: ObjectId,
        /// Offending index
        index: usize,
        /// Component count at the time of the request
        len: usize,
    },

    /// Attaching the child would make it its own ancestor
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    WouldCreateCycle {
        /// Prospective parent
        parent: ObjectId,
        /// Subtree root being attached
        child: ObjectId,
    },

    /// The object is already attached to a parent or registered as a root
    #[error("object {0:?} is already attached to the scene")]
    AlreadyAttached(ObjectId),
}
