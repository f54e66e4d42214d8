use crate::core::NodeId;

/// Errors that can occur while activating native menu elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No action is bound to the node.
    #[error("no action is bound to node {0}")]
    UnknownAction(NodeId),
    /// The handle belongs to a menu that has since been rebuilt.
    #[error("handle for node {id} is from generation {handle}, the table is at {current}")]
    Stale {
        /// The node the handle was issued for.
        id: NodeId,
        /// Generation of the handle.
        handle: u64,
        /// Current generation of the table.
        current: u64,
    },
}
