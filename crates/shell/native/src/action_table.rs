//! The explicit handle-to-closure table behind native menu elements.
//!
//! Native menu objects only carry a small [`ActionHandle`]; activating an
//! element looks its action up here.

use rustc_hash::FxHashMap;

use crate::Error;
use crate::core::{Action, NodeId};

/// A reference from a native element to its bound action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionHandle {
    id: NodeId,
    generation: u64,
}

impl ActionHandle {
    /// The node the action belongs to.
    #[must_use]
    pub fn id(self) -> NodeId {
        self.id
    }

    /// Packs the handle into a tag for native objects that store an integer.
    #[must_use]
    pub fn tag(self) -> u64 {
        self.id.as_u64()
    }
}

/// Maps handles of native elements to the actions they trigger.
///
/// Actions are keyed by tag, so an activation that only carries the integer
/// tag of a native object resolves without a scan.
#[derive(Debug, Default)]
pub struct ActionTable {
    actions: FxHashMap<u64, (NodeId, Action)>,
    generation: u64,
}

impl ActionTable {
    /// Creates an empty [`ActionTable`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `action` to the node `id` and returns the handle to embed in the
    /// native element.
    pub fn bind(&mut self, id: NodeId, action: Action) -> ActionHandle {
        let _ = self.actions.insert(id.as_u64(), (id, action));

        ActionHandle {
            id,
            generation: self.generation,
        }
    }

    /// Performs the action bound to `handle` exactly once.
    pub fn activate(&self, handle: ActionHandle) -> Result<(), Error> {
        if handle.generation != self.generation {
            return Err(Error::Stale {
                id: handle.id,
                handle: handle.generation,
                current: self.generation,
            });
        }

        let (_, action) = self
            .actions
            .get(&handle.tag())
            .ok_or(Error::UnknownAction(handle.id))?;

        log::trace!("Activating native menu action {}", handle.id);
        action.perform();

        Ok(())
    }

    /// Finds the handle currently bound to a native tag.
    pub fn lookup(&self, tag: u64) -> Option<ActionHandle> {
        self.actions.get(&tag).map(|&(id, _)| ActionHandle {
            id,
            generation: self.generation,
        })
    }

    /// Unbinds every action. Handles issued before become stale.
    pub fn clear(&mut self) {
        self.actions.clear();
        self.generation += 1;
    }

    /// The number of bound actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if no action is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
