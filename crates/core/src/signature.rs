//! Structural hashes of the visible part of a configuration tree.
//!
//! Hosts that materialize a tree once (native menus, toolbars) compare
//! signatures to decide whether a rebuild is needed. Lazy submenus are hashed
//! by their style only; their suppliers are not invoked.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHashSet;

use crate::{Node, NodeId, NodeKind, Section};

/// The visibility of a tree as observed by a single pass, and its signature.
///
/// Capturing evaluates every reachable predicate exactly once. A host that
/// builds from the snapshot afterwards sees the same visibility the
/// signature was computed from.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    signature: u64,
    visible: FxHashSet<NodeId>,
}

impl Snapshot {
    /// Walks the visible part of `roots`, evaluating each predicate once.
    ///
    /// The children of a hidden node are not visited.
    pub fn capture(roots: &[Node]) -> Self {
        let mut hasher = DefaultHasher::new();
        let mut visible = FxHashSet::default();

        for root in roots.iter().filter(|root| root.is_visible()) {
            hash_node(root, &mut hasher, &mut visible);
        }

        Self {
            signature: hasher.finish(),
            visible,
        }
    }

    /// The signature of the captured tree.
    #[must_use]
    pub fn signature(&self) -> u64 {
        self.signature
    }

    /// Returns `true` if `node` was visible when the snapshot was captured.
    ///
    /// Nodes the capture never reached are reported hidden.
    #[must_use]
    pub fn is_visible(&self, node: &Node) -> bool {
        self.visible.contains(&node.id())
    }
}

/// Computes the signature of the visible nodes among `roots`.
///
/// Node ids are part of the signature: two trees with equal titles but
/// different nodes bind different actions.
pub fn signature(roots: &[Node]) -> u64 {
    Snapshot::capture(roots).signature()
}

fn hash_node(node: &Node, hasher: &mut impl Hasher, visible: &mut FxHashSet<NodeId>) {
    let _ = visible.insert(node.id());

    node.id().hash(hasher);
    node.title().hash(hasher);
    node.icon().hash(hasher);

    match node.kind() {
        NodeKind::Action(_) => {
            0u8.hash(hasher);
        }
        NodeKind::Submenu(sections) => {
            1u8.hash(hasher);
            hash_sections(sections, hasher, visible);
        }
        NodeKind::LazySubmenu(menu) => {
            2u8.hash(hasher);
            menu.style().hash(hasher);
        }
    }
}

fn hash_sections(sections: &[Section], hasher: &mut impl Hasher, visible: &mut FxHashSet<NodeId>) {
    sections.len().hash(hasher);

    for section in sections {
        section.id().hash(hasher);

        for node in section.visible_items() {
            hash_node(node, hasher, visible);
        }

        // Section boundary.
        u8::MAX.hash(hasher);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_signature_is_stable() {
        let roots = vec![Node::menu(
            "File",
            vec![Node::action("Open", || {}), Node::action("Save", || {})],
        )];

        assert_eq!(signature(&roots), signature(&roots));
    }

    #[test]
    fn test_signature_tracks_visibility() {
        let shown = Rc::new(Cell::new(true));
        let flag = Rc::clone(&shown);

        let roots = vec![Node::menu(
            "Edit",
            vec![
                Node::action("Undo", || {}),
                Node::action("Paste", || {}).visible_when(move || flag.get()),
            ],
        )];

        let before = signature(&roots);
        shown.set(false);
        let after = signature(&roots);

        assert_ne!(before, after);
    }

    #[test]
    fn test_capture_evaluates_each_predicate_once() {
        let calls = Rc::new(Cell::new(0));
        let count = |calls: &Rc<Cell<usize>>| {
            let calls = Rc::clone(calls);
            move || {
                calls.set(calls.get() + 1);
                true
            }
        };

        let roots = vec![
            Node::menu(
                "View",
                vec![
                    Node::action("Zoom", || {}).visible_when(count(&calls)),
                    Node::menu("Panels", vec![Node::action("Log", || {}).visible_when(count(&calls))])
                        .visible_when(count(&calls)),
                ],
            )
            .visible_when(count(&calls)),
        ];

        let snapshot = Snapshot::capture(&roots);

        assert_eq!(calls.get(), 4);
        assert!(snapshot.is_visible(&roots[0]));
        assert_eq!(snapshot.signature(), signature(&roots));
    }

    #[test]
    fn test_hidden_subtree_is_not_captured() {
        let child = Rc::new(Cell::new(false));
        let probe = Rc::clone(&child);

        let roots = vec![
            Node::menu(
                "Admin",
                vec![Node::action("Wipe", || {}).visible_when(move || {
                    probe.set(true);
                    true
                })],
            )
            .visible_when(|| false),
        ];

        let snapshot = Snapshot::capture(&roots);

        assert!(!snapshot.is_visible(&roots[0]));
        assert!(!child.get());
    }
}
