//! Flattened, plain-data snapshots of a configuration tree.
//!
//! Targets without native sections receive a [`MenuEntry`] list: every
//! section becomes an inline run of entries, and consecutive runs are split
//! by a [`MenuEntry::Separator`]. Sections never add a navigation level.

use rustc_hash::FxHashMap;

use crate::config::RenderConfig;
use crate::{Action, IconResolver, LazyMenu, MenuPresentationStyle, NodeId, NodeKind, Section};

/// A visible item of a flattened menu.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry<Image> {
    /// A selectable leaf.
    Action {
        /// The node this entry was projected from.
        id: NodeId,
        /// The title of the node.
        title: String,
        /// The resolved icon.
        icon: Option<Image>,
    },

    /// A nested menu with fixed, already flattened children.
    Submenu {
        /// The node this entry was projected from.
        id: NodeId,
        /// The title of the node.
        title: String,
        /// The resolved icon.
        icon: Option<Image>,
        /// The flattened visible children.
        children: Vec<MenuEntry<Image>>,
    },

    /// A nested menu whose content is supplied when it is opened.
    Deferred {
        /// The node this entry was projected from.
        id: NodeId,
        /// The title of the node.
        title: String,
        /// The resolved icon.
        icon: Option<Image>,
        /// The presentation hints of the lazy menu.
        style: MenuPresentationStyle,
    },

    /// The boundary between two sections.
    Separator,
}

impl<Image> MenuEntry<Image> {
    /// The node id of this entry, `None` for separators.
    #[must_use]
    pub fn id(&self) -> Option<NodeId> {
        match self {
            MenuEntry::Action { id, .. }
            | MenuEntry::Submenu { id, .. }
            | MenuEntry::Deferred { id, .. } => Some(*id),
            MenuEntry::Separator => None,
        }
    }

    /// The title of this entry, `None` for separators.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            MenuEntry::Action { title, .. }
            | MenuEntry::Submenu { title, .. }
            | MenuEntry::Deferred { title, .. } => Some(title),
            MenuEntry::Separator => None,
        }
    }

    /// Returns `true` if this entry is a separator.
    #[must_use]
    pub fn is_separator(&self) -> bool {
        matches!(self, MenuEntry::Separator)
    }
}

/// The result of flattening a list of sections.
///
/// Alongside the entries it keeps the actions and lazy menus reachable from
/// them, keyed by node id, so a selection can be routed without walking the
/// tree again.
#[derive(Debug)]
pub struct Flattened<Image> {
    /// The visible entries, in order.
    pub entries: Vec<MenuEntry<Image>>,
    /// The actions of every visible leaf, at any depth.
    pub actions: FxHashMap<NodeId, Action>,
    /// The lazy menus of every visible deferred entry, at any depth.
    pub deferred: FxHashMap<NodeId, LazyMenu>,
}

/// Flattens `sections` into entries, evaluating visibility on the way.
///
/// The children of a hidden node are skipped without evaluating their
/// predicates. Lazy submenus are not supplied.
pub fn flatten<R>(sections: &[Section], resolver: &R, config: &RenderConfig) -> Flattened<R::Image>
where
    R: IconResolver,
{
    let mut actions = FxHashMap::default();
    let mut deferred = FxHashMap::default();
    let entries = flatten_into(sections, resolver, config, &mut actions, &mut deferred);

    Flattened {
        entries,
        actions,
        deferred,
    }
}

fn flatten_into<R>(
    sections: &[Section],
    resolver: &R,
    config: &RenderConfig,
    actions: &mut FxHashMap<NodeId, Action>,
    deferred: &mut FxHashMap<NodeId, LazyMenu>,
) -> Vec<MenuEntry<R::Image>>
where
    R: IconResolver,
{
    let mut out = Vec::new();

    for (index, section) in sections.iter().enumerate() {
        let group: Vec<_> = section
            .visible_items()
            .map(|node| {
                let id = node.id();
                let title = node.title().to_owned();
                let icon = node.icon().and_then(|icon| resolver.resolve(icon));

                match node.kind() {
                    NodeKind::Action(action) => {
                        let _ = actions.insert(id, action.clone());
                        MenuEntry::Action { id, title, icon }
                    }
                    NodeKind::Submenu(children) => MenuEntry::Submenu {
                        id,
                        title,
                        icon,
                        children: flatten_into(children, resolver, config, actions, deferred),
                    },
                    NodeKind::LazySubmenu(menu) => {
                        let _ = deferred.insert(id, menu.clone());
                        MenuEntry::Deferred {
                            id,
                            title,
                            icon,
                            style: menu.style(),
                        }
                    }
                }
            })
            .collect();

        if group.is_empty() && config.collapse_empty_sections {
            continue;
        }

        let needs_separator = if config.collapse_empty_sections {
            !out.is_empty()
        } else {
            index > 0
        };

        if needs_separator {
            out.push(MenuEntry::Separator);
        }

        out.extend(group);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Descriptors, Node};
    use std::cell::Cell;
    use std::rc::Rc;

    fn titles<I>(entries: &[MenuEntry<I>]) -> Vec<&str> {
        entries
            .iter()
            .map(|entry| entry.title().unwrap_or("---"))
            .collect()
    }

    #[test]
    fn test_sections_flatten_with_separator() {
        let sections = vec![
            Section::new(vec![Node::action("A", || {}), Node::action("B", || {})]),
            Section::new(vec![Node::action("C", || {})]),
        ];

        let flat = flatten(&sections, &Descriptors, &RenderConfig::default());

        assert_eq!(titles(&flat.entries), ["A", "B", "---", "C"]);
        assert_eq!(flat.actions.len(), 3);
    }

    #[test]
    fn test_single_section_has_no_separator() {
        let sections = vec![Section::new(vec![
            Node::action("A", || {}),
            Node::action("B", || {}),
        ])];

        let flat = flatten(&sections, &Descriptors, &RenderConfig::default());
        assert!(flat.entries.iter().all(|entry| !entry.is_separator()));
    }

    #[test]
    fn test_empty_sections_collapse() {
        let sections = vec![
            Section::new(vec![Node::action("A", || {})]),
            Section::new(vec![Node::action("Hidden", || {}).visible_when(|| false)]),
            Section::new(vec![Node::action("C", || {})]),
        ];

        let flat = flatten(&sections, &Descriptors, &RenderConfig::default());
        assert_eq!(titles(&flat.entries), ["A", "---", "C"]);

        let config = RenderConfig {
            collapse_empty_sections: false,
            ..RenderConfig::default()
        };
        let flat = flatten(&sections, &Descriptors, &config);
        assert_eq!(titles(&flat.entries), ["A", "---", "---", "C"]);
    }

    #[test]
    fn test_hidden_submenu_children_are_not_evaluated() {
        let evaluated = Rc::new(Cell::new(false));
        let flag = Rc::clone(&evaluated);

        let sections = vec![Section::new(vec![
            Node::menu(
                "Hidden",
                vec![Node::action("Inner", || {}).visible_when(move || {
                    flag.set(true);
                    true
                })],
            )
            .visible_when(|| false),
        ])];

        let flat = flatten(&sections, &Descriptors, &RenderConfig::default());

        assert!(flat.entries.is_empty());
        assert!(flat.actions.is_empty());
        assert!(!evaluated.get());
    }

    #[test]
    fn test_lazy_submenu_is_not_supplied() {
        let supplied = Rc::new(Cell::new(0));
        let counter = Rc::clone(&supplied);

        let sections = vec![Section::new(vec![Node::lazy_submenu(
            "More",
            LazyMenu::new(MenuPresentationStyle::KeyboardAccessory, move || {
                counter.set(counter.get() + 1);
                Vec::new()
            }),
        )])];

        let flat = flatten(&sections, &Descriptors, &RenderConfig::default());

        assert_eq!(supplied.get(), 0);
        assert_eq!(flat.deferred.len(), 1);
        assert!(matches!(
            flat.entries[0],
            MenuEntry::Deferred {
                style: MenuPresentationStyle::KeyboardAccessory,
                ..
            }
        ));
    }
}
