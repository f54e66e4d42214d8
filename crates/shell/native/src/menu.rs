//! Adapter from `buttonkit_core` nodes to native menu elements.
//!
//! Native menus are built once when a menu or toolbar item is materialized.
//! Sections become inline groups of the parent menu, set off by separators,
//! never an extra level of navigation. Targets without inline groups can
//! receive a flat list with explicit separators instead, see
//! [`RenderConfig::native_inline_sections`].

use bitflags::bitflags;

use crate::action_table::{ActionHandle, ActionTable};
use crate::core::{Icon, IconResolver, LazyMenu, Node, NodeKind, RenderConfig, Section, Snapshot};

bitflags! {
    /// Options of a native menu element.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MenuOptions: u8 {
        /// The children are displayed inline in the parent menu.
        const DISPLAY_INLINE = 1 << 0;
    }
}

/// Builds the elements of a native menu.
pub trait NativeMenuBuilder<Image> {
    /// The native menu element type.
    type Element;

    /// The table binding native elements to their actions.
    fn action_table(&mut self) -> &mut ActionTable;

    /// Creates a selectable element. Selecting it must activate `handle`
    /// through the [`ActionTable`].
    fn action(&mut self, title: &str, image: Option<Image>, handle: ActionHandle)
    -> Self::Element;

    /// Creates a menu element holding `children` in order.
    fn menu(
        &mut self,
        title: &str,
        image: Option<Image>,
        options: MenuOptions,
        children: Vec<Self::Element>,
    ) -> Self::Element;

    /// Creates an element handing `menu` to an overlay adapter when selected.
    fn deferred(&mut self, title: &str, image: Option<Image>, menu: LazyMenu) -> Self::Element;

    /// Creates a separator between two flat groups.
    fn separator(&mut self) -> Self::Element;
}

/// Projects [`Node`]s into elements of a [`NativeMenuBuilder`].
#[derive(Debug)]
pub struct NativeMenus<'a, R> {
    pub(crate) resolver: &'a R,
    pub(crate) config: &'a RenderConfig,
    snapshot: Option<&'a Snapshot>,
}

impl<'a, R> NativeMenus<'a, R>
where
    R: IconResolver,
{
    /// Creates a new [`NativeMenus`] adapter.
    pub fn new(resolver: &'a R, config: &'a RenderConfig) -> Self {
        Self {
            resolver,
            config,
            snapshot: None,
        }
    }

    /// Takes visibility from `snapshot` instead of evaluating predicates.
    ///
    /// Nodes the snapshot did not reach are treated as hidden.
    #[must_use]
    pub fn with_snapshot(mut self, snapshot: &'a Snapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    pub(crate) fn is_visible(&self, node: &Node) -> bool {
        match self.snapshot {
            Some(snapshot) => snapshot.is_visible(node),
            None => node.is_visible(),
        }
    }

    /// Builds the element of a node, or `None` if it is hidden.
    ///
    /// Actions are bound in the builder's [`ActionTable`] as they are built.
    pub fn element<B>(&self, node: &Node, builder: &mut B) -> Option<B::Element>
    where
        B: NativeMenuBuilder<R::Image>,
    {
        if !self.is_visible(node) {
            return None;
        }

        let image = node.icon().and_then(|icon| self.resolver.resolve(icon));

        let element = match node.kind() {
            NodeKind::Action(action) => {
                let handle = builder.action_table().bind(node.id(), action.clone());
                builder.action(node.title(), image, handle)
            }
            NodeKind::Submenu(sections) => {
                let children = self.children(sections, builder);
                builder.menu(
                    node.title(),
                    image.or_else(|| self.submenu_image()),
                    MenuOptions::empty(),
                    children,
                )
            }
            NodeKind::LazySubmenu(menu) => builder.deferred(
                node.title(),
                image.or_else(|| self.submenu_image()),
                menu.clone(),
            ),
        };

        Some(element)
    }

    /// Builds the children of a menu from its sections.
    ///
    /// A single group is returned as is: one section means no grouping.
    pub fn children<B>(&self, sections: &[Section], builder: &mut B) -> Vec<B::Element>
    where
        B: NativeMenuBuilder<R::Image>,
    {
        let mut groups: Vec<Vec<B::Element>> = Vec::with_capacity(sections.len());

        for section in sections {
            let group: Vec<_> = section
                .items()
                .iter()
                .filter_map(|node| self.element(node, builder))
                .collect();

            if group.is_empty() && self.config.collapse_empty_sections {
                continue;
            }

            groups.push(group);
        }

        if groups.len() == 1 {
            return groups.pop().unwrap_or_default();
        }

        if self.config.native_inline_sections {
            groups
                .into_iter()
                .map(|group| builder.menu("", None, MenuOptions::DISPLAY_INLINE, group))
                .collect()
        } else {
            let mut flat = Vec::new();

            for (index, group) in groups.into_iter().enumerate() {
                if index > 0 {
                    flat.push(builder.separator());
                }
                flat.extend(group);
            }

            flat
        }
    }

    fn submenu_image(&self) -> Option<R::Image> {
        self.config
            .submenu_symbol
            .clone()
            .and_then(|name| self.resolver.resolve(&Icon::Symbol(name)))
    }
}
