//! Toolbar bar items and standalone buttons.
//!
//! A bar item or button either performs an action directly, carries an
//! attached native menu, or hands a lazy menu to the overlay adapter.

use crate::action_table::ActionHandle;
use crate::core::{IconResolver, LazyMenu, Node, NodeKind};
use crate::menu::{MenuOptions, NativeMenuBuilder, NativeMenus};

/// What a bar item or button does when pressed.
#[derive(Debug)]
pub enum Primary<Element> {
    /// Activates the bound action.
    Action(ActionHandle),
    /// Opens the attached, untitled menu.
    Menu(Element),
    /// Presents a lazily supplied menu through an overlay.
    Deferred(LazyMenu),
}

/// Builds toolbar items and buttons on top of a [`NativeMenuBuilder`].
pub trait BarItemBuilder<Image>: NativeMenuBuilder<Image> {
    /// The toolbar item type.
    type BarItem;

    /// The standalone button type.
    type Button;

    /// Creates a toolbar item.
    fn bar_item(
        &mut self,
        title: &str,
        image: Option<Image>,
        primary: Primary<Self::Element>,
    ) -> Self::BarItem;

    /// Creates a standalone button.
    fn button(
        &mut self,
        title: &str,
        image: Option<Image>,
        primary: Primary<Self::Element>,
    ) -> Self::Button;
}

impl<R> NativeMenus<'_, R>
where
    R: IconResolver,
{
    /// Builds a toolbar item for a node, or `None` if it is hidden.
    pub fn bar_item<B>(&self, node: &Node, builder: &mut B) -> Option<B::BarItem>
    where
        B: BarItemBuilder<R::Image>,
    {
        if !self.is_visible(node) {
            return None;
        }

        let image = node.icon().and_then(|icon| self.resolver.resolve(icon));
        let primary = self.primary(node, builder);

        Some(builder.bar_item(node.title(), image, primary))
    }

    /// Builds a standalone button for a node, or `None` if it is hidden.
    pub fn button<B>(&self, node: &Node, builder: &mut B) -> Option<B::Button>
    where
        B: BarItemBuilder<R::Image>,
    {
        if !self.is_visible(node) {
            return None;
        }

        let image = node.icon().and_then(|icon| self.resolver.resolve(icon));
        let primary = self.primary(node, builder);

        Some(builder.button(node.title(), image, primary))
    }

    fn primary<B>(&self, node: &Node, builder: &mut B) -> Primary<B::Element>
    where
        B: BarItemBuilder<R::Image>,
    {
        match node.kind() {
            NodeKind::Action(action) => {
                Primary::Action(builder.action_table().bind(node.id(), action.clone()))
            }
            NodeKind::Submenu(sections) => {
                let children = self.children(sections, builder);
                Primary::Menu(builder.menu("", None, MenuOptions::empty(), children))
            }
            NodeKind::LazySubmenu(menu) => Primary::Deferred(menu.clone()),
        }
    }
}
