//! Adapter from `buttonkit_core` nodes to declarative in-view controls.
//!
//! The adapter is stateless: hosts call it on every view refresh and it walks
//! the tree again, evaluating every visibility predicate afresh.

use crate::core::{Action, Icon, IconResolver, LazyMenu, Node, NodeKind, RenderConfig, Section};

/// Builds the controls of a declarative view tree.
pub trait ControlBuilder<Image> {
    /// The control type of the view tree.
    type Control;

    /// Creates a tappable control. Tapping it must call [`Action::perform`]
    /// once.
    fn button(&mut self, title: &str, icon: Option<Image>, action: Action) -> Self::Control;

    /// Creates a control opening a menu whose children are grouped inline by
    /// section, in order.
    fn menu(
        &mut self,
        title: &str,
        icon: Option<Image>,
        sections: Vec<Vec<Self::Control>>,
    ) -> Self::Control;

    /// Creates a control that hands `menu` to an overlay adapter when tapped.
    fn lazy_menu(&mut self, title: &str, icon: Option<Image>, menu: LazyMenu) -> Self::Control;
}

/// Projects [`Node`]s into controls of a [`ControlBuilder`].
#[derive(Debug)]
pub struct Controls<'a, R> {
    resolver: &'a R,
    config: &'a RenderConfig,
}

impl<'a, R> Controls<'a, R>
where
    R: IconResolver,
{
    /// Creates a new [`Controls`] adapter.
    pub fn new(resolver: &'a R, config: &'a RenderConfig) -> Self {
        Self { resolver, config }
    }

    /// Renders a single node, or `None` if it is hidden.
    pub fn render<B>(&self, node: &Node, builder: &mut B) -> Option<B::Control>
    where
        B: ControlBuilder<R::Image>,
    {
        if !node.is_visible() {
            return None;
        }

        let icon = node.icon().and_then(|icon| self.resolver.resolve(icon));

        let control = match node.kind() {
            NodeKind::Action(action) => builder.button(node.title(), icon, action.clone()),
            NodeKind::Submenu(sections) => {
                let groups = self.sections(sections, builder);
                builder.menu(node.title(), icon.or_else(|| self.submenu_icon()), groups)
            }
            NodeKind::LazySubmenu(menu) => builder.lazy_menu(
                node.title(),
                icon.or_else(|| self.submenu_icon()),
                menu.clone(),
            ),
        };

        Some(control)
    }

    /// Renders the visible nodes among `nodes`, in order.
    pub fn render_all<B>(&self, nodes: &[Node], builder: &mut B) -> Vec<B::Control>
    where
        B: ControlBuilder<R::Image>,
    {
        nodes
            .iter()
            .filter_map(|node| self.render(node, builder))
            .collect()
    }

    fn sections<B>(&self, sections: &[Section], builder: &mut B) -> Vec<Vec<B::Control>>
    where
        B: ControlBuilder<R::Image>,
    {
        let mut groups = Vec::with_capacity(sections.len());

        for section in sections {
            let group: Vec<_> = section
                .items()
                .iter()
                .filter_map(|node| self.render(node, builder))
                .collect();

            if group.is_empty() && self.config.collapse_empty_sections {
                continue;
            }

            groups.push(group);
        }

        groups
    }

    fn submenu_icon(&self) -> Option<R::Image> {
        self.config
            .submenu_symbol
            .clone()
            .and_then(|name| self.resolver.resolve(&Icon::Symbol(name)))
    }
}
