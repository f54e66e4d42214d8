//! A materialized native menu kept in sync with its configuration tree.

use crate::Error;
use crate::action_table::ActionHandle;
use crate::core::{IconResolver, Node, RenderConfig, Snapshot};
use crate::menu::{MenuOptions, NativeMenuBuilder, NativeMenus};

/// Owns an installed native menu and rebuilds it when the visible tree
/// changes.
///
/// Rebuilding clears the builder's action table, so handles of the previous
/// menu become stale and cannot trigger actions of nodes no longer shown.
#[allow(missing_debug_implementations)]
pub struct NativeMenuHost<R, B>
where
    R: IconResolver,
    B: NativeMenuBuilder<R::Image>,
{
    resolver: R,
    builder: B,
    config: RenderConfig,
    installed: Option<B::Element>,
    last_signature: Option<u64>,
}

impl<R, B> NativeMenuHost<R, B>
where
    R: IconResolver,
    B: NativeMenuBuilder<R::Image>,
{
    /// Creates a new [`NativeMenuHost`] with nothing installed.
    pub fn new(resolver: R, builder: B) -> Self {
        Self {
            resolver,
            builder,
            config: RenderConfig::default(),
            installed: None,
            last_signature: None,
        }
    }

    /// Sets the render configuration.
    #[must_use]
    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Updates the installed menu if the visible tree has changed.
    ///
    /// Every predicate is evaluated once per call. The menu is built from the
    /// same [`Snapshot`] its signature is recorded from.
    ///
    /// Returns `true` if the menu was rebuilt.
    pub fn sync(&mut self, roots: &[Node]) -> bool {
        let snapshot = Snapshot::capture(roots);
        let signature = snapshot.signature();

        if self.last_signature == Some(signature) {
            return false;
        }

        self.builder.action_table().clear();

        let menus = NativeMenus::new(&self.resolver, &self.config).with_snapshot(&snapshot);
        let children: Vec<_> = roots
            .iter()
            .filter_map(|root| menus.element(root, &mut self.builder))
            .collect();

        let menu = self
            .builder
            .menu("", None, MenuOptions::empty(), children);

        self.installed = Some(menu);
        self.last_signature = Some(signature);

        log::debug!(
            "Rebuilt native menu, {} actions bound",
            self.builder.action_table().len()
        );

        true
    }

    /// The installed menu, if [`NativeMenuHost::sync`] has run.
    pub fn installed(&self) -> Option<&B::Element> {
        self.installed.as_ref()
    }

    /// Performs the action behind an activated element.
    pub fn activate(&mut self, handle: ActionHandle) -> Result<(), Error> {
        self.builder.action_table().activate(handle)
    }

    /// Performs the action behind an activated element that only kept its tag.
    pub fn activate_tag(&mut self, tag: u64) -> Option<Result<(), Error>> {
        let table = self.builder.action_table();
        table.lookup(tag).map(|handle| table.activate(handle))
    }

    /// The builder.
    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// The builder, mutably.
    pub fn builder_mut(&mut self) -> &mut B {
        &mut self.builder
    }
}
