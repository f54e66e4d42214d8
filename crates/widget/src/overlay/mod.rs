//! An overlay menu is a transient menu shown above the content when the user
//! interacts with a lazy submenu.
//!
//! The [`OverlayMenu`] owns the timing of the content supplier: it runs once
//! per presentation, after the triggering interaction and before the overlay
//! is handed to the [`OverlayPresenter`].
//!
//! # Re-entrance
//!
//! A presentation request while another one is [`PresentationState::Shown`]
//! follows [`ReentrantPresentation`]: it is ignored by default, or replaces
//! the active overlay. The active overlay is dismissed without selection in
//! the latter case. A supplier cannot trigger a presentation itself since the
//! menu is exclusively borrowed while it runs.
//!
//! # Failures
//!
//! A failing supplier aborts the presentation: nothing is shown, the menu
//! returns to [`PresentationState::Idle`] and the failure is handed to the
//! hook registered with [`OverlayMenu::on_failure`]. The triggering node stays
//! usable; the next interaction tries again.

mod state;

pub use state::PresentationState;

use state::Transition;

use rustc_hash::FxHashMap;

use crate::core::config::ReentrantPresentation;
use crate::core::{
    Action, IconResolver, LazyMenu, MenuEntry, MenuPresentationStyle, Node, NodeId, NodeKind,
    RenderConfig, Section, SupplierError, flatten,
};

/// Where an overlay is placed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement<Anchor> {
    /// Attached to the region that triggered the menu.
    Anchored(Anchor),
    /// Covering the whole screen.
    FullScreen,
}

impl<Anchor> Placement<Anchor> {
    /// Interprets the presentation hints of a lazy menu.
    pub fn resolve(style: MenuPresentationStyle, anchor: Anchor) -> Self {
        match style {
            MenuPresentationStyle::Anchored => Placement::Anchored(anchor),
            MenuPresentationStyle::FullScreen | MenuPresentationStyle::KeyboardAccessory => {
                Placement::FullScreen
            }
        }
    }
}

/// Shows and hides the overlay on behalf of an [`OverlayMenu`].
pub trait OverlayPresenter<Image> {
    /// The region or position an overlay is anchored to.
    type Anchor: Clone;

    /// Puts an overlay with `entries` on screen.
    fn present(&mut self, placement: Placement<Self::Anchor>, entries: &[MenuEntry<Image>]);

    /// Removes the overlay currently on screen.
    fn dismiss(&mut self);
}

/// A supplier failure reported by an [`OverlayMenu`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationFailure {
    /// The node whose menu failed to present, when known.
    pub source: Option<NodeId>,
    /// The supplier error.
    pub error: SupplierError,
}

/// The outcome of a presentation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// The overlay is on screen.
    Shown,
    /// The request was dropped: the node is hidden or another overlay is
    /// active.
    Ignored,
    /// The supplier failed and nothing was shown.
    Failed(SupplierError),
}

/// The outcome of a selection in a shown overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The overlay was dismissed and the action performed once.
    Performed,
    /// A nested lazy submenu replaced the overlay.
    Opened,
    /// A nested lazy submenu failed to supply its content.
    Failed(SupplierError),
    /// Nothing selectable has this id, or no overlay is shown.
    Ignored,
}

struct Session<Anchor> {
    anchor: Anchor,
    actions: FxHashMap<NodeId, Action>,
    deferred: FxHashMap<NodeId, LazyMenu>,
}

/// Presents lazily supplied menus through an [`OverlayPresenter`].
#[allow(missing_debug_implementations)]
pub struct OverlayMenu<R, P>
where
    R: IconResolver,
    P: OverlayPresenter<R::Image>,
{
    resolver: R,
    presenter: P,
    config: RenderConfig,
    state: PresentationState,
    session: Option<Session<P::Anchor>>,
    on_failure: Option<Box<dyn FnMut(&PresentationFailure)>>,
}

impl<R, P> OverlayMenu<R, P>
where
    R: IconResolver,
    P: OverlayPresenter<R::Image>,
{
    /// Creates a new idle [`OverlayMenu`].
    pub fn new(resolver: R, presenter: P) -> Self {
        Self {
            resolver,
            presenter,
            config: RenderConfig::default(),
            state: PresentationState::Idle,
            session: None,
            on_failure: None,
        }
    }

    /// Sets the render configuration.
    #[must_use]
    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the hook receiving supplier failures.
    #[must_use]
    pub fn on_failure(mut self, hook: impl FnMut(&PresentationFailure) + 'static) -> Self {
        self.on_failure = Some(Box::new(hook));
        self
    }

    /// The current presentation state.
    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    /// The presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The presenter, mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Presents the menu of a branch node after the user interacted with it.
    ///
    /// Hidden nodes are not presented. A lazy submenu supplies its content
    /// now; a fixed submenu is shown anchored.
    ///
    /// # Panics
    /// Panics if `node` is an action.
    pub fn present_node(&mut self, node: &Node, anchor: P::Anchor) -> Presentation {
        if !node.is_visible() {
            log::debug!("Ignoring presentation of hidden node {}", node.id());
            return Presentation::Ignored;
        }

        match node.kind() {
            NodeKind::LazySubmenu(menu) => self.supply_and_show(menu, anchor, Some(node.id())),
            NodeKind::Submenu(sections) => {
                if !self.begin() {
                    return Presentation::Ignored;
                }
                self.show(sections, MenuPresentationStyle::Anchored, anchor)
            }
            NodeKind::Action(_) => {
                panic!("`{}` is an action and cannot be presented", node.title())
            }
        }
    }

    /// Presents a lazy menu after the user interacted with its trigger.
    pub fn present(&mut self, menu: &LazyMenu, anchor: P::Anchor) -> Presentation {
        self.supply_and_show(menu, anchor, None)
    }

    /// Handles the selection of the entry with the given id.
    ///
    /// Selecting an action dismisses the overlay, then performs the action
    /// exactly once.
    pub fn select(&mut self, id: NodeId) -> Selection {
        if self.state != PresentationState::Shown {
            return Selection::Ignored;
        }

        let Some(session) = &self.session else {
            return Selection::Ignored;
        };

        let action = session.actions.get(&id).cloned();
        let nested = session
            .deferred
            .get(&id)
            .map(|menu| (menu.clone(), session.anchor.clone()));

        if let Some(action) = action {
            self.tear_down();
            log::trace!("Performing overlay action {id}");
            action.perform();
            return Selection::Performed;
        }

        if let Some((menu, anchor)) = nested {
            self.tear_down();
            return match self.supply_and_show(&menu, anchor, Some(id)) {
                Presentation::Shown => Selection::Opened,
                Presentation::Failed(error) => Selection::Failed(error),
                Presentation::Ignored => Selection::Ignored,
            };
        }

        log::debug!("Overlay selection {id} matches no selectable entry");
        Selection::Ignored
    }

    /// Dismisses the overlay without a selection. Nothing is performed.
    pub fn dismiss(&mut self) {
        if self.state == PresentationState::Shown {
            self.tear_down();
        }
    }

    fn supply_and_show(
        &mut self,
        menu: &LazyMenu,
        anchor: P::Anchor,
        source: Option<NodeId>,
    ) -> Presentation {
        if !self.begin() {
            return Presentation::Ignored;
        }

        match menu.supply() {
            Ok(sections) => self.show(&sections, menu.style(), anchor),
            Err(error) => {
                self.transition(Transition::Failed);
                log::warn!("Aborting overlay presentation: {error}");

                if let Some(hook) = self.on_failure.as_mut() {
                    hook(&PresentationFailure {
                        source,
                        error: error.clone(),
                    });
                }

                Presentation::Failed(error)
            }
        }
    }

    /// Applies the re-entrance policy and enters `Presenting`.
    fn begin(&mut self) -> bool {
        if self.state.is_active() {
            match self.config.reentrant_presentation {
                ReentrantPresentation::Ignore => {
                    log::debug!("Overlay already {:?}, ignoring request", self.state);
                    return false;
                }
                ReentrantPresentation::Replace => self.tear_down(),
            }
        }

        self.transition(Transition::Trigger);
        true
    }

    fn show(
        &mut self,
        sections: &[Section],
        style: MenuPresentationStyle,
        anchor: P::Anchor,
    ) -> Presentation {
        let flat = flatten(sections, &self.resolver, &self.config);

        self.presenter
            .present(Placement::resolve(style, anchor.clone()), &flat.entries);

        self.session = Some(Session {
            anchor,
            actions: flat.actions,
            deferred: flat.deferred,
        });
        self.transition(Transition::Supplied);

        Presentation::Shown
    }

    fn tear_down(&mut self) {
        self.presenter.dismiss();
        self.transition(Transition::Dismiss);
        self.session = None;
        self.transition(Transition::TearDown);
    }

    fn transition(&mut self, transition: Transition) {
        match self.state.next(transition) {
            Some(next) => {
                log::trace!("Overlay {:?} -> {:?}", self.state, next);
                self.state = next;
            }
            None => {
                log::error!(
                    "Invalid overlay transition {:?} from {:?}",
                    transition,
                    self.state
                );
            }
        }
    }
}
