//! The recursive configuration unit of buttonkit.
//!
//! A [`Node`] describes a button or menu item once: a title, an optional
//! [`Icon`], a visibility predicate and a [`NodeKind`]. Render adapters walk
//! the tree and project it into their own target; the tree itself is never
//! mutated after construction.
//!
//! ```
//! use buttonkit_core::{Icon, Node, Section};
//!
//! let share = Node::submenu(
//!     "Share",
//!     vec![
//!         Section::new(vec![
//!             Node::action("Copy Link", || {}),
//!             Node::action("Mail", || {}).with_icon(Icon::symbol("envelope")),
//!         ]),
//!         Section::new(vec![Node::action("Delete", || {}).visible_when(|| false)]),
//!     ],
//! );
//!
//! assert!(share.is_menu());
//! assert_eq!(share.sections().unwrap().len(), 2);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

use crate::{Error, Icon, LazyMenu, NodeId, Section, SupplierError};

/// The side effect of a leaf [`Node`].
///
/// Cloning an [`Action`] shares the same closure.
#[derive(Clone)]
pub struct Action(Rc<dyn Fn()>);

impl Action {
    /// Creates a new [`Action`].
    pub fn new(perform: impl Fn() + 'static) -> Self {
        Self(Rc::new(perform))
    }

    /// Runs the action once.
    pub fn perform(&self) {
        (self.0)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// What a [`Node`] does when the user interacts with it.
#[derive(Debug)]
pub enum NodeKind {
    /// A leaf invoking its action when triggered.
    Action(Action),

    /// A branch with children fixed at construction.
    Submenu(Vec<Section>),

    /// A branch whose children are supplied at presentation time.
    LazySubmenu(LazyMenu),
}

/// A button or menu item.
pub struct Node {
    id: NodeId,
    title: String,
    icon: Option<Icon>,
    predicate: Option<Rc<dyn Fn() -> bool>>,
    kind: NodeKind,
}

impl Node {
    fn new(title: String, kind: NodeKind) -> Self {
        Self {
            id: NodeId::unique(),
            title,
            icon: None,
            predicate: None,
            kind,
        }
    }

    /// Creates a leaf [`Node`] running `perform` when triggered.
    pub fn action(title: impl Into<String>, perform: impl Fn() + 'static) -> Self {
        Self::new(title.into(), NodeKind::Action(Action::new(perform)))
    }

    /// Creates a branch [`Node`] with fixed sections.
    ///
    /// # Panics
    /// Panics if `sections` is empty. Use [`Node::try_submenu`] to handle
    /// that case as an error.
    pub fn submenu(title: impl Into<String>, sections: Vec<Section>) -> Self {
        match Self::try_submenu(title, sections) {
            Ok(node) => node,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates a branch [`Node`] with fixed sections, rejecting an empty list.
    pub fn try_submenu(title: impl Into<String>, sections: Vec<Section>) -> Result<Self, Error> {
        let title = title.into();

        if sections.is_empty() {
            return Err(Error::EmptySubmenu { title });
        }

        Ok(Self::new(title, NodeKind::Submenu(sections)))
    }

    /// Creates an ungrouped branch [`Node`]: a single section holding `items`.
    pub fn menu(title: impl Into<String>, items: Vec<Node>) -> Self {
        Self::new(title.into(), NodeKind::Submenu(vec![Section::new(items)]))
    }

    /// Creates a branch [`Node`] whose sections are supplied on presentation.
    pub fn lazy_submenu(title: impl Into<String>, menu: LazyMenu) -> Self {
        Self::new(title.into(), NodeKind::LazySubmenu(menu))
    }

    /// Creates an untitled leaf presented by its icon alone.
    pub fn image_action(icon: impl Into<Icon>, perform: impl Fn() + 'static) -> Self {
        Self::action(String::new(), perform).with_icon(icon)
    }

    /// Creates an untitled branch presented by its icon alone.
    ///
    /// # Panics
    /// Panics if `sections` is empty.
    pub fn image_submenu(icon: impl Into<Icon>, sections: Vec<Section>) -> Self {
        Self::submenu(String::new(), sections).with_icon(icon)
    }

    /// Sets the icon of the node.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the visibility predicate of the node.
    ///
    /// The predicate is evaluated by render adapters on every pass and never
    /// cached. Without one, the node is always visible.
    #[must_use]
    pub fn visible_when(mut self, predicate: impl Fn() -> bool + 'static) -> Self {
        self.predicate = Some(Rc::new(predicate));
        self
    }

    /// The identity of this node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The title; empty when none was given.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The icon descriptor, if any.
    #[must_use]
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// Evaluates the visibility predicate.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.predicate.as_ref().is_none_or(|predicate| predicate())
    }

    /// What this node does.
    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Returns `true` if this node is a leaf action.
    #[must_use]
    pub fn is_action(&self) -> bool {
        matches!(self.kind, NodeKind::Action(_))
    }

    /// Returns `true` if this node opens a menu, fixed or lazy.
    #[must_use]
    pub fn is_menu(&self) -> bool {
        !self.is_action()
    }

    /// The sections of a branch node.
    ///
    /// Fixed sections are borrowed. For a lazy submenu this invokes the
    /// supplier; callers own the timing of that call.
    ///
    /// # Panics
    /// Panics if the node is an action. Check [`Node::is_menu`] first.
    pub fn sections(&self) -> Result<Sections<'_>, SupplierError> {
        match &self.kind {
            NodeKind::Submenu(sections) => Ok(Sections::Fixed(sections)),
            NodeKind::LazySubmenu(menu) => menu.supply().map(Sections::Supplied),
            NodeKind::Action(_) => {
                panic!("`{}` is an action and has no sections", self.title)
            }
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("conditional", &self.predicate.is_some())
            .field("kind", &self.kind)
            .finish()
    }
}

/// The sections of a branch, as returned by [`Node::sections`].
#[derive(Debug)]
pub enum Sections<'a> {
    /// Sections fixed at construction.
    Fixed(&'a [Section]),
    /// Sections just produced by a supplier.
    Supplied(Vec<Section>),
}

impl Deref for Sections<'_> {
    type Target = [Section];

    fn deref(&self) -> &[Section] {
        match self {
            Sections::Fixed(sections) => sections,
            Sections::Supplied(sections) => sections,
        }
    }
}
