//! buttonkit describes a button or menu item once and renders it everywhere.
//!
//! A configuration is a tree of [`Node`]s. A node is either an action, a
//! submenu with fixed [`Section`]s, or a lazy submenu whose sections are
//! supplied when the user opens it. The same tree is then projected by three
//! adapters:
//!
//! - [`Controls`] builds declarative in-view controls on every refresh,
//! - [`NativeMenus`] builds native menus, bar items and buttons,
//! - [`OverlayMenu`] presents lazily supplied menus over the view.
//!
//! ```
//! use buttonkit::{Icon, Node, Section};
//!
//! let edit = Node::submenu(
//!     "Edit",
//!     vec![
//!         Section::new(vec![
//!             Node::action("Copy", || {}).with_icon(Icon::symbol("doc.on.doc")),
//!             Node::action("Paste", || {}).visible_when(|| false),
//!         ]),
//!         Section::new(vec![Node::action("Delete", || {})]),
//!     ],
//! );
//!
//! assert!(edit.is_menu());
//! assert_eq!(edit.sections().map(|sections| sections.len()), Ok(2));
//! ```
//!
//! Everything is single threaded: actions, predicates and suppliers are
//! called on the thread that owns the tree.
pub use buttonkit_core as core;
pub use buttonkit_native as native;
pub use buttonkit_widget as widget;

pub use crate::core::config::{ConfigError, ReentrantPresentation, load_config, load_config_from_file};
pub use crate::core::{
    Action, Bitmap, Descriptors, Error, Icon, IconResolver, LazyMenu, MenuEntry,
    MenuPresentationStyle, Node, NodeId, NodeKind, RenderConfig, Section, SectionId,
    Snapshot, SupplierError, SymbolName, flatten, signature,
};
pub use native::{
    ActionHandle, ActionTable, BarItemBuilder, MenuOptions, NativeMenuBuilder, NativeMenuHost,
    NativeMenus, Primary,
};
pub use widget::{
    ControlBuilder, Controls, OverlayMenu, OverlayPresenter, Placement, Presentation,
    PresentationFailure, PresentationState, Selection,
};
