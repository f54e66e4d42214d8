//! The essential ideas of buttonkit.
//!
//! An application describes a button or menu item once as a [`Node`] tree.
//! Render adapters project that tree into their targets:
//!
//! - `buttonkit_widget::control` builds declarative in-view controls,
//! - `buttonkit_native` builds native menus, bar items and buttons,
//! - `buttonkit_widget::overlay` presents lazily supplied overlay menus.
//!
//! The tree is immutable once built. Visibility predicates are evaluated by
//! the adapters on every pass, depth first, and never for the children of a
//! hidden node.
pub mod config;
pub mod entry;
pub mod icon;
pub mod lazy;
pub mod node;
pub mod signature;

mod error;
mod id;
mod section;

pub use config::RenderConfig;
pub use entry::{Flattened, MenuEntry, flatten};
pub use error::Error;
pub use icon::{Bitmap, Descriptors, Icon, IconResolver, SymbolName};
pub use id::{NodeId, SectionId};
pub use lazy::{LazyMenu, MenuPresentationStyle, SupplierError};
pub use node::{Action, Node, NodeKind, Sections};
pub use section::Section;
pub use signature::{Snapshot, signature};
