//! Native system menu integration for buttonkit.
//!
//! This crate renders a configuration tree as native menu elements, toolbar
//! bar items and standalone buttons through a [`NativeMenuBuilder`]. Native
//! elements only carry an [`ActionHandle`]; the builder owns the
//! [`ActionTable`] that maps those handles back to the actions of the tree.
pub use buttonkit_core as core;

pub mod action_table;
pub mod bar;
pub mod host;
pub mod menu;

mod error;

pub use action_table::{ActionHandle, ActionTable};
pub use bar::{BarItemBuilder, Primary};
pub use error::Error;
pub use host::NativeMenuHost;
pub use menu::{MenuOptions, NativeMenuBuilder, NativeMenus};
