//! Menus whose content is produced at presentation time.

use std::fmt;
use std::rc::Rc;

use crate::Section;

/// Presentation hints carried by a [`LazyMenu`].
///
/// The overlay adapter interprets them; the configuration tree does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MenuPresentationStyle {
    /// The menu is attached to the region that triggered it.
    #[default]
    Anchored,

    /// The menu covers the whole screen.
    FullScreen,

    /// The menu was triggered from a software-keyboard accessory.
    ///
    /// The keyboard hides most of the screen, so the menu covers it fully.
    KeyboardAccessory,
}

/// The failure of a [`LazyMenu`] supplier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("menu supplier failed: {message}")]
pub struct SupplierError {
    message: String,
}

impl SupplierError {
    /// Creates a new [`SupplierError`].
    pub fn new(message: impl fmt::Display) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    /// The reason reported by the supplier.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

type Supplier = dyn Fn() -> Result<Vec<Section>, SupplierError>;

/// The content provider of a lazy submenu.
///
/// The supplier runs every time the menu is presented and may return a
/// different tree each time. Nothing is memoized.
#[derive(Clone)]
pub struct LazyMenu {
    style: MenuPresentationStyle,
    supplier: Rc<Supplier>,
}

impl LazyMenu {
    /// Creates a [`LazyMenu`] from an infallible supplier.
    pub fn new(
        style: MenuPresentationStyle,
        supplier: impl Fn() -> Vec<Section> + 'static,
    ) -> Self {
        Self::fallible(style, move || Ok(supplier()))
    }

    /// Creates a [`LazyMenu`] from a supplier that may fail.
    pub fn fallible(
        style: MenuPresentationStyle,
        supplier: impl Fn() -> Result<Vec<Section>, SupplierError> + 'static,
    ) -> Self {
        Self {
            style,
            supplier: Rc::new(supplier),
        }
    }

    /// The presentation hints of this menu.
    #[must_use]
    pub fn style(&self) -> MenuPresentationStyle {
        self.style
    }

    /// Invokes the supplier once and returns the sections it produced.
    pub fn supply(&self) -> Result<Vec<Section>, SupplierError> {
        log::trace!("Supplying lazy menu content ({:?})", self.style);
        (self.supplier)()
    }
}

impl fmt::Debug for LazyMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyMenu")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Node;
    use std::cell::Cell;

    #[test]
    fn test_supplier_runs_on_every_supply() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let menu = LazyMenu::new(MenuPresentationStyle::Anchored, move || {
            counter.set(counter.get() + 1);
            let n = counter.get();
            vec![Section::new(
                (0..n).map(|i| Node::action(format!("Item {i}"), || {})).collect(),
            )]
        });

        assert_eq!(calls.get(), 0);

        let first = menu.supply().expect("supplied");
        let second = menu.supply().expect("supplied");

        assert_eq!(calls.get(), 2);
        assert_eq!(first[0].items().len(), 1);
        assert_eq!(second[0].items().len(), 2);
    }

    #[test]
    fn test_supplier_failure_is_returned() {
        let menu = LazyMenu::fallible(MenuPresentationStyle::FullScreen, || {
            Err(SupplierError::new("offline"))
        });

        let error = menu.supply().unwrap_err();
        assert_eq!(error.message(), "offline");
        assert_eq!(error.to_string(), "menu supplier failed: offline");
        assert_eq!(menu.style(), MenuPresentationStyle::FullScreen);
    }
}
