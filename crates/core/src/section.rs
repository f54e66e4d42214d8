use crate::{Node, SectionId};

/// An ordered group of sibling [`Node`]s.
///
/// Sections only mark where a render target draws a boundary between groups
/// of items. A submenu with a single section is an ungrouped menu.
#[derive(Debug)]
pub struct Section {
    id: SectionId,
    items: Vec<Node>,
}

impl Section {
    /// Creates a new [`Section`] holding the given items in order.
    pub fn new(items: Vec<Node>) -> Self {
        Self {
            id: SectionId::unique(),
            items,
        }
    }

    /// The identity of this section.
    #[must_use]
    pub fn id(&self) -> SectionId {
        self.id
    }

    /// All items, visible or not, in declaration order.
    #[must_use]
    pub fn items(&self) -> &[Node] {
        &self.items
    }

    /// The items whose visibility predicate currently holds.
    ///
    /// Predicates are evaluated lazily, once per item, as the iterator advances.
    pub fn visible_items(&self) -> impl Iterator<Item = &Node> + '_ {
        self.items.iter().filter(|node| node.is_visible())
    }
}

impl FromIterator<Node> for Section {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
