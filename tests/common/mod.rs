//! Recording builders and fixtures shared by the integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use buttonkit::{
    Action, ActionHandle, ActionTable, ControlBuilder, Icon, LazyMenu, MenuEntry, MenuOptions,
    MenuPresentationStyle, NativeMenuBuilder, Node, OverlayPresenter, Placement, Section,
};

/// Counts calls of the closures it hands out.
#[derive(Debug, Clone, Default)]
pub struct Counter(Rc<Cell<usize>>);

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit(&self) -> impl Fn() + 'static {
        let count = Rc::clone(&self.0);
        move || count.set(count.get() + 1)
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// Hands out visibility predicates that always pass and count their calls.
#[derive(Debug, Default)]
pub struct Watch(RefCell<Vec<Rc<Cell<usize>>>>);

impl Watch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn predicate(&self) -> impl Fn() -> bool + 'static {
        let calls = Rc::new(Cell::new(0));
        self.0.borrow_mut().push(Rc::clone(&calls));

        move || {
            calls.set(calls.get() + 1);
            true
        }
    }

    /// Calls per predicate, in the order the predicates were handed out.
    pub fn counts(&self) -> Vec<usize> {
        self.0.borrow().iter().map(|calls| calls.get()).collect()
    }
}

/// An all-visible tree with six watched predicates, registered in the order
/// Open, Recent, PDF, Export, File, Help.
pub fn watched_tree(watch: &Watch) -> Vec<Node> {
    vec![
        Node::submenu(
            "File",
            vec![
                Section::new(vec![
                    Node::action("Open", || {}).visible_when(watch.predicate()),
                    Node::lazy_submenu(
                        "Recent",
                        LazyMenu::new(MenuPresentationStyle::Anchored, Vec::new),
                    )
                    .visible_when(watch.predicate()),
                ]),
                Section::new(vec![
                    Node::menu(
                        "Export",
                        vec![Node::action("PDF", || {}).visible_when(watch.predicate())],
                    )
                    .visible_when(watch.predicate()),
                ]),
            ],
        )
        .visible_when(watch.predicate()),
        Node::action("Help", || {}).visible_when(watch.predicate()),
    ]
}

#[derive(Debug, Clone)]
pub enum View {
    Button(String, Action),
    Menu(String, Option<Icon>, Vec<Vec<View>>),
    Lazy(String, LazyMenu),
}

impl View {
    pub fn title(&self) -> &str {
        match self {
            View::Button(title, _) | View::Menu(title, _, _) | View::Lazy(title, _) => title,
        }
    }

    /// The titles of the view tree, sections split by `|`.
    pub fn outline(&self) -> String {
        match self {
            View::Button(title, _) | View::Lazy(title, _) => title.clone(),
            View::Menu(title, _, sections) => {
                let groups: Vec<String> = sections
                    .iter()
                    .map(|group| {
                        group
                            .iter()
                            .map(View::outline)
                            .collect::<Vec<_>>()
                            .join(",")
                    })
                    .collect();

                format!("{title}[{}]", groups.join("|"))
            }
        }
    }

    /// Taps the first button titled `title`, searching depth first.
    pub fn tap(&self, title: &str) -> bool {
        match self {
            View::Button(name, action) if name == title => {
                action.perform();
                true
            }
            View::Menu(_, _, sections) => sections.iter().flatten().any(|view| view.tap(title)),
            View::Button(..) | View::Lazy(..) => false,
        }
    }
}

/// Builds declarative controls as a [`View`] tree.
#[derive(Debug, Default)]
pub struct ViewBuilder;

impl ControlBuilder<Icon> for ViewBuilder {
    type Control = View;

    fn button(&mut self, title: &str, _icon: Option<Icon>, action: Action) -> View {
        View::Button(title.to_owned(), action)
    }

    fn menu(&mut self, title: &str, icon: Option<Icon>, sections: Vec<Vec<View>>) -> View {
        View::Menu(title.to_owned(), icon, sections)
    }

    fn lazy_menu(&mut self, title: &str, _icon: Option<Icon>, menu: LazyMenu) -> View {
        View::Lazy(title.to_owned(), menu)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Action(String),
    Menu(String, MenuOptions, Vec<Item>),
    Deferred(String),
    Separator,
}

/// Builds native menu items and remembers the handle of every action.
#[derive(Debug, Default)]
pub struct Shelf {
    pub table: ActionTable,
    pub handles: Vec<(String, ActionHandle)>,
}

impl Shelf {
    pub fn handle(&self, title: &str) -> Option<ActionHandle> {
        self.handles
            .iter()
            .rev()
            .find(|(name, _)| name == title)
            .map(|(_, handle)| *handle)
    }
}

impl NativeMenuBuilder<Icon> for Shelf {
    type Element = Item;

    fn action_table(&mut self) -> &mut ActionTable {
        &mut self.table
    }

    fn action(&mut self, title: &str, _image: Option<Icon>, handle: ActionHandle) -> Item {
        self.handles.push((title.to_owned(), handle));
        Item::Action(title.to_owned())
    }

    fn menu(
        &mut self,
        title: &str,
        _image: Option<Icon>,
        options: MenuOptions,
        children: Vec<Item>,
    ) -> Item {
        Item::Menu(title.to_owned(), options, children)
    }

    fn deferred(&mut self, title: &str, _image: Option<Icon>, _menu: LazyMenu) -> Item {
        Item::Deferred(title.to_owned())
    }

    fn separator(&mut self) -> Item {
        Item::Separator
    }
}

/// Records what an overlay put on screen.
#[derive(Debug, Default)]
pub struct Screen {
    pub presented: Vec<(Placement<&'static str>, Vec<MenuEntry<Icon>>)>,
    pub dismissed: usize,
}

impl Screen {
    pub fn on_screen(&self) -> Option<&[MenuEntry<Icon>]> {
        if self.presented.len() > self.dismissed {
            self.presented.last().map(|(_, entries)| entries.as_slice())
        } else {
            None
        }
    }
}

impl OverlayPresenter<Icon> for Screen {
    type Anchor = &'static str;

    fn present(&mut self, placement: Placement<&'static str>, entries: &[MenuEntry<Icon>]) {
        self.presented.push((placement, entries.to_vec()));
    }

    fn dismiss(&mut self) {
        self.dismissed += 1;
    }
}
