//! In-memory DOM used by tests and offline tooling.
//!
//! Nodes live in a shared arena; [`MemoryElement`] is an index into it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use actionreel_protocols::Element;

use crate::session::PageHost;

const VERSION_ATTRIBUTE: &str = "data-actionreel-version";

#[derive(Debug, Default)]
struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    value: Option<String>,
    checked: Option<bool>,
    parent: Option<usize>,
    children: Vec<usize>,
}

type Arena = Rc<RefCell<Vec<Node>>>;

/// A document made of [`MemoryElement`]s.
#[derive(Clone)]
pub struct MemoryDom {
    arena: Arena,
}

impl MemoryDom {
    /// A loaded document: `<html><body></body></html>`.
    pub fn new() -> Self {
        let dom = Self::loading();
        dom.document().append("body");
        dom
    }

    /// A document whose body has not been parsed yet.
    pub fn loading() -> Self {
        let root = Node {
            tag: "html".to_string(),
            ..Default::default()
        };
        Self {
            arena: Rc::new(RefCell::new(vec![root])),
        }
    }

    /// The `<html>` element.
    pub fn document(&self) -> MemoryElement {
        MemoryElement {
            arena: Rc::clone(&self.arena),
            index: 0,
        }
    }

    /// The `<body>` element, if parsed.
    pub fn try_body(&self) -> Option<MemoryElement> {
        self.document()
            .children()
            .into_iter()
            .find(|c| c.tag_name() == "body")
    }

    /// The `<body>` element, appending it when the document is still loading.
    pub fn body(&self) -> MemoryElement {
        self.try_body()
            .unwrap_or_else(|| self.document().append("body"))
    }
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl PageHost for MemoryDom {
    fn injected_version(&self) -> Option<String> {
        self.document().attribute(VERSION_ATTRIBUTE)
    }

    fn mark_injected(&mut self, version: &str) {
        self.document().set_attribute(VERSION_ATTRIBUTE, version);
    }

    fn body_ready(&self) -> bool {
        self.try_body().is_some()
    }
}

/// Handle to one node of a [`MemoryDom`].
#[derive(Clone)]
pub struct MemoryElement {
    arena: Arena,
    index: usize,
}

impl MemoryElement {
    fn with_node<R>(&self, f: impl FnOnce(&Node) -> R) -> R {
        f(&self.arena.borrow()[self.index])
    }

    fn with_node_mut<R>(&self, f: impl FnOnce(&mut Node) -> R) -> R {
        f(&mut self.arena.borrow_mut()[self.index])
    }

    fn handle(&self, index: usize) -> MemoryElement {
        MemoryElement {
            arena: Rc::clone(&self.arena),
            index,
        }
    }

    /// Append a new child element and return it.
    pub fn append(&self, tag: &str) -> MemoryElement {
        let index = {
            let mut arena = self.arena.borrow_mut();
            let index = arena.len();
            arena.push(Node {
                tag: tag.to_ascii_lowercase(),
                parent: Some(self.index),
                ..Default::default()
            });
            arena[self.index].children.push(index);
            index
        };
        self.handle(index)
    }

    /// Builder form of [`set_attribute`](Self::set_attribute).
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder that appends to the element's own text.
    pub fn text(self, text: &str) -> Self {
        self.with_node_mut(|n| n.text.push_str(text));
        self
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.with_node_mut(|n| {
            match n.attributes.iter_mut().find(|(k, _)| k == name) {
                Some(slot) => slot.1 = value.to_string(),
                None => n.attributes.push((name.to_string(), value.to_string())),
            }
        });
    }

    pub fn remove_attribute(&self, name: &str) {
        self.with_node_mut(|n| n.attributes.retain(|(k, _)| k != name));
    }

    /// Set the live form value, as typing would.
    pub fn set_value(&self, value: &str) {
        self.with_node_mut(|n| n.value = Some(value.to_string()));
    }

    /// Set the live checked state, as toggling would.
    pub fn set_checked(&self, checked: bool) {
        self.with_node_mut(|n| n.checked = Some(checked));
    }

    pub fn set_text(&self, text: &str) {
        self.with_node_mut(|n| n.text = text.to_string());
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.arena, &other.arena) && self.index == other.index
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_node(|n| write!(f, "<{}>#{}", n.tag, self.index))
    }
}

impl Element for MemoryElement {
    fn tag_name(&self) -> String {
        self.with_node(|n| n.tag.clone())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.with_node(|n| {
            n.attributes
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        })
    }

    fn attribute_names(&self) -> Vec<String> {
        self.with_node(|n| n.attributes.iter().map(|(k, _)| k.clone()).collect())
    }

    fn parent(&self) -> Option<Self> {
        self.with_node(|n| n.parent).map(|i| self.handle(i))
    }

    fn children(&self) -> Vec<Self> {
        let indices = self.with_node(|n| n.children.clone());
        indices.into_iter().map(|i| self.handle(i)).collect()
    }

    fn own_text(&self) -> String {
        self.with_node(|n| n.text.clone())
    }

    fn value(&self) -> Option<String> {
        let (live, tag) = self.with_node(|n| (n.value.clone(), n.tag.clone()));
        match live {
            Some(v) => Some(v),
            None if tag == "textarea" => Some(self.own_text()),
            None => self.attribute("value"),
        }
    }

    fn is_checked(&self) -> bool {
        self.with_node(|n| n.checked)
            .unwrap_or_else(|| self.attribute("checked").is_some())
    }
}
