use std::fmt;

use crate::Selector;

/// Handle to an element in a [`Tree`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An element: tag name, optional id, classes, and attributes.
///
/// Built with a chaining API:
/// `Element::new("a").class("entry").attr("data-confirm", "")`.
#[derive(Clone, Debug)]
pub struct Element {
    /// Lowercased tag name.
    tag: String,
    /// Element id, if any.
    id: Option<String>,
    /// Class list.
    classes: Vec<String>,
    /// Attribute name/value pairs, insertion-ordered.
    attrs: Vec<(String, String)>,
}

impl Element {
    /// Creates an element with the given tag name (lowercased).
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
        }
    }

    /// Sets the element id.
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Adds a class.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Adds an attribute. An empty value models a bare attribute
    /// (`<a data-confirm>`).
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    /// The element's tag name, lowercased.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The element's id, if set.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// True when `class` is in the class list.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The value of attribute `name`, if present.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// True when the element accepts text input: `input`, `textarea`, or
    /// anything carrying `contenteditable` (other than `"false"`).
    pub fn is_text_entry(&self) -> bool {
        if self.tag == "input" || self.tag == "textarea" {
            return true;
        }
        matches!(self.attr_value("contenteditable"), Some(v) if v != "false")
    }
}

/// One node slot in the arena: the element plus its links.
#[derive(Clone, Debug)]
struct Node {
    /// The element payload.
    element: Element,
    /// Parent link; `None` for the root or a detached node.
    parent: Option<NodeId>,
    /// Child links in document order.
    children: Vec<NodeId>,
}

/// An arena-backed element tree with a focus slot.
///
/// Nodes are appended under a parent and addressed by [`NodeId`]. Detaching
/// a node unlinks its subtree from the document without invalidating
/// existing ids, which mirrors how a removed element behaves in a live
/// document: handles stay usable, ancestor walks stop at the detachment
/// point, and document-order queries no longer see it.
#[derive(Clone, Debug)]
pub struct Tree {
    /// Arena storage; `NodeId` indexes into this.
    nodes: Vec<Node>,
    /// The root node.
    root: NodeId,
    /// The currently focused node, if any.
    focused: Option<NodeId>,
}

impl Tree {
    /// Creates a tree with `root` as its root element.
    pub fn new(root: Element) -> Self {
        Self {
            nodes: vec![Node {
                element: root,
                parent: None,
                children: Vec::new(),
            }],
            root: NodeId(0),
            focused: None,
        }
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Appends `element` as the last child of `parent`, returning its id.
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            element,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// The element at `node`.
    pub fn element(&self, node: NodeId) -> &Element {
        &self.nodes[node.0].element
    }

    /// The parent of `node`, if it has one.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Detaches `node` (and its subtree) from its parent. Ids remain valid;
    /// the subtree is simply no longer reachable from the root.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
        if self.focused_within(node) {
            self.focused = None;
        }
    }

    /// True when focus currently sits on `node` or inside its subtree.
    fn focused_within(&self, node: NodeId) -> bool {
        let mut cur = self.focused;
        while let Some(n) = cur {
            if n == node {
                return true;
            }
            cur = self.nodes[n.0].parent;
        }
        false
    }

    /// Moves focus to `node`, or clears it with `None`.
    pub fn set_focus(&mut self, node: Option<NodeId>) {
        self.focused = node;
    }

    /// The currently focused node, if any.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// True when the focused element accepts text input (an `input`, a
    /// `textarea`, or a `contenteditable` element).
    pub fn focus_in_text_entry(&self) -> bool {
        self.focused
            .is_some_and(|n| self.nodes[n.0].element.is_text_entry())
    }

    /// The nearest ancestor of `node` (inclusive) matching `selector`,
    /// walking upward bounded by the tree root.
    pub fn closest(&self, node: NodeId, selector: &Selector) -> Option<NodeId> {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if selector.matches(self, n) {
                return Some(n);
            }
            cur = self.nodes[n.0].parent;
        }
        None
    }

    /// The ancestor chain of `node`, target-first, up to and including the
    /// root. A snapshot: safe to iterate while handlers mutate the tree.
    pub fn ancestor_chain(&self, node: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut cur = Some(node);
        while let Some(n) = cur {
            chain.push(n);
            cur = self.nodes[n.0].parent;
        }
        chain
    }

    /// The first node in document order matching `selector`, if any.
    pub fn query(&self, selector: &Selector) -> Option<NodeId> {
        let mut stack = vec![self.root];
        while let Some(n) = stack.pop() {
            if selector.matches(self, n) {
                return Some(n);
            }
            // Push children reversed so the leftmost is visited first.
            for child in self.nodes[n.0].children.iter().rev() {
                stack.push(*child);
            }
        }
        None
    }
}
