use std::fmt;

use crate::{NodeId, SelectorError, Tree};

/// One attribute constraint of a selector: presence, or presence with an
/// exact value.
#[derive(Clone, Debug, PartialEq, Eq)]
struct AttrMatch {
    /// Attribute name.
    name: String,
    /// Required value, or `None` for bare presence (`[data-confirm]`).
    value: Option<String>,
}

/// A compound simple selector: optional tag name plus any combination of
/// `#id`, `.class`, `[attr]`, and `[attr=value]` constraints.
///
/// This is the full vocabulary the dispatch layer binds against; there are
/// no combinators. A selector matches a single node in isolation —
/// ancestor resolution lives on [`Tree`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    /// Required tag name, lowercased, or `None` for any tag.
    tag: Option<String>,
    /// Required element id.
    id: Option<String>,
    /// Required classes (all must be present).
    classes: Vec<String>,
    /// Required attributes.
    attrs: Vec<AttrMatch>,
    /// The original source string, kept for Display and diagnostics.
    source: String,
}

/// True for characters allowed in tag/class/id/attribute-name tokens.
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl Selector {
    /// Parses a compound simple selector such as
    /// `a.entry[data-on-click=markPageAsRead]`.
    pub fn parse(s: &str) -> Result<Self, SelectorError> {
        let src = s.trim();
        if src.is_empty() {
            return Err(SelectorError::Empty);
        }
        let invalid = |rest: &str| SelectorError::Invalid {
            selector: src.to_string(),
            rest: rest.to_string(),
        };

        let mut out = Self {
            tag: None,
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            source: src.to_string(),
        };
        let mut rest = src;
        if rest.starts_with(is_ident_char) {
            let end = rest.find(|c| !is_ident_char(c)).unwrap_or(rest.len());
            out.tag = Some(rest[..end].to_ascii_lowercase());
            rest = &rest[end..];
        }
        while !rest.is_empty() {
            let (marker, tail) = rest.split_at(1);
            match marker {
                "." | "#" => {
                    let end = tail.find(|c| !is_ident_char(c)).unwrap_or(tail.len());
                    if end == 0 {
                        return Err(invalid(rest));
                    }
                    let ident = tail[..end].to_string();
                    if marker == "." {
                        out.classes.push(ident);
                    } else {
                        out.id = Some(ident);
                    }
                    rest = &tail[end..];
                }
                "[" => {
                    let close = tail.find(']').ok_or_else(|| invalid(rest))?;
                    let body = &tail[..close];
                    let (name, value) = match body.split_once('=') {
                        Some((n, v)) => (n, Some(v.trim_matches('"').to_string())),
                        None => (body, None),
                    };
                    if name.is_empty() || !name.chars().all(is_ident_char) {
                        return Err(invalid(rest));
                    }
                    out.attrs.push(AttrMatch {
                        name: name.to_string(),
                        value,
                    });
                    rest = &tail[close + 1..];
                }
                _ => return Err(invalid(rest)),
            }
        }
        Ok(out)
    }

    /// Returns true when `node` satisfies every constraint of this selector.
    pub fn matches(&self, tree: &Tree, node: NodeId) -> bool {
        let el = tree.element(node);
        if let Some(tag) = &self.tag
            && el.tag() != tag
        {
            return false;
        }
        if let Some(id) = &self.id
            && el.id() != Some(id.as_str())
        {
            return false;
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|a| match &a.value {
            Some(v) => el.attr_value(&a.name) == Some(v.as_str()),
            None => el.attr_value(&a.name).is_some(),
        })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Element;

    fn sample_tree() -> (Tree, NodeId) {
        let mut tree = Tree::new(Element::new("body"));
        let node = tree.append(
            tree.root(),
            Element::new("a")
                .class("entry")
                .class("unread")
                .attr("data-confirm", "")
                .attr("data-on-click", "markPageAsRead"),
        );
        (tree, node)
    }

    #[test]
    fn parse_tag_class_attr() {
        let sel = Selector::parse("a.entry[data-confirm]").expect("parse");
        let (tree, node) = sample_tree();
        assert!(sel.matches(&tree, node));
        assert!(!sel.matches(&tree, tree.root()));
    }

    #[test]
    fn attr_value_match() {
        let (tree, node) = sample_tree();
        let hit = Selector::parse("a[data-on-click=markPageAsRead]").expect("parse");
        let miss = Selector::parse("a[data-on-click=showActionMenu]").expect("parse");
        assert!(hit.matches(&tree, node));
        assert!(!miss.matches(&tree, node));
    }

    #[test]
    fn class_only_selector() {
        let (tree, node) = sample_tree();
        let sel = Selector::parse(".unread").expect("parse");
        assert!(sel.matches(&tree, node));
    }

    #[test]
    fn all_classes_required() {
        let (tree, node) = sample_tree();
        let sel = Selector::parse(".entry.read").expect("parse");
        assert!(!sel.matches(&tree, node));
    }

    #[test]
    fn id_selector() {
        let mut tree = Tree::new(Element::new("body"));
        let logo = tree.append(tree.root(), Element::new("div").with_id("logo"));
        let sel = Selector::parse("div#logo").expect("parse");
        assert!(sel.matches(&tree, logo));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Selector::parse(""), Err(SelectorError::Empty));
        assert!(matches!(
            Selector::parse("a[unclosed"),
            Err(SelectorError::Invalid { .. })
        ));
        assert!(matches!(
            Selector::parse("a."),
            Err(SelectorError::Invalid { .. })
        ));
        assert!(matches!(
            Selector::parse("a b"),
            Err(SelectorError::Invalid { .. })
        ));
    }

    #[test]
    fn display_is_source() {
        let sel = Selector::parse(" .logo ").expect("parse");
        assert_eq!(sel.to_string(), ".logo");
    }
}
