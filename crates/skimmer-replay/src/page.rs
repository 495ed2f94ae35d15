//! The sample feed page traces are replayed against.

use domtree::{Element, Tree};

/// Builds a small unread-listing page with two entry cards, the page-level
/// affordances, and a search input.
pub fn sample_page() -> Tree {
    let mut tree = Tree::new(Element::new("body"));

    let header = tree.append(tree.root(), Element::new("header"));
    tree.append(header, Element::new("div").class("logo"));
    let search_form = tree.append(header, Element::new("form"));
    tree.append(
        search_form,
        Element::new("input").attr("type", "search").with_id("search-input"),
    );
    tree.append(
        header,
        Element::new("a")
            .attr("data-on-click", "markPageAsRead")
            .attr("data-show-only-unread", "true"),
    );

    let listing = tree.append(tree.root(), Element::new("main"));
    for n in 1..=2 {
        let item = tree.append(
            listing,
            Element::new("article")
                .class("item")
                .class("entry")
                .with_id(&format!("entry-{n}")),
        );
        let title = tree.append(item, Element::new("h2"));
        tree.append(title, Element::new("a").attr("data-fetch-content-entry", ""));
        let controls = tree.append(item, Element::new("ul"));
        tree.append(controls, Element::new("a").attr("data-set-read", ""));
        tree.append(controls, Element::new("a").attr("data-toggle-status", ""));
        tree.append(controls, Element::new("a").attr("data-toggle-bookmark", ""));
        tree.append(controls, Element::new("a").attr("data-save-entry", ""));
        tree.append(
            controls,
            Element::new("a").attr("data-on-click", "showActionMenu"),
        );
    }

    tree
}

#[cfg(test)]
mod tests {
    use domtree::Selector;

    use super::*;

    #[test]
    fn page_has_the_replayable_affordances() {
        let tree = sample_page();
        for spec in [
            ".logo",
            "input[type=search]",
            "a[data-on-click=markPageAsRead]",
            "a[data-set-read]",
            "a[data-toggle-status]",
        ] {
            let sel = Selector::parse(spec).expect("selector");
            assert!(tree.query(&sel).is_some(), "missing {spec}");
        }
    }
}
