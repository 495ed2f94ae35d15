use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use domtree::{Element, NodeId, Tree};
use parking_lot::Mutex;
use skimmer_protocol::{Page, Point, TouchEvent};
use skimmer_router::{EntryOps, ModalSurface, Navigator, Router};
use webkey::{Key, KeyPress};

/// Records every collaborator call as a readable string.
#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<String>>,
}

impl Recorder {
    fn push(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl Navigator for Recorder {
    fn go_to_page(&self, page: Page) {
        self.push(format!("go_to_page({})", page.as_str()));
    }
    fn go_to_previous(&self) {
        self.push("go_to_previous");
    }
    fn go_to_next(&self) {
        self.push("go_to_next");
    }
    fn go_to_feed_or_feeds(&self) {
        self.push("go_to_feed_or_feeds");
    }
    fn open_selected_item(&self) {
        self.push("open_selected_item");
    }
    fn open_original_link(&self) {
        self.push("open_original_link");
    }
    fn toggle_entry_status(&self) {
        self.push("toggle_entry_status");
    }
    fn mark_page_as_read(&self, only_unread: bool) {
        self.push(format!("mark_page_as_read({only_unread})"));
    }
    fn save_entry(&self) {
        self.push("save_entry");
    }
    fn fetch_original_content(&self) {
        self.push("fetch_original_content");
    }
    fn toggle_bookmark(&self) {
        self.push("toggle_bookmark");
    }
    fn show_keyboard_shortcuts(&self) {
        self.push("show_keyboard_shortcuts");
    }
    fn unsubscribe_from_feed(&self) {
        self.push("unsubscribe_from_feed");
    }
    fn set_focus_to_search_input(&self) {
        self.push("set_focus_to_search_input");
    }
    fn history_back(&self) {
        self.push("history_back");
    }
}

impl EntryOps for Recorder {
    fn save(&self, entry: NodeId) {
        self.push(format!("save({entry})"));
    }
    fn toggle_bookmark(&self, entry: NodeId) {
        self.push(format!("entry_toggle_bookmark({entry})"));
    }
    fn toggle_cache(&self, entry: NodeId) {
        self.push(format!("toggle_cache({entry})"));
    }
    fn toggle_status(&self, entry: NodeId) {
        self.push(format!("toggle_status({entry})"));
    }
    fn set_read(&self, entry: NodeId) {
        self.push(format!("set_read({entry})"));
    }
    fn fetch_content(&self, entry: NodeId) {
        self.push(format!("fetch_content({entry})"));
    }
    fn show_action_menu(&self, entry: NodeId) {
        self.push(format!("show_action_menu({entry})"));
    }
    fn confirm(&self, node: NodeId) {
        self.push(format!("confirm({node})"));
    }
    fn flip_link_state(&self, node: NodeId) {
        self.push(format!("flip_link_state({node})"));
    }
    fn submit_editor(&self, node: NodeId) {
        self.push(format!("submit_editor({node})"));
    }
    fn logo_menu(&self, node: NodeId) {
        self.push(format!("logo_menu({node})"));
    }
}

impl ModalSurface for Recorder {
    fn close(&self) {
        self.push("modal_close");
    }
}

/// A page with one entry card, the page-level affordances, and a search
/// input.
fn sample_page() -> (Tree, NodeId, NodeId, NodeId) {
    let mut tree = Tree::new(Element::new("body"));
    let entry = tree.append(tree.root(), Element::new("article").class("entry"));
    let toggle = tree.append(entry, Element::new("a").attr("data-toggle-status", ""));
    let search = tree.append(tree.root(), Element::new("input").attr("type", "search"));
    (tree, entry, toggle, search)
}

fn build_router(tree: &Tree) -> (Router, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let router = Router::new(tree, recorder.clone(), recorder.clone(), recorder.clone())
        .expect("router construction");
    (router, recorder)
}

fn press(spec: &str) -> KeyPress {
    KeyPress::new(Key::from_spec(spec).expect("key spec"))
}

/// Let spawned timer tasks observe the advanced clock.
async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn chord_sequence_fires_exactly_once() {
    let (tree, ..) = sample_page();
    let (mut router, recorder) = build_router(&tree);

    let now = Instant::now();
    router.handle_key(&tree, &press("g"), now);
    assert!(router.chord_pending());
    router.handle_key(&tree, &press("u"), now + Duration::from_millis(200));

    assert_eq!(recorder.calls(), vec!["go_to_page(unread)"]);
    assert!(!router.chord_pending());
}

#[tokio::test(start_paused = true)]
async fn unfinished_prefix_expires_silently() {
    let (tree, ..) = sample_page();
    let (mut router, recorder) = build_router(&tree);

    router.handle_key(&tree, &press("g"), Instant::now());
    assert!(router.chord_pending());

    tokio::time::advance(Duration::from_millis(1100)).await;
    settle().await;

    assert!(!router.chord_pending());
    assert!(recorder.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn failed_sequence_does_not_swallow_next_key() {
    let (tree, ..) = sample_page();
    let (mut router, recorder) = build_router(&tree);

    let now = Instant::now();
    router.handle_key(&tree, &press("g"), now);
    // No chord starts "g x"; "x" itself is unbound.
    router.handle_key(&tree, &press("x"), now);
    assert!(recorder.calls().is_empty());

    // The very next "j" must fire normally.
    router.handle_key(&tree, &press("j"), now);
    assert_eq!(recorder.calls(), vec!["go_to_next"]);
}

#[tokio::test(start_paused = true)]
async fn shifted_key_is_its_own_binding() {
    let (mut tree, ..) = sample_page();
    tree.append(
        tree.root(),
        Element::new("a")
            .attr("data-on-click", "markPageAsRead")
            .attr("data-show-only-unread", "true"),
    );
    let (mut router, recorder) = build_router(&tree);

    let now = Instant::now();
    router.handle_key(&tree, &press("A"), now);
    assert_eq!(recorder.calls(), vec!["mark_page_as_read(true)"]);
}

#[tokio::test(start_paused = true)]
async fn mark_page_as_read_without_affordance_is_a_no_op() {
    let (tree, ..) = sample_page();
    let (mut router, recorder) = build_router(&tree);

    router.handle_key(&tree, &press("A"), Instant::now());
    assert!(recorder.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn text_entry_focus_suppresses_chords_except_escape() {
    let (mut tree, .., search) = sample_page();
    tree.set_focus(Some(search));
    let (mut router, recorder) = build_router(&tree);

    let now = Instant::now();
    router.handle_key(&tree, &press("j"), now);
    router.handle_key(&tree, &press("g"), now);
    assert!(recorder.calls().is_empty());

    router.handle_key(&tree, &press("Escape"), now);
    assert_eq!(recorder.calls(), vec!["modal_close"]);
}

#[tokio::test(start_paused = true)]
async fn opt_out_disables_chords_but_not_clicks_or_swipes() {
    let mut tree = Tree::new(Element::new("body").attr("data-disable-keyboard-shortcuts", "true"));
    let entry = tree.append(tree.root(), Element::new("div").class("entry"));
    let toggle = tree.append(entry, Element::new("a").attr("data-toggle-status", ""));
    let (mut router, recorder) = build_router(&tree);

    assert!(!router.keyboard_enabled());
    router.handle_key(&tree, &press("j"), Instant::now());
    assert!(recorder.calls().is_empty());

    router.handle_click(&tree, toggle);
    assert_eq!(recorder.calls(), vec![format!("toggle_status({entry})")]);

    // Gestures are likewise unaffected by the keyboard opt-out.
    let t0 = Instant::now();
    router.handle_touch(&TouchEvent::Start(vec![Point::new(300.0, 100.0)]), t0);
    router.handle_touch(
        &TouchEvent::Move(Point::new(50.0, 100.0)),
        t0 + Duration::from_millis(150),
    );
    router.handle_touch(&TouchEvent::End, t0 + Duration::from_millis(200));
    assert_eq!(
        recorder.calls(),
        vec![format!("toggle_status({entry})"), "go_to_next".to_string()]
    );
}

#[test]
fn click_resolves_enclosing_entry() {
    let (tree, entry, toggle, _) = sample_page();
    let (mut router, recorder) = build_router(&tree);

    router.handle_click(&tree, toggle);
    assert_eq!(recorder.calls(), vec![format!("toggle_status({entry})")]);
}

#[test]
fn click_without_entry_container_is_a_no_op() {
    let mut tree = Tree::new(Element::new("body"));
    let orphan = tree.append(tree.root(), Element::new("a").attr("data-toggle-status", ""));
    let (mut router, recorder) = build_router(&tree);

    router.handle_click(&tree, orphan);
    assert!(recorder.calls().is_empty());
}

#[test]
fn set_read_pre_empts_enclosing_open_entry() {
    // The "mark read" affordance sits inside a card that is itself
    // clickable; capture phase must decide the event.
    let mut tree = Tree::new(Element::new("body"));
    let item = tree.append(tree.root(), Element::new("article").class("item"));
    let open = tree.append(item, Element::new("a").attr("data-fetch-content-entry", ""));
    let set_read = tree.append(open, Element::new("a").attr("data-set-read", ""));
    let (mut router, recorder) = build_router(&tree);

    router.handle_click(&tree, set_read);
    // Exactly one call: the capture binding, resolved to the item.
    assert_eq!(recorder.calls(), vec![format!("set_read({item})")]);
}

#[test]
fn unbound_click_does_nothing() {
    let (tree, entry, ..) = sample_page();
    let (mut router, recorder) = build_router(&tree);

    router.handle_click(&tree, entry);
    assert!(recorder.calls().is_empty());
}

#[test]
fn swipe_left_goes_to_next() {
    let (tree, ..) = sample_page();
    let (mut router, recorder) = build_router(&tree);

    let t0 = Instant::now();
    router.handle_touch(&TouchEvent::Start(vec![Point::new(300.0, 100.0)]), t0);
    router.handle_touch(
        &TouchEvent::Move(Point::new(50.0, 100.0)),
        t0 + Duration::from_millis(150),
    );
    router.handle_touch(&TouchEvent::End, t0 + Duration::from_millis(200));

    assert_eq!(recorder.calls(), vec!["go_to_next"]);
}

#[test]
fn swipe_cancel_emits_nothing() {
    let (tree, ..) = sample_page();
    let (mut router, recorder) = build_router(&tree);

    let t0 = Instant::now();
    router.handle_touch(&TouchEvent::Start(vec![Point::new(300.0, 100.0)]), t0);
    router.handle_touch(&TouchEvent::Cancel, t0 + Duration::from_millis(50));
    assert!(recorder.calls().is_empty());
}
