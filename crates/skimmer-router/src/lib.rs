//! Skimmer Action Router
//!
//! The composition root of the input dispatch layer: it registers the
//! application's concrete key chords, click selectors, and swipe gestures
//! against the three recognition engines and forwards recognized events to
//! external collaborators.
//!
//! - [`Router`]: the primary type you construct and feed raw events
//! - [`Navigator`], [`EntryOps`], [`ModalSurface`]: the collaborator seams
//!
//! The router owns no recognition logic and no action semantics; it is the
//! binding tables plus a startup routine that performs all registrations
//! once. Recognition state is cleared by the engines before any
//! collaborator runs, so a failing collaborator cannot corrupt dispatch.

use std::{sync::Arc, time::Instant};

use domtree::{NodeId, Selector, Tree};
use keyseq::{ChordDispatcher, SeqOutcome, SeqTimer};
use parking_lot::Mutex;
use pointer::PointerDispatcher;
use skimmer_protocol::{Intent, SwipeDirection, TouchEvent};
use swipe::SwipeDispatcher;
use tracing::{debug, trace};
use webkey::KeyPress;

mod bindings;
mod deps;
mod error;

pub use deps::{EntryOps, ModalSurface, Navigator};
pub use error::{Result, RouterError};

/// Marker attribute on the document root that disables keyboard shortcuts
/// for the page. Checked once at construction, not re-evaluated live.
pub const DISABLE_SHORTCUTS_ATTR: &str = "data-disable-keyboard-shortcuts";

/// Routes recognized input events to the application's collaborators.
pub struct Router {
    /// Chord engine, shared with the timeout callback. `None` when the page
    /// opted out of keyboard shortcuts.
    chords: Option<Arc<Mutex<ChordDispatcher>>>,
    /// One-shot timer clearing an unresolved pending chord.
    seq_timer: SeqTimer,
    /// Delegated click engine.
    pointer: PointerDispatcher,
    /// Swipe gesture engine.
    swipe: SwipeDispatcher,
    /// Page-level navigation collaborator.
    nav: Arc<dyn Navigator>,
    /// Entry/state collaborator.
    entries: Arc<dyn EntryOps>,
    /// Modal collaborator.
    modal: Arc<dyn ModalSurface>,
    /// Parsed selector for the "mark page as read" affordance.
    mark_page_anchor: Selector,
}

impl Router {
    /// Builds a router and performs every registration.
    ///
    /// `tree` is only probed for the [`DISABLE_SHORTCUTS_ATTR`] opt-out;
    /// the live tree is passed per event afterwards.
    pub fn new(
        tree: &Tree,
        nav: Arc<dyn Navigator>,
        entries: Arc<dyn EntryOps>,
        modal: Arc<dyn ModalSurface>,
    ) -> Result<Self> {
        let chords = if shortcuts_disabled(tree) {
            debug!("keyboard shortcuts disabled by document root attribute");
            None
        } else {
            let mut dispatcher = ChordDispatcher::new();
            bindings::register_chords(&mut dispatcher)?;
            Some(Arc::new(Mutex::new(dispatcher)))
        };

        let mut pointer = PointerDispatcher::new();
        bindings::register_selectors(&mut pointer)?;

        Ok(Self {
            chords,
            seq_timer: SeqTimer::new(),
            pointer,
            swipe: SwipeDispatcher::new(),
            nav,
            entries,
            modal,
            mark_page_anchor: Selector::parse(bindings::MARK_PAGE_ANCHOR)?,
        })
    }

    /// True when the chord engine was attached at construction.
    pub fn keyboard_enabled(&self) -> bool {
        self.chords.is_some()
    }

    /// True while a partial chord is held pending.
    pub fn chord_pending(&self) -> bool {
        self.chords.as_ref().is_some_and(|c| c.lock().is_pending())
    }

    /// Feeds one keydown event.
    pub fn handle_key(&mut self, tree: &Tree, press: &KeyPress, now: Instant) {
        let Some(chords) = &self.chords else {
            return;
        };
        let outcome = chords.lock().handle(press, tree.focus_in_text_entry(), now);
        match outcome {
            SeqOutcome::Fired(intent) => {
                self.seq_timer.cancel();
                self.run(&intent, None, tree);
            }
            SeqOutcome::Pending => {
                // Re-arming cancels the previous countdown. A firing that
                // was never cancelled means the timeout elapsed with the
                // sequence still pending, so the clear is unconditional;
                // the engine's lazy deadline check covers the event path
                // regardless.
                let shared = Arc::clone(chords);
                let timeout = chords.lock().timeout();
                self.seq_timer.arm(timeout, move || {
                    shared.lock().clear();
                });
            }
            SeqOutcome::NoMatch => self.seq_timer.cancel(),
            SeqOutcome::Ignored => {}
        }
    }

    /// Feeds one pointer activation event on `target`.
    pub fn handle_click(&mut self, tree: &Tree, target: NodeId) {
        if let Some(hit) = self.pointer.dispatch(tree, target) {
            self.run(&hit.intent, Some(hit.target), tree);
        }
    }

    /// Feeds one touch-sequence event.
    pub fn handle_touch(&mut self, event: &TouchEvent, now: Instant) {
        match self.swipe.handle(event, now) {
            Some(SwipeDirection::Next) => self.nav.go_to_next(),
            Some(SwipeDirection::Previous) => self.nav.go_to_previous(),
            None => {}
        }
    }

    /// Forwards a recognized intent to its collaborator.
    fn run(&self, intent: &Intent, target: Option<NodeId>, tree: &Tree) {
        trace!(intent = ?intent, target = ?target, "route");
        match intent {
            Intent::GoToPage(page) => self.nav.go_to_page(*page),
            Intent::GoToPrevious => self.nav.go_to_previous(),
            Intent::GoToNext => self.nav.go_to_next(),
            Intent::GoToFeedOrFeeds => self.nav.go_to_feed_or_feeds(),
            Intent::OpenSelectedItem => self.nav.open_selected_item(),
            Intent::OpenOriginalLink => self.nav.open_original_link(),
            Intent::ToggleEntryStatus => self.nav.toggle_entry_status(),
            Intent::MarkPageAsRead => self.mark_page_as_read(target, tree),
            Intent::SaveEntry => self.nav.save_entry(),
            Intent::FetchOriginalContent => self.nav.fetch_original_content(),
            Intent::ToggleBookmark => self.nav.toggle_bookmark(),
            Intent::ShowKeyboardShortcuts => self.nav.show_keyboard_shortcuts(),
            Intent::UnsubscribeFromFeed => self.nav.unsubscribe_from_feed(),
            Intent::FocusSearch => self.nav.set_focus_to_search_input(),
            Intent::CloseModal => self.modal.close(),
            Intent::HistoryBack => self.nav.history_back(),
            Intent::EntrySave => self.entry(target, |e, n| e.save(n)),
            Intent::EntryToggleBookmark => self.entry(target, |e, n| e.toggle_bookmark(n)),
            Intent::EntryToggleCache => self.entry(target, |e, n| e.toggle_cache(n)),
            Intent::EntryToggleStatus => self.entry(target, |e, n| e.toggle_status(n)),
            Intent::EntrySetRead => self.entry(target, |e, n| e.set_read(n)),
            Intent::EntryFetchContent => self.entry(target, |e, n| e.fetch_content(n)),
            Intent::ShowActionMenu => self.entry(target, |e, n| e.show_action_menu(n)),
            Intent::Confirm => self.entry(target, |e, n| e.confirm(n)),
            Intent::FlipLinkState => self.entry(target, |e, n| e.flip_link_state(n)),
            Intent::SubmitEditor => self.entry(target, |e, n| e.submit_editor(n)),
            Intent::LogoMenu => self.entry(target, |e, n| e.logo_menu(n)),
        }
    }

    /// Invokes a targeted entry operation; without a target it is a no-op.
    fn entry(&self, target: Option<NodeId>, f: impl FnOnce(&dyn EntryOps, NodeId)) {
        match target {
            Some(node) => f(self.entries.as_ref(), node),
            None => debug!("entry intent without target dropped"),
        }
    }

    /// Resolves the only-unread flag for mark-page-as-read. The chord path
    /// has no target and queries the page affordance; without one the
    /// intent is dropped.
    fn mark_page_as_read(&self, target: Option<NodeId>, tree: &Tree) {
        let Some(anchor) = target.or_else(|| tree.query(&self.mark_page_anchor)) else {
            debug!("no mark-page-as-read affordance on page");
            return;
        };
        let only_unread = tree.element(anchor).attr_value("data-show-only-unread") == Some("true");
        self.nav.mark_page_as_read(only_unread);
    }
}

/// True when the document root opts the page out of keyboard shortcuts.
fn shortcuts_disabled(tree: &Tree) -> bool {
    tree.element(tree.root()).attr_value(DISABLE_SHORTCUTS_ATTR) == Some("true")
}
