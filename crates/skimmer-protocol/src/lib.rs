//! skimmer-protocol: Shared vocabulary between the recognition engines and
//! the router.
//!
//! - [`Intent`]: the semantic action a recognized input resolves to. The
//!   dispatch layer never interprets these; the router forwards them to
//!   collaborators.
//! - [`Page`]: named pages the navigation collaborator can jump to.
//! - [`SwipeDirection`]: directional events emitted by the swipe engine.
//! - [`Point`] / [`TouchEvent`]: the touch-sequence event model.

use serde::{Deserialize, Serialize};

/// Named pages for `go_to_page` navigation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Page {
    /// The unread entries listing.
    Unread,
    /// The starred entries listing.
    Starred,
    /// The reading history listing.
    History,
    /// The categories listing.
    Categories,
    /// The settings page.
    Settings,
    /// The previous listing page (pagination).
    Previous,
    /// The next listing page (pagination).
    Next,
}

impl Page {
    /// The page name as used by the navigation collaborator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Starred => "starred",
            Self::History => "history",
            Self::Categories => "categories",
            Self::Settings => "settings",
            Self::Previous => "previous",
            Self::Next => "next",
        }
    }
}

/// The semantic action a recognized input maps to.
///
/// Intents are opaque to the recognition engines. Page-level intents carry
/// everything they need; entry-level intents (the `Entry*` variants,
/// `ShowActionMenu`, `Confirm`, `FlipLinkState`, `SubmitEditor`, `LogoMenu`)
/// are only ever dispatched together with a resolved target element.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Intent {
    /// Navigate to a named page.
    GoToPage(Page),
    /// Select the previous entry on the current listing.
    GoToPrevious,
    /// Select the next entry on the current listing.
    GoToNext,
    /// Navigate to the current feed, or the feeds listing.
    GoToFeedOrFeeds,
    /// Open the currently selected item.
    OpenSelectedItem,
    /// Open the selected entry's original link.
    OpenOriginalLink,
    /// Toggle read/unread on the selected entry.
    ToggleEntryStatus,
    /// Mark the whole page as read. The only-unread flag is read from the
    /// page affordance at execution time.
    MarkPageAsRead,
    /// Save the selected entry to third-party services.
    SaveEntry,
    /// Download the selected entry's original content.
    FetchOriginalContent,
    /// Toggle the bookmark flag on the selected entry.
    ToggleBookmark,
    /// Show the keyboard shortcut reference.
    ShowKeyboardShortcuts,
    /// Unsubscribe from the current feed.
    UnsubscribeFromFeed,
    /// Move focus to the search input.
    FocusSearch,
    /// Close the active modal.
    CloseModal,
    /// Go back one step in the browser history.
    HistoryBack,
    /// Save a specific entry (pointer affordance).
    EntrySave,
    /// Toggle the bookmark flag on a specific entry.
    EntryToggleBookmark,
    /// Toggle offline caching for a specific entry.
    EntryToggleCache,
    /// Toggle read/unread on a specific entry.
    EntryToggleStatus,
    /// Mark a specific entry as read.
    EntrySetRead,
    /// Download original content for a specific entry.
    EntryFetchContent,
    /// Show the action menu for a specific entry.
    ShowActionMenu,
    /// Run the confirmation flow for a destructive link.
    Confirm,
    /// Flip the visual state of a stateful link.
    FlipLinkState,
    /// Submit the entry editor form.
    SubmitEditor,
    /// Activate the logo element (menu toggle on small screens).
    LogoMenu,
}

/// Direction of a recognized horizontal swipe.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum SwipeDirection {
    /// Rightward swipe: go to the previous entry.
    Previous,
    /// Leftward swipe: go to the next entry.
    Next,
}

/// A point in viewport coordinates (CSS pixels).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Constructs a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One event of a touch sequence on the gesture root.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TouchEvent {
    /// Contacts went down; one point per active contact.
    Start(Vec<Point>),
    /// The tracked contact moved.
    Move(Point),
    /// The tracked contact lifted.
    End,
    /// The sequence was interrupted (system gesture, focus loss).
    Cancel,
}
