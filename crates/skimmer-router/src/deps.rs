use domtree::NodeId;
use skimmer_protocol::Page;

// ---- Collaborator abstractions ----
//
// The router owns no action semantics: recognized inputs are forwarded to
// these traits by name only. Methods take `&self`; implementors own
// whatever interior mutability they need, so a single `Arc<dyn Navigator>`
// can be shared with the host's other components.

/// Page-level navigation collaborator.
pub trait Navigator: Send + Sync {
    /// Navigate to a named page.
    fn go_to_page(&self, page: Page);
    /// Select the previous entry on the current listing.
    fn go_to_previous(&self);
    /// Select the next entry on the current listing.
    fn go_to_next(&self);
    /// Navigate to the current feed, or the feeds listing.
    fn go_to_feed_or_feeds(&self);
    /// Open the currently selected item.
    fn open_selected_item(&self);
    /// Open the selected entry's original link.
    fn open_original_link(&self);
    /// Toggle read/unread on the selected entry.
    fn toggle_entry_status(&self);
    /// Mark every entry on the page as read.
    fn mark_page_as_read(&self, only_unread: bool);
    /// Save the selected entry to third-party services.
    fn save_entry(&self);
    /// Download the selected entry's original content.
    fn fetch_original_content(&self);
    /// Toggle the bookmark flag on the selected entry.
    fn toggle_bookmark(&self);
    /// Show the keyboard shortcut reference.
    fn show_keyboard_shortcuts(&self);
    /// Unsubscribe from the current feed.
    fn unsubscribe_from_feed(&self);
    /// Move focus to the search input.
    fn set_focus_to_search_input(&self);
    /// Go back one step in the browser history.
    fn history_back(&self);
}

/// Entry/state collaborator, invoked with the resolved entry/item element.
pub trait EntryOps: Send + Sync {
    /// Save `entry` to third-party services.
    fn save(&self, entry: NodeId);
    /// Toggle the bookmark flag on `entry`.
    fn toggle_bookmark(&self, entry: NodeId);
    /// Toggle offline caching for `entry`.
    fn toggle_cache(&self, entry: NodeId);
    /// Toggle read/unread on `entry`.
    fn toggle_status(&self, entry: NodeId);
    /// Mark `entry` as read.
    fn set_read(&self, entry: NodeId);
    /// Download original content for `entry`.
    fn fetch_content(&self, entry: NodeId);
    /// Show the action menu for `entry`.
    fn show_action_menu(&self, entry: NodeId);
    /// Run the confirmation flow for the destructive link `node`.
    fn confirm(&self, node: NodeId);
    /// Flip the visual state of the stateful link `node`.
    fn flip_link_state(&self, node: NodeId);
    /// Submit the entry editor form via `node`.
    fn submit_editor(&self, node: NodeId);
    /// Activate the logo element `node` (menu toggle on small screens).
    fn logo_menu(&self, node: NodeId);
}

/// Modal collaborator.
pub trait ModalSurface: Send + Sync {
    /// Close the active modal, if any.
    fn close(&self);
}
