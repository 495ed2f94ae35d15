//! Collaborators that announce every dispatched action via tracing.

use domtree::NodeId;
use skimmer_protocol::Page;
use skimmer_router::{EntryOps, ModalSurface, Navigator};
use tracing::info;

/// Logs each collaborator call instead of doing application work.
#[derive(Debug, Default)]
pub struct Announcer;

impl Navigator for Announcer {
    fn go_to_page(&self, page: Page) {
        info!(page = page.as_str(), "go_to_page");
    }
    fn go_to_previous(&self) {
        info!("go_to_previous");
    }
    fn go_to_next(&self) {
        info!("go_to_next");
    }
    fn go_to_feed_or_feeds(&self) {
        info!("go_to_feed_or_feeds");
    }
    fn open_selected_item(&self) {
        info!("open_selected_item");
    }
    fn open_original_link(&self) {
        info!("open_original_link");
    }
    fn toggle_entry_status(&self) {
        info!("toggle_entry_status");
    }
    fn mark_page_as_read(&self, only_unread: bool) {
        info!(only_unread, "mark_page_as_read");
    }
    fn save_entry(&self) {
        info!("save_entry");
    }
    fn fetch_original_content(&self) {
        info!("fetch_original_content");
    }
    fn toggle_bookmark(&self) {
        info!("toggle_bookmark");
    }
    fn show_keyboard_shortcuts(&self) {
        info!("show_keyboard_shortcuts");
    }
    fn unsubscribe_from_feed(&self) {
        info!("unsubscribe_from_feed");
    }
    fn set_focus_to_search_input(&self) {
        info!("set_focus_to_search_input");
    }
    fn history_back(&self) {
        info!("history_back");
    }
}

impl EntryOps for Announcer {
    fn save(&self, entry: NodeId) {
        info!(%entry, "entry_save");
    }
    fn toggle_bookmark(&self, entry: NodeId) {
        info!(%entry, "entry_toggle_bookmark");
    }
    fn toggle_cache(&self, entry: NodeId) {
        info!(%entry, "entry_toggle_cache");
    }
    fn toggle_status(&self, entry: NodeId) {
        info!(%entry, "entry_toggle_status");
    }
    fn set_read(&self, entry: NodeId) {
        info!(%entry, "entry_set_read");
    }
    fn fetch_content(&self, entry: NodeId) {
        info!(%entry, "entry_fetch_content");
    }
    fn show_action_menu(&self, entry: NodeId) {
        info!(%entry, "show_action_menu");
    }
    fn confirm(&self, node: NodeId) {
        info!(%node, "confirm");
    }
    fn flip_link_state(&self, node: NodeId) {
        info!(%node, "flip_link_state");
    }
    fn submit_editor(&self, node: NodeId) {
        info!(%node, "submit_editor");
    }
    fn logo_menu(&self, node: NodeId) {
        info!(%node, "logo_menu");
    }
}

impl ModalSurface for Announcer {
    fn close(&self) {
        info!("modal_close");
    }
}
