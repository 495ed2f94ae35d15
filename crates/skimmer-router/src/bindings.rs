//! The application's concrete binding tables: which chords, selectors, and
//! phases map to which intents. Pure configuration data; recognition lives
//! in the dispatcher crates.

use domtree::Selector;
use keyseq::ChordDispatcher;
use pointer::{Phase, PointerDispatcher, TargetResolve};
use skimmer_protocol::{Intent, Page};
use webkey::Key;

use crate::error::Result;

/// Selector for the page-level "mark page as read" affordance; the `A`
/// chord reads its `data-show-only-unread` attribute at execution time.
pub(crate) const MARK_PAGE_ANCHOR: &str = "a[data-on-click=markPageAsRead]";

/// Registers the full keyboard shortcut table.
pub(crate) fn register_chords(chords: &mut ChordDispatcher) -> Result<()> {
    chords.on("g u", Intent::GoToPage(Page::Unread))?;
    chords.on("g b", Intent::GoToPage(Page::Starred))?;
    chords.on("g h", Intent::GoToPage(Page::History))?;
    chords.on("g f", Intent::GoToFeedOrFeeds)?;
    chords.on("g c", Intent::GoToPage(Page::Categories))?;
    chords.on("g s", Intent::GoToPage(Page::Settings))?;
    chords.on("ArrowLeft", Intent::GoToPrevious)?;
    chords.on("ArrowRight", Intent::GoToNext)?;
    chords.on("k", Intent::GoToPrevious)?;
    chords.on("p", Intent::GoToPrevious)?;
    chords.on("j", Intent::GoToNext)?;
    chords.on("n", Intent::GoToNext)?;
    chords.on("h", Intent::GoToPage(Page::Previous))?;
    chords.on("l", Intent::GoToPage(Page::Next))?;
    chords.on("o", Intent::OpenSelectedItem)?;
    chords.on("v", Intent::OpenOriginalLink)?;
    chords.on("m", Intent::ToggleEntryStatus)?;
    chords.on("A", Intent::MarkPageAsRead)?;
    chords.on("s", Intent::SaveEntry)?;
    chords.on("d", Intent::FetchOriginalContent)?;
    chords.on("f", Intent::ToggleBookmark)?;
    chords.on("?", Intent::ShowKeyboardShortcuts)?;
    chords.on("#", Intent::UnsubscribeFromFeed)?;
    chords.on("/", Intent::FocusSearch)?;
    chords.on("Escape", Intent::CloseModal)?;
    // Escape must keep working while the search box has focus.
    chords.exempt_in_text_entry(Key::Escape);
    Ok(())
}

/// Registers the full delegated click table, in the original registration
/// order (significant: first match wins within a phase).
pub(crate) fn register_selectors(pd: &mut PointerDispatcher) -> Result<()> {
    // Entry-targeted intents resolve to the enclosing entry card or listing
    // item; without one the click is a no-op.
    let entry_or_item =
        || -> Result<TargetResolve> {
            Ok(TargetResolve::ClosestOf(vec![
                Selector::parse(".entry")?,
                Selector::parse(".item")?,
            ]))
        };

    pd.on_click("a[data-save-entry]", Intent::EntrySave)?;
    pd.on_click("a[data-toggle-bookmark]", Intent::EntryToggleBookmark)?;
    pd.on_click("a[data-toggle-cache]", Intent::EntryToggleCache)?;
    pd.on_click("a[data-history-go-back]", Intent::HistoryBack)?;
    pd.bind(
        "a[data-toggle-status]",
        Intent::EntryToggleStatus,
        Phase::Bubble,
        entry_or_item()?,
    )?;
    // Capture phase: the "mark read" affordance must win over an enclosing
    // "open entry" affordance.
    pd.bind(
        "a[data-set-read]",
        Intent::EntrySetRead,
        Phase::Capture,
        entry_or_item()?,
    )?;
    pd.on_click("a[data-fetch-content-entry]", Intent::EntryFetchContent)?;
    pd.bind(
        "a[data-on-click=showActionMenu]",
        Intent::ShowActionMenu,
        Phase::Bubble,
        entry_or_item()?,
    )?;
    pd.on_click(MARK_PAGE_ANCHOR, Intent::MarkPageAsRead)?;
    pd.on_click("a[data-confirm]", Intent::Confirm)?;
    pd.on_click("a[data-action=search]", Intent::FocusSearch)?;
    pd.on_click("button[data-action=submit-entry]", Intent::SubmitEditor)?;
    pd.on_click_capture("a[data-link-state=flip]", Intent::FlipLinkState)?;
    pd.on_click(".logo", Intent::LogoMenu)?;
    Ok(())
}
