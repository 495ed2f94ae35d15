//! pointer: Delegated selector-based pointer dispatch.
//!
//! Instead of attaching a listener per element, actions are bound to
//! selectors once and resolved per click against the event target's
//! ancestor chain. Bindings carry an explicit [`Phase`] tag; the dispatch
//! algorithm here is the single source of truth for ordering: capture
//! bindings are evaluated before bubble bindings for the same physical
//! event, in registration order within each phase, and the first binding
//! whose selector matches an element on the chain decides the event.

mod dispatch;
pub use dispatch::{Phase, PointerDispatcher, PointerHit, TargetResolve};
