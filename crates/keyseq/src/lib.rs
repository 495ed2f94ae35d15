//! keyseq: Timed multi-key chord recognition.
//!
//! [`ChordDispatcher`] accumulates keydown tokens into a pending sequence
//! and resolves it against a table of bound chords: an exact match fires the
//! bound intent, a strict prefix stays pending under a deadline, and
//! anything else restarts matching with the just-pressed key. All matching
//! is synchronous; [`SeqTimer`] is the one asynchronous primitive, a
//! cancellable one-shot used to clear a pending sequence that never
//! completes.

mod error;
pub use error::SeqError;

mod state;
pub use state::{ChordDispatcher, SEQ_TIMEOUT, SeqOutcome};

mod timer;
pub use timer::SeqTimer;
