use std::{
    collections::HashSet,
    time::{Duration, Instant},
};

use skimmer_protocol::Intent;
use tracing::{debug, trace};
use webkey::{Key, KeyChord, KeyPress};

use crate::SeqError;

/// Inter-key timeout for multi-key sequences.
pub const SEQ_TIMEOUT: Duration = Duration::from_millis(1000);

/// Result of handling one keydown.
#[derive(Clone, Debug, PartialEq)]
pub enum SeqOutcome {
    /// The accumulated sequence matched a bound chord exactly.
    Fired(Intent),
    /// The accumulated sequence is a strict prefix of at least one bound
    /// chord; the caller should (re)arm the sequence timeout.
    Pending,
    /// No bound chord starts with the accumulated sequence; state was
    /// cleared.
    NoMatch,
    /// The press did not participate in sequencing at all (auto-repeat,
    /// bare modifier, or suppressed while a text-entry element has focus).
    /// Pending state is untouched.
    Ignored,
}

/// Resolution of a typed sequence against the bindings table.
enum Lookup {
    /// Equal to a bound chord.
    Exact(Intent),
    /// Strict proper prefix of at least one bound chord.
    Prefix,
    /// Not the start of anything bound.
    Miss,
}

/// Recognizes single keys and timed multi-key sequences.
///
/// Owns the one mutable state bundle of the keyboard engine: the tokens
/// typed so far and their deadline. The deadline is checked lazily on every
/// keydown, so an external timer ([`crate::SeqTimer`]) only makes the clear
/// prompt; it is never required for correct matching.
#[derive(Debug)]
pub struct ChordDispatcher {
    /// Bound chords in registration order; the first binding for a chord
    /// wins.
    bindings: Vec<(KeyChord, Intent)>,
    /// Tokens typed so far toward a multi-key chord.
    pending: Vec<Key>,
    /// Deadline for the pending sequence; `None` when nothing is pending.
    deadline: Option<Instant>,
    /// Inter-key timeout used to compute deadlines.
    timeout: Duration,
    /// Keys that still dispatch while a text-entry element has focus.
    exempt: HashSet<Key>,
}

impl Default for ChordDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ChordDispatcher {
    /// Creates an empty dispatcher with the standard [`SEQ_TIMEOUT`].
    pub fn new() -> Self {
        Self::with_timeout(SEQ_TIMEOUT)
    }

    /// Creates an empty dispatcher with a custom inter-key timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            bindings: Vec::new(),
            pending: Vec::new(),
            deadline: None,
            timeout,
            exempt: HashSet::new(),
        }
    }

    /// Registers `chord` to fire `intent`.
    pub fn bind(&mut self, chord: KeyChord, intent: Intent) {
        trace!(chord = %chord, intent = ?intent, "chord_bind");
        self.bindings.push((chord, intent));
    }

    /// Parses `spec` (e.g. `"g u"`) and registers it to fire `intent`.
    pub fn on(&mut self, spec: &str, intent: Intent) -> Result<(), SeqError> {
        let chord = KeyChord::parse(spec).ok_or_else(|| SeqError::InvalidChordSpec {
            spec: spec.to_string(),
        })?;
        self.bind(chord, intent);
        Ok(())
    }

    /// Marks `key` as exempt from text-entry suppression (e.g. `Escape`
    /// must close a modal even while the search box has focus).
    pub fn exempt_in_text_entry(&mut self, key: Key) {
        self.exempt.insert(key);
    }

    /// The inter-key timeout, for callers arming an external timer.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// True while a partial sequence is held pending.
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Handles one keydown.
    ///
    /// `in_text_entry` is whether the active focus target accepts text
    /// input; `now` is the event timestamp. Never fails: an unmatched
    /// sequence is simply dropped.
    pub fn handle(&mut self, press: &KeyPress, in_text_entry: bool, now: Instant) -> SeqOutcome {
        if press.repeat || press.key.is_modifier() {
            return SeqOutcome::Ignored;
        }
        if in_text_entry && !self.exempt.contains(&press.key) {
            trace!(key = %press.key, "chord_suppressed_text_entry");
            return SeqOutcome::Ignored;
        }
        self.expire(now);

        self.pending.push(press.key);
        match self.lookup() {
            Lookup::Exact(intent) => self.fire(intent),
            Lookup::Prefix => self.pend(now),
            Lookup::Miss if self.pending.len() > 1 => {
                // A failed sequence must not swallow the next valid one:
                // retry with the just-pressed key as a fresh length-1
                // sequence.
                self.pending.clear();
                self.pending.push(press.key);
                match self.lookup() {
                    Lookup::Exact(intent) => self.fire(intent),
                    Lookup::Prefix => self.pend(now),
                    Lookup::Miss => self.drop_sequence(),
                }
            }
            Lookup::Miss => self.drop_sequence(),
        }
    }

    /// Clears the pending sequence if its deadline has passed.
    pub fn expire(&mut self, now: Instant) {
        if let Some(deadline) = self.deadline
            && now >= deadline
        {
            trace!(pending = self.pending.len(), "chord_timeout");
            self.clear();
        }
    }

    /// Unconditionally clears pending state.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.deadline = None;
    }

    /// Resolves the pending tokens against the bindings table.
    fn lookup(&self) -> Lookup {
        if let Some((_, intent)) = self
            .bindings
            .iter()
            .find(|(chord, _)| chord.keys() == self.pending.as_slice())
        {
            return Lookup::Exact(intent.clone());
        }
        if self
            .bindings
            .iter()
            .any(|(chord, _)| chord.has_strict_prefix(&self.pending))
        {
            Lookup::Prefix
        } else {
            Lookup::Miss
        }
    }

    /// Clears state, then reports the match. State is cleared before the
    /// caller runs the action so a failing action cannot corrupt it.
    fn fire(&mut self, intent: Intent) -> SeqOutcome {
        debug!(intent = ?intent, "chord_fired");
        self.clear();
        SeqOutcome::Fired(intent)
    }

    /// Holds the sequence pending and moves the deadline out.
    fn pend(&mut self, now: Instant) -> SeqOutcome {
        self.deadline = Some(now + self.timeout);
        trace!(pending = self.pending.len(), "chord_pending");
        SeqOutcome::Pending
    }

    /// Drops an unmatched sequence.
    fn drop_sequence(&mut self) -> SeqOutcome {
        trace!("chord_no_match");
        self.clear();
        SeqOutcome::NoMatch
    }
}
