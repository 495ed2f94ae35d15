//! webkey: Browser-style key tokens and chord sequences.
//!
//! - [`Key`]: a single key token as reported by a browser keydown event
//!   (printable character, named control key, or bare modifier).
//! - [`KeyPress`]: a key token plus its auto-repeat flag.
//! - [`KeyChord`]: an ordered sequence of 1+ key tokens, e.g. `"g u"`.
//!
//! Spec helpers: [`Key::from_spec`], [`Key::to_spec`], [`KeyChord::parse`].

mod key;
pub use key::{Key, KeyPress};

mod chord;
pub use chord::KeyChord;
