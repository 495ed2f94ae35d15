//! RON-scripted input traces.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One scripted input step.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Step {
    /// A keydown, e.g. `Key("g")` or `Key("Escape")`.
    Key(String),
    /// A click on the first element matching the selector.
    Click(String),
    /// A touch contact going down at (x, y).
    TouchStart(f64, f64),
    /// The tracked contact moving to (x, y).
    TouchMove(f64, f64),
    /// The tracked contact lifting.
    TouchEnd,
    /// The touch sequence being interrupted.
    TouchCancel,
    /// Move focus to the first element matching the selector.
    Focus(String),
    /// Clear focus.
    Blur,
    /// Let wall-clock time pass (milliseconds); chord timeouts run.
    Wait(u64),
}

/// Error type for trace loading.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The trace file could not be read.
    #[error("cannot read trace file: {0}")]
    Io(#[from] std::io::Error),
    /// The trace file is not valid RON.
    #[error("cannot parse trace file: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Loads a trace from a RON file: a sequence like
/// `[Key("g"), Key("u"), Wait(500), Click("a[data-set-read]")]`.
pub fn load(path: &Path) -> Result<Vec<Step>, ScriptError> {
    let text = fs::read_to_string(path)?;
    Ok(ron::from_str(&text)?)
}

/// The built-in demo trace used when no file is given: a chord, a
/// delegated click, a chord that times out, a swipe, and a modal
/// open/close.
pub fn demo() -> Vec<Step> {
    vec![
        Step::Key("g".into()),
        Step::Key("u".into()),
        Step::Click("a[data-set-read]".into()),
        Step::Key("g".into()),
        Step::Wait(1200),
        Step::Key("b".into()),
        Step::TouchStart(300.0, 100.0),
        Step::TouchMove(50.0, 100.0),
        Step::TouchEnd,
        Step::Focus("input[type=search]".into()),
        Step::Key("j".into()),
        Step::Key("Escape".into()),
        Step::Blur,
        Step::Key("?".into()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ron_trace() {
        let text = r#"[
            Key("g"),
            Key("u"),
            Wait(500),
            Click("a[data-set-read]"),
            TouchStart(300.0, 100.0),
            TouchEnd,
        ]"#;
        let steps: Vec<Step> = ron::from_str(text).expect("parse");
        assert_eq!(steps.len(), 6);
        assert!(matches!(&steps[0], Step::Key(k) if k == "g"));
        assert!(matches!(&steps[3], Step::Click(s) if s == "a[data-set-read]"));
    }

    #[test]
    fn demo_roundtrips_through_ron() {
        let text = ron::to_string(&demo()).expect("serialize");
        let steps: Vec<Step> = ron::from_str(&text).expect("reparse");
        assert_eq!(steps.len(), demo().len());
    }
}
