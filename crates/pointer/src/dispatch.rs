use domtree::{NodeId, Selector, SelectorError, Tree};
use skimmer_protocol::Intent;
use tracing::{debug, trace};

/// Event phase a binding participates in.
///
/// Capture bindings pre-empt bubble bindings for the same physical event,
/// which is how an affordance nested inside another (a "mark read" control
/// inside an "open entry" card) wins over its container.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Evaluated first, ahead of every bubble binding.
    Capture,
    /// Evaluated after every capture binding.
    Bubble,
}

/// How the dispatched target is derived from the matched element.
#[derive(Clone, Debug)]
pub enum TargetResolve {
    /// Dispatch the matched element itself.
    Matched,
    /// Dispatch the nearest ancestor of the matched element satisfying one
    /// of these selectors, tried in order. If none resolves, the binding
    /// consumes the event without dispatching (no-op rather than a null
    /// target).
    ClosestOf(Vec<Selector>),
}

/// A selector binding: (selector, intent, phase, target resolution).
/// Immutable once registered.
#[derive(Clone, Debug)]
struct SelectorBinding {
    /// The selector this binding matches against the ancestor chain.
    selector: Selector,
    /// The intent dispatched on a match.
    intent: Intent,
    /// Which phase the binding is evaluated in.
    phase: Phase,
    /// How the dispatched target is derived.
    resolve: TargetResolve,
}

/// A resolved dispatch: the intent and the element it applies to — the
/// matched (or resolved) ancestor, not necessarily the literal event target.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerHit {
    /// The bound intent.
    pub intent: Intent,
    /// The element the intent applies to.
    pub target: NodeId,
}

/// Dispatches click-family events to selector bindings.
#[derive(Debug, Default)]
pub struct PointerDispatcher {
    /// All bindings in registration order; phase filtering happens at
    /// dispatch time so registration order within a phase is preserved.
    bindings: Vec<SelectorBinding>,
}

impl PointerDispatcher {
    /// Creates a dispatcher with no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a bubble-phase binding for `spec` dispatching the matched
    /// element.
    pub fn on_click(&mut self, spec: &str, intent: Intent) -> Result<(), SelectorError> {
        self.bind(spec, intent, Phase::Bubble, TargetResolve::Matched)
    }

    /// Registers a capture-phase binding for `spec` dispatching the matched
    /// element.
    pub fn on_click_capture(&mut self, spec: &str, intent: Intent) -> Result<(), SelectorError> {
        self.bind(spec, intent, Phase::Capture, TargetResolve::Matched)
    }

    /// Registers a binding with explicit phase and target resolution.
    pub fn bind(
        &mut self,
        spec: &str,
        intent: Intent,
        phase: Phase,
        resolve: TargetResolve,
    ) -> Result<(), SelectorError> {
        let selector = Selector::parse(spec)?;
        trace!(selector = %selector, intent = ?intent, phase = ?phase, "pointer_bind");
        self.bindings.push(SelectorBinding {
            selector,
            intent,
            phase,
            resolve,
        });
        Ok(())
    }

    /// Dispatches a pointer activation on `target`.
    ///
    /// The ancestor chain is snapshotted up front, so whatever the caller
    /// does with the hit (including detaching the element) cannot corrupt
    /// the walk. First match wins: at most one binding fires per physical
    /// event.
    pub fn dispatch(&self, tree: &Tree, target: NodeId) -> Option<PointerHit> {
        let chain = tree.ancestor_chain(target);
        for phase in [Phase::Capture, Phase::Bubble] {
            for binding in self.bindings.iter().filter(|b| b.phase == phase) {
                let Some(matched) = chain
                    .iter()
                    .copied()
                    .find(|n| binding.selector.matches(tree, *n))
                else {
                    continue;
                };
                return match &binding.resolve {
                    TargetResolve::Matched => Some(self.hit(binding, matched)),
                    TargetResolve::ClosestOf(containers) => {
                        match containers.iter().find_map(|s| tree.closest(matched, s)) {
                            Some(resolved) => Some(self.hit(binding, resolved)),
                            None => {
                                // The binding decided the event but its
                                // expected container is gone: drop it.
                                debug!(
                                    selector = %binding.selector,
                                    "pointer_target_unresolved"
                                );
                                None
                            }
                        }
                    }
                };
            }
        }
        None
    }

    /// Builds the hit for a decided binding.
    fn hit(&self, binding: &SelectorBinding, target: NodeId) -> PointerHit {
        debug!(selector = %binding.selector, intent = ?binding.intent, %target, "pointer_hit");
        PointerHit {
            intent: binding.intent.clone(),
            target,
        }
    }
}
