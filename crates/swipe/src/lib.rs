//! swipe: Horizontal swipe recognition over touch sequences.
//!
//! A small `idle → tracking → idle` state machine. Tracking begins on a
//! single-contact touch-start, is abandoned as soon as the drag turns
//! predominantly vertical (horizontal swipes must not fight page
//! scrolling), and resolves on touch-end. A swipe fires only when it clears
//! both a distance and a velocity floor: distance alone misfires on slow
//! drags, velocity alone misfires on short fast jitters.

use std::time::Instant;

use skimmer_protocol::{Point, SwipeDirection, TouchEvent};
use tracing::{debug, trace};

/// Minimum horizontal displacement for a swipe, in CSS pixels.
pub const MIN_SWIPE_DISTANCE: f64 = 75.0;

/// Minimum implied velocity for a swipe, in pixels per millisecond.
pub const MIN_SWIPE_VELOCITY: f64 = 0.25;

/// State for one active touch contact.
#[derive(Clone, Copy, Debug)]
struct GestureState {
    /// Where the contact went down.
    start: Point,
    /// When the contact went down.
    started_at: Instant,
    /// The latest observed position.
    current: Point,
}

/// Recognizes horizontal swipes and emits directional navigation events.
#[derive(Debug, Default)]
pub struct SwipeDispatcher {
    /// The active contact, if one is being tracked.
    state: Option<GestureState>,
}

impl SwipeDispatcher {
    /// Creates an idle dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a contact is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.state.is_some()
    }

    /// Handles one touch event at time `now`, returning a direction when a
    /// swipe is recognized (only ever on touch-end).
    pub fn handle(&mut self, event: &TouchEvent, now: Instant) -> Option<SwipeDirection> {
        match event {
            TouchEvent::Start(points) => {
                // Only a single contact starts a gesture; a second finger
                // coming down aborts whatever was in flight.
                self.state = match points.as_slice() {
                    [point] => Some(GestureState {
                        start: *point,
                        started_at: now,
                        current: *point,
                    }),
                    _ => None,
                };
                None
            }
            TouchEvent::Move(point) => {
                let Some(state) = self.state.as_mut() else {
                    return None;
                };
                state.current = *point;
                let dx = state.current.x - state.start.x;
                let dy = state.current.y - state.start.y;
                if dy.abs() > dx.abs() {
                    trace!(dx, dy, "swipe_abandoned_scroll");
                    self.state = None;
                }
                None
            }
            TouchEvent::End => {
                let state = self.state.take()?;
                Self::resolve(&state, now)
            }
            TouchEvent::Cancel => {
                if self.state.take().is_some() {
                    trace!("swipe_cancelled");
                }
                None
            }
        }
    }

    /// Applies the distance and velocity thresholds to a finished contact.
    fn resolve(state: &GestureState, now: Instant) -> Option<SwipeDirection> {
        let dx = state.current.x - state.start.x;
        let elapsed_ms = now.duration_since(state.started_at).as_millis() as f64;
        if dx.abs() < MIN_SWIPE_DISTANCE {
            return None;
        }
        // A zero-duration end still counts: displacement at infinite speed.
        if elapsed_ms > 0.0 && dx.abs() / elapsed_ms < MIN_SWIPE_VELOCITY {
            trace!(dx, elapsed_ms, "swipe_too_slow");
            return None;
        }
        let direction = if dx < 0.0 {
            SwipeDirection::Next
        } else {
            SwipeDirection::Previous
        };
        debug!(dx, elapsed_ms, ?direction, "swipe_recognized");
        Some(direction)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn run(
        dispatcher: &mut SwipeDispatcher,
        from: Point,
        to: Point,
        elapsed: Duration,
    ) -> Option<SwipeDirection> {
        let t0 = Instant::now();
        assert_eq!(dispatcher.handle(&TouchEvent::Start(vec![from]), t0), None);
        assert_eq!(dispatcher.handle(&TouchEvent::Move(to), t0 + elapsed), None);
        dispatcher.handle(&TouchEvent::End, t0 + elapsed)
    }

    #[test]
    fn fast_leftward_swipe_is_next() {
        let mut d = SwipeDispatcher::new();
        let out = run(
            &mut d,
            Point::new(300.0, 100.0),
            Point::new(50.0, 100.0),
            Duration::from_millis(200),
        );
        assert_eq!(out, Some(SwipeDirection::Next));
        assert!(!d.is_tracking());
    }

    #[test]
    fn fast_rightward_swipe_is_previous() {
        let mut d = SwipeDispatcher::new();
        let out = run(
            &mut d,
            Point::new(50.0, 100.0),
            Point::new(300.0, 100.0),
            Duration::from_millis(200),
        );
        assert_eq!(out, Some(SwipeDirection::Previous));
    }

    #[test]
    fn slow_drag_of_same_distance_is_ignored() {
        let mut d = SwipeDispatcher::new();
        let out = run(
            &mut d,
            Point::new(300.0, 100.0),
            Point::new(50.0, 100.0),
            Duration::from_millis(2000),
        );
        assert_eq!(out, None);
    }

    #[test]
    fn short_fast_jitter_is_ignored() {
        let mut d = SwipeDispatcher::new();
        let out = run(
            &mut d,
            Point::new(300.0, 100.0),
            Point::new(260.0, 100.0),
            Duration::from_millis(30),
        );
        assert_eq!(out, None);
    }

    #[test]
    fn vertical_drag_is_a_scroll() {
        let mut d = SwipeDispatcher::new();
        let t0 = Instant::now();
        d.handle(&TouchEvent::Start(vec![Point::new(300.0, 100.0)]), t0);
        // Equal horizontal distance, but more vertical travel.
        d.handle(
            &TouchEvent::Move(Point::new(50.0, 400.0)),
            t0 + Duration::from_millis(100),
        );
        assert!(!d.is_tracking());
        assert_eq!(
            d.handle(&TouchEvent::End, t0 + Duration::from_millis(200)),
            None
        );
    }

    #[test]
    fn multi_touch_start_does_not_track() {
        let mut d = SwipeDispatcher::new();
        let points = vec![Point::new(10.0, 10.0), Point::new(20.0, 10.0)];
        d.handle(&TouchEvent::Start(points), Instant::now());
        assert!(!d.is_tracking());
    }

    #[test]
    fn cancel_leaves_no_residue() {
        let mut d = SwipeDispatcher::new();
        let t0 = Instant::now();
        d.handle(&TouchEvent::Start(vec![Point::new(300.0, 100.0)]), t0);
        d.handle(
            &TouchEvent::Move(Point::new(200.0, 100.0)),
            t0 + Duration::from_millis(50),
        );
        d.handle(&TouchEvent::Cancel, t0 + Duration::from_millis(60));
        assert!(!d.is_tracking());

        // The next gesture recognizes cleanly.
        let out = run(
            &mut d,
            Point::new(300.0, 100.0),
            Point::new(50.0, 100.0),
            Duration::from_millis(200),
        );
        assert_eq!(out, Some(SwipeDirection::Next));
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut d = SwipeDispatcher::new();
        assert_eq!(d.handle(&TouchEvent::End, Instant::now()), None);
    }
}
