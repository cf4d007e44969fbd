//! Drag-to-move-cursor.
//!
//! A horizontal drag over the keyboard moves the text cursor one character per
//! step. Each tick scales the raw movement by `max_velocity / (velocity + epsilon)`,
//! turns the scaled horizontal distance into whole steps and throws away the
//! rest: sub-step remainders are not carried into the next tick.

use crate::{config::GestureTuning, domain::outcome::SkipReason};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Move the cursor `steps` characters in `direction`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CursorCommand {
    pub direction: Direction,
    pub steps: u32,
}

/// One update of a running drag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureSample {
    pub dx: f64,
    pub dy: f64,
    /// Magnitude of the drag velocity, in points per second.
    pub velocity: f64,
    /// Host timestamp; must not go backwards within a gesture.
    pub timestamp_ms: u64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent {
    Began,
    Changed(GestureSample),
    Ended,
    Cancelled,
}

/// What the host should do in response to a gesture event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GestureEffect {
    DimKeyLabels,
    PlayFeedback,
    MoveCursor(CursorCommand),
    RestoreKeyLabels,
}

/// Turns a horizontal delta into a cursor command, or `None` if it is shorter
/// than one step.
pub fn cursor_command(tuning: &GestureTuning, dx: f64, velocity: f64) -> Option<CursorCommand> {
    let velocity = if velocity.is_finite() && velocity > 0.0 {
        velocity
    } else {
        0.0
    };
    let scale = tuning.max_velocity / (velocity + tuning.velocity_epsilon);
    let scaled = dx * scale;

    // NaN saturates to 0 in the cast.
    let steps = ((scaled.abs() / tuning.pixels_per_step).floor() as u32)
        .min(tuning.max_steps_per_tick);
    if steps == 0 {
        return None;
    }

    let direction = if scaled < 0.0 {
        Direction::Left
    } else {
        Direction::Right
    };
    Some(CursorCommand { direction, steps })
}

#[derive(Debug, Clone)]
pub struct GestureCursorController {
    tuning: GestureTuning,
    active: bool,
    accumulated: (f64, f64),
    last_timestamp_ms: Option<u64>,
}

impl GestureCursorController {
    pub fn new(tuning: GestureTuning) -> Self {
        Self {
            tuning,
            active: false,
            accumulated: (0.0, 0.0),
            last_timestamp_ms: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn handle(&mut self, event: GestureEvent) -> Vec<GestureEffect> {
        match event {
            GestureEvent::Began => {
                self.reset();
                self.active = true;
                tracing::trace!(msg = "cursor_gesture_began");
                vec![GestureEffect::DimKeyLabels, GestureEffect::PlayFeedback]
            }
            GestureEvent::Changed(sample) => match self.update(sample) {
                Ok(Some(cmd)) => vec![GestureEffect::MoveCursor(cmd)],
                Ok(None) => Vec::new(),
                Err(reason) => {
                    tracing::warn!(msg = "gesture_sample_dropped", reason = reason.as_str());
                    Vec::new()
                }
            },
            GestureEvent::Ended | GestureEvent::Cancelled => {
                if !self.active {
                    return Vec::new();
                }
                self.reset();
                tracing::trace!(msg = "cursor_gesture_ended", ?event);
                vec![GestureEffect::RestoreKeyLabels]
            }
        }
    }

    /// Consumes one sample. The accumulated delta is cleared after every
    /// tick whether or not it produced a step.
    pub fn update(&mut self, sample: GestureSample) -> Result<Option<CursorCommand>, SkipReason> {
        if !self.active {
            return Err(SkipReason::NoActiveGesture);
        }
        if self
            .last_timestamp_ms
            .is_some_and(|last| sample.timestamp_ms < last)
        {
            return Err(SkipReason::StaleSample);
        }
        self.last_timestamp_ms = Some(sample.timestamp_ms);

        self.accumulated.0 += sample.dx;
        self.accumulated.1 += sample.dy;
        let cmd = cursor_command(&self.tuning, self.accumulated.0, sample.velocity);
        self.accumulated = (0.0, 0.0);

        tracing::trace!(
            msg = "cursor_gesture_tick",
            dx = sample.dx,
            velocity = sample.velocity,
            steps = cmd.map_or(0, |c| c.steps)
        );
        Ok(cmd)
    }

    fn reset(&mut self) {
        self.active = false;
        self.accumulated = (0.0, 0.0);
        self.last_timestamp_ms = None;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    fn sample(dx: f64, velocity: f64, timestamp_ms: u64) -> GestureSample {
        GestureSample {
            dx,
            dy: 0.0,
            velocity,
            timestamp_ms,
        }
    }

    fn began() -> GestureCursorController {
        let mut c = GestureCursorController::new(GestureTuning::default());
        c.handle(GestureEvent::Began);
        c
    }

    #[test]
    fn zero_velocity_is_bounded_by_epsilon() {
        let tuning = GestureTuning {
            max_steps_per_tick: u32::MAX,
            ..GestureTuning::default()
        };
        // 100 * (1000 / 50) / 12
        let cmd = cursor_command(&tuning, 100.0, 0.0).unwrap();
        assert_eq!(cmd.steps, 166);
        assert_eq!(cmd.direction, Direction::Right);
    }

    #[test]
    fn doubling_velocity_roughly_halves_steps() {
        let tuning = GestureTuning::default();
        let slow = cursor_command(&tuning, 240.0, 1000.0).unwrap();
        let fast = cursor_command(&tuning, 240.0, 2000.0).unwrap();
        assert_eq!(slow.steps, 19);
        assert_eq!(fast.steps, 9);
    }

    #[test]
    fn negative_delta_moves_left() {
        let cmd = cursor_command(&GestureTuning::default(), -60.0, 950.0).unwrap();
        assert_eq!(
            cmd,
            CursorCommand {
                direction: Direction::Left,
                steps: 5
            }
        );
    }

    #[test]
    fn small_movement_produces_nothing() {
        assert_eq!(cursor_command(&GestureTuning::default(), 5.0, 1950.0), None);
    }

    #[test]
    fn steps_are_clamped_per_tick() {
        let cmd = cursor_command(&GestureTuning::default(), 10_000.0, 0.0).unwrap();
        assert_eq!(cmd.steps, 40);
    }

    #[test]
    fn bad_velocity_is_treated_as_zero() {
        let tuning = GestureTuning::default();
        let at_zero = cursor_command(&tuning, 20.0, 0.0);
        assert_eq!(cursor_command(&tuning, 20.0, f64::NAN), at_zero);
        assert_eq!(cursor_command(&tuning, 20.0, -300.0), at_zero);
        assert_eq!(cursor_command(&tuning, f64::NAN, 100.0), None);
    }

    #[test]
    fn gesture_lifecycle_effects() {
        let mut c = GestureCursorController::new(GestureTuning::default());
        assert_eq!(
            c.handle(GestureEvent::Began),
            [GestureEffect::DimKeyLabels, GestureEffect::PlayFeedback]
        );
        assert!(c.is_active());
        assert_eq!(
            c.handle(GestureEvent::Changed(sample(-60.0, 950.0, 1))),
            [GestureEffect::MoveCursor(CursorCommand {
                direction: Direction::Left,
                steps: 5
            })]
        );
        assert_eq!(
            c.handle(GestureEvent::Ended),
            [GestureEffect::RestoreKeyLabels]
        );
        assert!(!c.is_active());
    }

    #[test]
    fn remainder_is_not_carried_over() {
        let mut c = began();
        // 11 * (1000 / 1050) / 12 < 1 on every tick.
        for t in 0..10 {
            assert_eq!(c.update(sample(11.0, 1000.0, t)), Ok(None));
        }
    }

    #[test]
    fn samples_outside_gesture_are_dropped() {
        let mut c = GestureCursorController::new(GestureTuning::default());
        assert_eq!(
            c.update(sample(100.0, 0.0, 1)),
            Err(SkipReason::NoActiveGesture)
        );
        assert!(c.handle(GestureEvent::Changed(sample(100.0, 0.0, 1))).is_empty());
        assert!(c.handle(GestureEvent::Ended).is_empty());
    }

    #[test]
    fn stale_samples_are_dropped() {
        let mut c = began();
        assert!(c.update(sample(100.0, 0.0, 10)).unwrap().is_some());
        assert_eq!(c.update(sample(100.0, 0.0, 9)), Err(SkipReason::StaleSample));
        assert!(c.update(sample(100.0, 0.0, 10)).unwrap().is_some());
    }

    #[test]
    fn new_gesture_resets_timestamps() {
        let mut c = began();
        c.update(sample(1.0, 0.0, 500)).unwrap();
        c.handle(GestureEvent::Cancelled);
        c.handle(GestureEvent::Began);
        assert!(c.update(sample(100.0, 0.0, 3)).is_ok());
    }
}
