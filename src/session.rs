//! Boundary between the keyboard core and the host UI.
//!
//! The host forwards taps, key presses, picker choices, drag events and text
//! context changes to a [`KeyboardSession`]; the session answers through the
//! host traits. Nothing here returns an error to the host.

use crate::{
    config::Config,
    domain::{
        gesture::{Direction, GestureCursorController, GestureEffect, GestureEvent},
        language::LanguageDetector,
        layout_selector::{KeyboardState, LayoutSelector},
        outcome::{ActionOutcome, SkipReason},
    },
};

/// Text editing API of the hosting text field.
pub trait TextDocument {
    fn insert_text(&mut self, text: &str);
    fn delete_backward(&mut self);
    fn move_cursor(&mut self, direction: Direction, steps: u32);
}

/// Rendering and feedback side of the host.
pub trait SurfaceFeedback {
    /// Draw `state`. Called after every change of the keyboard state.
    fn redraw(&mut self, state: &KeyboardState);
    fn set_labels_dimmed(&mut self, dimmed: bool);
    fn play_click(&mut self);
}

/// Keys outside the character grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpecialKey {
    Space,
    Return,
    Backspace,
    Shift,
    NextLayout,
}

/// One keyboard session, from the keyboard appearing to it being dismissed.
pub struct KeyboardSession<D> {
    selector: LayoutSelector,
    gestures: GestureCursorController,
    detector: D,
}

impl<D: LanguageDetector> KeyboardSession<D> {
    pub fn new(config: Config, detector: D) -> Self {
        let gestures = GestureCursorController::new(config.gesture());
        Self {
            selector: LayoutSelector::new(config),
            gestures,
            detector,
        }
    }

    pub fn state(&self) -> &KeyboardState {
        self.selector.state()
    }

    pub fn selector(&self) -> &LayoutSelector {
        &self.selector
    }

    /// Draws the initial state when the keyboard view appears.
    pub fn appeared<H: SurfaceFeedback>(&mut self, host: &mut H) {
        host.redraw(self.selector.state());
    }

    /// Inserts the resolved key at `row`/`col` of the visible grid.
    pub fn tap_key<H: TextDocument>(&mut self, host: &mut H, row: usize, col: usize) -> ActionOutcome {
        let Some(key) = self.selector.state().key_at(row, col) else {
            tracing::warn!(msg = "key_tap_ignored", row, col);
            return ActionOutcome::Skipped(SkipReason::KeyOutOfRange);
        };
        host.insert_text(key);
        ActionOutcome::Applied
    }

    pub fn press<H>(&mut self, host: &mut H, key: SpecialKey) -> ActionOutcome
    where
        H: TextDocument + SurfaceFeedback,
    {
        match key {
            SpecialKey::Space => {
                host.insert_text(" ");
                ActionOutcome::Applied
            }
            SpecialKey::Return => {
                host.insert_text("\n");
                ActionOutcome::Applied
            }
            SpecialKey::Backspace => {
                host.delete_backward();
                ActionOutcome::Applied
            }
            SpecialKey::Shift => {
                let outcome = self.selector.toggle_shift();
                self.redraw_if_applied(host, outcome)
            }
            SpecialKey::NextLayout => {
                let outcome = self.selector.cycle_next();
                self.redraw_if_applied(host, outcome)
            }
        }
    }

    /// Applies a choice from the long-press language picker.
    pub fn pick_layout<H: SurfaceFeedback>(&mut self, host: &mut H, name: &str) -> ActionOutcome {
        let outcome = self.selector.select_by_name(name);
        self.redraw_if_applied(host, outcome)
    }

    /// Detects the language around the cursor and applies the matching layout.
    #[tracing::instrument(level = "trace", skip(self, host, before, after))]
    pub fn surrounding_text_changed<H: SurfaceFeedback>(
        &mut self,
        host: &mut H,
        before: &str,
        after: &str,
    ) -> ActionOutcome {
        let sample = format!("{before}{after}");
        let tag = self.detector.detect(&sample);
        tracing::debug!(msg = "language_detected", tag = tag.as_deref().unwrap_or("none"));

        let outcome = self.selector.auto_apply(tag.as_deref());
        self.redraw_if_applied(host, outcome)
    }

    pub fn gesture<H>(&mut self, host: &mut H, event: GestureEvent)
    where
        H: TextDocument + SurfaceFeedback,
    {
        for effect in self.gestures.handle(event) {
            match effect {
                GestureEffect::DimKeyLabels => host.set_labels_dimmed(true),
                GestureEffect::PlayFeedback => host.play_click(),
                GestureEffect::MoveCursor(cmd) => host.move_cursor(cmd.direction, cmd.steps),
                GestureEffect::RestoreKeyLabels => host.set_labels_dimmed(false),
            }
        }
    }

    fn redraw_if_applied<H: SurfaceFeedback>(&self, host: &mut H, outcome: ActionOutcome) -> ActionOutcome {
        if outcome.is_applied() {
            host.redraw(self.selector.state());
        }
        outcome
    }
}
