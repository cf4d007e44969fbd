//! Layout and shift state machine.
//!
//! The selector owns a [`KeyboardState`] and replaces it wholesale on every
//! transition, so a snapshot handed to the renderer never changes under it.
//! Transitions never fail: unknown input is skipped and reported through
//! [`ActionOutcome`].

use keeplang_core::{LayoutCatalog, LayoutId, Row};

use crate::{
    config::Config,
    domain::{
        language::normalize_tag,
        outcome::{ActionOutcome, SkipReason},
    },
};

/// Active layout, shift flag and the rows the renderer should draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardState {
    layout: LayoutId,
    shift: bool,
    rows: Vec<Row>,
}

impl KeyboardState {
    #[must_use]
    pub fn new(layout: LayoutId, shift: bool) -> Self {
        Self {
            layout,
            shift,
            rows: LayoutCatalog::apply_case(&LayoutCatalog::rows(layout), shift),
        }
    }

    pub fn layout(&self) -> LayoutId {
        self.layout
    }

    pub fn shift_enabled(&self) -> bool {
        self.shift
    }

    /// Case-applied rows of the active layout.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn key_at(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.key(col)
    }

    #[must_use]
    fn with_layout(&self, layout: LayoutId) -> Self {
        Self::new(layout, self.shift)
    }

    #[must_use]
    fn with_shift(&self, shift: bool) -> Self {
        Self::new(self.layout, shift)
    }
}

/// How the current layout was reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Selection {
    Initial,
    Detected,
    Manual,
}

impl Selection {
    fn as_str(self) -> &'static str {
        match self {
            Selection::Initial => "initial",
            Selection::Detected => "detected",
            Selection::Manual => "manual",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutSelector {
    config: Config,
    state: KeyboardState,
    selection: Selection,
}

impl LayoutSelector {
    pub fn new(config: Config) -> Self {
        let state = KeyboardState::new(config.default_layout(), false);
        Self {
            config,
            state,
            selection: Selection::Initial,
        }
    }

    pub fn state(&self) -> &KeyboardState {
        &self.state
    }

    /// Moves to the layout after the current one in the cycle order.
    ///
    /// A layout outside the cycle (reached through the picker) continues at
    /// the start of the cycle.
    pub fn cycle_next(&mut self) -> ActionOutcome {
        let order = self.config.cycle_order();
        let next = order
            .iter()
            .position(|id| *id == self.state.layout)
            .map_or(order[0], |i| order[(i + 1) % order.len()]);
        self.switch_to(next, Selection::Manual)
    }

    /// Picks a layout by its display name. Unknown names leave the state untouched.
    pub fn select_by_name(&mut self, name: &str) -> ActionOutcome {
        match name.parse::<LayoutId>() {
            Ok(id) => self.switch_to(id, Selection::Manual),
            Err(e) => {
                tracing::warn!(msg = "layout_pick_ignored", error = %e);
                ActionOutcome::Skipped(SkipReason::UnknownLayout)
            }
        }
    }

    pub fn toggle_shift(&mut self) -> ActionOutcome {
        self.state = self.state.with_shift(!self.state.shift);
        tracing::debug!(
            msg = "shift_toggled",
            shift = self.state.shift,
            layout = %self.state.layout
        );
        ActionOutcome::Applied
    }

    /// Applies the layout that matches a detected language.
    ///
    /// Tags missing from the language table, and a missing detection, fall
    /// back to the default layout. A layout the user picked by hand is kept
    /// unless `respect_manual_choice` is off.
    pub fn auto_apply(&mut self, tag: Option<&str>) -> ActionOutcome {
        let target = tag
            .map(normalize_tag)
            .and_then(|tag| self.config.layout_for_language(&tag))
            .unwrap_or(self.config.default_layout());

        if self.selection == Selection::Manual && self.config.respect_manual_choice() {
            tracing::debug!(
                msg = "auto_apply_skipped",
                tag = tag.unwrap_or("none"),
                detected = %target,
                kept = %self.state.layout
            );
            return ActionOutcome::Skipped(SkipReason::ManualChoiceKept);
        }

        self.switch_to(target, Selection::Detected)
    }

    /// Layouts offered by the long-press language picker.
    pub fn picker_entries(&self) -> Vec<LayoutId> {
        LayoutId::ALL
            .into_iter()
            .filter(|id| id.is_alphabetic())
            .collect()
    }

    fn switch_to(&mut self, layout: LayoutId, selection: Selection) -> ActionOutcome {
        self.selection = selection;
        if layout == self.state.layout {
            return ActionOutcome::Skipped(SkipReason::AlreadyActive);
        }

        let from = self.state.layout;
        self.state = self.state.with_layout(layout);
        tracing::debug!(
            msg = "layout_changed",
            from = %from,
            to = %layout,
            origin = selection.as_str(),
            shift = self.state.shift
        );
        ActionOutcome::Applied
    }
}
