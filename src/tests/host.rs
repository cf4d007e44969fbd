use std::cell::Cell;

use crate::{
    domain::{gesture::Direction, language::LanguageDetector, layout_selector::KeyboardState},
    session::{SurfaceFeedback, TextDocument},
    LayoutId,
};

/// Host double that records everything the session asks of it.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub text: String,
    pub moves: Vec<(Direction, u32)>,
    pub redraws: Vec<(LayoutId, bool)>,
    pub dimmed: bool,
    pub clicks: usize,
}

impl TextDocument for RecordingHost {
    fn insert_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn delete_backward(&mut self) {
        let _ = self.text.pop();
    }

    fn move_cursor(&mut self, direction: Direction, steps: u32) {
        self.moves.push((direction, steps));
    }
}

impl SurfaceFeedback for RecordingHost {
    fn redraw(&mut self, state: &KeyboardState) {
        self.redraws.push((state.layout(), state.shift_enabled()));
    }

    fn set_labels_dimmed(&mut self, dimmed: bool) {
        self.dimmed = dimmed;
    }

    fn play_click(&mut self) {
        self.clicks += 1;
    }
}

/// Detector that answers with whatever tag the test sets.
#[derive(Debug, Default)]
pub struct FakeDetector {
    pub tag: Cell<Option<&'static str>>,
    pub calls: Cell<usize>,
}

impl FakeDetector {
    pub fn answering(tag: Option<&'static str>) -> Self {
        Self {
            tag: Cell::new(tag),
            calls: Cell::new(0),
        }
    }
}

impl LanguageDetector for &FakeDetector {
    fn detect(&self, sample: &str) -> Option<String> {
        self.calls.set(self.calls.get() + 1);
        if sample.trim().is_empty() {
            return None;
        }
        self.tag.get().map(str::to_string)
    }
}
