//! Core of the keeplang on-screen keyboard.
//!
//! The host UI renders [`KeyboardState`] and forwards user input to a
//! [`KeyboardSession`]; layout switching, shift, drag-to-move-cursor and
//! language-aware layout selection happen here.

pub mod config;
pub mod domain;
pub mod session;
pub mod utils;

pub use config::{Config, GestureTuning};
pub use domain::{
    gesture::{CursorCommand, Direction, GestureEvent, GestureSample},
    language::{LanguageDetector, LinguaDetector},
    layout_selector::{KeyboardState, LayoutSelector},
    outcome::{ActionOutcome, SkipReason},
};
pub use keeplang_core::{LayoutCatalog, LayoutId, Row, RowKind};
pub use session::{KeyboardSession, SpecialKey, SurfaceFeedback, TextDocument};
pub use utils::tracing::init_tracing;

#[cfg(test)]
mod tests;
