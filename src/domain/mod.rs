pub mod gesture;
pub mod language;
pub mod layout_selector;
pub mod outcome;
