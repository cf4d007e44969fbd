//! Static keyboard layouts for the keeplang on-screen keyboard.
//!
//! This crate has no dependencies and no state: it knows which layouts exist,
//! what their rows look like and how shift changes them.

pub mod layout;

pub use layout::{LayoutCatalog, LayoutId, ParseLayoutError, Row, RowKind};
