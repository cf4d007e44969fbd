mod catalog;

use std::{error::Error, fmt, str::FromStr};

pub use catalog::LayoutCatalog;

/// Identity of a layout in the catalog.
///
/// The set is closed: every variant has rows in [`LayoutCatalog`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum LayoutId {
    English,
    Hebrew,
    German,
    Symbols,
}

impl LayoutId {
    pub const ALL: [LayoutId; 4] = [
        LayoutId::English,
        LayoutId::Hebrew,
        LayoutId::German,
        LayoutId::Symbols,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            LayoutId::English => "English",
            LayoutId::Hebrew => "Hebrew",
            LayoutId::German => "German",
            LayoutId::Symbols => "Symbols",
        }
    }

    /// Layouts that represent a written language (offered by the picker).
    pub const fn is_alphabetic(self) -> bool {
        !matches!(self, LayoutId::Symbols)
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A layout name that does not exist in the catalog.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseLayoutError {
    pub name: String,
}

impl fmt::Display for ParseLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a known layout", self.name)
    }
}

impl Error for ParseLayoutError {}

impl FromStr for LayoutId {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        LayoutId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseLayoutError {
                name: s.to_string(),
            })
    }
}

/// What a row holds. Only `Letters` rows react to shift.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RowKind {
    Letters,
    Digits,
    Symbols,
}

/// One row of keys. Each key is a single grapheme stored as a string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Row {
    pub kind: RowKind,
    pub keys: Vec<String>,
}

impl Row {
    pub fn new(kind: RowKind, keys: &str) -> Self {
        Self {
            kind,
            keys: keys.chars().map(String::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn key(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }
}
