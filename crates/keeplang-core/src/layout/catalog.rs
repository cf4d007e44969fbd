// Base rows are stored lowercase; shift is applied by `LayoutCatalog::apply_case`.
//
// Every alphabetic layout ends with the same digit row.
use super::{LayoutId, ParseLayoutError, Row, RowKind};

const DIGITS: &str = "1234567890";

const EN_LETTERS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

// Israeli standard layout, letters only.
const HE_LETTERS: [&str; 3] = ["קראטוןםפ", "שדגכעיחלךף", "זסבהנמצתץ"];

const DE_LETTERS: [&str; 3] = ["qwertzuiopü", "asdfghjklöä", "yxcvbnmß"];

const SYMBOLS: [&str; 2] = ["-/:;()€&@\"", ".,?!'#%*+="];

/// Registry of the built-in layouts.
#[derive(Copy, Clone, Debug, Default)]
pub struct LayoutCatalog;

impl LayoutCatalog {
    /// Base (unshifted) rows of a layout.
    #[must_use]
    pub fn rows(id: LayoutId) -> Vec<Row> {
        match id {
            LayoutId::English => letters_with_digits(&EN_LETTERS),
            LayoutId::Hebrew => letters_with_digits(&HE_LETTERS),
            LayoutId::German => letters_with_digits(&DE_LETTERS),
            LayoutId::Symbols => std::iter::once(Row::new(RowKind::Digits, DIGITS))
                .chain(SYMBOLS.iter().map(|r| Row::new(RowKind::Symbols, r)))
                .collect(),
        }
    }

    /// Base rows looked up by layout name.
    pub fn rows_by_name(name: &str) -> Result<Vec<Row>, ParseLayoutError> {
        name.parse().map(Self::rows)
    }

    /// Uppercases letter rows when `shift` is set, lowercases them otherwise.
    ///
    /// Digit and symbol rows are returned untouched. Row count, row width and
    /// key order never change.
    #[must_use]
    pub fn apply_case(rows: &[Row], shift: bool) -> Vec<Row> {
        rows.iter()
            .map(|row| match row.kind {
                RowKind::Letters => Row {
                    kind: row.kind,
                    keys: row.keys.iter().map(|k| case_key(k, shift)).collect(),
                },
                RowKind::Digits | RowKind::Symbols => row.clone(),
            })
            .collect()
    }
}

fn letters_with_digits(letters: &[&str]) -> Vec<Row> {
    letters
        .iter()
        .map(|r| Row::new(RowKind::Letters, r))
        .chain(std::iter::once(Row::new(RowKind::Digits, DIGITS)))
        .collect()
}

fn case_key(key: &str, upper: bool) -> String {
    key.chars().map(|ch| case_char(ch, upper)).collect()
}

// Characters whose case mapping expands (ß -> SS) keep their original form.
fn case_char(ch: char, upper: bool) -> char {
    let mapped: String = if upper {
        ch.to_uppercase().collect()
    } else {
        ch.to_lowercase().collect()
    };
    let mut chars = mapped.chars();
    match (chars.next(), chars.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(row: &Row) -> String {
        row.keys.concat()
    }

    #[test]
    fn english_has_three_letter_rows_and_digits() {
        let rows = LayoutCatalog::rows(LayoutId::English);
        assert_eq!(rows.len(), 4);
        assert_eq!(joined(&rows[0]), "qwertyuiop");
        assert_eq!(rows[3].kind, RowKind::Digits);
        assert_eq!(joined(&rows[3]), "1234567890");
    }

    #[test]
    fn hebrew_keys_are_single_graphemes() {
        let rows = LayoutCatalog::rows(LayoutId::Hebrew);
        assert_eq!(rows[0].len(), 8);
        assert_eq!(rows[0].key(0), Some("ק"));
        assert_eq!(rows[1].len(), 10);
        assert_eq!(rows[2].len(), 9);
    }

    #[test]
    fn shift_uppercases_letters_only() {
        let shifted = LayoutCatalog::apply_case(&LayoutCatalog::rows(LayoutId::English), true);
        assert_eq!(joined(&shifted[0]), "QWERTYUIOP");
        assert_eq!(joined(&shifted[3]), "1234567890");
    }

    #[test]
    fn sharp_s_keeps_its_key() {
        let shifted = LayoutCatalog::apply_case(&LayoutCatalog::rows(LayoutId::German), true);
        assert_eq!(joined(&shifted[0]), "QWERTZUIOPÜ");
        assert_eq!(joined(&shifted[2]), "YXCVBNMß");
    }

    #[test]
    fn hebrew_is_unaffected_by_shift() {
        let base = LayoutCatalog::rows(LayoutId::Hebrew);
        assert_eq!(LayoutCatalog::apply_case(&base, true), base);
    }

    #[test]
    fn symbols_pass_through() {
        let base = LayoutCatalog::rows(LayoutId::Symbols);
        assert!(base.iter().all(|r| r.kind != RowKind::Letters));
        assert_eq!(LayoutCatalog::apply_case(&base, true), base);
        assert_eq!(LayoutCatalog::apply_case(&base, false), base);
    }

    #[test]
    fn case_round_trip_restores_base_rows() {
        for id in LayoutId::ALL {
            let base = LayoutCatalog::rows(id);
            let upper = LayoutCatalog::apply_case(&base, true);
            assert_eq!(LayoutCatalog::apply_case(&upper, false), base, "{id}");
        }
    }

    #[test]
    fn case_preserves_shape() {
        for id in LayoutId::ALL {
            let base = LayoutCatalog::rows(id);
            let upper = LayoutCatalog::apply_case(&base, true);
            let widths = |rows: &[Row]| rows.iter().map(Row::len).collect::<Vec<_>>();
            assert_eq!(widths(&base), widths(&upper), "{id}");
        }
    }

    #[test]
    fn rows_by_name_rejects_unknown_layouts() {
        assert!(LayoutCatalog::rows_by_name("german").is_ok());
        let err = LayoutCatalog::rows_by_name("Elvish").unwrap_err();
        assert_eq!(err.name, "Elvish");
    }
}
