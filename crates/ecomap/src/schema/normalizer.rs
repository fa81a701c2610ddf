/// Canonicalize a raw header or property name for comparison.
///
/// Spreadsheet exports accumulate invisible characters (BOM, zero-width
/// spaces) and inconsistent spacing around header text; two headers that
/// differ only in those ways must compare equal.
pub fn normalize(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}', '\u{200c}', '\u{200d}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    // Lower-casing is a no-op on Arabic, which the alias tables rely on.
    collapsed.to_lowercase()
}

/// `Option`-accepting form used where cell values may be absent.
pub fn normalize_opt(value: Option<&str>) -> String {
    value.map(normalize).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_invisible_characters_and_case() {
        let source = "\u{feff}Startup\u{200b}  Name  ";
        assert_eq!(normalize(source), "startup name");
    }

    #[test]
    fn collapses_interior_whitespace_runs() {
        assert_eq!(normalize("CEO \t\n Name"), "ceo name");
        assert_eq!(normalize("  Open/Closed "), "open/closed");
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "Startup Name",
            "  \u{200c}What is the Funding entity?  ",
            "اسم الشركة",
            "Revenue (Total) (Yearly)",
            "",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "normalize must be idempotent for {sample:?}");
        }
    }

    #[test]
    fn leaves_arabic_text_intact() {
        assert_eq!(normalize("  المحافظة "), "المحافظة");
        assert_eq!(normalize("قطاع المشروع\u{200b} الصناعة"), "قطاع المشروع الصناعة");
    }

    #[test]
    fn equivalent_variants_normalize_equal() {
        assert_eq!(normalize("PHONE"), normalize(" phone\u{feff}"));
        assert_eq!(normalize("Startup  Name"), normalize("startup name"));
    }

    #[test]
    fn absent_values_normalize_to_empty() {
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some(" ID ")), "id");
    }
}
