use unicode_normalization::UnicodeNormalization;

/// Clean up a query typed into the search bar.
///
/// Half-width kana and full-width Latin are folded by NFKC so the backend sees
/// one spelling per query.
pub fn normalize_query(text: &str) -> String {
    let text = text.trim();

    if text.is_empty() {
        return String::new();
    }

    let text: String = text.nfkc().collect();

    text.replace(['\n', '\r'], "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_strips_newlines() {
        assert_eq!(normalize_query("  日本\r\n語  "), "日本語");
    }

    #[test]
    fn folds_width_variants() {
        assert_eq!(normalize_query("ﾈｺ"), "ネコ");
        assert_eq!(normalize_query("ｃａｔ"), "cat");
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(normalize_query(""), "");
        assert_eq!(normalize_query(" \n "), "");
    }
}
