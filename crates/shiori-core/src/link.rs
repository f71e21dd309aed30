use std::fmt;

use crate::classify::is_ideograph;

const KANJI_SCHEME: &str = "kanji:";
const WORD_SCHEME: &str = "word:";

/// Where a cross-reference link in a rendered page leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Kanji(char),
    Word { word: String, reading: String },
    Search(String),
}

impl LinkTarget {
    /// Parse an href from a kanji or word page.
    ///
    /// Accepts `kanji:<char>`, `word:<word>:<reading>` and a bare ideograph.
    pub fn parse(href: &str) -> Option<Self> {
        if let Some(rest) = href.strip_prefix(KANJI_SCHEME) {
            return rest.chars().next().map(LinkTarget::Kanji);
        }

        if let Some(rest) = href.strip_prefix(WORD_SCHEME) {
            // The word must be non-empty, the reading may be
            return match rest.find(':') {
                Some(sep) if sep > 0 => Some(LinkTarget::Word {
                    word: rest[..sep].to_string(),
                    reading: rest[sep + 1..].to_string(),
                }),
                _ => None,
            };
        }

        single_ideograph(href).map(LinkTarget::Kanji)
    }

    /// Parse an href from the search results list, where anything that is not
    /// a lone kanji is searched for as text.
    pub fn from_results_link(href: &str) -> Self {
        match single_ideograph(href) {
            Some(ch) => LinkTarget::Kanji(ch),
            None => LinkTarget::Search(href.to_string()),
        }
    }

    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkTarget::Kanji(ch) => write!(f, "{KANJI_SCHEME}{ch}"),
            LinkTarget::Word { word, reading } => write!(f, "{WORD_SCHEME}{word}:{reading}"),
            LinkTarget::Search(text) => f.write_str(text),
        }
    }
}

fn single_ideograph(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if is_ideograph(ch) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kanji_links() {
        assert_eq!(LinkTarget::parse("kanji:日"), Some(LinkTarget::Kanji('日')));
        assert_eq!(LinkTarget::parse("kanji:日本"), Some(LinkTarget::Kanji('日')));
        assert_eq!(LinkTarget::parse("kanji:"), None);
        assert_eq!(LinkTarget::parse("本"), Some(LinkTarget::Kanji('本')));
    }

    #[test]
    fn parses_word_links() {
        assert_eq!(
            LinkTarget::parse("word:日本語:にほんご"),
            Some(LinkTarget::Word {
                word: "日本語".to_string(),
                reading: "にほんご".to_string(),
            })
        );
        assert_eq!(
            LinkTarget::parse("word:猫:"),
            Some(LinkTarget::Word {
                word: "猫".to_string(),
                reading: String::new(),
            })
        );
        assert_eq!(LinkTarget::parse("word::ねこ"), None);
        assert_eq!(LinkTarget::parse("word:猫"), None);
    }

    #[test]
    fn rejects_other_hrefs() {
        assert_eq!(LinkTarget::parse("ね"), None);
        assert_eq!(LinkTarget::parse("a"), None);
        assert_eq!(LinkTarget::parse("日本"), None);
        assert_eq!(LinkTarget::parse(""), None);
    }

    #[test]
    fn results_links_fall_back_to_search() {
        assert_eq!(LinkTarget::from_results_link("山"), LinkTarget::Kanji('山'));
        assert_eq!(
            LinkTarget::from_results_link("山登り"),
            LinkTarget::Search("山登り".to_string())
        );
        assert_eq!(
            LinkTarget::from_results_link("や"),
            LinkTarget::Search("や".to_string())
        );
    }

    #[test]
    fn href_parses_back() {
        let targets = [
            LinkTarget::Kanji('語'),
            LinkTarget::Word {
                word: "言語".to_string(),
                reading: "げんご".to_string(),
            },
        ];
        for target in targets {
            assert_eq!(LinkTarget::parse(&target.href()), Some(target));
        }
    }
}
