use crate::classify::is_ideograph;

/// Kanji of a word in reading order. Repeats are kept so each one gets its
/// own breakdown row.
pub fn decompose(word: &str) -> Vec<char> {
    word.chars().filter(|&ch| is_ideograph(ch)).collect()
}

/// Piece of a word header: a linkable kanji or a run of other text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSegment {
    Kanji(char),
    Text(String),
}

/// Split a word into kanji and the text between them.
pub fn segments(word: &str) -> Vec<WordSegment> {
    let mut out = Vec::new();
    let mut run = String::new();

    for ch in word.chars() {
        if is_ideograph(ch) {
            if !run.is_empty() {
                out.push(WordSegment::Text(std::mem::take(&mut run)));
            }
            out.push(WordSegment::Kanji(ch));
        } else {
            run.push(ch);
        }
    }

    if !run.is_empty() {
        out.push(WordSegment::Text(run));
    }

    out
}
