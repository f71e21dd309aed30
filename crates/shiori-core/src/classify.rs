/// Everything from here down is Latin-1 and never treated as a kanji.
const LATIN1_END: u32 = 255;

/// Hiragana and katakana blocks.
const KANA_START: u32 = 0x3040;
const KANA_END: u32 = 0x30FF;

/// Coarse kanji check: anything outside Latin-1 that isn't kana.
///
/// This also accepts most other non-Latin scripts. Callers use it to decide
/// what gets linked to a kanji page, where a false positive only costs an
/// empty lookup.
pub fn is_ideograph(ch: char) -> bool {
    let value = ch as u32;
    if value < LATIN1_END {
        return false;
    }

    !(KANA_START..=KANA_END).contains(&value)
}
