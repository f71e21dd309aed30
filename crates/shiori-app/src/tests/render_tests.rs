use shiori_core::aggregate::{build_character_view, build_word_view, summarize_kanji};
use shiori_core::dictionary::{DictionaryEntry, KanjiInfo};
use shiori_core::types::{NavigationFlags, PageView, Presentation};

use crate::ui::{render_navigation, render_page};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn mountain() -> DictionaryEntry {
    DictionaryEntry::reference(
        '山',
        strings(&["mountain"]),
        KanjiInfo {
            grade: Some("1".to_string()),
            stroke_count: Some("3".to_string()),
            onyomi: strings(&["サン"]),
            kunyomi: strings(&["やま"]),
            ..Default::default()
        },
    )
}

fn word(word: &str, reading: &str, meaning: &str, common: bool) -> DictionaryEntry {
    DictionaryEntry::word(word, strings(&[reading]), strings(&[meaning]), common)
}

fn present(page: PageView) -> Presentation {
    Presentation {
        page,
        navigation: NavigationFlags {
            can_go_back: true,
            can_go_forward: false,
        },
    }
}

#[test]
fn navigation_line_lists_available_moves() {
    let none = NavigationFlags::default();
    assert_eq!(render_navigation(none), "--");

    let both = NavigationFlags {
        can_go_back: true,
        can_go_forward: true,
    };
    assert_eq!(render_navigation(both), "-- [:b back] [:f forward]");
}

#[test]
fn results_link_kanji_and_words() {
    let page = PageView::SearchResults {
        query: "山".to_string(),
        entries: vec![mountain(), word("火山", "かざん", "volcano", true)],
    };

    let out = render_page(&present(page));
    assert!(out.starts_with("Results for \"山\": 2"));
    assert!(out.contains("<kanji:山>"));
    assert!(out.contains("<word:火山:かざん>"));
    assert!(out.ends_with("-- [:b back]"));
}

#[test]
fn kanji_page_shows_details_and_compounds() {
    let compounds = [
        mountain(),
        word("山道", "やまみち", "mountain road", false),
        word("火山", "かざん", "volcano", true),
    ];
    let view = build_character_view('山', &[mountain()], &compounds);

    let out = render_page(&present(PageView::Kanji(view)));
    assert!(out.contains("Strokes: 3"));
    assert!(out.contains("Onyomi: サン"));
    assert!(!out.contains("In names"));

    let volcano = out.find("火山 [common]").expect("common compound");
    let road = out.find("山道 (やまみち)").expect("other compound");
    assert!(volcano < road);
}

#[test]
fn kanji_page_without_reference() {
    let view = build_character_view('山', &[], &[]);
    let out = render_page(&present(PageView::Kanji(view)));
    assert!(out.contains("No kanji dictionary entry found"));
    assert!(!out.contains("Compound Words"));
}

#[test]
fn word_page_brackets_kanji_and_links_breakdown() {
    let mut view = build_word_view("山びこ", "", &[word("山びこ", "やまびこ", "echo", false)]);
    view.breakdown.push(summarize_kanji('山', &[mountain()]));

    let out = render_page(&present(PageView::Word(view)));
    assert!(out.starts_with("[山]びこ\n"));
    assert!(out.contains("  1. echo"));
    assert!(out.contains("サン / やま mountain (3 strokes)  <kanji:山>"));
}

#[test]
fn missing_word_is_reported() {
    let view = build_word_view("犬", "いぬ", &[]);
    let out = render_page(&present(PageView::Word(view)));
    assert!(out.starts_with("No entry found for \"犬\""));
}
