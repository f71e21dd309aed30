use std::fmt::Write;

use kanal::AsyncReceiver;
use shiori_core::aggregate::{CharacterView, WordView};
use shiori_core::decompose::{WordSegment, segments};
use shiori_core::dictionary::DictionaryEntry;
use shiori_core::link::LinkTarget;
use shiori_core::types::{AppEvent, NavigationFlags, PageView, Presentation};

/// Print pages as they arrive until the app shuts down
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::ShowPage(presentation) => {
                println!("{}", render_page(&presentation));
            }
            AppEvent::LookupFailed {
                query,
                reason,
                navigation,
            } => {
                println!("Lookup for \"{query}\" failed: {reason}");
                println!("{}", render_navigation(navigation));
            }
            AppEvent::NavigationChanged(navigation) => {
                println!("{}", render_navigation(navigation));
            }
            AppEvent::Shutdown => break,
            _ => {}
        }
    }

    Ok(())
}

pub fn render_page(presentation: &Presentation) -> String {
    let mut out = String::new();

    match &presentation.page {
        PageView::SearchResults { query, entries } => render_results(&mut out, query, entries),
        PageView::Kanji(view) => render_kanji(&mut out, view),
        PageView::Word(view) => render_word(&mut out, view),
    }

    out.push_str(&render_navigation(presentation.navigation));
    out
}

pub fn render_navigation(navigation: NavigationFlags) -> String {
    let back = if navigation.can_go_back { "[:b back]" } else { "" };
    let forward = if navigation.can_go_forward { "[:f forward]" } else { "" };
    format!("-- {back} {forward}").trim_end().to_string()
}

fn render_results(out: &mut String, query: &str, entries: &[DictionaryEntry]) {
    let _ = writeln!(out, "Results for \"{query}\": {}", entries.len());
    for entry in entries {
        let link = if entry.is_reference() {
            LinkTarget::from_results_link(&entry.word)
        } else {
            LinkTarget::Word {
                word: entry.word.clone(),
                reading: entry.primary_reading().to_string(),
            }
        };
        let _ = writeln!(
            out,
            "  {} ({}) {}  <{}>",
            entry.word,
            entry.readings.join(", "),
            entry.meanings_line(),
            link
        );
    }
}

fn render_kanji(out: &mut String, view: &CharacterView) {
    let _ = writeln!(out, "{}", view.character);

    match &view.reference_entry {
        Some(entry) => {
            if let Some(info) = entry.kanji_info() {
                if let Some(grade) = &info.grade {
                    let _ = writeln!(out, "  Grade: {grade}");
                }
                if let Some(strokes) = &info.stroke_count {
                    let _ = writeln!(out, "  Strokes: {strokes}");
                }
                if let Some(freq) = &info.frequency_rank {
                    let _ = writeln!(out, "  Frequency: {freq}");
                }
                for (label, readings) in [
                    ("Onyomi", &info.onyomi),
                    ("Kunyomi", &info.kunyomi),
                    ("In names", &info.nanori),
                    ("As radical", &info.radical_readings),
                ] {
                    if !readings.is_empty() {
                        let _ = writeln!(out, "  {label}: {}", readings.join(", "));
                    }
                }
            }
            if !entry.meanings.is_empty() {
                let _ = writeln!(out, "  Meanings: {}", entry.meanings_line());
            }
        }
        None => {
            let _ = writeln!(out, "  No kanji dictionary entry found");
        }
    }

    if view.compound_candidates.is_empty() {
        return;
    }

    let _ = writeln!(out, "Compound Words");
    for compound in &view.compound_candidates {
        let common = if compound.is_common { " [common]" } else { "" };
        let link = LinkTarget::Word {
            word: compound.word.clone(),
            reading: compound.reading.clone(),
        };
        let _ = writeln!(
            out,
            "  {}{} ({}) {}  <{}>",
            compound.word, common, compound.reading, compound.meaning_summary, link
        );
    }
    if view.remaining_count > 0 {
        let _ = writeln!(out, "  ...and {} more", view.remaining_count);
    }
}

fn render_word(out: &mut String, view: &WordView) {
    let Some(entry) = &view.best_entry else {
        let _ = writeln!(out, "No entry found for \"{}\"", view.word);
        return;
    };

    let header: String = segments(&entry.word)
        .into_iter()
        .map(|segment| match segment {
            WordSegment::Kanji(ch) => format!("[{ch}]"),
            WordSegment::Text(text) => text,
        })
        .collect();
    let _ = writeln!(out, "{header}");

    if !entry.readings.is_empty() {
        let _ = writeln!(out, "  {}", entry.readings.join(", "));
    }

    for (i, meaning) in entry.meanings.iter().enumerate() {
        let _ = writeln!(out, "  {}. {meaning}", i + 1);
    }

    if view.breakdown.is_empty() {
        return;
    }

    let _ = writeln!(out, "Kanji in this word");
    for kanji in &view.breakdown {
        let _ = write!(out, "  {}", kanji.character);
        if kanji.found {
            let _ = write!(out, " {} {}", kanji.readings, kanji.meanings);
            if let Some(strokes) = &kanji.stroke_count {
                let _ = write!(out, " ({strokes} strokes)");
            }
        }
        let _ = writeln!(out, "  <{}>", LinkTarget::Kanji(kanji.character));
    }
}
