use shiori_core::types::{AppEvent, UserIntent};

use crate::io::parse_command;

fn intent(line: &str) -> Option<UserIntent> {
    match parse_command(line) {
        Some(AppEvent::Intent(intent)) => Some(intent),
        _ => None,
    }
}

#[test]
fn plain_text_is_a_search() {
    assert_eq!(
        intent("  日本語 "),
        Some(UserIntent::SearchSubmitted("日本語".to_string()))
    );
    assert!(parse_command("   ").is_none());
}

#[test]
fn navigation_commands() {
    assert_eq!(intent(":b"), Some(UserIntent::BackRequested));
    assert_eq!(intent(":forward"), Some(UserIntent::ForwardRequested));
    assert!(matches!(parse_command(":q"), Some(AppEvent::Shutdown)));
}

#[test]
fn lookup_commands() {
    assert_eq!(intent(":k 猫"), Some(UserIntent::KanjiSelected('猫')));
    assert_eq!(
        intent(":w 猫 ねこ"),
        Some(UserIntent::WordSelected {
            word: "猫".to_string(),
            reading: "ねこ".to_string(),
        })
    );
    assert_eq!(
        intent(":word 日本"),
        Some(UserIntent::WordSelected {
            word: "日本".to_string(),
            reading: String::new(),
        })
    );
    assert_eq!(
        intent(":o word:日本:にほん"),
        Some(UserIntent::LinkActivated("word:日本:にほん".to_string()))
    );
}

#[test]
fn incomplete_or_unknown_commands_are_dropped() {
    assert!(parse_command(":k").is_none());
    assert!(parse_command(":w").is_none());
    assert!(parse_command(":nope").is_none());
}
