pub mod aggregate;
pub mod classify;
pub mod controller;
pub mod decompose;
pub mod dictionary;
pub mod error;
pub mod history;
pub mod link;
pub mod preprocess;
pub mod types;

pub use aggregate::{CharacterView, CompoundCandidate, KanjiSummary, WordView};
pub use classify::is_ideograph;
pub use controller::{Completion, Dispatch, LookupRequest, NavigationMode, PageController};
pub use decompose::{WordSegment, decompose, segments};
pub use dictionary::{Dictionary, DictionaryEntry, EntryKind, KanjiInfo, MatchMode};
pub use error::{Direction, HistoryError, OracleError};
pub use history::{NavigationHistory, PageState};
pub use link::LinkTarget;
pub use types::{AppEvent, NavigationFlags, PageView, Presentation, UserIntent};
