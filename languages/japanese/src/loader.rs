use std::path::Path;

use crate::dictionary::{JapaneseDictionary, LoadError};

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Load the bundled sample dictionary
    pub fn load_embedded() -> Result<JapaneseDictionary, LoadError> {
        let json = include_str!("../data/sample.json");
        tracing::info!("Loading embedded dictionary...");
        let dict = JapaneseDictionary::from_json(json)?;
        tracing::info!("Loaded {} dictionary entries", dict.entry_count());
        Ok(dict)
    }

    /// Load dictionary from file path
    pub fn load_from_file(path: &Path) -> Result<JapaneseDictionary, LoadError> {
        tracing::info!("Loading dictionary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let dict = JapaneseDictionary::from_json(&json)?;
        tracing::info!("Loaded {} dictionary entries from file", dict.entry_count());
        Ok(dict)
    }

    /// Build the dictionary the browser searches: the embedded data (when
    /// enabled) followed by each additional file. Files that fail to load are
    /// logged and skipped.
    pub fn load_all(embedded: bool, additional_paths: &[String]) -> JapaneseDictionary {
        let mut dict = if embedded {
            Self::load_embedded().unwrap_or_else(|e| {
                tracing::error!("Failed to load embedded dictionary: {}", e);
                tracing::warn!("Starting with empty dictionary");
                JapaneseDictionary::new()
            })
        } else {
            JapaneseDictionary::new()
        };

        for path in additional_paths {
            match Self::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional dictionary from: {}", path);
                    dict = dict.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", path, e);
                }
            }
        }

        dict
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use shiori_core::{Dictionary, MatchMode};

    use super::*;

    #[test]
    fn embedded_data_loads() {
        let dict = DictionaryLoader::load_embedded().unwrap();
        assert!(dict.entry_count() > 0);

        let results = dict.search("猫", MatchMode::ExactCharacter).unwrap();
        assert!(results.iter().any(|e| e.is_reference()));
        assert_eq!(results.iter().filter(|e| !e.is_reference()).count(), 2);
    }

    #[test]
    fn additional_files_are_merged_and_bad_ones_skipped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "words": [{{ "word": "犬", "readings": ["いぬ"], "meanings": ["dog"], "common": true }}] }}"#
        )
        .unwrap();

        let paths = vec![
            file.path().display().to_string(),
            "/nonexistent/extra.json".to_string(),
        ];
        let dict = DictionaryLoader::load_all(false, &paths);

        assert_eq!(dict.entry_count(), 1);
        let results = dict.search("いぬ", MatchMode::ExactCharacter).unwrap();
        assert_eq!(results[0].word, "犬");
    }
}
