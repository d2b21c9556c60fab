use std::collections::HashSet;
use std::path::Path;

use tokio::fs;

use crate::error::LoadError;

/// Set of playable words, stored lower-cased
#[derive(Debug, Default)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Load a newline-delimited word list from a file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::parse(&content);

        tracing::info!("Loaded {} words into lexicon", lexicon.len());

        Ok(lexicon)
    }

    /// Build a lexicon from newline-delimited text; blank lines are skipped
    pub fn parse(content: &str) -> Self {
        content.lines().collect()
    }

    /// Create an empty lexicon, in which no word is valid
    pub fn empty() -> Self {
        Self::default()
    }

    /// Case-insensitive exact membership test
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for Lexicon {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lexicon() {
        let lexicon = Lexicon::empty();
        assert!(lexicon.is_empty());
        assert!(!lexicon.is_valid_word("cat"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lexicon = Lexicon::parse("cat\ndog\n");
        assert!(lexicon.is_valid_word("CAT"));
        assert!(lexicon.is_valid_word("Dog"));
        assert!(!lexicon.is_valid_word("cats"));
    }

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        // Word lists exported on Windows keep their carriage returns
        let lexicon = Lexicon::parse("at\r\n\n  to  \n\n");
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.is_valid_word("at"));
        assert!(lexicon.is_valid_word("to"));
        assert!(!lexicon.is_valid_word(""));
    }

    #[test]
    fn test_gapped_word_is_never_valid() {
        let lexicon = Lexicon::parse("cat");
        assert!(!lexicon.is_valid_word("C.T"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("lexicon-{}.txt", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, "tile\nrack\n").await.unwrap();

        let lexicon = tokio_test::assert_ok!(Lexicon::load(&path).await);
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.is_valid_word("RACK"));

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_missing_file_reports_path() {
        let err = Lexicon::load("/definitely/not/here/words.txt")
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("words.txt"));
    }
}
