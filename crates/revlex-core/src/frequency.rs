//! French word frequency ranks.
//!
//! Loaded from a TSV frequency list where data-line order defines the
//! rank (0 = most frequent). The table degrades gracefully: a missing
//! file yields an empty table and every frequency-based scoring term
//! becomes a zero bonus.

use std::collections::HashMap;
use std::io::BufRead;

use camino::Utf8Path;

use crate::error::BuildResult;
use crate::storage;

/// Word → frequency rank (lower = more common).
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    ranks: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Load ranks from a TSV file with a header line.
    ///
    /// The word is the second tab-separated column; the rank is the
    /// data line's 0-based ordinal. Words containing `oe` also register
    /// their `œ` spelling under the same rank, since frequency lists
    /// commonly use the digraph while dictionaries use the ligature.
    /// Returns an empty table when the file does not exist.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn load(path: &Utf8Path) -> BuildResult<Self> {
        if !path.is_file() {
            tracing::warn!("frequency list not found, frequency bonuses disabled");
            return Ok(Self::default());
        }

        let mut ranks = HashMap::new();
        let reader = storage::open_lines(path)?;
        for (i, line) in reader.lines().skip(1).enumerate() {
            // Per-record tolerance: unreadable lines are skipped.
            let Ok(line) = line else { continue };
            let mut parts = line.trim().split('\t');
            let (Some(_), Some(word)) = (parts.next(), parts.next()) else {
                continue;
            };
            let word = word.to_lowercase();
            if word.contains("oe") {
                ranks.insert(word.replace("oe", "œ"), i);
            }
            ranks.insert(word, i);
        }
        tracing::info!(ranks = ranks.len(), "frequency list loaded");
        Ok(Self { ranks })
    }

    /// The rank of `word`, if it is in the known common set.
    pub fn rank(&self, word: &str) -> Option<usize> {
        self.ranks.get(word).copied()
    }

    /// Whether `word` is in the known common set.
    pub fn contains(&self, word: &str) -> bool {
        self.ranks.contains_key(word)
    }

    /// Number of ranked words (œ variants included).
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether the table is empty (e.g. the list file was absent).
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// The ranked words in frequency order, without ligature variants.
    ///
    /// Unlike [`FrequencyTable::load`], a missing file is a hard error
    /// here: callers asking for the ordered list need the real data.
    pub fn load_ordered(path: &Utf8Path) -> BuildResult<Vec<String>> {
        let reader = storage::open_lines(path)?;
        let mut words = Vec::new();
        for line in reader.lines().skip(1) {
            let Ok(line) = line else { continue };
            let mut parts = line.trim().split('\t');
            if let (Some(_), Some(word)) = (parts.next(), parts.next()) {
                words.push(word.to_lowercase());
            }
        }
        Ok(words)
    }

    /// Build a table directly from ranked words, for tests and callers
    /// that already hold an ordered list.
    pub fn from_ranked<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ranks = words
            .into_iter()
            .enumerate()
            .map(|(i, w)| (w.into(), i))
            .collect();
        Self { ranks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn ranks_follow_line_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = camino::Utf8PathBuf::from_path_buf(dir.path().join("freq.tsv")).unwrap();
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "rank\tword").unwrap();
        writeln!(f, "1\tle").unwrap();
        writeln!(f, "2\tde").unwrap();
        writeln!(f, "3\tsoeur").unwrap();
        drop(f);

        let table = FrequencyTable::load(&path).unwrap();
        assert_eq!(table.rank("le"), Some(0));
        assert_eq!(table.rank("de"), Some(1));
        assert_eq!(table.rank("soeur"), Some(2));
        // Ligature variant shares the rank
        assert_eq!(table.rank("sœur"), Some(2));
        assert_eq!(table.rank("chien"), None);
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let table = FrequencyTable::load(Utf8Path::new("/nonexistent/freq.tsv")).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.rank("le"), None);
    }

    #[test]
    fn short_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = camino::Utf8PathBuf::from_path_buf(dir.path().join("freq.tsv")).unwrap();
        std::fs::write(&path, "rank\tword\nle\n2\tde\n").unwrap();
        let table = FrequencyTable::load(&path).unwrap();
        assert_eq!(table.rank("le"), None);
        // Rank counts the malformed line's ordinal, matching line position
        assert_eq!(table.rank("de"), Some(1));
    }
}
