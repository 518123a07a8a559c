use crate::App;

/// Word count: one `(word, 1)` pair per whitespace-separated token after
/// lowercasing and stripping ASCII punctuation.
#[derive(Debug, Default)]
pub struct WordCount;

impl WordCount {
    /// Lowercase the line and drop every ASCII punctuation character.
    /// Whitespace (including the trailing newline) is left for `map` to
    /// split on.
    fn normalize(line: &str) -> String {
        line.to_lowercase()
            .replace(|c: char| c.is_ascii_punctuation(), "")
    }
}

impl App for WordCount {
    fn map(&self, _file: &str, line: &str) -> Vec<(String, u64)> {
        Self::normalize(line)
            .split_whitespace()
            .map(|word| (word.to_owned(), 1))
            .collect()
    }

    fn reduce(&self, _word: &str, counts: Vec<u64>) -> u64 {
        counts.into_iter().sum()
    }
}
