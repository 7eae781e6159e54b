//! Text tokenization for TF-IDF.
//!
//! ## Algorithm
//! 1. Lowercase the whole text
//! 2. Split on every character that is not alphanumeric (whitespace and
//!    punctuation both separate tokens)
//! 3. Drop tokens shorter than `min_token_len` characters
//! 4. Drop stop words
//! 5. Optionally expand into n-grams over the surviving tokens

use crate::stop_words::StopWords;

/// Splits text into normalized terms
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: StopWords,
    min_token_len: usize,
}

impl Tokenizer {
    /// English stop words, tokens of at least two characters
    pub fn new() -> Self {
        Self {
            stop_words: StopWords::English,
            min_token_len: 2,
        }
    }

    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Configure the minimum token length in characters (default: 2)
    pub fn with_min_token_len(mut self, min: usize) -> Self {
        self.min_token_len = min.max(1);
        self
    }

    /// Lowercased unigrams, stop words removed
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| token.chars().count() >= self.min_token_len)
            .filter(|token| !self.stop_words.contains(token))
            .map(str::to_string)
            .collect()
    }

    /// Terms for every n in `min_n..=max_n`, space-joined.
    ///
    /// N-grams are built from the tokens that survive stop-word removal, so
    /// "the lord of the rings" yields the bigram "lord rings".
    pub fn terms(&self, text: &str, (min_n, max_n): (usize, usize)) -> Vec<String> {
        let tokens = self.tokenize(text);
        let min_n = min_n.max(1);
        if max_n <= 1 && min_n == 1 {
            return tokens;
        }

        let mut terms = Vec::new();
        for n in min_n..=max_n {
            if n == 1 {
                terms.extend(tokens.iter().cloned());
                continue;
            }
            terms.extend(tokens.windows(n).map(|window| window.join(" ")));
        }
        terms
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
