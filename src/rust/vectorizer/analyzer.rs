use std::collections::HashSet;

use unicode_general_category::{get_general_category, GeneralCategory};

/// Word analyzer matching a scikit-learn `analyzer="word"` pipeline:
/// optional lowercasing, `(?u)\b\w\w+\b` tokenisation, stop word removal,
/// then n-gram expansion.
#[derive(Debug, Clone)]
pub(crate) struct WordAnalyzer {
    pub lowercase: bool,
    pub min_n: usize,
    pub max_n: usize,
    pub stop_words: HashSet<String>,
}

impl WordAnalyzer {
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_owned()
        };

        let tokens: Vec<&str> = tokenize(&text)
            .filter(|token| !self.stop_words.contains(*token))
            .collect();

        let mut terms = Vec::new();
        for n in self.min_n..=self.max_n {
            if n > tokens.len() {
                break;
            }
            terms.extend(tokens.windows(n).map(|window| window.join(" ")));
        }
        terms
    }
}

/// Letters (L*), numbers (N*) and `_`. Combining marks (M*) are not word
/// characters, so a vowel sign or virama splits a token.
fn is_word_char(c: char) -> bool {
    if c == '_' {
        return true;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

/// Maximal runs of word characters that are at least two characters long.
pub(crate) fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|run| run.chars().nth(1).is_some())
}
