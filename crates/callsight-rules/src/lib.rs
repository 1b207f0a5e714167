//! Linguistic pattern core for Russian call-transcript insights.
//!
//! Provides:
//! - a character-span tokenizer (`tokenizer`),
//! - morphological analyses backed by an embedded closed-vocabulary lexicon
//!   with suffix guessing for open-vocabulary words (`morph`),
//! - declarative match rules with captures and agreement (`rule`),
//! - a left-to-right matcher yielding non-overlapping matches (`matcher`).
//!
//! The insight grammar itself lives in `callsight-ingest`; this crate only
//! knows how to compile and run rules.

mod lexicon;
pub mod matcher;
pub mod morph;
pub mod rule;
pub mod tokenizer;

pub use matcher::{Matcher, RuleMatch, TokenMatch};
pub use morph::{Analysis, Case, Gender, Morph, Number, Pos};
pub use rule::{AgreeId, Gram, Rule, RuleError};
pub use tokenizer::{Token, TokenKind, Tokenizer};

/// Capitalize a single word: first character uppercased, the rest lowered.
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_word_handles_cyrillic() {
        assert_eq!(capitalize_word("анна"), "Анна");
        assert_eq!(capitalize_word("РОМАШКА"), "Ромашка");
        assert_eq!(capitalize_word(""), "");
    }
}
