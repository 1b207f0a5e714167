//! Token scan for transcript text.
//!
//! Produces word, number and punctuation tokens, each with its character
//! span. Punctuation is kept as tokens so multi-word patterns do not match
//! across a comma or a dash.

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Number,
    Punct,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub surface: String,
    /// Lowercased surface with `ё` folded to `е`, used for all lookups.
    pub norm: String,
    pub kind: TokenKind,
    /// Character (not byte) offsets into the source text, `[start, end)`.
    pub span: (usize, usize),
}

impl Token {
    pub fn char_len(&self) -> usize {
        self.span.1 - self.span.0
    }
}

pub struct Tokenizer {
    re: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        // Words may carry internal hyphens ("кто-нибудь").
        let re = Regex::new(
            r"(?x)
            (?P<word>\p{Alphabetic}+(?:-\p{Alphabetic}+)*)
            | (?P<num>\d+(?:[.,]\d+)?)
            | (?P<punct>[^\p{Alphabetic}\d\s]+)
        ",
        )
        .unwrap();
        Tokenizer { re }
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        // Byte offset -> char offset, computed once per text.
        let mut char_of_byte = vec![0usize; text.len() + 1];
        let mut total_chars = 0;
        for (ci, (bi, ch)) in text.char_indices().enumerate() {
            for b in bi..bi + ch.len_utf8() {
                char_of_byte[b] = ci;
            }
            total_chars = ci + 1;
        }
        char_of_byte[text.len()] = total_chars;

        let mut tokens = Vec::new();
        for caps in self.re.captures_iter(text) {
            let (m, kind) = if let Some(m) = caps.name("word") {
                (m, TokenKind::Word)
            } else if let Some(m) = caps.name("num") {
                (m, TokenKind::Number)
            } else if let Some(m) = caps.name("punct") {
                (m, TokenKind::Punct)
            } else {
                continue;
            };
            let surface = m.as_str().to_string();
            tokens.push(Token {
                norm: norm_word(&surface),
                surface,
                kind,
                span: (char_of_byte[m.start()], char_of_byte[m.end()]),
            });
        }
        tokens
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase + `ё`→`е` fold shared by the tokenizer and rule literals.
pub fn norm_word(word: &str) -> String {
    word.to_lowercase().replace('ё', "е")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_are_in_chars() {
        let t = Tokenizer::new();
        let toks = t.tokenize("меня зовут А");
        assert_eq!(toks.len(), 3);
        assert_eq!(toks[0].span, (0, 4));
        assert_eq!(toks[1].span, (5, 10));
        assert_eq!(toks[2].span, (11, 12));
        assert_eq!(toks[2].char_len(), 1);
    }

    #[test]
    fn punctuation_is_a_token() {
        let t = Tokenizer::new();
        let toks = t.tokenize("добрый, день");
        let kinds: Vec<_> = toks.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Word, TokenKind::Punct, TokenKind::Word]);
    }

    #[test]
    fn yo_is_folded_in_norm() {
        let t = Tokenizer::new();
        let toks = t.tokenize("Днём");
        assert_eq!(toks[0].norm, "днем");
        assert_eq!(toks[0].surface, "Днём");
    }
}
