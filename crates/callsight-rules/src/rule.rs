//! Declarative match rules over analyzed tokens.
//!
//! The building blocks mirror what the insight grammar needs: lemma
//! pipelines (multi-word phrases matched per token by dictionary form),
//! case-insensitive literals, part-of-speech predicates, sequence and
//! ordered alternation, optional and bounded repetition, named captures,
//! and agreement relations tying sub-matches together.

use thiserror::Error;

use crate::morph::Morph;
use crate::tokenizer::norm_word;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("alternation with no branches")]
    EmptyAlternation,
    #[error("sequence with no items")]
    EmptySequence,
    #[error("lemma pipeline with no phrases")]
    EmptyPipeline,
    #[error("repeat bounds {min}..={max} are invalid")]
    BadRepeat { min: usize, max: usize },
}

/// Identifier linking sub-rules that must agree in gender/number/case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgreeId(pub u8);

/// Token predicate over morphological tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gram {
    Noun,
    Adjf,
    /// Token carries a given-name reading.
    Name,
}

#[derive(Debug, Clone)]
pub enum Rule {
    /// Any of the phrases; each phrase word is matched by dictionary form.
    Lemmas(Vec<Vec<String>>),
    /// Case-insensitive literal.
    LiteralCi(String),
    /// Case-insensitive literal out of a set.
    AnyLiteralCi(Vec<String>),
    Gram(Gram),
    Seq(Vec<Rule>),
    Any(Vec<Rule>),
    Opt(Box<Rule>),
    Repeat {
        inner: Box<Rule>,
        min: usize,
        max: usize,
    },
    Capture {
        inner: Box<Rule>,
        attr: &'static str,
    },
    Agree {
        inner: Box<Rule>,
        rel: AgreeId,
    },
}

impl Rule {
    /// Lemma pipeline. Phrases may contain several words ("время суток");
    /// words are normalized to dictionary form when the rule is compiled.
    pub fn lemmas(phrases: &[&str]) -> Rule {
        Rule::Lemmas(
            phrases
                .iter()
                .map(|p| p.split_whitespace().map(norm_word).collect())
                .collect(),
        )
    }

    pub fn literal_ci(lit: &str) -> Rule {
        Rule::LiteralCi(norm_word(lit))
    }

    pub fn any_literal_ci(lits: &[&str]) -> Rule {
        Rule::AnyLiteralCi(lits.iter().map(|l| norm_word(l)).collect())
    }

    pub fn gram(gram: Gram) -> Rule {
        Rule::Gram(gram)
    }

    pub fn seq(items: impl IntoIterator<Item = Rule>) -> Rule {
        Rule::Seq(items.into_iter().collect())
    }

    pub fn any(items: impl IntoIterator<Item = Rule>) -> Rule {
        Rule::Any(items.into_iter().collect())
    }

    pub fn opt(self) -> Rule {
        Rule::Opt(Box::new(self))
    }

    pub fn repeat(self, min: usize, max: usize) -> Rule {
        Rule::Repeat {
            inner: Box::new(self),
            min,
            max,
        }
    }

    /// Bind the span this rule matches to a named attribute.
    pub fn capture(self, attr: &'static str) -> Rule {
        Rule::Capture {
            inner: Box::new(self),
            attr,
        }
    }

    /// Require gender/number/case agreement with every other sub-rule
    /// carrying the same relation id.
    pub fn agree(self, rel: AgreeId) -> Rule {
        Rule::Agree {
            inner: Box::new(self),
            rel,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), RuleError> {
        match self {
            Rule::Lemmas(phrases) => {
                if phrases.is_empty() || phrases.iter().any(|p| p.is_empty()) {
                    return Err(RuleError::EmptyPipeline);
                }
                Ok(())
            }
            Rule::LiteralCi(_) | Rule::AnyLiteralCi(_) | Rule::Gram(_) => Ok(()),
            Rule::Seq(items) => {
                if items.is_empty() {
                    return Err(RuleError::EmptySequence);
                }
                items.iter().try_for_each(Rule::validate)
            }
            Rule::Any(items) => {
                if items.is_empty() {
                    return Err(RuleError::EmptyAlternation);
                }
                items.iter().try_for_each(Rule::validate)
            }
            Rule::Opt(inner) => inner.validate(),
            Rule::Repeat { inner, min, max } => {
                if *max == 0 || min > max {
                    return Err(RuleError::BadRepeat {
                        min: *min,
                        max: *max,
                    });
                }
                inner.validate()
            }
            Rule::Capture { inner, .. } | Rule::Agree { inner, .. } => inner.validate(),
        }
    }

    /// Rewrite pipeline phrase words to their dictionary form so inflected
    /// declarations ("до свидания") match any inflection of the same lemma.
    pub(crate) fn resolve_lemmas(&mut self, morph: &Morph) {
        match self {
            Rule::Lemmas(phrases) => {
                for phrase in phrases {
                    for word in phrase {
                        *word = morph.lemma_of(word);
                    }
                }
            }
            Rule::LiteralCi(_) | Rule::AnyLiteralCi(_) | Rule::Gram(_) => {}
            Rule::Seq(items) | Rule::Any(items) => {
                for item in items {
                    item.resolve_lemmas(morph);
                }
            }
            Rule::Opt(inner)
            | Rule::Repeat { inner, .. }
            | Rule::Capture { inner, .. }
            | Rule::Agree { inner, .. } => inner.resolve_lemmas(morph),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrases_split_on_whitespace() {
        let rule = Rule::lemmas(&["время суток", "привет"]);
        match rule {
            Rule::Lemmas(phrases) => {
                assert_eq!(phrases[0], vec!["время".to_string(), "суток".to_string()]);
                assert_eq!(phrases[1], vec!["привет".to_string()]);
            }
            _ => panic!("expected lemma pipeline"),
        }
    }

    #[test]
    fn validation_rejects_degenerate_rules() {
        assert_eq!(
            Rule::any([]).validate(),
            Err(RuleError::EmptyAlternation)
        );
        assert_eq!(
            Rule::gram(Gram::Noun).repeat(2, 1).validate(),
            Err(RuleError::BadRepeat { min: 2, max: 1 })
        );
    }
}
