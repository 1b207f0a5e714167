//! Morphological analyses for word tokens.
//!
//! Known forms come from the embedded lexicon; everything else gets a
//! suffix-based guess so part-of-speech predicates still apply to
//! open-vocabulary words (company names and the like). Guessed analyses
//! are never name-tagged.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::lexicon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pos {
    Noun,
    Adjf,
    Verb,
    Npro,
    Advb,
    Prep,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Masc,
    Femn,
    Neut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Number {
    Sing,
    Plur,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Case {
    Nomn,
    Gent,
    Datv,
    Accs,
    Ablt,
    Loct,
}

/// One candidate reading of a word form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub lemma: String,
    pub pos: Pos,
    pub gender: Option<Gender>,
    pub number: Option<Number>,
    pub case: Option<Case>,
    pub is_name: bool,
}

impl Analysis {
    /// Gender/number/case compatibility: categories both readings specify
    /// must agree; a missing category never blocks agreement.
    pub fn agrees_with(&self, other: &Analysis) -> bool {
        fn compat<T: PartialEq + Copy>(a: Option<T>, b: Option<T>) -> bool {
            match (a, b) {
                (Some(x), Some(y)) => x == y,
                _ => true,
            }
        }
        compat(self.gender, other.gender)
            && compat(self.number, other.number)
            && compat(self.case, other.case)
    }
}

pub struct Morph {
    forms: HashMap<String, Vec<Analysis>>,
}

impl Morph {
    pub fn new() -> Self {
        let mut forms: HashMap<String, Vec<Analysis>> = HashMap::new();
        for row in lexicon::FORMS {
            forms
                .entry(row.0.to_string())
                .or_default()
                .extend(lexicon::analyses(row));
        }
        for (nom, gender) in lexicon::NAMES {
            for form in lexicon::name_forms(nom) {
                forms.entry(form).or_default().push(Analysis {
                    lemma: (*nom).to_string(),
                    pos: Pos::Noun,
                    gender: Some(*gender),
                    number: Some(Number::Sing),
                    case: None,
                    is_name: true,
                });
            }
        }
        Morph { forms }
    }

    /// Candidate analyses for a normalized word (lowercase, `ё` folded).
    pub fn analyze(&self, norm: &str) -> Vec<Analysis> {
        match self.forms.get(norm) {
            Some(known) => known.clone(),
            None => vec![guess(norm)],
        }
    }

    /// Dictionary form of a word, for normalizing pipeline phrases. Unknown
    /// words are their own lemma.
    pub fn lemma_of(&self, norm: &str) -> String {
        self.forms
            .get(norm)
            .and_then(|v| v.first())
            .map(|a| a.lemma.clone())
            .unwrap_or_else(|| norm.to_string())
    }
}

impl Default for Morph {
    fn default() -> Self {
        Self::new()
    }
}

/// Suffix guess for out-of-vocabulary words. Adjective endings are checked
/// first, then verb endings; everything else reads as a noun.
fn guess(norm: &str) -> Analysis {
    const ADJ_ENDINGS: &[&str] = &[
        "ого", "его", "ому", "ему", "ыми", "ими", "ая", "яя", "ое", "ее", "ые", "ие", "ый", "ий",
        "ую", "юю", "ых", "их",
    ];
    const VERB_ENDINGS: &[&str] = &[
        "ться", "тся", "ть", "ешь", "ете", "ишь", "ите", "ает", "яет", "еет", "ует", "ают", "яют",
        "уют",
    ];
    let len = norm.chars().count();
    let pos = if ADJ_ENDINGS
        .iter()
        .any(|e| norm.ends_with(e) && len > e.chars().count())
    {
        Pos::Adjf
    } else if VERB_ENDINGS
        .iter()
        .any(|e| norm.ends_with(e) && len > e.chars().count())
    {
        Pos::Verb
    } else {
        Pos::Noun
    };
    Analysis {
        lemma: norm.to_string(),
        pos,
        gender: None,
        number: None,
        case: None,
        is_name: false,
    }
}
