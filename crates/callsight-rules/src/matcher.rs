//! Rule matcher.
//!
//! Scans the analyzed token stream left to right and yields non-overlapping
//! matches. At each start position every way of reading the rule is
//! enumerated; candidates that violate an agreement relation are dropped,
//! then the longest survivor wins (declaration order breaks ties).

use std::collections::HashMap;
use std::sync::Arc;

use crate::morph::{Analysis, Morph};
use crate::rule::{AgreeId, Gram, Rule, RuleError};
use crate::tokenizer::{Token, TokenKind, Tokenizer};

/// A token inside a match, with the analyses it carried.
#[derive(Debug, Clone)]
pub struct TokenMatch {
    pub surface: String,
    pub norm: String,
    /// Character offsets into the source text.
    pub span: (usize, usize),
    pub analyses: Vec<Analysis>,
}

impl TokenMatch {
    pub fn char_len(&self) -> usize {
        self.span.1 - self.span.0
    }

    pub fn is_name(&self) -> bool {
        self.analyses.iter().any(|a| a.is_name)
    }
}

#[derive(Debug, Clone)]
pub struct RuleMatch {
    pub tokens: Vec<TokenMatch>,
    /// Attribute name -> token range within `tokens`. When a rule captures
    /// the same attribute more than once, the later capture wins.
    captures: HashMap<&'static str, (usize, usize)>,
}

impl RuleMatch {
    pub fn capture_tokens(&self, attr: &str) -> Option<&[TokenMatch]> {
        self.captures.get(attr).map(|&(a, b)| &self.tokens[a..b])
    }

    pub fn capture_text(&self, attr: &str) -> Option<String> {
        self.capture_tokens(attr).map(|toks| {
            toks.iter()
                .map(|t| t.surface.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    /// First token carrying a given-name reading.
    pub fn name_token(&self) -> Option<&TokenMatch> {
        self.tokens.iter().find(|t| t.is_name())
    }
}

struct Analyzed {
    token: Token,
    analyses: Vec<Analysis>,
}

/// One way of reading a rule from a given start position.
#[derive(Debug, Clone, Default)]
struct State {
    end: usize,
    /// (attr, absolute token start, absolute token end), in capture order.
    caps: Vec<(&'static str, usize, usize)>,
    /// (relation, head token index) for every agreement participant.
    agree: Vec<(AgreeId, usize)>,
}

fn merge(base: &State, cont: State) -> State {
    let mut caps = base.caps.clone();
    caps.extend(cont.caps);
    let mut agree = base.agree.clone();
    agree.extend(cont.agree);
    State {
        end: cont.end,
        caps,
        agree,
    }
}

pub struct Matcher {
    rule: Rule,
    morph: Arc<Morph>,
    tokenizer: Tokenizer,
}

impl Matcher {
    pub fn new(rule: Rule) -> Result<Self, RuleError> {
        Self::with_morph(rule, Arc::new(Morph::new()))
    }

    /// Build a matcher over an already-constructed dictionary. Rule sets
    /// with several matchers share one lexicon instead of rebuilding it
    /// per rule.
    pub fn with_morph(mut rule: Rule, morph: Arc<Morph>) -> Result<Self, RuleError> {
        rule.validate()?;
        rule.resolve_lemmas(&morph);
        Ok(Matcher {
            rule,
            morph,
            tokenizer: Tokenizer::new(),
        })
    }

    /// All non-overlapping matches in `text`, left to right.
    pub fn find_all(&self, text: &str) -> Vec<RuleMatch> {
        let toks: Vec<Analyzed> = self
            .tokenizer
            .tokenize(text)
            .into_iter()
            .map(|token| {
                let analyses = if token.kind == TokenKind::Word {
                    self.morph.analyze(&token.norm)
                } else {
                    Vec::new()
                };
                Analyzed { token, analyses }
            })
            .collect();

        let mut out = Vec::new();
        let mut i = 0;
        while i < toks.len() {
            match self.match_at(&toks, i) {
                Some(state) => {
                    let end = state.end;
                    out.push(self.build_match(&toks, i, state));
                    i = end;
                }
                None => i += 1,
            }
        }
        out
    }

    fn match_at(&self, toks: &[Analyzed], start: usize) -> Option<State> {
        let mut best: Option<State> = None;
        for state in self.match_rule(&self.rule, toks, start) {
            if state.end <= start || !self.agreement_ok(toks, &state) {
                continue;
            }
            if best.as_ref().map_or(true, |b| state.end > b.end) {
                best = Some(state);
            }
        }
        best
    }

    fn match_rule(&self, rule: &Rule, toks: &[Analyzed], pos: usize) -> Vec<State> {
        match rule {
            Rule::Lemmas(phrases) => {
                let mut states = Vec::new();
                for phrase in phrases {
                    if self.phrase_matches(phrase, toks, pos) {
                        states.push(State {
                            end: pos + phrase.len(),
                            ..Default::default()
                        });
                    }
                }
                states
            }
            Rule::LiteralCi(lit) => self.literal_state(toks, pos, |norm| norm == lit.as_str()),
            Rule::AnyLiteralCi(lits) => {
                self.literal_state(toks, pos, |norm| lits.iter().any(|l| l.as_str() == norm))
            }
            Rule::Gram(gram) => match toks.get(pos) {
                Some(t) if t.token.kind == TokenKind::Word && has_gram(&t.analyses, *gram) => {
                    vec![State {
                        end: pos + 1,
                        ..Default::default()
                    }]
                }
                _ => Vec::new(),
            },
            Rule::Seq(items) => {
                let mut states = vec![State {
                    end: pos,
                    ..Default::default()
                }];
                for item in items {
                    let mut next = Vec::new();
                    for s in &states {
                        for cont in self.match_rule(item, toks, s.end) {
                            next.push(merge(s, cont));
                        }
                    }
                    states = next;
                    if states.is_empty() {
                        break;
                    }
                }
                states
            }
            Rule::Any(items) => items
                .iter()
                .flat_map(|item| self.match_rule(item, toks, pos))
                .collect(),
            Rule::Opt(inner) => {
                let mut states = self.match_rule(inner, toks, pos);
                states.push(State {
                    end: pos,
                    ..Default::default()
                });
                states
            }
            Rule::Repeat { inner, min, max } => {
                let mut results = Vec::new();
                let mut frontier = vec![State {
                    end: pos,
                    ..Default::default()
                }];
                if *min == 0 {
                    results.push(frontier[0].clone());
                }
                for k in 1..=*max {
                    let mut next = Vec::new();
                    for s in &frontier {
                        for cont in self.match_rule(inner, toks, s.end) {
                            // zero-width repetitions would loop forever
                            if cont.end > s.end {
                                next.push(merge(s, cont));
                            }
                        }
                    }
                    if next.is_empty() {
                        break;
                    }
                    if k >= *min {
                        results.extend(next.iter().cloned());
                    }
                    frontier = next;
                }
                results
            }
            Rule::Capture { inner, attr } => self
                .match_rule(inner, toks, pos)
                .into_iter()
                .map(|mut s| {
                    s.caps.push((attr, pos, s.end));
                    s
                })
                .collect(),
            Rule::Agree { inner, rel } => self
                .match_rule(inner, toks, pos)
                .into_iter()
                .map(|mut s| {
                    s.agree.push((*rel, pos));
                    s
                })
                .collect(),
        }
    }

    fn literal_state(
        &self,
        toks: &[Analyzed],
        pos: usize,
        pred: impl Fn(&str) -> bool,
    ) -> Vec<State> {
        match toks.get(pos) {
            Some(t) if t.token.kind == TokenKind::Word && pred(&t.token.norm) => vec![State {
                end: pos + 1,
                ..Default::default()
            }],
            _ => Vec::new(),
        }
    }

    fn phrase_matches(&self, phrase: &[String], toks: &[Analyzed], pos: usize) -> bool {
        phrase.iter().enumerate().all(|(off, lemma)| {
            toks.get(pos + off).is_some_and(|t| {
                t.token.kind == TokenKind::Word
                    && t.analyses.iter().any(|a| a.lemma == *lemma)
            })
        })
    }

    fn agreement_ok(&self, toks: &[Analyzed], state: &State) -> bool {
        let mut groups: HashMap<AgreeId, Vec<usize>> = HashMap::new();
        for (rel, idx) in &state.agree {
            groups.entry(*rel).or_default().push(*idx);
        }
        groups.values().all(|idxs| group_agrees(toks, idxs))
    }

    fn build_match(&self, toks: &[Analyzed], start: usize, state: State) -> RuleMatch {
        let tokens = toks[start..state.end]
            .iter()
            .map(|a| TokenMatch {
                surface: a.token.surface.clone(),
                norm: a.token.norm.clone(),
                span: a.token.span,
                analyses: a.analyses.clone(),
            })
            .collect();
        let mut captures = HashMap::new();
        for (attr, cs, ce) in state.caps {
            captures.insert(attr, (cs - start, ce - start));
        }
        RuleMatch { tokens, captures }
    }
}

fn has_gram(analyses: &[Analysis], gram: Gram) -> bool {
    analyses.iter().any(|a| match gram {
        Gram::Noun => a.pos == crate::morph::Pos::Noun,
        Gram::Adjf => a.pos == crate::morph::Pos::Adjf,
        Gram::Name => a.is_name,
    })
}

/// A group agrees when one analysis can be chosen per participating token
/// such that every pair is compatible. Tokens without analyses are
/// wildcards.
fn group_agrees(toks: &[Analyzed], idxs: &[usize]) -> bool {
    let lists: Vec<&[Analysis]> = idxs
        .iter()
        .map(|&i| toks[i].analyses.as_slice())
        .filter(|l| !l.is_empty())
        .collect();
    if lists.len() < 2 {
        return true;
    }
    let mut chosen: Vec<&Analysis> = Vec::with_capacity(lists.len());
    pick_compatible(&lists, &mut chosen)
}

fn pick_compatible<'a>(lists: &[&'a [Analysis]], chosen: &mut Vec<&'a Analysis>) -> bool {
    let Some((head, rest)) = lists.split_first() else {
        return true;
    };
    for a in *head {
        if chosen.iter().all(|c| c.agrees_with(a)) {
            chosen.push(a);
            if pick_compatible(rest, chosen) {
                return true;
            }
            chosen.pop();
        }
    }
    false
}
