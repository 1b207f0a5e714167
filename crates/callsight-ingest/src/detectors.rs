//! Insight detectors.
//!
//! Hand-written pattern rules over manager utterances, plus the per-dialogue
//! manager-requirement aggregation. Each detector is a single match-and-set
//! pass per row; when a row matches more than once, the last match wins.

use std::collections::HashMap;
use std::sync::Arc;

use callsight_rules::{capitalize_word, AgreeId, Gram, Matcher, Morph, Rule, RuleError};

use crate::table::Table;

pub const MANAGER_ROLE: &str = "manager";

const COMPANY_ATTR: &str = "company_name";

/// Compiled rule set for all four detectors.
pub struct InsightRules {
    greeting: Matcher,
    farewell: Matcher,
    introduce: Matcher,
    company: Matcher,
}

impl InsightRules {
    pub fn new() -> Result<Self, RuleError> {
        // one dictionary for all four matchers
        let morph = Arc::new(Morph::new());
        Ok(InsightRules {
            greeting: Matcher::with_morph(greeting_rule(), Arc::clone(&morph))?,
            farewell: Matcher::with_morph(farewell_rule(), Arc::clone(&morph))?,
            introduce: Matcher::with_morph(introduce_rule(), Arc::clone(&morph))?,
            company: Matcher::with_morph(company_rule(), morph)?,
        })
    }
}

/// Greeting words by lemma, or a добрый-class adjective next to a
/// time-of-day noun (either order) with gender/number/case agreement.
fn greeting_rule() -> Rule {
    let gnc = AgreeId(0);
    let greeting_words = Rule::lemmas(&["привет", "здравствовать", "приветствовать"]);
    let good = || Rule::lemmas(&["добрый"]).agree(gnc);
    let day_time = || Rule::lemmas(&["утро", "день", "вечер", "время суток"]).agree(gnc);
    Rule::any([
        greeting_words,
        Rule::seq([good(), day_time()]),
        Rule::seq([day_time(), good()]),
    ])
}

/// Farewell phrases by lemma, or the literal "всего" followed by an
/// adjective meaning good/kind.
fn farewell_rule() -> Rule {
    let phrases = Rule::lemmas(&["до свидания", "до встречи", "до завтра", "до завтрашнего дня"]);
    let caseless = Rule::seq([
        Rule::literal_ci("всего"),
        Rule::lemmas(&["хороший", "добрый"]),
    ]);
    Rule::any([phrases, caseless])
}

/// Seven word-order variants of "I am X" / "my name is X" / "call me X",
/// where X is a name-tagged token.
fn introduce_rule() -> Rule {
    let gnc = AgreeId(0);
    let first_name = || Rule::gram(Gram::Name);
    let it_is = || Rule::any_literal_ci(&["это", "я"]);
    let me = || Rule::lemmas(&["я"]);
    let named = || Rule::lemmas(&["звать"]);
    let my = || Rule::lemmas(&["мой"]).agree(gnc);
    let name_word = || Rule::lemmas(&["имя"]).agree(gnc);
    Rule::any([
        Rule::seq([it_is(), first_name()]),
        Rule::seq([first_name(), it_is()]),
        Rule::seq([me(), named(), first_name()]),
        Rule::seq([me(), first_name(), named()]),
        Rule::seq([named(), me(), first_name()]),
        Rule::seq([my(), name_word(), first_name()]),
        Rule::seq([first_name(), my(), name_word()]),
    ])
}

/// Company-prefix keyword adjacent (before or after) to a noun phrase of up
/// to three {NOUN ADJF?} / {ADJF? NOUN} repetitions; the phrase is captured
/// as the company name.
fn company_rule() -> Rule {
    let prefix = || Rule::lemmas(&["компания", "организация", "предприятие"]);
    let noun_phrase = || {
        Rule::any([
            Rule::seq([Rule::gram(Gram::Noun), Rule::gram(Gram::Adjf).opt()]).repeat(1, 3),
            Rule::seq([Rule::gram(Gram::Adjf).opt(), Rule::gram(Gram::Noun)]).repeat(1, 3),
        ])
        .capture(COMPANY_ATTR)
    };
    Rule::any([
        Rule::seq([prefix(), noun_phrase()]),
        Rule::seq([noun_phrase(), prefix()]),
    ])
}

pub fn detect_greetings(table: &mut Table, rules: &InsightRules) {
    for row in manager_rows(table) {
        for _ in rules.greeting.find_all(&row.text) {
            row.insight.greeting = Some(true);
        }
    }
}

pub fn detect_farewells(table: &mut Table, rules: &InsightRules) {
    for row in manager_rows(table) {
        for _ in rules.farewell.find_all(&row.text) {
            row.insight.farewell = Some(true);
        }
    }
}

pub fn detect_introductions(table: &mut Table, rules: &InsightRules) {
    for row in manager_rows(table) {
        for m in rules.introduce.find_all(&row.text) {
            let Some(name) = m.name_token() else { continue };
            // a bare one-letter initial is not an introduction
            if name.char_len() > 1 {
                row.insight.introduce = Some(true);
                row.insight.manager_name = Some(capitalize_word(&name.surface));
            }
        }
    }
}

pub fn detect_companies(table: &mut Table, rules: &InsightRules) {
    for row in manager_rows(table) {
        for m in rules.company.find_all(&row.text) {
            if let Some(tokens) = m.capture_tokens(COMPANY_ATTR) {
                let name = tokens
                    .iter()
                    .map(|t| capitalize_word(&t.surface))
                    .collect::<Vec<_>>()
                    .join(" ");
                row.insight.company_name = Some(name);
            }
        }
    }
}

/// Per-dialogue manager requirement: a greeting somewhere in the group AND a
/// farewell somewhere in the group. The flag is written on the first row of
/// each group in original table order. The scan deliberately covers all rows
/// of the group, not only manager rows.
pub fn check_manager_requirement(table: &mut Table) {
    struct Acc {
        first_row: usize,
        greeting: bool,
        farewell: bool,
    }
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Acc> = HashMap::new();
    for (i, row) in table.rows.iter().enumerate() {
        let acc = groups.entry(row.dlg_id.clone()).or_insert_with(|| {
            order.push(row.dlg_id.clone());
            Acc {
                first_row: i,
                greeting: false,
                farewell: false,
            }
        });
        acc.greeting |= row.insight.greeting.is_some();
        acc.farewell |= row.insight.farewell.is_some();
    }
    for dlg_id in order {
        let acc = &groups[&dlg_id];
        table.rows[acc.first_row].insight.manager_is_ok = Some(acc.greeting && acc.farewell);
    }
}

/// All detectors in fixed order, then the aggregation.
pub fn annotate(table: &mut Table, rules: &InsightRules) {
    detect_greetings(table, rules);
    detect_farewells(table, rules);
    detect_introductions(table, rules);
    detect_companies(table, rules);
    check_manager_requirement(table);
}

fn manager_rows(table: &mut Table) -> impl Iterator<Item = &mut crate::table::Row> + '_ {
    table.rows.iter_mut().filter(|r| r.role == MANAGER_ROLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;

    fn table_with(rows: &[(&str, &str, &str)]) -> Table {
        let mut csv = String::from("dlg_id,role,text\n");
        for (dlg, role, text) in rows {
            // texts may contain commas
            csv.push_str(&format!("{dlg},{role},\"{text}\"\n"));
        }
        Table::read_from(csv.as_bytes()).unwrap()
    }

    fn rules() -> InsightRules {
        InsightRules::new().unwrap()
    }

    #[test]
    fn greeting_variants_match() {
        let mut table = table_with(&[
            ("0", "manager", "привет"),
            ("0", "manager", "Здравствуйте!"),
            ("0", "manager", "добрый день"),
            ("0", "manager", "день добрый"),
            ("0", "manager", "доброе утро"),
            ("0", "manager", "я слушаю вас"),
        ]);
        detect_greetings(&mut table, &rules());
        for row in &table.rows[..5] {
            assert_eq!(row.insight.greeting, Some(true), "row: {}", row.text);
        }
        assert_eq!(table.rows[5].insight.greeting, None);
    }

    #[test]
    fn greeting_requires_agreement() {
        let mut table = table_with(&[("0", "manager", "добрая день")]);
        detect_greetings(&mut table, &rules());
        assert_eq!(table.rows[0].insight.greeting, None);
    }

    #[test]
    fn greeting_ignores_client_rows() {
        let mut table = table_with(&[("0", "client", "добрый день")]);
        detect_greetings(&mut table, &rules());
        assert!(table.rows[0].insight.is_empty());
    }

    #[test]
    fn farewell_variants_match() {
        let mut table = table_with(&[
            ("0", "manager", "всего доброго"),
            ("0", "manager", "Всего хорошего!"),
            ("0", "manager", "до свидания"),
            ("0", "manager", "до встречи"),
            ("0", "manager", "до завтра"),
            ("0", "manager", "до завтрашнего дня"),
            ("0", "manager", "хорошего вам дня"),
        ]);
        detect_farewells(&mut table, &rules());
        for row in &table.rows[..6] {
            assert_eq!(row.insight.farewell, Some(true), "row: {}", row.text);
        }
        assert_eq!(table.rows[6].insight.farewell, None);
    }

    #[test]
    fn introduction_extracts_capitalized_name() {
        let mut table = table_with(&[
            ("0", "manager", "меня зовут Анна"),
            ("1", "manager", "я Дмитрий"),
            ("2", "manager", "это ангелина добрый день"),
        ]);
        detect_introductions(&mut table, &rules());
        assert_eq!(table.rows[0].insight.introduce, Some(true));
        assert_eq!(table.rows[0].insight.manager_name.as_deref(), Some("Анна"));
        assert_eq!(table.rows[1].insight.manager_name.as_deref(), Some("Дмитрий"));
        assert_eq!(table.rows[2].insight.manager_name.as_deref(), Some("Ангелина"));
    }

    #[test]
    fn introduction_rejects_short_and_unknown_names() {
        let mut table = table_with(&[
            // not in the name dictionary
            ("0", "manager", "меня зовут Ян"),
            // one-letter initial
            ("1", "manager", "меня зовут А"),
        ]);
        detect_introductions(&mut table, &rules());
        for row in &table.rows {
            assert_eq!(row.insight.introduce, None, "row: {}", row.text);
            assert_eq!(row.insight.manager_name, None);
        }
    }

    #[test]
    fn last_introduction_match_wins() {
        let mut table = table_with(&[("0", "manager", "меня зовут Анна, то есть меня зовут Мария")]);
        detect_introductions(&mut table, &rules());
        assert_eq!(table.rows[0].insight.manager_name.as_deref(), Some("Мария"));
    }

    #[test]
    fn company_name_is_captured_and_capitalized() {
        let mut table = table_with(&[
            ("0", "manager", "наша компания Ромашка"),
            ("1", "manager", "компания красный октябрь слушает"),
        ]);
        detect_companies(&mut table, &rules());
        assert_eq!(
            table.rows[0].insight.company_name.as_deref(),
            Some("Ромашка")
        );
        assert!(table.rows[1]
            .insight
            .company_name
            .as_deref()
            .unwrap()
            .starts_with("Красный Октябрь"));
    }

    #[test]
    fn company_prefix_matches_on_either_side() {
        let mut table = table_with(&[
            ("0", "manager", "Ромашка компания приветствует вас"),
            ("1", "manager", "наше предприятие Вектор"),
            ("2", "manager", "организация Лютик"),
        ]);
        detect_companies(&mut table, &rules());
        assert_eq!(
            table.rows[0].insight.company_name.as_deref(),
            Some("Ромашка")
        );
        assert_eq!(
            table.rows[1].insight.company_name.as_deref(),
            Some("Вектор")
        );
        assert_eq!(
            table.rows[2].insight.company_name.as_deref(),
            Some("Лютик")
        );
    }

    #[test]
    fn manager_requirement_needs_both_insights() {
        let mut table = table_with(&[
            ("0", "manager", "добрый день"),
            ("0", "client", "привет"),
            ("0", "manager", "до свидания"),
            ("1", "manager", "добрый день"),
            ("1", "manager", "ладно"),
        ]);
        let rules = rules();
        detect_greetings(&mut table, &rules);
        detect_farewells(&mut table, &rules);
        check_manager_requirement(&mut table);

        assert_eq!(table.rows[0].insight.manager_is_ok, Some(true));
        assert_eq!(table.rows[3].insight.manager_is_ok, Some(false));
        // only the first row of each group carries the flag
        assert_eq!(table.rows[1].insight.manager_is_ok, None);
        assert_eq!(table.rows[2].insight.manager_is_ok, None);
        assert_eq!(table.rows[4].insight.manager_is_ok, None);
    }

    #[test]
    fn detectors_never_touch_non_manager_rows() {
        let mut table = table_with(&[
            ("0", "client", "здравствуйте меня зовут Анна компания Ромашка всего доброго"),
        ]);
        let rules = rules();
        detect_greetings(&mut table, &rules);
        detect_farewells(&mut table, &rules);
        detect_introductions(&mut table, &rules);
        detect_companies(&mut table, &rules);
        assert!(table.rows[0].insight.is_empty());
    }

    #[test]
    fn annotate_is_idempotent() {
        let mut table = table_with(&[
            ("0", "manager", "добрый день меня зовут Ангелина компания Ромашка"),
            ("0", "client", "здравствуйте"),
            ("0", "manager", "всего доброго"),
        ]);
        let rules = rules();
        annotate(&mut table, &rules);
        let first: Vec<_> = table.rows.iter().map(|r| r.insight.clone()).collect();
        annotate(&mut table, &rules);
        let second: Vec<_> = table.rows.iter().map(|r| r.insight.clone()).collect();
        assert_eq!(first, second);
    }
}
