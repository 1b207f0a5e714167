use callsight_rules::{AgreeId, Gram, Matcher, Rule, RuleError};

#[test]
fn repetition_is_greedy_and_bounded() {
    let rule = Rule::seq([
        Rule::lemmas(&["компания"]),
        Rule::gram(Gram::Noun).repeat(1, 3).capture("name"),
    ]);
    let m = Matcher::new(rule).unwrap();

    let matches = m.find_all("компания Ромашка Лютик Василек Одуванчик");
    assert_eq!(matches.len(), 1);
    // bounded at three repetitions
    assert_eq!(
        matches[0].capture_text("name").as_deref(),
        Some("Ромашка Лютик Василек")
    );
}

#[test]
fn optional_elements_may_be_absent() {
    let rule = Rule::seq([
        Rule::gram(Gram::Adjf).opt(),
        Rule::lemmas(&["компания"]),
    ]);
    let m = Matcher::new(rule).unwrap();
    assert_eq!(m.find_all("наша компания").len(), 1);
    assert_eq!(m.find_all("компания").len(), 1);
}

#[test]
fn literal_sets_are_case_insensitive() {
    let rule = Rule::seq([
        Rule::any_literal_ci(&["это", "я"]),
        Rule::gram(Gram::Name),
    ]);
    let m = Matcher::new(rule).unwrap();
    assert_eq!(m.find_all("Это Ангелина").len(), 1);
    assert_eq!(m.find_all("Я Дмитрий").len(), 1);
    assert!(m.find_all("он Дмитрий").is_empty());
}

#[test]
fn later_capture_of_same_attr_wins() {
    let rule = Rule::seq([
        Rule::gram(Gram::Name).capture("who"),
        Rule::lemmas(&["и"]).opt(),
        Rule::gram(Gram::Name).capture("who"),
    ]);
    let m = Matcher::new(rule).unwrap();
    let matches = m.find_all("Анна Мария");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].capture_text("who").as_deref(), Some("Мария"));
}

#[test]
fn agreement_spans_multiword_pipelines() {
    let gnc = AgreeId(0);
    let rule = Rule::seq([
        Rule::lemmas(&["добрый"]).agree(gnc),
        Rule::lemmas(&["время суток"]).agree(gnc),
    ]);
    let m = Matcher::new(rule).unwrap();
    // agreement head of the phrase is its first word ("время", neuter)
    assert_eq!(m.find_all("доброе время суток").len(), 1);
    assert!(m.find_all("добрый время суток").is_empty());
}

#[test]
fn compile_rejects_invalid_rules() {
    assert!(matches!(
        Matcher::new(Rule::seq([])),
        Err(RuleError::EmptySequence)
    ));
    assert!(matches!(
        Matcher::new(Rule::gram(Gram::Noun).repeat(0, 0)),
        Err(RuleError::BadRepeat { .. })
    ));
}
