use callsight_ingest::{annotate, InsightRules, Table};

fn annotated(csv: &str) -> Table {
    let mut table = Table::read_from(csv.as_bytes()).expect("table");
    let rules = InsightRules::new().expect("rules");
    annotate(&mut table, &rules);
    table
}

#[test]
fn full_dialogue_gets_all_insights() {
    let table = annotated(
        "\
dlg_id,line_n,role,text
0,0,manager,\"Здравствуйте, меня зовут Ангелина, компания Ромашка\"
0,1,client,добрый день
0,2,client,мне нужна помощь
0,3,manager,\"всего доброго, до свидания\"
",
    );

    let first = &table.rows[0].insight;
    assert_eq!(first.greeting, Some(true));
    assert_eq!(first.introduce, Some(true));
    assert_eq!(first.manager_name.as_deref(), Some("Ангелина"));
    assert_eq!(first.company_name.as_deref(), Some("Ромашка"));
    assert_eq!(first.manager_is_ok, Some(true));

    let last = &table.rows[3].insight;
    assert_eq!(last.farewell, Some(true));
    assert_eq!(last.manager_is_ok, None);

    // client rows never receive detector insights
    assert_eq!(table.rows[1].insight.greeting, None);
    assert!(table.rows[2].insight.is_empty());
}

#[test]
fn requirement_fails_without_farewell() {
    let table = annotated(
        "\
dlg_id,role,text
5,manager,добрый день
5,client,здравствуйте
5,manager,ну ладно
",
    );
    assert_eq!(table.rows[0].insight.manager_is_ok, Some(false));
}

#[test]
fn greeting_and_farewell_may_come_from_different_rows() {
    let table = annotated(
        "\
dlg_id,role,text
7,manager,привет
7,manager,о чем вы хотели поговорить
7,manager,до встречи
",
    );
    assert_eq!(table.rows[0].insight.manager_is_ok, Some(true));
}

#[test]
fn insight_cell_serializes_sparsely() {
    let table = annotated(
        "\
dlg_id,role,text
0,manager,добрый вечер
",
    );
    let json = serde_json::to_string(&table.rows[0].insight).unwrap();
    assert_eq!(json, r#"{"greeting":true,"manager_is_ok":false}"#);
}
