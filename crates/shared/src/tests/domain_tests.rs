use super::{Record, SortColumn, SortOrder};

#[test]
fn decodes_record_array_and_ignores_extra_fields() {
    let body = r#"[
        {"name": "Bob", "age": 30, "occupation": "Chef", "id": 7},
        {"name": "Amy", "age": 25, "occupation": "Dev"}
    ]"#;

    let records: Vec<Record> = serde_json::from_str(body).expect("decode records");

    assert_eq!(
        records,
        vec![Record::new("Bob", 30.0, "Chef"), Record::new("Amy", 25.0, "Dev")]
    );
}

#[test]
fn keeps_fractional_and_float_formatted_ages() {
    let body = r#"[
        {"name": "Bob", "age": 30.5, "occupation": "Chef"},
        {"name": "Amy", "age": 25, "occupation": "Dev"},
        {"name": "Cy", "age": 40.0, "occupation": "Pilot"}
    ]"#;

    let records: Vec<Record> = serde_json::from_str(body).expect("decode records");

    let ages: Vec<f64> = records.iter().map(|record| record.age).collect();
    assert_eq!(ages, vec![30.5, 25.0, 40.0]);
}

#[test]
fn display_age_drops_the_fraction_of_whole_numbers() {
    assert_eq!(Record::new("Amy", 25.0, "Dev").display_age(), "25");
    assert_eq!(Record::new("Bob", 30.5, "Chef").display_age(), "30.5");
    assert_eq!(Record::new("Neg", -3.0, "Test").display_age(), "-3");
    assert_eq!(Record::new("Zero", -0.0, "Test").display_age(), "0");
}

#[test]
fn rejects_record_without_name() {
    let body = r#"[{"age": 30, "occupation": "Chef"}]"#;
    assert!(serde_json::from_str::<Vec<Record>>(body).is_err());
}

#[test]
fn rejects_textual_age() {
    let body = r#"[{"name": "Bob", "age": "30", "occupation": "Chef"}]"#;
    assert!(serde_json::from_str::<Vec<Record>>(body).is_err());
}

#[test]
fn sort_order_flips_both_ways() {
    assert_eq!(SortOrder::default(), SortOrder::Asc);
    assert_eq!(SortOrder::Asc.flipped(), SortOrder::Desc);
    assert_eq!(SortOrder::Desc.flipped(), SortOrder::Asc);
}

#[test]
fn sort_column_display_uses_wire_names() {
    assert_eq!(SortColumn::Name.to_string(), "name");
    assert_eq!(SortColumn::Age.to_string(), "age");
    assert_eq!(SortColumn::Age.label(), "Age");
}
