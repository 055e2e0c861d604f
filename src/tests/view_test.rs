//! Unit tests for the filter/sort/paginate view model.

use crate::model::ApplicantRecord;
use crate::view::{Dashboard, SortDirection, SortField, ViewState, PAGE_SIZE};

fn record(id: i64, name: &str, email: &str) -> ApplicantRecord {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "email": email,
    }))
    .expect("test record should deserialize")
}

fn record_full(id: i64, name: &str, stage: &str, source: &str, tags: &str) -> ApplicantRecord {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "current_stage": stage,
        "source": source,
        "tags": tags,
    }))
    .expect("test record should deserialize")
}

fn dashboard_with(records: Vec<ApplicantRecord>) -> Dashboard {
    let mut dashboard = Dashboard::new(ViewState::default());
    dashboard.replace_records(records);
    dashboard
}

#[test]
fn test_empty_view_state_shows_first_twenty_in_original_order() {
    let records: Vec<_> = (1..=45).map(|i| record(i, &format!("P{i}"), "p@x.com")).collect();
    let dashboard = dashboard_with(records);

    let page = dashboard.visible_page();
    assert_eq!(page.len(), PAGE_SIZE);
    let ids: Vec<i64> = page.iter().map(|r| r.ident()).collect();
    assert_eq!(ids, (1..=20).collect::<Vec<i64>>());
}

#[test]
fn test_filtering_is_idempotent() {
    let records = vec![
        record_full(1, "Jane Doe", "Interview Stage", "LinkedIn", "rust"),
        record_full(2, "John Roe", "Submitted", "Indeed", "python"),
        record_full(3, "Janet Poe", "Interview Stage", "Referral", "go"),
    ];
    let mut dashboard = dashboard_with(records);

    dashboard.set_search("jane");
    dashboard.set_stage("Interview Stage");
    let once: Vec<i64> = dashboard.filtered().iter().map(|r| r.ident()).collect();

    dashboard.set_search("jane");
    dashboard.set_stage("Interview Stage");
    let twice: Vec<i64> = dashboard.filtered().iter().map(|r| r.ident()).collect();

    assert_eq!(once, twice);
}

#[test]
fn test_search_matches_name_email_and_tags_case_insensitively() {
    let records = vec![
        record_full(1, "Jane Doe", "Submitted", "LinkedIn", ""),
        record_full(2, "Bob Smith", "Submitted", "Indeed", "JANE-referral"),
        record(3, "Carol King", "jane@corp.com"),
        record_full(4, "Dave Hill", "Submitted", "Other", "python"),
    ];
    let mut dashboard = dashboard_with(records);

    dashboard.set_search("JaNe");
    let ids: Vec<i64> = dashboard.filtered().iter().map(|r| r.ident()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_search_and_stage_filter_intersect() {
    let records = vec![
        record_full(1, "Jane Doe", "Interview Stage", "LinkedIn", ""),
        record_full(2, "Jane Poe", "Submitted", "LinkedIn", ""),
        record_full(3, "Mark Moe", "Interview Stage", "Indeed", ""),
    ];
    let mut dashboard = dashboard_with(records);

    dashboard.set_search("jane");
    dashboard.set_stage("Interview Stage");
    let ids: Vec<i64> = dashboard.filtered().iter().map(|r| r.ident()).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_source_filter_is_exact_and_excludes_missing_source() {
    let records = vec![
        record_full(1, "A B", "Submitted", "LinkedIn", ""),
        record(2, "C D", "cd@x.com"), // no source at all
        record_full(3, "E F", "Submitted", "Indeed", ""),
    ];
    let mut dashboard = dashboard_with(records);

    dashboard.set_source("LinkedIn");
    let ids: Vec<i64> = dashboard.filtered().iter().map(|r| r.ident()).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_missing_name_never_matches_a_search_term() {
    let records = vec![
        serde_json::from_value::<ApplicantRecord>(serde_json::json!({"id": 1})).unwrap(),
        record(2, "Jane Doe", "jane@x.com"),
    ];
    let mut dashboard = dashboard_with(records);

    dashboard.set_search("jane");
    let ids: Vec<i64> = dashboard.filtered().iter().map(|r| r.ident()).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn test_id_sort_descending_reverses_ascending() {
    let records = vec![
        record(3, "C", "c@x.com"),
        record(1, "A", "a@x.com"),
        record(2, "B", "b@x.com"),
    ];
    let mut dashboard = dashboard_with(records);

    dashboard.toggle_sort(SortField::Id);
    let ascending: Vec<i64> = dashboard.filtered().iter().map(|r| r.ident()).collect();
    assert_eq!(ascending, vec![1, 2, 3]);

    dashboard.toggle_sort(SortField::Id);
    let descending: Vec<i64> = dashboard.filtered().iter().map(|r| r.ident()).collect();
    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    // Same name, distinct ids: relative order must survive the sort in
    // both directions.
    let records = vec![
        record(10, "Same", "x@x.com"),
        record(11, "Same", "y@x.com"),
        record(12, "Same", "z@x.com"),
        record(5, "Aardvark", "a@x.com"),
    ];
    let mut dashboard = dashboard_with(records);

    dashboard.toggle_sort(SortField::Name);
    let ids: Vec<i64> = dashboard.filtered().iter().map(|r| r.ident()).collect();
    assert_eq!(ids, vec![5, 10, 11, 12]);

    dashboard.toggle_sort(SortField::Name);
    let ids: Vec<i64> = dashboard.filtered().iter().map(|r| r.ident()).collect();
    assert_eq!(ids, vec![10, 11, 12, 5]);
}

#[test]
fn test_name_sort_is_case_insensitive() {
    let records = vec![
        record(1, "zeta", "z@x.com"),
        record(2, "Alpha", "a@x.com"),
        record(3, "beta", "b@x.com"),
    ];
    let mut dashboard = dashboard_with(records);

    dashboard.toggle_sort(SortField::Name);
    let ids: Vec<i64> = dashboard.filtered().iter().map(|r| r.ident()).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn test_timestamp_sort_puts_unparseable_first() {
    let mut bad = record(1, "A", "a@x.com");
    bad.updated_at = Some("garbage".to_string());
    let mut early = record(2, "B", "b@x.com");
    early.updated_at = Some("2024-01-01T00:00:00Z".to_string());
    let mut late = record(3, "C", "c@x.com");
    late.updated_at = Some("2024-06-01T00:00:00Z".to_string());

    let mut dashboard = dashboard_with(vec![late, bad, early]);
    dashboard.toggle_sort(SortField::LastUpdate);
    let ids: Vec<i64> = dashboard.filtered().iter().map(|r| r.ident()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_new_sort_field_resets_to_ascending() {
    let records = vec![record(1, "B", "b@x.com"), record(2, "A", "a@x.com")];
    let mut dashboard = dashboard_with(records);

    dashboard.toggle_sort(SortField::Id);
    dashboard.toggle_sort(SortField::Id);
    assert_eq!(
        dashboard.view.sort,
        Some((SortField::Id, SortDirection::Descending))
    );

    dashboard.toggle_sort(SortField::Name);
    assert_eq!(
        dashboard.view.sort,
        Some((SortField::Name, SortDirection::Ascending))
    );
}

#[test]
fn test_total_pages_is_ceiling_with_minimum_one() {
    let mut dashboard = dashboard_with(vec![]);
    assert_eq!(dashboard.total_pages(), 1);

    dashboard.replace_records((1..=20).map(|i| record(i, "X", "x@x.com")).collect());
    assert_eq!(dashboard.total_pages(), 1);

    dashboard.replace_records((1..=21).map(|i| record(i, "X", "x@x.com")).collect());
    assert_eq!(dashboard.total_pages(), 2);

    dashboard.replace_records((1..=45).map(|i| record(i, "X", "x@x.com")).collect());
    assert_eq!(dashboard.total_pages(), 3);
}

#[test]
fn test_out_of_range_page_changes_are_rejected_no_ops() {
    let mut dashboard = dashboard_with((1..=45).map(|i| record(i, "X", "x@x.com")).collect());
    assert!(dashboard.change_page(2));
    assert_eq!(dashboard.view.page, 2);

    assert!(!dashboard.change_page(0));
    assert_eq!(dashboard.view.page, 2);

    assert!(!dashboard.change_page(4));
    assert_eq!(dashboard.view.page, 2);
}

#[test]
fn test_filter_changes_reset_page_but_page_change_does_not() {
    let mut dashboard = dashboard_with((1..=45).map(|i| record(i, "X", "x@x.com")).collect());
    dashboard.change_page(3);
    assert_eq!(dashboard.view.page, 3);

    dashboard.set_search("x");
    assert_eq!(dashboard.view.page, 1);

    dashboard.change_page(2);
    dashboard.toggle_sort(SortField::Id);
    assert_eq!(dashboard.view.page, 1);
}

#[test]
fn test_forty_five_records_sorted_by_name_page_three_shows_last_five() {
    // Zero-padded names so lexicographic order matches numeric order.
    let records: Vec<_> = (1..=45)
        .rev()
        .map(|i| record(i, &format!("Person {i:02}"), "p@x.com"))
        .collect();
    let mut dashboard = dashboard_with(records);

    dashboard.toggle_sort(SortField::Name);
    let page_one: Vec<i64> = dashboard.visible_page().iter().map(|r| r.ident()).collect();
    assert_eq!(page_one, (1..=20).collect::<Vec<i64>>());

    assert!(dashboard.change_page(3));
    let page_three: Vec<i64> = dashboard.visible_page().iter().map(|r| r.ident()).collect();
    assert_eq!(page_three, vec![41, 42, 43, 44, 45]);
}

#[test]
fn test_clear_filters_keeps_sort() {
    let mut dashboard = dashboard_with(vec![record(2, "B", "b@x.com"), record(1, "A", "a@x.com")]);
    dashboard.toggle_sort(SortField::Id);
    dashboard.set_search("nothing-matches");
    assert!(dashboard.filtered().is_empty());

    dashboard.clear_filters();
    let ids: Vec<i64> = dashboard.filtered().iter().map(|r| r.ident()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(dashboard.view.sort.is_some());
}
