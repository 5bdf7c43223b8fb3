use fintrack_core::{EntryKind, LedgerError, LedgerEvent, Tracker};

#[test]
fn startup_dataset_matches_the_documented_totals() {
    let tracker = Tracker::new();
    let snapshot = tracker.aggregate();
    assert!((snapshot.total_income - 75104.0).abs() < 1e-9);
    assert!((snapshot.total_expenses - 38701.0).abs() < 1e-9);
    assert!((snapshot.balance - 36403.0).abs() < 1e-9);
    assert_eq!(snapshot.savings_rate, 48.5);
}

#[test]
fn add_edit_remove_flow_emits_notifications() {
    let mut tracker = Tracker::empty();

    let added = tracker.add_entry(EntryKind::Income);
    assert!(matches!(
        added,
        LedgerEvent::EntryAdded {
            kind: EntryKind::Income,
            ..
        }
    ));

    tracker
        .update_description(EntryKind::Income, 0, "Freelance")
        .expect("entry exists");
    tracker
        .update_amount(EntryKind::Income, 0, 850.0)
        .expect("entry exists");

    let removed = tracker
        .remove_entry(EntryKind::Income, 0)
        .expect("entry exists");
    match removed {
        Some(LedgerEvent::EntryRemoved {
            kind,
            description,
            amount,
            ..
        }) => {
            assert_eq!(kind, EntryKind::Income);
            assert_eq!(description, "Freelance");
            assert_eq!(amount, 850.0);
        }
        other => panic!("unexpected notification: {:?}", other),
    }
    assert!(tracker.ledger().income.is_empty());
}

#[test]
fn removing_a_blank_entry_stays_silent() {
    let mut tracker = Tracker::empty();
    tracker.add_entry(EntryKind::Expense);
    let removed = tracker
        .remove_entry(EntryKind::Expense, 0)
        .expect("entry exists");
    assert_eq!(removed, None);
}

#[test]
fn malformed_import_reports_and_leaves_the_ledger_unchanged() {
    let mut tracker = Tracker::new();
    let before = tracker.ledger().clone();

    let err = tracker.import("{not json").expect_err("unparseable text");
    assert!(matches!(err, LedgerError::MalformedJson(_)));
    assert_eq!(tracker.ledger(), &before);

    let err = tracker
        .import(r#"{"balance": 12}"#)
        .expect_err("missing sequences");
    assert!(matches!(err, LedgerError::InvalidShape(_)));
    assert_eq!(tracker.ledger(), &before);
}

#[test]
fn import_without_metadata_keeps_the_loaded_categories() {
    let mut tracker = Tracker::new();
    let categories = tracker.ledger().categories.clone();
    assert!(!categories.income.is_empty());

    tracker
        .import(r#"{"income": [], "expenses": []}"#)
        .expect("valid shape");
    assert!(tracker.ledger().income.is_empty());
    assert!(tracker.ledger().expenses.is_empty());
    assert_eq!(tracker.ledger().categories, categories);
}

#[test]
fn import_with_categories_replaces_the_loaded_ones() {
    let mut tracker = Tracker::new();
    tracker
        .import(
            r#"{
                "income": [{"description": "Stipend", "amount": 1200}],
                "expenses": [],
                "metadata": {"categories": {"income": ["Grants"], "expenses": []}}
            }"#,
        )
        .expect("valid shape");
    assert_eq!(tracker.ledger().income.len(), 1);
    assert_eq!(tracker.ledger().categories.income, vec!["Grants".to_string()]);
    assert!(tracker.ledger().categories.expenses.is_empty());
}

#[test]
fn shares_cover_both_sequences_independently() {
    let mut tracker = Tracker::empty();
    tracker.add_entry(EntryKind::Income);
    tracker.add_entry(EntryKind::Income);
    tracker
        .update_amount(EntryKind::Income, 0, 600.0)
        .expect("entry exists");
    tracker
        .update_amount(EntryKind::Income, 1, 200.0)
        .expect("entry exists");

    let income_shares = tracker.shares(EntryKind::Income);
    assert_eq!(income_shares[0].percentage, 75.0);
    assert_eq!(income_shares[1].percentage, 25.0);
    assert!(tracker.shares(EntryKind::Expense).is_empty());
}
