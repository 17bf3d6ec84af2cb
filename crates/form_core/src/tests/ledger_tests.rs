use std::collections::BTreeMap;

use chrono::Utc;
use shared::domain::{FormType, Submission};

use crate::ledger::SubmissionLedger;

fn submission(marker: &str) -> Submission {
    let mut values = BTreeMap::new();
    values.insert("fullName".to_string(), marker.to_string());
    Submission {
        form_type: FormType::UserInfo,
        values,
        submitted_at: Utc::now(),
    }
}

#[test]
fn append_preserves_submission_order() {
    let mut ledger = SubmissionLedger::new();
    ledger.append(submission("first"));
    ledger.append(submission("second"));
    ledger.append(submission("third"));

    let markers: Vec<&str> = ledger
        .iter()
        .map(|s| s.value("fullName").expect("marker"))
        .collect();
    assert_eq!(markers, ["first", "second", "third"]);
}

#[test]
fn remove_at_shifts_later_entries_down() {
    let mut ledger = SubmissionLedger::new();
    ledger.append(submission("first"));
    ledger.append(submission("second"));
    ledger.append(submission("third"));

    let removed = ledger.remove_at(1).expect("middle entry");
    assert_eq!(removed.value("fullName"), Some("second"));
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.get(0).and_then(|s| s.value("fullName")), Some("first"));
    assert_eq!(ledger.get(1).and_then(|s| s.value("fullName")), Some("third"));
}

#[test]
fn take_at_removes_the_entry_until_resubmitted() {
    let mut ledger = SubmissionLedger::new();
    ledger.append(submission("only"));

    let taken = ledger.take_at(0).expect("entry exists");
    assert_eq!(taken.value("fullName"), Some("only"));
    assert!(ledger.is_empty());

    // Editing flow: the snapshot goes back in by resubmission only.
    ledger.append(taken);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn out_of_range_positions_are_a_no_op() {
    let mut ledger = SubmissionLedger::new();
    ledger.append(submission("only"));

    assert!(ledger.remove_at(5).is_none());
    assert!(ledger.take_at(1).is_none());
    assert_eq!(ledger.len(), 1);
}
