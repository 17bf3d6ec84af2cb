//! Ordered record of accepted submissions for the current session.
//!
//! Addressing is positional: positions shift on removal, matching the UI's
//! row-index actions. With a single UI event loop serializing mutations this
//! is safe; anything concurrent would need stable identifiers instead.

use shared::domain::Submission;

#[derive(Debug, Default)]
pub struct SubmissionLedger {
    entries: Vec<Submission>,
}

impl SubmissionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, submission: Submission) {
        self.entries.push(submission);
    }

    /// Removes the entry at `position`; later entries shift down by one.
    /// Out-of-range positions are a no-op.
    pub fn remove_at(&mut self, position: usize) -> Option<Submission> {
        if position < self.entries.len() {
            Some(self.entries.remove(position))
        } else {
            None
        }
    }

    /// Takes the entry at `position` out for editing. The entry disappears
    /// from the ledger and must be resubmitted to reappear.
    pub fn take_at(&mut self, position: usize) -> Option<Submission> {
        self.remove_at(position)
    }

    pub fn get(&self, position: usize) -> Option<&Submission> {
        self.entries.get(position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Submission> {
        self.entries.iter()
    }
}
