//! Form session controller: one owned state record for the active form
//! (phase, live values, validation marks) with reducer-style transitions.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;
use shared::domain::{FormSchema, Submission};
use shared::error::SchemaFetchError;
use thiserror::Error;

/// Fence token for an in-flight schema fetch. A ticket older than the
/// session's current counter identifies a superseded fetch whose result must
/// be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Lifecycle of the active form selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// No schema selected yet.
    Idle,
    /// A fetch for `form_type` is outstanding; the form surface is blocked.
    Loading { form_type: String },
    /// Schema available, fields editable.
    Ready { schema: FormSchema },
    /// Fetch failed; terminal for this attempt. Re-selecting a type retries.
    Failed { message: String },
}

/// Submit rejection. Validation failures are non-blocking: the session stays
/// `Ready` and only the per-field marks change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("no active schema to submit")]
    NotReady,
    #[error("missing required fields: {missing:?}")]
    MissingRequired { missing: Vec<String> },
}

/// Owns everything about the current form session. Invariants: live-value
/// keys are a subset of the active schema's field names, and missing-marks
/// are a subset of the required field names.
#[derive(Debug, Default)]
pub struct FormSession {
    phase: SessionPhase,
    values: BTreeMap<String, String>,
    missing: BTreeSet<String>,
    fetch_counter: u64,
}

impl Default for SessionPhase {
    fn default() -> Self {
        SessionPhase::Idle
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn schema(&self) -> Option<&FormSchema> {
        match &self.phase {
            SessionPhase::Ready { schema } => Some(schema),
            _ => None,
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_missing(&self, name: &str) -> bool {
        self.missing.contains(name)
    }

    /// Starts a new type selection: any phase moves to `Loading`, in-progress
    /// values and marks are discarded, and the fence counter advances so any
    /// still-outstanding fetch resolves as stale.
    pub fn begin_fetch(&mut self, form_type: &str) -> FetchTicket {
        self.fetch_counter += 1;
        self.values.clear();
        self.missing.clear();
        self.phase = SessionPhase::Loading {
            form_type: form_type.to_string(),
        };
        tracing::info!(form_type, ticket = self.fetch_counter, "schema fetch started");
        FetchTicket(self.fetch_counter)
    }

    /// Applies a fetch outcome. Returns `false` when the ticket was
    /// superseded by a newer `begin_fetch`, in which case the session is
    /// untouched.
    pub fn resolve_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<FormSchema, SchemaFetchError>,
    ) -> bool {
        if ticket.0 != self.fetch_counter {
            tracing::warn!(
                stale = ticket.0,
                current = self.fetch_counter,
                "discarding stale schema fetch result"
            );
            return false;
        }
        match result {
            Ok(schema) => {
                tracing::info!(form_type = %schema.form_type, "schema ready");
                self.values.clear();
                self.missing.clear();
                self.phase = SessionPhase::Ready { schema };
            }
            Err(err) => {
                tracing::info!(error = %err, "schema fetch failed");
                self.values.clear();
                self.missing.clear();
                self.phase = SessionPhase::Failed {
                    message: err.to_string(),
                };
            }
        }
        true
    }

    /// Records a field edit. Ignored unless `Ready` and the name belongs to
    /// the active schema, which keeps the live-state invariant. Entering a
    /// non-empty value clears that field's missing mark.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        let Some(schema) = self.schema() else {
            return;
        };
        if !schema.contains_field(name) {
            return;
        }
        let value = value.into();
        if !value.is_empty() {
            self.missing.remove(name);
        }
        self.values.insert(name.to_string(), value);
    }

    /// Filled-field share in [0, 1]. Empty strings do not count as filled.
    pub fn progress(&self) -> f32 {
        let Some(schema) = self.schema() else {
            return 0.0;
        };
        let total = schema.field_count();
        if total == 0 {
            return 0.0;
        }
        let filled = self.values.values().filter(|v| !v.is_empty()).count();
        (filled as f32 / total as f32).clamp(0.0, 1.0)
    }

    /// Progress on the 0-100 scale shown by the progress indicator.
    pub fn progress_percent(&self) -> f32 {
        self.progress() * 100.0
    }

    /// Validates required fields and, on success, captures a snapshot and
    /// resets the live form. On a validation failure only the missing marks
    /// change; values and the rest of the session stay intact.
    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        let SessionPhase::Ready { schema } = &self.phase else {
            return Err(SubmitError::NotReady);
        };

        let missing: Vec<String> = schema
            .required_fields()
            .filter(|field| {
                self.values
                    .get(&field.name)
                    .map(|v| v.is_empty())
                    .unwrap_or(true)
            })
            .map(|field| field.name.clone())
            .collect();

        if !missing.is_empty() {
            tracing::info!(?missing, "submit rejected: required fields empty");
            self.missing = missing.iter().cloned().collect();
            return Err(SubmitError::MissingRequired { missing });
        }

        let submission = Submission {
            form_type: schema.form_type,
            values: self
                .values
                .iter()
                .filter(|(_, v)| !v.is_empty())
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            submitted_at: Utc::now(),
        };
        self.values.clear();
        self.missing.clear();
        tracing::info!(form_type = %submission.form_type, "submission accepted");
        Ok(submission)
    }

    /// Rehydrates the live form from a snapshot taken out of the ledger for
    /// editing. Values not present in the active schema are dropped.
    pub fn load_submission(&mut self, submission: &Submission) {
        let Some(schema) = self.schema() else {
            return;
        };
        let names: BTreeSet<String> = schema.fields.iter().map(|f| f.name.clone()).collect();
        self.missing.clear();
        self.values = submission
            .values
            .iter()
            .filter(|(name, _)| names.contains(name.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
    }
}
