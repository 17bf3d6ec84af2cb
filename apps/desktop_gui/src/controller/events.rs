//! Backend-to-UI events and fetch failure presentation.

use form_core::FetchTicket;
use shared::domain::FormSchema;
use shared::error::SchemaFetchError;

pub enum UiEvent {
    SchemaLoaded {
        ticket: FetchTicket,
        schema: FormSchema,
    },
    SchemaFetchFailed {
        ticket: FetchTicket,
        error: SchemaFetchError,
    },
    BackendUnavailable(String),
}

/// Turns a fetch failure into the message shown on the error panel.
pub fn classify_fetch_failure(error: &SchemaFetchError) -> String {
    match error {
        SchemaFetchError::UnknownFormType(form_type) => format!(
            "The backend has no schema for form type '{form_type}'. Pick one of the listed types to retry."
        ),
        SchemaFetchError::Transport(detail) => {
            format!("Failed to load form configuration: {detail}. Re-select a form type to retry.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_failure_names_the_type_and_suggests_a_retry() {
        let message =
            classify_fetch_failure(&SchemaFetchError::UnknownFormType("surveyInfo".to_string()));
        assert!(message.contains("surveyInfo"));
        assert!(message.contains("retry"));
    }

    #[test]
    fn transport_failure_keeps_the_underlying_detail() {
        let message = classify_fetch_failure(&SchemaFetchError::transport("connection refused"));
        assert!(message.contains("connection refused"));
    }
}
