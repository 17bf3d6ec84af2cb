use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure surfaced by the schema fetch boundary. Replaces the form wholesale
/// when it fires; there is no retry policy beyond re-selecting a form type.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SchemaFetchError {
    #[error("unknown form type: {0}")]
    UnknownFormType(String),
    #[error("schema fetch failed: {0}")]
    Transport(String),
}

impl SchemaFetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_messages_name_the_offending_input() {
        let err = SchemaFetchError::UnknownFormType("surveyInfo".to_string());
        assert_eq!(err.to_string(), "unknown form type: surveyInfo");

        let err = SchemaFetchError::transport("simulated outage");
        assert_eq!(err.to_string(), "schema fetch failed: simulated outage");
    }
}
