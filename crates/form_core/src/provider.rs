//! Schema fetch boundary: the provider trait and the mock backend that
//! serves the three built-in form types with simulated latency.

use std::time::Duration;

use async_trait::async_trait;
use shared::domain::{FieldDescriptor, FieldKind, FormSchema, FormType};
use shared::error::SchemaFetchError;

const DEFAULT_FETCH_LATENCY: Duration = Duration::from_millis(300);

/// Asynchronous source of form schemas. Takes the raw selector string so the
/// unknown-type failure path is part of the contract, not just the mock.
#[async_trait]
pub trait SchemaProvider: Send + Sync {
    async fn fetch_schema(&self, form_type: &str) -> Result<FormSchema, SchemaFetchError>;
}

/// Fixed lookup table standing in for a backend. No caching and no state:
/// re-fetching the same type produces fresh (identical) content every time.
pub struct MockSchemaProvider {
    latency: Duration,
    fail_with: Option<String>,
}

impl MockSchemaProvider {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_FETCH_LATENCY,
            fail_with: None,
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            fail_with: None,
        }
    }

    /// Provider whose every fetch fails with a transport error. Used to
    /// exercise the full-panel error path in tests and demos.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            latency: Duration::ZERO,
            fail_with: Some(message.into()),
        }
    }

    pub fn builtin_schema(form_type: FormType) -> FormSchema {
        let fields = match form_type {
            FormType::UserInfo => vec![
                FieldDescriptor::input("fullName", "Full Name", FieldKind::Text, true),
                FieldDescriptor::input("email", "Email", FieldKind::Email, true),
                FieldDescriptor::input("age", "Age", FieldKind::Number, false),
            ],
            FormType::AddressInfo => vec![
                FieldDescriptor::input("street", "Street", FieldKind::Text, true),
                FieldDescriptor::input("city", "City", FieldKind::Text, true),
                FieldDescriptor::dropdown(
                    "country",
                    "Country",
                    true,
                    &["USA", "Canada", "UK", "Australia", "Germany"],
                ),
                FieldDescriptor::input("postalCode", "Postal Code", FieldKind::Text, false),
            ],
            FormType::PaymentInfo => vec![
                FieldDescriptor::input("cardNumber", "Card Number", FieldKind::Text, true),
                FieldDescriptor::input("expiryDate", "Expiry Date", FieldKind::Date, true),
                FieldDescriptor::input("cvv", "CVV", FieldKind::Password, true),
                FieldDescriptor::dropdown(
                    "cardType",
                    "Card Type",
                    true,
                    &["Visa", "Mastercard", "Amex"],
                ),
            ],
        };
        FormSchema::new(form_type, fields)
    }
}

impl Default for MockSchemaProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchemaProvider for MockSchemaProvider {
    async fn fetch_schema(&self, form_type: &str) -> Result<FormSchema, SchemaFetchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if let Some(message) = &self.fail_with {
            return Err(SchemaFetchError::transport(message.clone()));
        }
        let parsed: FormType = form_type.parse()?;
        tracing::debug!(form_type = %parsed, "serving mock schema");
        Ok(Self::builtin_schema(parsed))
    }
}
