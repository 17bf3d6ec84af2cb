use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SchemaFetchError;

/// Selector key determining which field schema is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormType {
    UserInfo,
    AddressInfo,
    PaymentInfo,
}

impl FormType {
    pub const ALL: [FormType; 3] = [
        FormType::UserInfo,
        FormType::AddressInfo,
        FormType::PaymentInfo,
    ];

    /// Wire spelling, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            FormType::UserInfo => "userInfo",
            FormType::AddressInfo => "addressInfo",
            FormType::PaymentInfo => "paymentInfo",
        }
    }

    /// Human-readable heading for selectors and tables.
    pub fn label(self) -> &'static str {
        match self {
            FormType::UserInfo => "User Info",
            FormType::AddressInfo => "Address Info",
            FormType::PaymentInfo => "Payment Info",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormType {
    type Err = SchemaFetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "userInfo" => Ok(FormType::UserInfo),
            "addressInfo" => Ok(FormType::AddressInfo),
            "paymentInfo" => Ok(FormType::PaymentInfo),
            other => Err(SchemaFetchError::UnknownFormType(other.to_string())),
        }
    }
}

/// Input kind for a single field. Closed set: rendering dispatches on the
/// variant, so a new input style means a new variant plus one rendering rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    Date,
    Dropdown,
}

impl FieldKind {
    /// Choice-list kinds render from `options`; everything else is a typed
    /// free-form input.
    pub fn is_choice(self) -> bool {
        matches!(self, FieldKind::Dropdown)
    }
}

/// Schema entry describing one input: name, label, kind, required-ness, and
/// (for choice kinds) the selectable options. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldDescriptor {
    pub fn input(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
            options: Vec::new(),
        }
    }

    pub fn dropdown(name: &str, label: &str, required: bool, options: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Dropdown,
            required,
            options: options.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered field list for one form type. Field names are unique within a
/// schema; one schema is active per session at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    pub form_type: FormType,
    pub fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    pub fn new(form_type: FormType, fields: Vec<FieldDescriptor>) -> Self {
        Self { form_type, fields }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.required)
    }
}

/// Immutable snapshot of a form's values captured at submit time. Only
/// non-empty values are kept; the map is ordered for stable display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub form_type: FormType,
    pub values: BTreeMap<String, String>,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_type_round_trips_through_wire_spelling() {
        for form_type in FormType::ALL {
            assert_eq!(form_type.as_str().parse::<FormType>().ok(), Some(form_type));
        }
    }

    #[test]
    fn unknown_form_type_is_rejected() {
        assert!("surveyInfo".parse::<FormType>().is_err());
        assert!("".parse::<FormType>().is_err());
    }

    #[test]
    fn form_type_serializes_camel_case() {
        let json = serde_json::to_string(&FormType::AddressInfo).expect("serialize");
        assert_eq!(json, "\"addressInfo\"");
    }

    #[test]
    fn descriptor_options_are_omitted_when_empty() {
        let descriptor = FieldDescriptor::input("email", "Email", FieldKind::Email, true);
        let json = serde_json::to_string(&descriptor).expect("serialize");
        assert!(!json.contains("options"));
    }

    #[test]
    fn schema_lookup_by_name() {
        let schema = FormSchema::new(
            FormType::UserInfo,
            vec![
                FieldDescriptor::input("fullName", "Full Name", FieldKind::Text, true),
                FieldDescriptor::input("age", "Age", FieldKind::Number, false),
            ],
        );
        assert!(schema.contains_field("fullName"));
        assert!(!schema.contains_field("email"));
        assert_eq!(schema.required_fields().count(), 1);
    }
}
