use std::time::Duration;

use shared::domain::{FieldKind, FormType};
use shared::error::SchemaFetchError;

use crate::provider::{MockSchemaProvider, SchemaProvider};

fn instant_provider() -> MockSchemaProvider {
    MockSchemaProvider::with_latency(Duration::ZERO)
}

#[tokio::test]
async fn every_supported_type_serves_a_non_empty_schema() {
    let provider = instant_provider();
    for form_type in FormType::ALL {
        let schema = provider
            .fetch_schema(form_type.as_str())
            .await
            .expect("builtin schema");
        assert_eq!(schema.form_type, form_type);
        assert!(!schema.fields.is_empty());
    }
}

#[tokio::test]
async fn unknown_type_fails_with_unknown_form_type() {
    let provider = instant_provider();
    let err = provider
        .fetch_schema("surveyInfo")
        .await
        .expect_err("unknown type must fail");
    assert_eq!(
        err,
        SchemaFetchError::UnknownFormType("surveyInfo".to_string())
    );
}

#[tokio::test]
async fn failing_provider_reports_transport_error_for_known_types() {
    let provider = MockSchemaProvider::failing("simulated outage");
    let err = provider
        .fetch_schema("userInfo")
        .await
        .expect_err("forced failure");
    assert_eq!(err, SchemaFetchError::transport("simulated outage"));
}

#[tokio::test]
async fn refetching_the_same_type_yields_identical_content() {
    let provider = instant_provider();
    let first = provider.fetch_schema("addressInfo").await.expect("schema");
    let second = provider.fetch_schema("addressInfo").await.expect("schema");
    assert_eq!(first, second);
}

#[test]
fn dropdown_descriptors_carry_their_options() {
    let schema = MockSchemaProvider::builtin_schema(FormType::AddressInfo);
    let country = schema.field("country").expect("country field");
    assert_eq!(country.kind, FieldKind::Dropdown);
    assert!(country.kind.is_choice());
    assert!(country.options.contains(&"Canada".to_string()));
}

#[test]
fn field_names_are_unique_within_each_builtin_schema() {
    for form_type in FormType::ALL {
        let schema = MockSchemaProvider::builtin_schema(form_type);
        let mut names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), schema.field_count(), "{form_type}");
    }
}
