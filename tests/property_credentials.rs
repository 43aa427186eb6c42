mod common;

use confluent_actions::{ActionError, ActionOutput, GET_CREDENTIALS_ACTION_ID};
use proptest::prelude::*;
use serde_json::json;

use common::{registry_with, source};

fn execute(api_key: Option<&str>, api_secret: Option<&str>) -> Result<ActionOutput, ActionError> {
    let registry = registry_with(source(api_key, api_secret));
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime should build")
        .block_on(registry.execute(GET_CREDENTIALS_ACTION_ID, json!({})))
}

/// A value that is either unset or set to the empty string.
fn absent() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), Just(Some(String::new()))]
}

/// Any value, including unset and empty.
fn any_value() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), Just(Some(String::new())), ".{1,64}".prop_map(Some)]
}

proptest! {
    /// Property: non-empty values come back unchanged
    #[test]
    fn prop_present_values_round_trip(key in ".{1,64}", secret in ".{1,64}") {
        let outputs = execute(Some(&key), Some(&secret)).expect("action should succeed");

        prop_assert_eq!(outputs.len(), 2);
        prop_assert_eq!(outputs.get_str("apiKey"), Some(key.as_str()));
        prop_assert_eq!(outputs.get_str("apiSecret"), Some(secret.as_str()));
    }

    /// Property: a missing or empty key always fails with MissingConfiguration
    #[test]
    fn prop_absent_key_fails(key in absent(), secret in any_value()) {
        let result = execute(key.as_deref(), secret.as_deref());
        prop_assert!(
            result.as_ref().is_err_and(ActionError::is_missing_configuration),
            "expected MissingConfiguration, got {:?}",
            result
        );
    }

    /// Property: a missing or empty secret always fails with MissingConfiguration
    #[test]
    fn prop_absent_secret_fails(key in any_value(), secret in absent()) {
        let result = execute(key.as_deref(), secret.as_deref());
        prop_assert!(
            result.as_ref().is_err_and(ActionError::is_missing_configuration),
            "expected MissingConfiguration, got {:?}",
            result
        );
    }

    /// Property: invoking twice on the same source yields identical results
    #[test]
    fn prop_idempotent(key in any_value(), secret in any_value()) {
        let registry = registry_with(source(key.as_deref(), secret.as_deref()));
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();

        let first = runtime.block_on(registry.execute(GET_CREDENTIALS_ACTION_ID, json!({})));
        let second = runtime.block_on(registry.execute(GET_CREDENTIALS_ACTION_ID, json!({})));

        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            (a, b) => prop_assert!(false, "results differ: {:?} vs {:?}", a, b),
        }
    }
}
