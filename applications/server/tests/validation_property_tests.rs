/// Property tests: both validation front-ends agree on every payload
use proptest::prelude::*;
use roster_server::validation::{AnnotatedValidator, PayloadValidator, SchemaValidator};
use serde_json::{Map, Value};

/// Absent, `null`, empty or a short string
fn field_value() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(Value::Null)),
        Just(Some(Value::String(String::new()))),
        "[a-zA-Z0-9 ]{1,12}".prop_map(|s| Some(Value::String(s))),
    ]
}

fn extra_value() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        any::<bool>().prop_map(|b| Some(Value::Bool(b))),
        "[a-z]{0,8}".prop_map(|s| Some(Value::String(s))),
    ]
}

fn payload() -> impl Strategy<Value = Value> {
    (
        field_value(),
        field_value(),
        field_value(),
        field_value(),
        extra_value(),
        extra_value(),
    )
        .prop_map(|(id, first, last, history, deleted, date_deleted)| {
            let mut object = Map::new();
            for (key, value) in [
                ("identificationNumber", id),
                ("firstName", first),
                ("lastName", last),
                ("history", history),
                ("deleted", deleted),
                ("dateDeleted", date_deleted),
            ] {
                if let Some(value) = value {
                    object.insert(key.to_string(), value);
                }
            }
            Value::Object(object)
        })
}

proptest! {
    #[test]
    fn create_validators_agree(raw in payload()) {
        let annotated = AnnotatedValidator.validate_create(&raw);
        let schema = SchemaValidator::default().validate_create(&raw);

        prop_assert_eq!(annotated, schema);
    }

    #[test]
    fn update_validators_agree(raw in payload()) {
        let annotated = AnnotatedValidator.validate_update(&raw);
        let schema = SchemaValidator::default().validate_update(&raw);

        prop_assert_eq!(annotated, schema);
    }

    #[test]
    fn accepted_create_has_non_empty_required_fields(raw in payload()) {
        if let Ok(new_user) = SchemaValidator::default().validate_create(&raw) {
            prop_assert!(!new_user.identification_number.as_str().is_empty());
            prop_assert!(!new_user.first_name.is_empty());
            prop_assert!(!new_user.last_name.is_empty());
        }
    }
}
