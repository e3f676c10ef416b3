/// Declarative schema validation front-end
use super::{PayloadValidator, ValidationFailure, NOT_AN_OBJECT};
use roster_core::{NewUser, UserChanges};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Rule for one string field of a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    name: &'static str,
    required: bool,
    non_empty: bool,
}

impl FieldRule {
    /// An optional string field that may be empty
    pub fn string(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            non_empty: false,
        }
    }

    /// Missing or `null` is rejected
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// `""` is rejected when present
    #[must_use]
    pub fn non_empty(mut self) -> Self {
        self.non_empty = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self, value: Option<&Value>) -> Result<Option<Value>, String> {
        match value {
            None | Some(Value::Null) if self.required => Err(format!("{} is required", self.name)),
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if self.non_empty && s.is_empty() => {
                Err(format!("{} must not be empty", self.name))
            }
            Some(Value::String(s)) => Ok(Some(Value::String(s.clone()))),
            Some(_) => Err(format!("{} must be a string", self.name)),
        }
    }
}

/// Ordered set of field rules describing one payload shape
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldRule>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    /// Check `raw` against every rule and keep only the declared fields.
    ///
    /// `null` values of optional fields are dropped. All failures are
    /// reported together.
    pub fn apply(&self, raw: &Value) -> Result<Map<String, Value>, ValidationFailure> {
        let object = raw
            .as_object()
            .ok_or_else(|| ValidationFailure::single(NOT_AN_OBJECT))?;

        let mut normalized = Map::new();
        let mut messages = Vec::new();

        for rule in &self.fields {
            match rule.check(object.get(rule.name)) {
                Ok(Some(value)) => {
                    normalized.insert(rule.name.to_string(), value);
                }
                Ok(None) => {}
                Err(message) => messages.push(message),
            }
        }

        if messages.is_empty() {
            Ok(normalized)
        } else {
            Err(ValidationFailure::new(messages))
        }
    }

    /// [`apply`](Self::apply), then deserialize the normalized object into `T`
    pub fn cast<T: DeserializeOwned>(&self, raw: &Value) -> Result<T, ValidationFailure> {
        let normalized = self.apply(raw)?;
        serde_json::from_value(Value::Object(normalized))
            .map_err(|e| ValidationFailure::single(format!("Malformed payload: {e}")))
    }
}

/// Validates bodies against create and update schemas
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    create: Schema,
    update: Schema,
}

impl SchemaValidator {
    pub fn new(create: Schema, update: Schema) -> Self {
        Self { create, update }
    }

    pub fn create_schema() -> Schema {
        Schema::new()
            .field(FieldRule::string("identificationNumber").required().non_empty())
            .field(FieldRule::string("firstName").required().non_empty())
            .field(FieldRule::string("lastName").required().non_empty())
            .field(FieldRule::string("history"))
    }

    pub fn update_schema() -> Schema {
        Schema::new()
            .field(FieldRule::string("firstName").non_empty())
            .field(FieldRule::string("lastName").non_empty())
            .field(FieldRule::string("history"))
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new(Self::create_schema(), Self::update_schema())
    }
}

impl PayloadValidator for SchemaValidator {
    fn validate_create(&self, raw: &Value) -> Result<NewUser, ValidationFailure> {
        self.create.cast(raw)
    }

    fn validate_update(&self, raw: &Value) -> Result<UserChanges, ValidationFailure> {
        self.update.cast(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_apply_strips_unknown_fields() {
        let schema = SchemaValidator::create_schema();
        let raw = json!({
            "identificationNumber": "0001",
            "firstName": "name",
            "lastName": "lastname",
            "deleted": true
        });

        let normalized = schema.apply(&raw).unwrap();
        assert_eq!(normalized.len(), 3);
        assert!(!normalized.contains_key("deleted"));
    }

    #[test]
    fn test_create_reports_every_missing_field() {
        let failure = SchemaValidator::default()
            .validate_create(&json!({"history": "x"}))
            .unwrap_err();
        assert_eq!(
            failure.messages,
            vec![
                "firstName is required",
                "identificationNumber is required",
                "lastName is required",
            ]
        );
    }

    #[test]
    fn test_null_counts_as_missing() {
        let failure = SchemaValidator::default()
            .validate_create(&json!({"identificationNumber": null, "firstName": "a", "lastName": "b"}))
            .unwrap_err();
        assert_eq!(failure.messages, vec!["identificationNumber is required"]);
    }

    #[test]
    fn test_wrong_type_rejected() {
        let failure = SchemaValidator::default()
            .validate_create(&json!({"identificationNumber": "1", "firstName": 7, "lastName": "b"}))
            .unwrap_err();
        assert_eq!(failure.messages, vec!["firstName must be a string"]);
    }

    #[test]
    fn test_history_may_be_empty() {
        let new_user = SchemaValidator::default()
            .validate_create(&json!({
                "identificationNumber": "1",
                "firstName": "a",
                "lastName": "b",
                "history": ""
            }))
            .unwrap();
        assert_eq!(new_user.history.as_deref(), Some(""));
    }

    #[test]
    fn test_update_schema_ignores_identity() {
        let changes = SchemaValidator::default()
            .validate_update(&json!({"identificationNumber": "0002", "lastName": "New"}))
            .unwrap();
        assert_eq!(changes, UserChanges::default().with_last_name("New"));
    }

    #[test]
    fn test_custom_schema() {
        let schema = Schema::new().field(FieldRule::string("nickname").required());
        assert_eq!(schema.fields().len(), 1);
        assert_eq!(schema.fields()[0].name(), "nickname");
        assert!(schema.apply(&json!({"nickname": ""})).is_ok());
        assert!(schema.apply(&json!({})).is_err());
    }
}
