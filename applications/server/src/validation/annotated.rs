/// Derive-based validation front-end
use super::{PayloadValidator, ValidationFailure, NOT_AN_OBJECT};
use roster_core::{IdentificationNumber, NewUser, UserChanges};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use validator::{Validate, ValidationErrors};

/// Create body. Fields outside this struct are dropped by deserialization.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(
        required(message = "identificationNumber is required"),
        length(min = 1, message = "identificationNumber must not be empty")
    )]
    pub identification_number: Option<String>,

    #[validate(
        required(message = "firstName is required"),
        length(min = 1, message = "firstName must not be empty")
    )]
    pub first_name: Option<String>,

    #[validate(
        required(message = "lastName is required"),
        length(min = 1, message = "lastName must not be empty")
    )]
    pub last_name: Option<String>,

    pub history: Option<String>,
}

/// Update body. `identificationNumber` and `deleted` are not fields here, so
/// supplying them has no effect.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(length(min = 1, message = "firstName must not be empty"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, message = "lastName must not be empty"))]
    pub last_name: Option<String>,

    pub history: Option<String>,
}

impl CreateUserDto {
    fn into_new_user(self) -> Option<NewUser> {
        Some(NewUser {
            identification_number: IdentificationNumber::new(self.identification_number?),
            first_name: self.first_name?,
            last_name: self.last_name?,
            history: self.history,
        })
    }
}

impl From<UpdateUserDto> for UserChanges {
    fn from(dto: UpdateUserDto) -> Self {
        UserChanges {
            first_name: dto.first_name,
            last_name: dto.last_name,
            history: dto.history,
        }
    }
}

fn collect_messages(errors: &ValidationErrors) -> ValidationFailure {
    let messages = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid ({})", err.code),
            })
        })
        .collect();

    ValidationFailure::new(messages)
}

fn deserialize<T: DeserializeOwned + Validate>(raw: &Value) -> Result<T, ValidationFailure> {
    if !raw.is_object() {
        return Err(ValidationFailure::single(NOT_AN_OBJECT));
    }

    let dto: T = serde_json::from_value(raw.clone())
        .map_err(|e| ValidationFailure::single(format!("Malformed payload: {e}")))?;

    dto.validate().map_err(|e| collect_messages(&e))?;

    Ok(dto)
}

/// Validates bodies by deserializing into annotated DTOs
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotatedValidator;

impl PayloadValidator for AnnotatedValidator {
    fn validate_create(&self, raw: &Value) -> Result<NewUser, ValidationFailure> {
        deserialize::<CreateUserDto>(raw)?
            .into_new_user()
            .ok_or_else(|| ValidationFailure::single("Required field missing"))
    }

    fn validate_update(&self, raw: &Value) -> Result<UserChanges, ValidationFailure> {
        deserialize::<UpdateUserDto>(raw).map(UserChanges::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_create_strips_unknown_fields() {
        let raw = json!({
            "identificationNumber": "0001",
            "firstName": "name",
            "lastName": "lastname",
            "deleted": true,
            "dateCreated": "1999-01-01T00:00:00Z",
            "favouriteColour": "green"
        });

        let new_user = AnnotatedValidator.validate_create(&raw).unwrap();
        assert_eq!(new_user, NewUser::new("0001", "name", "lastname"));
    }

    #[test]
    fn test_create_reports_every_missing_field() {
        let failure = AnnotatedValidator.validate_create(&json!({})).unwrap_err();
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
    fn test_create_rejects_empty_strings() {
        let raw = json!({"identificationNumber": "", "firstName": "name", "lastName": ""});
        let failure = AnnotatedValidator.validate_create(&raw).unwrap_err();
        assert_eq!(
            failure.messages,
            vec![
                "identificationNumber must not be empty",
                "lastName must not be empty",
            ]
        );
    }

    #[test]
    fn test_create_rejects_wrong_types() {
        let raw = json!({"identificationNumber": 1, "firstName": "name", "lastName": "x"});
        let failure = AnnotatedValidator.validate_create(&raw).unwrap_err();
        assert!(failure.messages[0].starts_with("Malformed payload"));
    }

    #[test]
    fn test_non_object_rejected() {
        let failure = AnnotatedValidator.validate_create(&json!([1, 2])).unwrap_err();
        assert_eq!(failure.messages, vec![NOT_AN_OBJECT]);
    }

    #[test]
    fn test_update_ignores_identity_and_state_fields() {
        let raw = json!({"identificationNumber": "0002", "deleted": true, "history": "h"});
        let changes = AnnotatedValidator.validate_update(&raw).unwrap();
        assert_eq!(changes, UserChanges::default().with_history("h"));
    }

    #[test]
    fn test_update_rejects_empty_first_name() {
        let failure = AnnotatedValidator
            .validate_update(&json!({"firstName": ""}))
            .unwrap_err();
        assert_eq!(failure.messages, vec!["firstName must not be empty"]);
    }
}
