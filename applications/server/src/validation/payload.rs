/// Raw JSON body extractor
use super::ValidationFailure;
use crate::error::ServerError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;

/// Request body parsed as JSON without interpreting its shape.
///
/// An empty body reads as `{}`; malformed JSON is a validation failure. The
/// `Content-Type` header is not inspected.
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

impl JsonPayload {
    pub fn parse(bytes: &[u8]) -> Result<Self, ValidationFailure> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Value::Object(serde_json::Map::new())));
        }

        serde_json::from_slice(bytes)
            .map(Self)
            .map_err(|e| ValidationFailure::single(format!("Malformed JSON body: {e}")))
    }
}

#[axum::async_trait]
impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ServerError::BadRequest(e.body_text()))?;

        Ok(Self::parse(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_empty_object() {
        let JsonPayload(value) = JsonPayload::parse(b"").unwrap();
        assert_eq!(value, serde_json::json!({}));

        let JsonPayload(value) = JsonPayload::parse(b"  \n").unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_malformed_json_is_validation_failure() {
        let failure = JsonPayload::parse(b"not valid json").unwrap_err();
        assert_eq!(failure.messages.len(), 1);
        assert!(failure.messages[0].starts_with("Malformed JSON body"));
    }

    #[test]
    fn test_parses_object() {
        let JsonPayload(value) = JsonPayload::parse(br#"{"firstName":"A"}"#).unwrap();
        assert_eq!(value["firstName"], "A");
    }
}
