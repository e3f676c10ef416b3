/// Shared-secret access guard for mutating requests
use crate::error::{Result, ServerError, ACCESS_DENIED_MESSAGE};
use axum::http::Method;

/// Compares the caller's credential with the configured secret.
///
/// The comparison is exact: no scheme prefix, no trimming.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    secret: String,
}

impl AccessGuard {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Whether `presented` matches the secret. A missing credential never does.
    pub fn is_allowed(&self, presented: Option<&str>) -> bool {
        matches!(presented, Some(value) if !self.secret.is_empty() && value == self.secret)
    }

    /// `Ok` when allowed, `ServerError::Unauthorized` otherwise
    pub fn check(&self, presented: Option<&str>) -> Result<()> {
        if self.is_allowed(presented) {
            Ok(())
        } else {
            Err(ServerError::Unauthorized(ACCESS_DENIED_MESSAGE.to_string()))
        }
    }

    /// Reads are exempt from the guard
    pub fn requires_credential(method: &Method) -> bool {
        !matches!(*method, Method::GET | Method::HEAD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let guard = AccessGuard::new("s3cret");

        assert!(guard.is_allowed(Some("s3cret")));
        assert!(!guard.is_allowed(Some("S3CRET")));
        assert!(!guard.is_allowed(Some("Bearer s3cret")));
        assert!(!guard.is_allowed(Some(" s3cret")));
        assert!(!guard.is_allowed(Some("")));
        assert!(!guard.is_allowed(None));
    }

    #[test]
    fn test_empty_secret_denies_everything() {
        let guard = AccessGuard::new("");
        assert!(!guard.is_allowed(Some("")));
        assert!(!guard.is_allowed(None));
    }

    #[test]
    fn test_check_reports_unauthorized() {
        let guard = AccessGuard::new("s3cret");
        assert!(guard.check(Some("s3cret")).is_ok());
        assert!(matches!(
            guard.check(Some("INVALID_AUTH")),
            Err(ServerError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_reads_are_exempt() {
        assert!(!AccessGuard::requires_credential(&Method::GET));
        assert!(!AccessGuard::requires_credential(&Method::HEAD));
        assert!(AccessGuard::requires_credential(&Method::POST));
        assert!(AccessGuard::requires_credential(&Method::PATCH));
        assert!(AccessGuard::requires_credential(&Method::DELETE));
        assert!(AccessGuard::requires_credential(&Method::OPTIONS));
    }
}
