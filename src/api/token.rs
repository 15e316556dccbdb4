use tracing::error;

use crate::errors::DjError;

/// Check a caller-supplied token against the configured shared secret.
///
/// # Errors
///
/// Returns `DjError::MissingToken` when no (or an empty) token was supplied
/// and `DjError::InvalidToken` when it does not match.
pub fn validate_shared_token(expected: &str, provided: Option<&str>) -> Result<(), DjError> {
    let Some(provided) = provided.filter(|t| !t.is_empty()) else {
        error!("No token was provided");
        return Err(DjError::MissingToken);
    };

    if provided == expected {
        Ok(())
    } else {
        error!("Invalid token was provided");
        Err(DjError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_accepted() {
        assert!(validate_shared_token("s3cret", Some("s3cret")).is_ok());
    }

    #[test]
    fn missing_and_wrong_tokens_are_distinguished() {
        assert!(matches!(
            validate_shared_token("s3cret", None),
            Err(DjError::MissingToken)
        ));
        assert!(matches!(
            validate_shared_token("s3cret", Some("")),
            Err(DjError::MissingToken)
        ));
        assert!(matches!(
            validate_shared_token("s3cret", Some("S3CRET")),
            Err(DjError::InvalidToken)
        ));
    }
}
