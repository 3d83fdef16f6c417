//! Authentication validation and error mapping tests
//!
//! Property-based tests for the credential checks and unit tests for the
//! bilingual error responses returned to the login and register forms.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use proptest::prelude::*;

use amphore_stock_backend::error::AppError;
use shared::validation::{validate_email, validate_password};

fn email_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,10}@[a-z]{3,8}\\.(fr|com|net)"
}

proptest! {
    #[test]
    fn well_formed_emails_pass(email in email_strategy()) {
        prop_assert!(validate_email(&email).is_ok());
    }

    #[test]
    fn emails_without_at_sign_fail(local in "[a-z.]{5,20}") {
        prop_assert!(validate_email(&local).is_err());
    }

    #[test]
    fn six_plus_character_passwords_pass(password in "[a-zA-Z0-9!@#$%]{6,30}") {
        prop_assert!(validate_password(&password).is_ok());
    }

    #[test]
    fn short_passwords_fail(password in "[a-zA-Z0-9]{0,5}") {
        prop_assert!(validate_password(&password).is_err());
    }
}

#[cfg(test)]
mod error_mapping {
    use super::*;

    #[test]
    fn test_credential_errors_map_to_unauthorized() {
        assert_eq!(
            AppError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::UserNotFound.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_registration_errors_map_to_client_codes() {
        assert_eq!(
            AppError::EmailAlreadyUsed.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::WeakPassword.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidEmail.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_throttling_maps_to_too_many_requests() {
        assert_eq!(
            AppError::TooManyAttempts.into_response().status(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn test_missing_product_maps_to_not_found() {
        assert_eq!(
            AppError::NotFound("Boisson".to_string())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
    }
}
