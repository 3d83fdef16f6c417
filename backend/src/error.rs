//! Error handling for Amphore Stock
//!
//! Provides consistent JSON error responses in French and English

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Email already in use")]
    EmailAlreadyUsed,

    #[error("Weak password")]
    WeakPassword,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Too many attempts")]
    TooManyAttempts,

    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
        message_fr: String,
    },

    // Validation errors (pre-write; never reach the store)
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_fr: String,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Storage error: {0}")]
    StorageError(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_fr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail {
                    code: "INVALID_CREDENTIALS".to_string(),
                    message_en: "Invalid email or password".to_string(),
                    message_fr: "Mot de passe incorrect".to_string(),
                    field: None,
                },
            ),
            AppError::UserNotFound => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail {
                    code: "USER_NOT_FOUND".to_string(),
                    message_en: "No account found with this email address".to_string(),
                    message_fr: "Aucun compte trouvé avec cette adresse email".to_string(),
                    field: None,
                },
            ),
            AppError::EmailAlreadyUsed => (
                StatusCode::CONFLICT,
                ErrorDetail {
                    code: "EMAIL_ALREADY_IN_USE".to_string(),
                    message_en: "This email address is already in use".to_string(),
                    message_fr: "Cette adresse email est déjà utilisée".to_string(),
                    field: Some("email".to_string()),
                },
            ),
            AppError::WeakPassword => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "WEAK_PASSWORD".to_string(),
                    message_en: "Password must contain at least 6 characters".to_string(),
                    message_fr: "Le mot de passe doit contenir au moins 6 caractères".to_string(),
                    field: Some("password".to_string()),
                },
            ),
            AppError::InvalidEmail => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_EMAIL".to_string(),
                    message_en: "Invalid email address".to_string(),
                    message_fr: "Adresse email invalide".to_string(),
                    field: Some("email".to_string()),
                },
            ),
            AppError::TooManyAttempts => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorDetail {
                    code: "TOO_MANY_ATTEMPTS".to_string(),
                    message_en: "Too many attempts. Try again later".to_string(),
                    message_fr: "Trop de tentatives. Réessayez plus tard".to_string(),
                    field: None,
                },
            ),
            AppError::Unauthorized { message, message_fr } => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail {
                    code: "UNAUTHORIZED".to_string(),
                    message_en: message.clone(),
                    message_fr: message_fr.clone(),
                    field: None,
                },
            ),
            AppError::Validation { field, message, message_fr } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_fr: message_fr.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_fr: format!("{} introuvable", resource),
                    field: None,
                },
            ),
            AppError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "DATABASE_ERROR".to_string(),
                    message_en: "A database error occurred".to_string(),
                    message_fr: "Une erreur de base de données est survenue".to_string(),
                    field: None,
                },
            ),
            AppError::StorageError(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "STORAGE_ERROR".to_string(),
                    message_en: format!("Storage error: {}", msg),
                    message_fr: "Une erreur est survenue lors de l'enregistrement".to_string(),
                    field: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_fr: "Une erreur est survenue".to_string(),
                    field: None,
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: "An internal server error occurred".to_string(),
                    message_fr: "Une erreur est survenue".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
