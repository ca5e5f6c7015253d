// --- File: crates/salonify_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by all Salonify crates.
///
/// Feature crates convert their own errors into this type at the HTTP boundary.
#[derive(Error, Debug)]
pub enum SalonifyError {
    /// A required input is missing or malformed
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The caller has no usable session
    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Not found: {0}")]
    NotFoundError(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// A third-party call failed. `message` is what the caller gets to see.
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for SalonifyError {
    fn status_code(&self) -> u16 {
        match self {
            SalonifyError::ValidationError(_) => 400,
            SalonifyError::AuthError(_) => 401,
            SalonifyError::NotFoundError(_) => 404,
            SalonifyError::MethodNotAllowed(_) => 405,
            SalonifyError::ExternalServiceError { .. } => 500,
            SalonifyError::ConfigError(_) => 500,
            SalonifyError::InternalError(_) => 500,
        }
    }
}

impl SalonifyError {
    /// The message exposed in the response body.
    ///
    /// Server-side failures never leak their details; those are logged instead.
    pub fn public_message(&self) -> String {
        match self {
            SalonifyError::ValidationError(msg)
            | SalonifyError::AuthError(msg)
            | SalonifyError::NotFoundError(msg)
            | SalonifyError::MethodNotAllowed(msg) => msg.clone(),
            SalonifyError::ExternalServiceError { message, .. } => message.clone(),
            SalonifyError::ConfigError(_) | SalonifyError::InternalError(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> SalonifyError {
    SalonifyError::ValidationError(message.to_string())
}

pub fn auth_error<T: fmt::Display>(message: T) -> SalonifyError {
    SalonifyError::AuthError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> SalonifyError {
    SalonifyError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn config_error<T: fmt::Display>(message: T) -> SalonifyError {
    SalonifyError::ConfigError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> SalonifyError {
    SalonifyError::InternalError(message.to_string())
}
