// --- File: crates/salonify_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    auth_error, config_error, external_service_error, internal_error, validation_error,
    HttpStatusCode, SalonifyError,
};

pub use http::{method_not_allowed, IntoHttpResponse};

pub use logging::{init, init_with_level, log_error, log_result};
