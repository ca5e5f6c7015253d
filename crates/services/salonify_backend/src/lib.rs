// --- File: crates/services/salonify_backend/src/lib.rs ---
pub mod app_state;
pub mod router;
