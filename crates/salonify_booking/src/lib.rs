// --- File: crates/salonify_booking/src/lib.rs ---
pub mod catalog;
pub mod chat;
pub mod doc;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod models;
pub mod routes;
pub mod storage;
