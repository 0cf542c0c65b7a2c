//! A single-shot ATM: log in by username, pick a withdrawal policy and withdraw once.

pub mod models;
pub mod policies;
pub mod session;
pub mod storage;
pub mod types;
