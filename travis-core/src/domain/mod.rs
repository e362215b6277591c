//! Core domain types
//!
//! Records returned by the Travis CI API. They are read-only snapshots of
//! remote state: the client never mutates them, it only inspects the few
//! fields it needs (`active`, `is_syncing`) and hands the rest back to callers.

pub mod job;
pub mod log;
pub mod repository;
pub mod user;
