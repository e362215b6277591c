//! Data Transfer Objects for the Travis CI API
//!
//! Request bodies sent by the client and the response envelopes it unwraps.
//! Domain records live in [`crate::domain`]; the types here only describe
//! how those records travel over the wire.

pub mod build;
pub mod log;
pub mod setting;
