//! Travis Core
//!
//! Payload types for the Travis CI v3 API.
//!
//! This crate contains:
//! - Domain types: records returned by the API (Repository, User, Job, LogPart)
//! - DTOs: request bodies and response envelopes exchanged with the API
//!
//! Nothing here talks to the network; see `travis-client` for that.

pub mod domain;
pub mod dto;
