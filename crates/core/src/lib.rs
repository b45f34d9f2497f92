//! Pure domain logic for the sports-association back office.
//!
//! Nothing in this crate touches the database or the network: the record
//! store and the HTTP service both depend on it, never the other way round.

pub mod error;
pub mod membership;
pub mod publication;
pub mod treasury;
pub mod types;
pub mod validation;
pub mod weekday;
