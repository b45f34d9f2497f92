//! Row structs.
//!
//! Each submodule holds `FromRow` + `Serialize` structs matching database
//! rows. Validated entities are written from the candidate records of
//! `sportasso_core::validation::records`; the remaining tables (users,
//! sports, matches, articles, weekmails) keep a `Create*` input here.

pub mod activity;
pub mod communication;
pub mod election;
pub mod equipment;
pub mod location;
pub mod membership;
pub mod schedule;
pub mod treasury;
