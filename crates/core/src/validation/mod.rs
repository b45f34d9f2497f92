//! Domain rule validation.
//!
//! Every create or update of a domain record goes through
//! [`evaluator::validate`] before it is written. The evaluator is pure: it
//! reads the candidate record plus whatever already-persisted facts the
//! [`related::RelatedRecords`] implementation hands it, and returns the list
//! of broken rules.

pub mod evaluator;
pub mod records;
pub mod related;
pub mod rules;
