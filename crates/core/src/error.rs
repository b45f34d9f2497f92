use crate::types::DbId;
use crate::validation::rules::Violation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The candidate record broke one or more business rules.
    ///
    /// Always carries at least one violation.
    #[error("Record rejected: {}", summarize(.0))]
    RuleViolations(Vec<Violation>),

    #[error("Conflict: {0}")]
    Conflict(String),
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
