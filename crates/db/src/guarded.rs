//! Validated writes.
//!
//! Loading related records, evaluating the rules and writing the row happen
//! in one `SERIALIZABLE` transaction, so two concurrent lendings (or votes,
//! or purchases) cannot both pass a capacity check that only one of them
//! fits. The loser fails with SQLSTATE 40001 and may be resubmitted.

use sqlx::{PgConnection, PgPool};
use sportasso_core::error::CoreError;
use sportasso_core::types::Date;
use sportasso_core::validation::evaluator;
use sportasso_core::validation::records::Candidate;
use sportasso_core::validation::rules::ValidationReport;

use crate::related::load_related;
use crate::repositories::MembershipRepo;
use crate::store::{self, Stored};

/// SQLSTATE raised when a serializable transaction cannot be committed.
pub const SERIALIZATION_FAILURE: &str = "40001";

#[derive(Debug, thiserror::Error)]
pub enum GuardedWriteError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl GuardedWriteError {
    /// Whether the write lost a serialization race and can be retried as is.
    pub fn is_serialization_failure(&self) -> bool {
        match self {
            GuardedWriteError::Database(sqlx::Error::Database(db_err)) => {
                db_err.code().as_deref() == Some(SERIALIZATION_FAILURE)
            }
            _ => false,
        }
    }
}

/// Validate without writing.
pub async fn check(
    pool: &PgPool,
    candidate: &Candidate,
    today: Date,
) -> Result<ValidationReport, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let candidate = with_stored_creation(&mut conn, candidate).await?;
    let related = load_related(&mut conn, &candidate).await?;
    Ok(evaluator::validate_report(&candidate, &related, today))
}

/// Validate the candidate and insert it as a new row.
pub async fn create(
    pool: &PgPool,
    candidate: &Candidate,
    today: Date,
) -> Result<Stored, GuardedWriteError> {
    let kind = candidate.kind();
    let mut tx = pool.begin().await?;
    serializable(&mut tx).await?;

    let candidate = with_stored_creation(&mut tx, candidate).await?;
    let related = load_related(&mut tx, &candidate).await?;
    let report = evaluator::validate_report(&candidate, &related, today);
    let violations = report.violations.len();
    if let Err(err) = report.into_result() {
        tx.rollback().await?;
        tracing::info!(entity = %kind, violations, "Rejected record creation");
        return Err(err.into());
    }

    let stored = store::insert(&mut *tx, &candidate).await?;
    tx.commit().await?;

    tracing::debug!(entity = %kind, id = stored.id(), "Record created");
    Ok(stored)
}

/// Validate the candidate and overwrite the row named by its id.
pub async fn update(
    pool: &PgPool,
    candidate: &Candidate,
    today: Date,
) -> Result<Stored, GuardedWriteError> {
    let kind = candidate.kind();
    let id = candidate
        .id()
        .ok_or_else(|| CoreError::Validation(format!("Updating a {kind} requires its id")))?;

    let mut tx = pool.begin().await?;
    serializable(&mut tx).await?;

    if store::find(&mut *tx, kind, id).await?.is_none() {
        tx.rollback().await?;
        return Err(CoreError::NotFound {
            entity: kind.as_str(),
            id,
        }
        .into());
    }

    let candidate = with_stored_creation(&mut tx, candidate).await?;
    let related = load_related(&mut tx, &candidate).await?;
    let report = evaluator::validate_report(&candidate, &related, today);
    let violations = report.violations.len();
    if let Err(err) = report.into_result() {
        tx.rollback().await?;
        tracing::info!(entity = %kind, id, violations, "Rejected record update");
        return Err(err.into());
    }

    let stored = store::update(&mut *tx, id, &candidate)
        .await?
        .ok_or(CoreError::NotFound {
            entity: kind.as_str(),
            id,
        })?;
    tx.commit().await?;

    tracing::debug!(entity = %kind, id, "Record updated");
    Ok(stored)
}

async fn serializable(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
        .execute(conn)
        .await?;
    Ok(())
}

/// A membership is dated by the database, never by the client: a stored row
/// keeps its own creation timestamp and a new one is compared to today.
async fn with_stored_creation(
    conn: &mut PgConnection,
    candidate: &Candidate,
) -> Result<Candidate, sqlx::Error> {
    let Candidate::Membership(r) = candidate else {
        return Ok(candidate.clone());
    };
    let mut record = r.clone();
    record.created_at = match r.id {
        Some(id) => MembershipRepo::find_by_id(conn, id)
            .await?
            .map(|existing| existing.created_at),
        None => None,
    };
    Ok(Candidate::Membership(record))
}
