//! Candidate records submitted for validation.
//!
//! Records are plain data: they carry the fields of the row about to be
//! written (and the row id when updating) but no behaviour. Field-level limits
//! are declared with `validator` and folded into the violation list by the
//! evaluator.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::membership::PaymentMean;
use crate::types::{Cents, Date, DbId, TimeOfDay, Timestamp};
use crate::validation::rules::EntityKind;

// ---------------------------------------------------------------------------
// Activities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ActivityRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 50, message = "Title must be 1 to 50 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 50, message = "Slug must be 1 to 50 characters"))]
    pub slug: String,
    pub content: String,
    #[validate(length(max = 180, message = "Summary must be at most 180 characters"))]
    pub summary: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub publication_date: Option<Timestamp>,
    #[serde(default)]
    pub is_member_only: bool,
    #[serde(default)]
    pub is_frontpage: bool,
    #[serde(default)]
    pub is_big_activity: bool,
    pub location_id: Option<DbId>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ParameterRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 50, message = "Name must be 1 to 50 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub activity_id: Option<DbId>,
    pub parent_parameter_id: Option<DbId>,
    #[serde(default)]
    pub is_member_only: bool,
    #[serde(default)]
    pub is_mandatory: bool,
    #[serde(default)]
    pub is_published: bool,
    #[validate(range(min = 0, message = "Maximum bought items cannot be negative"))]
    pub max_bought_items: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 0, message = "Default price cannot be negative"))]
    pub default_price_cents: Cents,
    #[serde(default)]
    #[validate(range(min = 0, message = "Member price cannot be negative"))]
    pub member_price_cents: Cents,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ItemRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    pub parameter_id: DbId,
    #[validate(length(min = 1, max = 50, message = "Name must be 1 to 50 characters"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "Maximum bought items cannot be negative"))]
    pub max_bought_items: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 0, message = "Default price cannot be negative"))]
    pub default_price_cents: Cents,
    #[serde(default)]
    #[validate(range(min = 0, message = "Member price cannot be negative"))]
    pub member_price_cents: Cents,
}

/// Purchase of one item by one person.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ParticipantRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    pub item_id: DbId,
    pub registered_user_id: Option<DbId>,
    #[validate(length(max = 30, message = "Unregistered user name must be at most 30 characters"))]
    pub unregistered_user: Option<String>,
    pub payment_mean: PaymentMean,
    #[validate(length(max = 30, message = "Cheque bank must be at most 30 characters"))]
    pub cheque_bank: Option<String>,
}

// ---------------------------------------------------------------------------
// Elections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ElectionRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 50, message = "Title must be 1 to 50 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 50, message = "Slug must be 1 to 50 characters"))]
    pub slug: String,
    pub description: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    #[serde(default)]
    pub is_published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VacantPositionRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    pub election_id: DbId,
    pub position_id: DbId,
    #[validate(range(min = 1, message = "At least one candidate has to be elected"))]
    pub elected_number: i16,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidatureRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    pub vacant_position_id: DbId,
    pub candidate_id: DbId,
    pub speech: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VoteRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    pub candidature_id: DbId,
    pub voter_id: DbId,
}

// ---------------------------------------------------------------------------
// Places and schedules
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocationRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 50, message = "Name must be 1 to 50 characters"))]
    pub name: String,
    #[validate(length(max = 100, message = "Address must be at most 100 characters"))]
    pub address: Option<String>,
    #[validate(length(max = 30, message = "City must be at most 30 characters"))]
    pub city: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,
}

/// Opening hours of the office, weekly (`weekday`) or one-off (`date`).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PermanenceRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(range(min = 1, max = 7, message = "Weekday must be between 1 (Sunday) and 7 (Saturday)"))]
    pub weekday: Option<i16>,
    pub date: Option<Date>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub location_id: Option<DbId>,
}

/// Training slot of a sport, weekly (`weekday`) or one-off (`date`).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SessionRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    pub sport_id: DbId,
    pub location_id: Option<DbId>,
    pub manager_id: Option<DbId>,
    #[validate(range(min = 1, max = 7, message = "Weekday must be between 1 (Sunday) and 7 (Saturday)"))]
    pub weekday: Option<i16>,
    pub date: Option<Date>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CancelledSessionRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    pub session_id: DbId,
    pub cancellation_date: Date,
    #[validate(length(min = 1, max = 50, message = "Title must be 1 to 50 characters"))]
    pub title: String,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Equipment and memberships
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EquipmentRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 30, message = "Name must be 1 to 30 characters"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Stock quantity must be at least 1"))]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LendingRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    pub equipment_id: DbId,
    pub borrower_id: DbId,
    #[validate(range(min = 1, message = "Lent quantity must be at least 1"))]
    pub quantity: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Deposit cannot be negative"))]
    pub deposit: i32,
    pub start_date: Date,
    pub end_date: Date,
    #[serde(default)]
    pub returned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MembershipRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    pub member_id: DbId,
    pub membership_type_id: Option<DbId>,
    /// Set once the membership has been persisted.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    pub expiration_date: Date,
    pub certificate_date: Date,
    pub payment_mean: PaymentMean,
    #[validate(length(max = 30, message = "Cheque bank must be at most 30 characters"))]
    pub cheque_bank: Option<String>,
}

// ---------------------------------------------------------------------------
// Treasury and communication
// ---------------------------------------------------------------------------

/// Fee (negative amount) or subvention (positive amount).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FinancialOperationRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 50, message = "Name must be 1 to 50 characters"))]
    pub name: String,
    pub description: String,
    pub amount_cents: Cents,
    pub registered_user_id: Option<DbId>,
    #[validate(length(max = 50, message = "Unregistered user name must be at most 50 characters"))]
    pub unregistered_user: Option<String>,
    pub related_activity_id: Option<DbId>,
    pub processed_date: Option<Date>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InformationRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(max = 50, message = "Title must be at most 50 characters"))]
    pub title: Option<String>,
    pub content: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    #[serde(default)]
    pub is_important: bool,
    #[serde(default)]
    pub is_published: bool,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// A candidate record of any validated entity kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "entity", content = "record", rename_all = "snake_case")]
pub enum Candidate {
    Activity(ActivityRecord),
    Parameter(ParameterRecord),
    Item(ItemRecord),
    Participant(ParticipantRecord),
    Election(ElectionRecord),
    VacantPosition(VacantPositionRecord),
    Candidature(CandidatureRecord),
    Vote(VoteRecord),
    Location(LocationRecord),
    Permanence(PermanenceRecord),
    Session(SessionRecord),
    CancelledSession(CancelledSessionRecord),
    Equipment(EquipmentRecord),
    Lending(LendingRecord),
    Membership(MembershipRecord),
    FinancialOperation(FinancialOperationRecord),
    Information(InformationRecord),
}

impl Candidate {
    pub fn kind(&self) -> EntityKind {
        match self {
            Candidate::Activity(_) => EntityKind::Activity,
            Candidate::Parameter(_) => EntityKind::Parameter,
            Candidate::Item(_) => EntityKind::Item,
            Candidate::Participant(_) => EntityKind::Participant,
            Candidate::Election(_) => EntityKind::Election,
            Candidate::VacantPosition(_) => EntityKind::VacantPosition,
            Candidate::Candidature(_) => EntityKind::Candidature,
            Candidate::Vote(_) => EntityKind::Vote,
            Candidate::Location(_) => EntityKind::Location,
            Candidate::Permanence(_) => EntityKind::Permanence,
            Candidate::Session(_) => EntityKind::Session,
            Candidate::CancelledSession(_) => EntityKind::CancelledSession,
            Candidate::Equipment(_) => EntityKind::Equipment,
            Candidate::Lending(_) => EntityKind::Lending,
            Candidate::Membership(_) => EntityKind::Membership,
            Candidate::FinancialOperation(_) => EntityKind::FinancialOperation,
            Candidate::Information(_) => EntityKind::Information,
        }
    }

    /// Id of the row being updated, `None` for a creation.
    pub fn id(&self) -> Option<DbId> {
        match self {
            Candidate::Activity(r) => r.id,
            Candidate::Parameter(r) => r.id,
            Candidate::Item(r) => r.id,
            Candidate::Participant(r) => r.id,
            Candidate::Election(r) => r.id,
            Candidate::VacantPosition(r) => r.id,
            Candidate::Candidature(r) => r.id,
            Candidate::Vote(r) => r.id,
            Candidate::Location(r) => r.id,
            Candidate::Permanence(r) => r.id,
            Candidate::Session(r) => r.id,
            Candidate::CancelledSession(r) => r.id,
            Candidate::Equipment(r) => r.id,
            Candidate::Lending(r) => r.id,
            Candidate::Membership(r) => r.id,
            Candidate::FinancialOperation(r) => r.id,
            Candidate::Information(r) => r.id,
        }
    }

    /// Deserialize a JSON record of the given kind.
    pub fn from_json(kind: EntityKind, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            EntityKind::Activity => Candidate::Activity(serde_json::from_value(value)?),
            EntityKind::Parameter => Candidate::Parameter(serde_json::from_value(value)?),
            EntityKind::Item => Candidate::Item(serde_json::from_value(value)?),
            EntityKind::Participant => Candidate::Participant(serde_json::from_value(value)?),
            EntityKind::Election => Candidate::Election(serde_json::from_value(value)?),
            EntityKind::VacantPosition => Candidate::VacantPosition(serde_json::from_value(value)?),
            EntityKind::Candidature => Candidate::Candidature(serde_json::from_value(value)?),
            EntityKind::Vote => Candidate::Vote(serde_json::from_value(value)?),
            EntityKind::Location => Candidate::Location(serde_json::from_value(value)?),
            EntityKind::Permanence => Candidate::Permanence(serde_json::from_value(value)?),
            EntityKind::Session => Candidate::Session(serde_json::from_value(value)?),
            EntityKind::CancelledSession => {
                Candidate::CancelledSession(serde_json::from_value(value)?)
            }
            EntityKind::Equipment => Candidate::Equipment(serde_json::from_value(value)?),
            EntityKind::Lending => Candidate::Lending(serde_json::from_value(value)?),
            EntityKind::Membership => Candidate::Membership(serde_json::from_value(value)?),
            EntityKind::FinancialOperation => {
                Candidate::FinancialOperation(serde_json::from_value(value)?)
            }
            EntityKind::Information => Candidate::Information(serde_json::from_value(value)?),
        })
    }
}

/// Text fields count as set only when they hold something besides whitespace.
pub fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}
