//! Violation and report types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Entity kinds covered by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Activity,
    Parameter,
    Item,
    Participant,
    Election,
    VacantPosition,
    Candidature,
    Vote,
    Location,
    Permanence,
    Session,
    CancelledSession,
    Equipment,
    Lending,
    Membership,
    FinancialOperation,
    Information,
}

impl EntityKind {
    pub const ALL: [EntityKind; 17] = [
        EntityKind::Activity,
        EntityKind::Parameter,
        EntityKind::Item,
        EntityKind::Participant,
        EntityKind::Election,
        EntityKind::VacantPosition,
        EntityKind::Candidature,
        EntityKind::Vote,
        EntityKind::Location,
        EntityKind::Permanence,
        EntityKind::Session,
        EntityKind::CancelledSession,
        EntityKind::Equipment,
        EntityKind::Lending,
        EntityKind::Membership,
        EntityKind::FinancialOperation,
        EntityKind::Information,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Activity => "activity",
            EntityKind::Parameter => "parameter",
            EntityKind::Item => "item",
            EntityKind::Participant => "participant",
            EntityKind::Election => "election",
            EntityKind::VacantPosition => "vacant_position",
            EntityKind::Candidature => "candidature",
            EntityKind::Vote => "vote",
            EntityKind::Location => "location",
            EntityKind::Permanence => "permanence",
            EntityKind::Session => "session",
            EntityKind::CancelledSession => "cancelled_session",
            EntityKind::Equipment => "equipment",
            EntityKind::Lending => "lending",
            EntityKind::Membership => "membership",
            EntityKind::FinancialOperation => "financial_operation",
            EntityKind::Information => "information",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown entity kind '{s}'")))
    }
}

/// The business rule a violation breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Start must come strictly before end.
    TemporalOrdering,
    /// A parameter hangs off an activity or a parent parameter.
    Ownership,
    /// Exactly one of registered user / unregistered name.
    Identity,
    /// Cheques need a bank name.
    Payment,
    /// Unregistered purchasers cannot buy member-only items.
    Eligibility,
    ItemCapacity,
    ParameterCapacity,
    /// Only current members vote.
    Membership,
    /// One vote per voter and vacant position.
    VoteUniqueness,
    GeoConsistency,
    AddressConsistency,
    Completeness,
    /// Exactly one of weekday / date.
    Scheduling,
    DateMatch,
    StockCapacity,
    CertificateFreshness,
    SessionManager,
    /// A referenced record does not exist.
    Reference,
    /// Field-level limit (length, range).
    FieldConstraint,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::TemporalOrdering => "temporal_ordering",
            Rule::Ownership => "ownership",
            Rule::Identity => "identity",
            Rule::Payment => "payment",
            Rule::Eligibility => "eligibility",
            Rule::ItemCapacity => "item_capacity",
            Rule::ParameterCapacity => "parameter_capacity",
            Rule::Membership => "membership",
            Rule::VoteUniqueness => "vote_uniqueness",
            Rule::GeoConsistency => "geo_consistency",
            Rule::AddressConsistency => "address_consistency",
            Rule::Completeness => "completeness",
            Rule::Scheduling => "scheduling",
            Rule::DateMatch => "date_match",
            Rule::StockCapacity => "stock_capacity",
            Rule::CertificateFreshness => "certificate_freshness",
            Rule::SessionManager => "session_manager",
            Rule::Reference => "reference",
            Rule::FieldConstraint => "field_constraint",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing message for a rule broken by an entity.
pub fn default_message(entity: EntityKind, rule: Rule) -> &'static str {
    match (rule, entity) {
        (Rule::TemporalOrdering, EntityKind::Membership) => {
            "Expiration date must be after the creation date."
        }
        (Rule::TemporalOrdering, EntityKind::Permanence | EntityKind::Session) => {
            "Start time must be before end time."
        }
        (Rule::TemporalOrdering, _) => "Start date must be before end date.",
        (Rule::Ownership, _) => "Parent parameter or activity has to be set.",
        (Rule::Identity, _) => {
            "Exactly one of registered user or unregistered user has to be set."
        }
        (Rule::Payment, _) => "Missing bank of the cheque.",
        (Rule::Eligibility, _) => {
            "Unregistered users cannot buy parameters reserved to members or take part in activities reserved to members."
        }
        (Rule::ItemCapacity, _) => "Maximum number of bought items is reached for this item.",
        (Rule::ParameterCapacity, _) => {
            "Maximum number of bought items is reached for this parameter."
        }
        (Rule::Membership, _) => "User is currently not a member and is not allowed to vote.",
        (Rule::VoteUniqueness, _) => "The user already voted for this position.",
        (Rule::GeoConsistency, _) => {
            "Latitude and longitude have to be both either omitted or set."
        }
        (Rule::AddressConsistency, _) => "Address cannot be set without a city.",
        (Rule::Completeness, EntityKind::Information) => {
            "At least title or content should be set."
        }
        (Rule::Completeness, _) => "Missing address and city or latitude and longitude.",
        (Rule::Scheduling, _) => "Exactly one of weekday or date has to be set.",
        (Rule::DateMatch, _) => "Cancellation date does not match the schedule of the session.",
        (Rule::StockCapacity, _) => "Lending impossible, not enough equipment in stock.",
        (Rule::CertificateFreshness, _) => "Certificate will expire before the membership.",
        (Rule::SessionManager, _) => {
            "The manager does not manage this sport and cannot manage its sessions."
        }
        (Rule::Reference, _) => "Referenced record does not exist.",
        (Rule::FieldConstraint, _) => "Invalid field value.",
    }
}

/// A single broken rule: (entity, rule or field, message).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub entity: EntityKind,
    pub rule: Rule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl Violation {
    /// Violation with the rule's standard message.
    pub fn new(entity: EntityKind, rule: Rule) -> Self {
        Self {
            entity,
            rule,
            field: None,
            message: default_message(entity, rule).to_string(),
        }
    }

    /// Violation pinned to one field, with a specific message.
    pub fn on_field(
        entity: EntityKind,
        rule: Rule,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            entity,
            rule,
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

/// Result of validating one candidate record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            is_valid: violations.is_empty(),
            violations,
        }
    }

    /// `Ok` when no rule is broken, otherwise [`CoreError::RuleViolations`].
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(CoreError::RuleViolations(self.violations))
        }
    }

    pub fn has(&self, rule: Rule) -> bool {
        self.violations.iter().any(|v| v.rule == rule)
    }
}
