//! Read access to already-persisted records.
//!
//! The evaluator never queries storage itself. It asks a [`RelatedRecords`]
//! implementation for the handful of facts a rule needs; the record store
//! fills a [`RelatedSnapshot`] with exactly those facts before validating.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::{Date, DbId};

// ---------------------------------------------------------------------------
// Facts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFacts {
    pub id: DbId,
    pub parameter_id: DbId,
    pub max_bought_items: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterFacts {
    pub id: DbId,
    pub activity_id: Option<DbId>,
    pub parent_parameter_id: Option<DbId>,
    pub is_member_only: bool,
    pub max_bought_items: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFacts {
    pub id: DbId,
    pub is_member_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatureFacts {
    pub id: DbId,
    pub vacant_position_id: DbId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFacts {
    pub id: DbId,
    pub sport_id: DbId,
    pub weekday: Option<i16>,
    pub date: Option<Date>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentFacts {
    pub id: DbId,
    pub quantity: i32,
}

/// An existing purchase, located by item and by the item's parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipantFact {
    pub id: DbId,
    pub item_id: DbId,
    pub parameter_id: DbId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteFact {
    pub id: DbId,
    pub voter_id: DbId,
    pub vacant_position_id: DbId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LendingFact {
    pub id: DbId,
    pub equipment_id: DbId,
    pub quantity: i32,
    pub returned: bool,
}

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// Read-only view of persisted records needed by the rules.
///
/// Every `exclude` argument is the id of the record being updated, so a row
/// never counts against itself.
pub trait RelatedRecords {
    fn item(&self, id: DbId) -> Option<ItemFacts>;

    fn parameter(&self, id: DbId) -> Option<ParameterFacts>;

    fn activity(&self, id: DbId) -> Option<ActivityFacts>;

    fn participants_for_item(&self, item_id: DbId, exclude: Option<DbId>) -> i64;

    /// Participants across every item of the parameter.
    fn participants_for_parameter(&self, parameter_id: DbId, exclude: Option<DbId>) -> i64;

    fn user_exists(&self, user_id: DbId) -> bool;

    /// Greatest membership expiration date of the user, if any.
    fn latest_membership_expiration(&self, user_id: DbId) -> Option<Date>;

    fn candidature(&self, id: DbId) -> Option<CandidatureFacts>;

    fn voter_has_vote_for_position(
        &self,
        voter_id: DbId,
        vacant_position_id: DbId,
        exclude: Option<DbId>,
    ) -> bool;

    fn session(&self, id: DbId) -> Option<SessionFacts>;

    fn manages_sport(&self, user_id: DbId, sport_id: DbId) -> bool;

    fn equipment(&self, id: DbId) -> Option<EquipmentFacts>;

    /// Quantity of the equipment currently lent out (not yet returned).
    fn outstanding_lent_quantity(&self, equipment_id: DbId, exclude: Option<DbId>) -> i64;
}

// ---------------------------------------------------------------------------
// In-memory snapshot
// ---------------------------------------------------------------------------

/// [`RelatedRecords`] backed by plain maps.
#[derive(Debug, Clone, Default)]
pub struct RelatedSnapshot {
    items: HashMap<DbId, ItemFacts>,
    parameters: HashMap<DbId, ParameterFacts>,
    activities: HashMap<DbId, ActivityFacts>,
    participants: Vec<ParticipantFact>,
    users: HashSet<DbId>,
    latest_expirations: HashMap<DbId, Date>,
    candidatures: HashMap<DbId, CandidatureFacts>,
    votes: Vec<VoteFact>,
    sessions: HashMap<DbId, SessionFacts>,
    sport_managers: HashSet<(DbId, DbId)>,
    equipment: HashMap<DbId, EquipmentFacts>,
    lendings: Vec<LendingFact>,
}

impl RelatedSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: ItemFacts) -> &mut Self {
        self.items.insert(item.id, item);
        self
    }

    pub fn add_parameter(&mut self, parameter: ParameterFacts) -> &mut Self {
        self.parameters.insert(parameter.id, parameter);
        self
    }

    pub fn add_activity(&mut self, activity: ActivityFacts) -> &mut Self {
        self.activities.insert(activity.id, activity);
        self
    }

    pub fn add_participant(&mut self, participant: ParticipantFact) -> &mut Self {
        self.participants.push(participant);
        self
    }

    pub fn add_user(&mut self, user_id: DbId) -> &mut Self {
        self.users.insert(user_id);
        self
    }

    /// Record one membership of a user; only the latest expiration is kept.
    pub fn add_membership(&mut self, user_id: DbId, expiration: Date) -> &mut Self {
        self.users.insert(user_id);
        self.latest_expirations
            .entry(user_id)
            .and_modify(|latest| *latest = (*latest).max(expiration))
            .or_insert(expiration);
        self
    }

    pub fn add_candidature(&mut self, candidature: CandidatureFacts) -> &mut Self {
        self.candidatures.insert(candidature.id, candidature);
        self
    }

    pub fn add_vote(&mut self, vote: VoteFact) -> &mut Self {
        self.votes.push(vote);
        self
    }

    pub fn add_session(&mut self, session: SessionFacts) -> &mut Self {
        self.sessions.insert(session.id, session);
        self
    }

    pub fn add_sport_manager(&mut self, user_id: DbId, sport_id: DbId) -> &mut Self {
        self.sport_managers.insert((user_id, sport_id));
        self
    }

    pub fn add_equipment(&mut self, equipment: EquipmentFacts) -> &mut Self {
        self.equipment.insert(equipment.id, equipment);
        self
    }

    pub fn add_lending(&mut self, lending: LendingFact) -> &mut Self {
        self.lendings.push(lending);
        self
    }
}

fn not_excluded(id: DbId, exclude: Option<DbId>) -> bool {
    exclude != Some(id)
}

impl RelatedRecords for RelatedSnapshot {
    fn item(&self, id: DbId) -> Option<ItemFacts> {
        self.items.get(&id).copied()
    }

    fn parameter(&self, id: DbId) -> Option<ParameterFacts> {
        self.parameters.get(&id).copied()
    }

    fn activity(&self, id: DbId) -> Option<ActivityFacts> {
        self.activities.get(&id).copied()
    }

    fn participants_for_item(&self, item_id: DbId, exclude: Option<DbId>) -> i64 {
        self.participants
            .iter()
            .filter(|p| p.item_id == item_id && not_excluded(p.id, exclude))
            .count() as i64
    }

    fn participants_for_parameter(&self, parameter_id: DbId, exclude: Option<DbId>) -> i64 {
        self.participants
            .iter()
            .filter(|p| p.parameter_id == parameter_id && not_excluded(p.id, exclude))
            .count() as i64
    }

    fn user_exists(&self, user_id: DbId) -> bool {
        self.users.contains(&user_id)
    }

    fn latest_membership_expiration(&self, user_id: DbId) -> Option<Date> {
        self.latest_expirations.get(&user_id).copied()
    }

    fn candidature(&self, id: DbId) -> Option<CandidatureFacts> {
        self.candidatures.get(&id).copied()
    }

    fn voter_has_vote_for_position(
        &self,
        voter_id: DbId,
        vacant_position_id: DbId,
        exclude: Option<DbId>,
    ) -> bool {
        self.votes.iter().any(|v| {
            v.voter_id == voter_id
                && v.vacant_position_id == vacant_position_id
                && not_excluded(v.id, exclude)
        })
    }

    fn session(&self, id: DbId) -> Option<SessionFacts> {
        self.sessions.get(&id).copied()
    }

    fn manages_sport(&self, user_id: DbId, sport_id: DbId) -> bool {
        self.sport_managers.contains(&(user_id, sport_id))
    }

    fn equipment(&self, id: DbId) -> Option<EquipmentFacts> {
        self.equipment.get(&id).copied()
    }

    fn outstanding_lent_quantity(&self, equipment_id: DbId, exclude: Option<DbId>) -> i64 {
        self.lendings
            .iter()
            .filter(|l| l.equipment_id == equipment_id && !l.returned && not_excluded(l.id, exclude))
            .map(|l| i64::from(l.quantity))
            .sum()
    }
}
