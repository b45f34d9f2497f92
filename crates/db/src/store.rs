//! Entity-kind dispatch over the repositories.

use serde::Serialize;
use sqlx::PgExecutor;
use sportasso_core::types::DbId;
use sportasso_core::validation::records::Candidate;
use sportasso_core::validation::rules::EntityKind;

use crate::models::activity::{Activity, Item, Parameter, Participant};
use crate::models::communication::Information;
use crate::models::election::{Candidature, Election, VacantPosition, Vote};
use crate::models::equipment::{Equipment, Lending};
use crate::models::location::Location;
use crate::models::membership::Membership;
use crate::models::schedule::{CancelledSession, Permanence, Session};
use crate::models::treasury::FinancialOperation;
use crate::repositories::*;

/// A persisted row of any validated entity kind. Serializes as the bare row.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Stored {
    Activity(Activity),
    Parameter(Parameter),
    Item(Item),
    Participant(Participant),
    Election(Election),
    VacantPosition(VacantPosition),
    Candidature(Candidature),
    Vote(Vote),
    Location(Location),
    Permanence(Permanence),
    Session(Session),
    CancelledSession(CancelledSession),
    Equipment(Equipment),
    Lending(Lending),
    Membership(Membership),
    FinancialOperation(FinancialOperation),
    Information(Information),
}

impl Stored {
    pub fn id(&self) -> DbId {
        match self {
            Stored::Activity(r) => r.id,
            Stored::Parameter(r) => r.id,
            Stored::Item(r) => r.id,
            Stored::Participant(r) => r.id,
            Stored::Election(r) => r.id,
            Stored::VacantPosition(r) => r.id,
            Stored::Candidature(r) => r.id,
            Stored::Vote(r) => r.id,
            Stored::Location(r) => r.id,
            Stored::Permanence(r) => r.id,
            Stored::Session(r) => r.id,
            Stored::CancelledSession(r) => r.id,
            Stored::Equipment(r) => r.id,
            Stored::Lending(r) => r.id,
            Stored::Membership(r) => r.id,
            Stored::FinancialOperation(r) => r.id,
            Stored::Information(r) => r.id,
        }
    }
}

/// Insert the candidate as a new row.
pub async fn insert<'e>(db: impl PgExecutor<'e>, candidate: &Candidate) -> Result<Stored, sqlx::Error> {
    Ok(match candidate {
        Candidate::Activity(r) => Stored::Activity(ActivityRepo::create(db, r).await?),
        Candidate::Parameter(r) => Stored::Parameter(ParameterRepo::create(db, r).await?),
        Candidate::Item(r) => Stored::Item(ItemRepo::create(db, r).await?),
        Candidate::Participant(r) => Stored::Participant(ParticipantRepo::create(db, r).await?),
        Candidate::Election(r) => Stored::Election(ElectionRepo::create(db, r).await?),
        Candidate::VacantPosition(r) => {
            Stored::VacantPosition(VacantPositionRepo::create(db, r).await?)
        }
        Candidate::Candidature(r) => Stored::Candidature(CandidatureRepo::create(db, r).await?),
        Candidate::Vote(r) => Stored::Vote(VoteRepo::create(db, r).await?),
        Candidate::Location(r) => Stored::Location(LocationRepo::create(db, r).await?),
        Candidate::Permanence(r) => Stored::Permanence(PermanenceRepo::create(db, r).await?),
        Candidate::Session(r) => Stored::Session(SessionRepo::create(db, r).await?),
        Candidate::CancelledSession(r) => {
            Stored::CancelledSession(CancelledSessionRepo::create(db, r).await?)
        }
        Candidate::Equipment(r) => Stored::Equipment(EquipmentRepo::create(db, r).await?),
        Candidate::Lending(r) => Stored::Lending(LendingRepo::create(db, r).await?),
        Candidate::Membership(r) => Stored::Membership(MembershipRepo::create(db, r).await?),
        Candidate::FinancialOperation(r) => {
            Stored::FinancialOperation(FinancialOperationRepo::create(db, r).await?)
        }
        Candidate::Information(r) => Stored::Information(InformationRepo::create(db, r).await?),
    })
}

/// Overwrite row `id` with the candidate. Returns `None` if the row does not exist.
pub async fn update<'e>(
    db: impl PgExecutor<'e>,
    id: DbId,
    candidate: &Candidate,
) -> Result<Option<Stored>, sqlx::Error> {
    Ok(match candidate {
        Candidate::Activity(r) => ActivityRepo::update(db, id, r).await?.map(Stored::Activity),
        Candidate::Parameter(r) => ParameterRepo::update(db, id, r).await?.map(Stored::Parameter),
        Candidate::Item(r) => ItemRepo::update(db, id, r).await?.map(Stored::Item),
        Candidate::Participant(r) => {
            ParticipantRepo::update(db, id, r).await?.map(Stored::Participant)
        }
        Candidate::Election(r) => ElectionRepo::update(db, id, r).await?.map(Stored::Election),
        Candidate::VacantPosition(r) => VacantPositionRepo::update(db, id, r)
            .await?
            .map(Stored::VacantPosition),
        Candidate::Candidature(r) => {
            CandidatureRepo::update(db, id, r).await?.map(Stored::Candidature)
        }
        Candidate::Vote(r) => VoteRepo::update(db, id, r).await?.map(Stored::Vote),
        Candidate::Location(r) => LocationRepo::update(db, id, r).await?.map(Stored::Location),
        Candidate::Permanence(r) => {
            PermanenceRepo::update(db, id, r).await?.map(Stored::Permanence)
        }
        Candidate::Session(r) => SessionRepo::update(db, id, r).await?.map(Stored::Session),
        Candidate::CancelledSession(r) => CancelledSessionRepo::update(db, id, r)
            .await?
            .map(Stored::CancelledSession),
        Candidate::Equipment(r) => EquipmentRepo::update(db, id, r).await?.map(Stored::Equipment),
        Candidate::Lending(r) => LendingRepo::update(db, id, r).await?.map(Stored::Lending),
        Candidate::Membership(r) => {
            MembershipRepo::update(db, id, r).await?.map(Stored::Membership)
        }
        Candidate::FinancialOperation(r) => FinancialOperationRepo::update(db, id, r)
            .await?
            .map(Stored::FinancialOperation),
        Candidate::Information(r) => {
            InformationRepo::update(db, id, r).await?.map(Stored::Information)
        }
    })
}

/// Fetch row `id` of the given kind.
pub async fn find<'e>(
    db: impl PgExecutor<'e>,
    kind: EntityKind,
    id: DbId,
) -> Result<Option<Stored>, sqlx::Error> {
    Ok(match kind {
        EntityKind::Activity => ActivityRepo::find_by_id(db, id).await?.map(Stored::Activity),
        EntityKind::Parameter => ParameterRepo::find_by_id(db, id).await?.map(Stored::Parameter),
        EntityKind::Item => ItemRepo::find_by_id(db, id).await?.map(Stored::Item),
        EntityKind::Participant => {
            ParticipantRepo::find_by_id(db, id).await?.map(Stored::Participant)
        }
        EntityKind::Election => ElectionRepo::find_by_id(db, id).await?.map(Stored::Election),
        EntityKind::VacantPosition => VacantPositionRepo::find_by_id(db, id)
            .await?
            .map(Stored::VacantPosition),
        EntityKind::Candidature => {
            CandidatureRepo::find_by_id(db, id).await?.map(Stored::Candidature)
        }
        EntityKind::Vote => VoteRepo::find_by_id(db, id).await?.map(Stored::Vote),
        EntityKind::Location => LocationRepo::find_by_id(db, id).await?.map(Stored::Location),
        EntityKind::Permanence => {
            PermanenceRepo::find_by_id(db, id).await?.map(Stored::Permanence)
        }
        EntityKind::Session => SessionRepo::find_by_id(db, id).await?.map(Stored::Session),
        EntityKind::CancelledSession => CancelledSessionRepo::find_by_id(db, id)
            .await?
            .map(Stored::CancelledSession),
        EntityKind::Equipment => EquipmentRepo::find_by_id(db, id).await?.map(Stored::Equipment),
        EntityKind::Lending => LendingRepo::find_by_id(db, id).await?.map(Stored::Lending),
        EntityKind::Membership => {
            MembershipRepo::find_by_id(db, id).await?.map(Stored::Membership)
        }
        EntityKind::FinancialOperation => FinancialOperationRepo::find_by_id(db, id)
            .await?
            .map(Stored::FinancialOperation),
        EntityKind::Information => {
            InformationRepo::find_by_id(db, id).await?.map(Stored::Information)
        }
    })
}
