//! Loads the persisted facts a candidate's rules read.
//!
//! Each candidate kind only pulls what its rules need: a lending loads its
//! equipment and the outstanding lendings of that equipment, a vote loads
//! the voter's membership history and prior votes for the same vacant
//! position, and so on. Run inside the write transaction so the snapshot
//! and the write see the same data.

use std::collections::HashSet;

use sqlx::PgConnection;
use sportasso_core::types::DbId;
use sportasso_core::validation::records::Candidate;
use sportasso_core::validation::related::{
    ActivityFacts, CandidatureFacts, EquipmentFacts, ItemFacts, LendingFact, ParameterFacts,
    ParticipantFact, RelatedSnapshot, SessionFacts, VoteFact,
};

use crate::models::activity::{Activity, Item, Parameter};
use crate::repositories::{
    ActivityRepo, CandidatureRepo, EquipmentRepo, ItemRepo, LendingRepo, MembershipRepo,
    ParameterRepo, ParticipantRepo, SessionRepo, SportRepo, UserRepo, VoteRepo,
};

/// Snapshot the related records `candidate` is validated against.
pub async fn load_related(
    conn: &mut PgConnection,
    candidate: &Candidate,
) -> Result<RelatedSnapshot, sqlx::Error> {
    let mut snapshot = RelatedSnapshot::new();

    match candidate {
        Candidate::Parameter(r) => {
            if let Some(parent) = r.parent_parameter_id {
                if let Some(p) = ParameterRepo::find_by_id(&mut *conn, parent).await? {
                    snapshot.add_parameter(parameter_facts(&p));
                }
            }
        }
        Candidate::Item(r) => {
            if let Some(p) = ParameterRepo::find_by_id(&mut *conn, r.parameter_id).await? {
                snapshot.add_parameter(parameter_facts(&p));
            }
        }
        Candidate::Participant(r) => {
            if let Some(item) = ItemRepo::find_by_id(&mut *conn, r.item_id).await? {
                snapshot.add_item(item_facts(&item));
                load_parameter_chain(conn, item.parameter_id, &mut snapshot).await?;
                for purchase in ParticipantRepo::list_for_parameter(&mut *conn, item.parameter_id).await? {
                    snapshot.add_participant(ParticipantFact {
                        id: purchase.id,
                        item_id: purchase.item_id,
                        parameter_id: purchase.parameter_id,
                    });
                }
            }
        }
        Candidate::Vote(r) => {
            if UserRepo::exists(&mut *conn, r.voter_id).await? {
                snapshot.add_user(r.voter_id);
                if let Some(expiration) =
                    MembershipRepo::latest_expiration(&mut *conn, r.voter_id).await?
                {
                    snapshot.add_membership(r.voter_id, expiration);
                }
            }
            if let Some(c) = CandidatureRepo::find_by_id(&mut *conn, r.candidature_id).await? {
                snapshot.add_candidature(CandidatureFacts {
                    id: c.id,
                    vacant_position_id: c.vacant_position_id,
                });
                let prior =
                    VoteRepo::ids_for_voter_and_position(&mut *conn, r.voter_id, c.vacant_position_id)
                        .await?;
                for id in prior {
                    snapshot.add_vote(VoteFact {
                        id,
                        voter_id: r.voter_id,
                        vacant_position_id: c.vacant_position_id,
                    });
                }
            }
        }
        Candidate::Session(r) => {
            if let Some(manager) = r.manager_id {
                if SportRepo::is_manager(&mut *conn, r.sport_id, manager).await? {
                    snapshot.add_sport_manager(manager, r.sport_id);
                }
            }
        }
        Candidate::CancelledSession(r) => {
            if let Some(s) = SessionRepo::find_by_id(&mut *conn, r.session_id).await? {
                snapshot.add_session(SessionFacts {
                    id: s.id,
                    sport_id: s.sport_id,
                    weekday: s.weekday,
                    date: s.date,
                });
            }
        }
        Candidate::Lending(r) => {
            if let Some(e) = EquipmentRepo::find_by_id(&mut *conn, r.equipment_id).await? {
                snapshot.add_equipment(EquipmentFacts {
                    id: e.id,
                    quantity: e.quantity,
                });
                for l in LendingRepo::list_outstanding(&mut *conn, e.id).await? {
                    snapshot.add_lending(LendingFact {
                        id: l.id,
                        equipment_id: l.equipment_id,
                        quantity: l.quantity,
                        returned: l.returned,
                    });
                }
            }
        }
        Candidate::Activity(_)
        | Candidate::Election(_)
        | Candidate::VacantPosition(_)
        | Candidate::Candidature(_)
        | Candidate::Location(_)
        | Candidate::Permanence(_)
        | Candidate::Equipment(_)
        | Candidate::Membership(_)
        | Candidate::FinancialOperation(_)
        | Candidate::Information(_) => {}
    }

    Ok(snapshot)
}

/// Load a parameter, its ancestors and their activities.
async fn load_parameter_chain(
    conn: &mut PgConnection,
    parameter_id: DbId,
    snapshot: &mut RelatedSnapshot,
) -> Result<(), sqlx::Error> {
    let mut visited = HashSet::new();
    let mut next = Some(parameter_id);

    while let Some(id) = next {
        if !visited.insert(id) {
            break;
        }
        let Some(parameter) = ParameterRepo::find_by_id(&mut *conn, id).await? else {
            break;
        };
        snapshot.add_parameter(parameter_facts(&parameter));
        if let Some(activity_id) = parameter.activity_id {
            if let Some(activity) = ActivityRepo::find_by_id(&mut *conn, activity_id).await? {
                snapshot.add_activity(activity_facts(&activity));
            }
        }
        next = parameter.parent_parameter_id;
    }

    Ok(())
}

fn item_facts(item: &Item) -> ItemFacts {
    ItemFacts {
        id: item.id,
        parameter_id: item.parameter_id,
        max_bought_items: item.max_bought_items,
    }
}

fn parameter_facts(p: &Parameter) -> ParameterFacts {
    ParameterFacts {
        id: p.id,
        activity_id: p.activity_id,
        parent_parameter_id: p.parent_parameter_id,
        is_member_only: p.is_member_only,
        max_bought_items: p.max_bought_items,
    }
}

fn activity_facts(a: &Activity) -> ActivityFacts {
    ActivityFacts {
        id: a.id,
        is_member_only: a.is_member_only,
    }
}
