//! Rule evaluation for candidate records.

use std::collections::HashSet;

use chrono::Datelike;
use validator::Validate;

use crate::membership::{certificate_covers, is_member};
use crate::types::{Date, DbId};
use crate::validation::records::*;
use crate::validation::related::RelatedRecords;
use crate::validation::rules::{EntityKind, Rule, ValidationReport, Violation};
use crate::weekday::to_library_weekday;

/// Every broken rule of `candidate`, in evaluation order.
///
/// Field-level limits come first (sorted by field name), then the business
/// rules of the entity. An empty list means the record may be written.
pub fn validate(candidate: &Candidate, related: &dyn RelatedRecords, today: Date) -> Vec<Violation> {
    let kind = candidate.kind();
    let mut out = Checks::new(kind);

    match candidate {
        Candidate::Activity(r) => {
            out.fields(r);
            out.check(r.start_date >= r.end_date, Rule::TemporalOrdering);
        }
        Candidate::Parameter(r) => {
            out.fields(r);
            parameter(&mut out, r, related);
        }
        Candidate::Item(r) => {
            out.fields(r);
            if related.parameter(r.parameter_id).is_none() {
                out.missing("parameter_id", "parameter", r.parameter_id);
            }
        }
        Candidate::Participant(r) => {
            out.fields(r);
            participant(&mut out, r, related);
        }
        Candidate::Election(r) => {
            out.fields(r);
            out.check(r.start_date >= r.end_date, Rule::TemporalOrdering);
        }
        Candidate::VacantPosition(r) => out.fields(r),
        Candidate::Candidature(r) => out.fields(r),
        Candidate::Vote(r) => {
            out.fields(r);
            vote(&mut out, r, related, today);
        }
        Candidate::Location(r) => {
            out.fields(r);
            location(&mut out, r);
        }
        Candidate::Permanence(r) => {
            out.fields(r);
            out.check(r.weekday.is_some() == r.date.is_some(), Rule::Scheduling);
            out.check(r.start_time >= r.end_time, Rule::TemporalOrdering);
        }
        Candidate::Session(r) => {
            out.fields(r);
            out.check(r.weekday.is_some() == r.date.is_some(), Rule::Scheduling);
            out.check(r.start_time >= r.end_time, Rule::TemporalOrdering);
            if let Some(manager) = r.manager_id {
                out.check(!related.manages_sport(manager, r.sport_id), Rule::SessionManager);
            }
        }
        Candidate::CancelledSession(r) => {
            out.fields(r);
            cancelled_session(&mut out, r, related);
        }
        Candidate::Equipment(r) => out.fields(r),
        Candidate::Lending(r) => {
            out.fields(r);
            lending(&mut out, r, related);
        }
        Candidate::Membership(r) => {
            out.fields(r);
            membership(&mut out, r, today);
        }
        Candidate::FinancialOperation(r) => {
            out.fields(r);
            out.check(
                r.registered_user_id.is_some() == has_text(&r.unregistered_user),
                Rule::Identity,
            );
        }
        Candidate::Information(r) => {
            out.fields(r);
            if let (Some(start), Some(end)) = (r.start_date, r.end_date) {
                out.check(start >= end, Rule::TemporalOrdering);
            }
            out.check(
                !has_text(&r.title) && !has_text(&r.content),
                Rule::Completeness,
            );
        }
    }

    out.violations
}

pub fn validate_report(
    candidate: &Candidate,
    related: &dyn RelatedRecords,
    today: Date,
) -> ValidationReport {
    ValidationReport::from_violations(validate(candidate, related, today))
}

// ---------------------------------------------------------------------------
// Accumulator
// ---------------------------------------------------------------------------

struct Checks {
    kind: EntityKind,
    violations: Vec<Violation>,
}

impl Checks {
    fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            violations: Vec::new(),
        }
    }

    fn check(&mut self, broken: bool, rule: Rule) {
        if broken {
            self.violations.push(Violation::new(self.kind, rule));
        }
    }

    fn missing(&mut self, field: &str, entity: &str, id: DbId) {
        self.violations.push(Violation::on_field(
            self.kind,
            Rule::Reference,
            field,
            format!("Referenced {entity} {id} does not exist."),
        ));
    }

    fn fields<T: Validate>(&mut self, record: &T) {
        let Err(errors) = record.validate() else {
            return;
        };
        let mut fields: Vec<(String, Vec<String>)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => format!("Invalid value for {field} ({})", e.code),
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        for (field, messages) in fields {
            for message in messages {
                self.violations.push(Violation::on_field(
                    self.kind,
                    Rule::FieldConstraint,
                    field.clone(),
                    message,
                ));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Per-entity rules
// ---------------------------------------------------------------------------

fn parameter(out: &mut Checks, r: &ParameterRecord, related: &dyn RelatedRecords) {
    out.check(
        r.activity_id.is_none() && r.parent_parameter_id.is_none(),
        Rule::Ownership,
    );
    if let Some(parent) = r.parent_parameter_id {
        if related.parameter(parent).is_none() {
            out.missing("parent_parameter_id", "parameter", parent);
        }
    }
}

fn participant(out: &mut Checks, r: &ParticipantRecord, related: &dyn RelatedRecords) {
    out.check(
        r.registered_user_id.is_some() == has_text(&r.unregistered_user),
        Rule::Identity,
    );
    out.check(
        r.payment_mean.requires_bank() && !has_text(&r.cheque_bank),
        Rule::Payment,
    );

    let Some(item) = related.item(r.item_id) else {
        out.missing("item_id", "item", r.item_id);
        return;
    };

    if r.registered_user_id.is_none() {
        out.check(member_only(related, item.parameter_id), Rule::Eligibility);
    }

    if let Some(max) = item.max_bought_items {
        let taken = related.participants_for_item(item.id, r.id);
        out.check(taken >= i64::from(max), Rule::ItemCapacity);
    }

    if let Some(max) = related
        .parameter(item.parameter_id)
        .and_then(|p| p.max_bought_items)
    {
        let taken = related.participants_for_parameter(item.parameter_id, r.id);
        out.check(taken >= i64::from(max), Rule::ParameterCapacity);
    }
}

/// Whether the parameter, one of its ancestors, or the owning activity is
/// reserved to members.
fn member_only(related: &dyn RelatedRecords, parameter_id: DbId) -> bool {
    let mut visited = HashSet::new();
    let mut next = Some(parameter_id);

    while let Some(id) = next {
        if !visited.insert(id) {
            break;
        }
        let Some(parameter) = related.parameter(id) else {
            break;
        };
        if parameter.is_member_only {
            return true;
        }
        if let Some(activity) = parameter.activity_id.and_then(|a| related.activity(a)) {
            if activity.is_member_only {
                return true;
            }
        }
        next = parameter.parent_parameter_id;
    }

    false
}

fn vote(out: &mut Checks, r: &VoteRecord, related: &dyn RelatedRecords, today: Date) {
    if related.user_exists(r.voter_id) {
        out.check(
            !is_member(related.latest_membership_expiration(r.voter_id), today),
            Rule::Membership,
        );
    } else {
        out.missing("voter_id", "user", r.voter_id);
    }

    let Some(candidature) = related.candidature(r.candidature_id) else {
        out.missing("candidature_id", "candidature", r.candidature_id);
        return;
    };
    out.check(
        related.voter_has_vote_for_position(r.voter_id, candidature.vacant_position_id, r.id),
        Rule::VoteUniqueness,
    );
}

fn location(out: &mut Checks, r: &LocationRecord) {
    let has_address = has_text(&r.address);
    let has_city = has_text(&r.city);

    out.check(r.latitude.is_some() != r.longitude.is_some(), Rule::GeoConsistency);
    out.check(has_address && !has_city, Rule::AddressConsistency);
    out.check(
        !has_address && !has_city && r.latitude.is_none() && r.longitude.is_none(),
        Rule::Completeness,
    );
}

fn cancelled_session(out: &mut Checks, r: &CancelledSessionRecord, related: &dyn RelatedRecords) {
    let Some(session) = related.session(r.session_id) else {
        out.missing("session_id", "session", r.session_id);
        return;
    };

    let cancelled_on = r.cancellation_date;
    let matches = match (session.weekday, session.date) {
        (Some(weekday), _) => {
            let library = cancelled_on.weekday().num_days_from_monday() as i16;
            to_library_weekday(weekday) == Some(library)
        }
        (None, Some(date)) => date == cancelled_on,
        // A session without schedule cannot be cancelled on any day.
        (None, None) => false,
    };
    out.check(!matches, Rule::DateMatch);
}

fn lending(out: &mut Checks, r: &LendingRecord, related: &dyn RelatedRecords) {
    out.check(r.start_date >= r.end_date, Rule::TemporalOrdering);

    let Some(equipment) = related.equipment(r.equipment_id) else {
        out.missing("equipment_id", "equipment", r.equipment_id);
        return;
    };
    if r.returned {
        return;
    }
    let lent = related.outstanding_lent_quantity(equipment.id, r.id);
    out.check(
        lent + i64::from(r.quantity) > i64::from(equipment.quantity),
        Rule::StockCapacity,
    );
}

fn membership(out: &mut Checks, r: &MembershipRecord, today: Date) {
    let starts = r.created_at.map(|c| c.date_naive()).unwrap_or(today);
    out.check(r.expiration_date <= starts, Rule::TemporalOrdering);
    out.check(
        r.payment_mean.requires_bank() && !has_text(&r.cheque_bank),
        Rule::Payment,
    );
    out.check(
        !certificate_covers(r.certificate_date, r.expiration_date),
        Rule::CertificateFreshness,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::Timestamp;
    use crate::membership::PaymentMean;
    use crate::validation::related::*;
    use assert_matches::assert_matches;
    use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> Date {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn rules(violations: &[Violation]) -> Vec<Rule> {
        violations.iter().map(|v| v.rule).collect()
    }

    fn today() -> Date {
        date(2021, 1, 1)
    }

    // -- participants -------------------------------------------------------

    fn shop() -> RelatedSnapshot {
        let mut related = RelatedSnapshot::new();
        related
            .add_activity(ActivityFacts { id: 1, is_member_only: false })
            .add_parameter(ParameterFacts {
                id: 10,
                activity_id: Some(1),
                parent_parameter_id: None,
                is_member_only: false,
                max_bought_items: None,
            })
            .add_item(ItemFacts { id: 100, parameter_id: 10, max_bought_items: None });
        related
    }

    fn participant(registered: Option<DbId>, unregistered: Option<&str>) -> ParticipantRecord {
        ParticipantRecord {
            id: None,
            item_id: 100,
            registered_user_id: registered,
            unregistered_user: unregistered.map(String::from),
            payment_mean: PaymentMean::Cash,
            cheque_bank: None,
        }
    }

    #[test]
    fn participant_with_exactly_one_identity_is_valid() {
        let related = shop();
        for record in [participant(Some(5), None), participant(None, Some("Alice"))] {
            let violations = validate(&Candidate::Participant(record), &related, today());
            assert!(violations.is_empty(), "{violations:?}");
        }
    }

    #[test]
    fn participant_with_both_or_neither_identity_is_rejected() {
        let related = shop();
        for record in [
            participant(Some(5), Some("Alice")),
            participant(None, None),
            participant(None, Some("  ")),
        ] {
            let violations = validate(&Candidate::Participant(record), &related, today());
            assert!(rules(&violations).contains(&Rule::Identity), "{violations:?}");
        }
    }

    #[test]
    fn cheque_without_bank_is_rejected() {
        let mut record = participant(Some(5), None);
        record.payment_mean = PaymentMean::Cheque;
        let violations = validate(&Candidate::Participant(record.clone()), &shop(), today());
        assert_eq!(rules(&violations), vec![Rule::Payment]);

        record.cheque_bank = Some("Crédit Agricole".into());
        assert!(validate(&Candidate::Participant(record), &shop(), today()).is_empty());
    }

    #[test]
    fn unregistered_buyer_cannot_reach_member_only_ancestor() {
        let mut related = shop();
        related
            .add_parameter(ParameterFacts {
                id: 10,
                activity_id: Some(1),
                parent_parameter_id: None,
                is_member_only: true,
                max_bought_items: None,
            })
            .add_parameter(ParameterFacts {
                id: 11,
                activity_id: None,
                parent_parameter_id: Some(10),
                is_member_only: false,
                max_bought_items: None,
            })
            .add_item(ItemFacts { id: 100, parameter_id: 11, max_bought_items: None });

        let violations = validate(
            &Candidate::Participant(participant(None, Some("Alice"))),
            &related,
            today(),
        );
        assert_eq!(rules(&violations), vec![Rule::Eligibility]);

        let registered = validate(
            &Candidate::Participant(participant(Some(5), None)),
            &related,
            today(),
        );
        assert!(registered.is_empty());
    }

    #[test]
    fn member_only_activity_blocks_unregistered_buyer() {
        let mut related = shop();
        related.add_activity(ActivityFacts { id: 1, is_member_only: true });
        let violations = validate(
            &Candidate::Participant(participant(None, Some("Alice"))),
            &related,
            today(),
        );
        assert_eq!(rules(&violations), vec![Rule::Eligibility]);
    }

    #[test]
    fn parameter_cycle_does_not_loop() {
        let mut related = RelatedSnapshot::new();
        related
            .add_parameter(ParameterFacts {
                id: 1,
                activity_id: None,
                parent_parameter_id: Some(2),
                is_member_only: false,
                max_bought_items: None,
            })
            .add_parameter(ParameterFacts {
                id: 2,
                activity_id: None,
                parent_parameter_id: Some(1),
                is_member_only: false,
                max_bought_items: None,
            });
        assert!(!member_only(&related, 1));
    }

    #[test]
    fn item_capacity_counts_other_participants() {
        let mut related = shop();
        related
            .add_item(ItemFacts { id: 100, parameter_id: 10, max_bought_items: Some(2) })
            .add_participant(ParticipantFact { id: 1, item_id: 100, parameter_id: 10 });

        let record = participant(Some(5), None);
        assert!(validate(&Candidate::Participant(record.clone()), &related, today()).is_empty());

        related.add_participant(ParticipantFact { id: 2, item_id: 100, parameter_id: 10 });
        let violations = validate(&Candidate::Participant(record.clone()), &related, today());
        assert_eq!(rules(&violations), vec![Rule::ItemCapacity]);

        // Updating one of the two existing rows is still allowed.
        let mut update = record;
        update.id = Some(2);
        assert!(validate(&Candidate::Participant(update), &related, today()).is_empty());
    }

    #[test]
    fn parameter_capacity_spans_all_items() {
        let mut related = shop();
        related
            .add_parameter(ParameterFacts {
                id: 10,
                activity_id: Some(1),
                parent_parameter_id: None,
                is_member_only: false,
                max_bought_items: Some(1),
            })
            .add_item(ItemFacts { id: 101, parameter_id: 10, max_bought_items: None })
            .add_participant(ParticipantFact { id: 1, item_id: 101, parameter_id: 10 });

        let violations = validate(
            &Candidate::Participant(participant(Some(5), None)),
            &related,
            today(),
        );
        assert_eq!(rules(&violations), vec![Rule::ParameterCapacity]);
    }

    #[test]
    fn unknown_item_is_a_reference_violation() {
        let mut record = participant(Some(5), None);
        record.item_id = 999;
        let violations = validate(&Candidate::Participant(record), &shop(), today());
        assert_eq!(rules(&violations), vec![Rule::Reference]);
        assert_eq!(violations[0].field.as_deref(), Some("item_id"));
    }

    // -- lendings -----------------------------------------------------------

    fn lend(quantity: i32) -> LendingRecord {
        LendingRecord {
            id: None,
            equipment_id: 1,
            borrower_id: 9,
            quantity,
            deposit: 0,
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 10),
            returned: false,
        }
    }

    #[test]
    fn lending_stock_sequence() {
        let mut related = RelatedSnapshot::new();
        related.add_equipment(EquipmentFacts { id: 1, quantity: 5 });

        let a = validate(&Candidate::Lending(lend(3)), &related, today());
        assert!(a.is_empty(), "A=3 should fit in a stock of 5");
        related.add_lending(LendingFact { id: 1, equipment_id: 1, quantity: 3, returned: false });

        let b = validate(&Candidate::Lending(lend(3)), &related, today());
        assert_eq!(rules(&b), vec![Rule::StockCapacity]);

        let b = validate(&Candidate::Lending(lend(2)), &related, today());
        assert!(b.is_empty(), "B=2 fills the stock exactly");
        related.add_lending(LendingFact { id: 2, equipment_id: 1, quantity: 2, returned: false });

        let c = validate(&Candidate::Lending(lend(1)), &related, today());
        assert_eq!(rules(&c), vec![Rule::StockCapacity]);
    }

    #[test]
    fn returned_lendings_free_stock() {
        let mut related = RelatedSnapshot::new();
        related
            .add_equipment(EquipmentFacts { id: 1, quantity: 5 })
            .add_lending(LendingFact { id: 1, equipment_id: 1, quantity: 5, returned: true });
        assert!(validate(&Candidate::Lending(lend(5)), &related, today()).is_empty());
    }

    #[test]
    fn lending_dates_must_be_ordered() {
        let mut related = RelatedSnapshot::new();
        related.add_equipment(EquipmentFacts { id: 1, quantity: 5 });
        let mut record = lend(1);
        record.end_date = record.start_date;
        let violations = validate(&Candidate::Lending(record), &related, today());
        assert_eq!(rules(&violations), vec![Rule::TemporalOrdering]);
    }

    #[test]
    fn zero_quantity_is_a_field_violation() {
        let mut related = RelatedSnapshot::new();
        related.add_equipment(EquipmentFacts { id: 1, quantity: 5 });
        let violations = validate(&Candidate::Lending(lend(0)), &related, today());
        assert_eq!(rules(&violations), vec![Rule::FieldConstraint]);
        assert_eq!(violations[0].field.as_deref(), Some("quantity"));
    }

    // -- votes --------------------------------------------------------------

    fn ballot() -> RelatedSnapshot {
        let mut related = RelatedSnapshot::new();
        related
            .add_membership(7, date(2021, 7, 1))
            .add_candidature(CandidatureFacts { id: 1, vacant_position_id: 1 })
            .add_candidature(CandidatureFacts { id: 2, vacant_position_id: 1 })
            .add_candidature(CandidatureFacts { id: 3, vacant_position_id: 2 });
        related
    }

    fn vote_for(candidature_id: DbId) -> Candidate {
        Candidate::Vote(VoteRecord { id: None, candidature_id, voter_id: 7 })
    }

    #[test]
    fn one_vote_per_vacant_position() {
        let mut related = ballot();
        assert!(validate(&vote_for(1), &related, today()).is_empty());
        related.add_vote(VoteFact { id: 1, voter_id: 7, vacant_position_id: 1 });

        let again = validate(&vote_for(2), &related, today());
        assert_eq!(rules(&again), vec![Rule::VoteUniqueness]);

        assert!(validate(&vote_for(3), &related, today()).is_empty());
    }

    #[test]
    fn expired_member_cannot_vote() {
        let related = ballot();
        let violations = validate(&vote_for(1), &related, date(2021, 7, 2));
        assert_eq!(rules(&violations), vec![Rule::Membership]);
    }

    #[test]
    fn unknown_voter_is_a_reference_violation() {
        let related = ballot();
        let vote = Candidate::Vote(VoteRecord { id: None, candidature_id: 1, voter_id: 99 });
        let violations = validate(&vote, &related, today());
        assert_eq!(rules(&violations), vec![Rule::Reference]);
    }

    // -- schedules ----------------------------------------------------------

    fn cancel(session_id: DbId, on: Date) -> Candidate {
        Candidate::CancelledSession(CancelledSessionRecord {
            id: None,
            session_id,
            cancellation_date: on,
            title: "Gym closed".into(),
            description: None,
        })
    }

    #[test]
    fn weekly_session_cancellation_matches_weekday() {
        let mut related = RelatedSnapshot::new();
        related.add_session(SessionFacts {
            id: 1,
            sport_id: 1,
            weekday: Some(crate::weekday::WEDNESDAY),
            date: None,
        });

        // 2020-01-08 and 2020-01-15 are Wednesdays.
        assert!(validate(&cancel(1, date(2020, 1, 8)), &related, today()).is_empty());
        assert!(validate(&cancel(1, date(2020, 1, 15)), &related, today()).is_empty());
        let thursday = validate(&cancel(1, date(2020, 1, 9)), &related, today());
        assert_eq!(rules(&thursday), vec![Rule::DateMatch]);
    }

    #[test]
    fn one_off_session_cancellation_matches_date() {
        let mut related = RelatedSnapshot::new();
        related.add_session(SessionFacts {
            id: 1,
            sport_id: 1,
            weekday: None,
            date: Some(date(2020, 1, 10)),
        });

        assert!(validate(&cancel(1, date(2020, 1, 10)), &related, today()).is_empty());
        let next_day = validate(&cancel(1, date(2020, 1, 11)), &related, today());
        assert_eq!(rules(&next_day), vec![Rule::DateMatch]);
    }

    fn session(weekday: Option<i16>, on: Option<Date>) -> SessionRecord {
        SessionRecord {
            id: None,
            sport_id: 1,
            location_id: None,
            manager_id: None,
            weekday,
            date: on,
            start_time: time(18),
            end_time: time(20),
        }
    }

    #[test]
    fn session_needs_exactly_one_schedule() {
        let related = RelatedSnapshot::new();
        let both = validate(
            &Candidate::Session(session(Some(2), Some(date(2020, 1, 6)))),
            &related,
            today(),
        );
        assert_eq!(rules(&both), vec![Rule::Scheduling]);
        let neither = validate(&Candidate::Session(session(None, None)), &related, today());
        assert_eq!(rules(&neither), vec![Rule::Scheduling]);
    }

    #[test]
    fn session_times_must_be_ordered() {
        let mut record = session(Some(2), None);
        record.end_time = record.start_time;
        let violations = validate(&Candidate::Session(record), &RelatedSnapshot::new(), today());
        assert_eq!(rules(&violations), vec![Rule::TemporalOrdering]);
    }

    #[test]
    fn session_manager_must_manage_the_sport() {
        let mut related = RelatedSnapshot::new();
        related.add_sport_manager(3, 1);

        let mut record = session(Some(2), None);
        record.manager_id = Some(3);
        assert!(validate(&Candidate::Session(record.clone()), &related, today()).is_empty());

        record.manager_id = Some(4);
        let violations = validate(&Candidate::Session(record), &related, today());
        assert_eq!(rules(&violations), vec![Rule::SessionManager]);
    }

    #[test]
    fn weekday_out_of_range_is_a_field_violation() {
        let violations = validate(
            &Candidate::Permanence(PermanenceRecord {
                id: None,
                weekday: Some(8),
                date: None,
                start_time: time(12),
                end_time: time(14),
                location_id: None,
            }),
            &RelatedSnapshot::new(),
            today(),
        );
        assert_eq!(rules(&violations), vec![Rule::FieldConstraint]);
    }

    // -- temporal ordering --------------------------------------------------

    fn activity_record(start: Timestamp, end: Timestamp) -> ActivityRecord {
        ActivityRecord {
            id: None,
            title: "Summer party".into(),
            slug: "summer-party".into(),
            content: String::new(),
            summary: None,
            start_date: start,
            end_date: end,
            publication_date: None,
            is_member_only: false,
            is_frontpage: false,
            is_big_activity: false,
            location_id: None,
        }
    }

    fn election_record(start: Timestamp, end: Timestamp) -> ElectionRecord {
        ElectionRecord {
            id: None,
            title: "Board 2021".into(),
            slug: "board-2021".into(),
            description: String::new(),
            start_date: start,
            end_date: end,
            is_published: true,
        }
    }

    fn at(d: u32, h: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2021, 3, d, h, 0, 0).unwrap()
    }

    #[test]
    fn activity_ending_before_it_starts_is_rejected() {
        let related = RelatedSnapshot::new();
        let reversed = Candidate::Activity(activity_record(at(10, 18), at(10, 12)));
        assert_eq!(rules(&validate(&reversed, &related, today())), vec![Rule::TemporalOrdering]);
        let instant = Candidate::Activity(activity_record(at(10, 18), at(10, 18)));
        assert_eq!(rules(&validate(&instant, &related, today())), vec![Rule::TemporalOrdering]);
    }

    #[test]
    fn activity_with_ordered_dates_is_accepted() {
        let record = Candidate::Activity(activity_record(at(10, 12), at(11, 2)));
        assert!(validate(&record, &RelatedSnapshot::new(), today()).is_empty());
    }

    #[test]
    fn election_ending_before_it_starts_is_rejected() {
        let record = Candidate::Election(election_record(at(20, 0), at(13, 0)));
        let violations = validate(&record, &RelatedSnapshot::new(), today());
        assert_eq!(rules(&violations), vec![Rule::TemporalOrdering]);
        assert_eq!(violations[0].entity, EntityKind::Election);
    }

    #[test]
    fn election_with_ordered_dates_is_accepted() {
        let record = Candidate::Election(election_record(at(13, 0), at(20, 0)));
        assert!(validate(&record, &RelatedSnapshot::new(), today()).is_empty());
    }

    fn permanence(weekday: Option<i16>, on: Option<Date>) -> Candidate {
        Candidate::Permanence(PermanenceRecord {
            id: None,
            weekday,
            date: on,
            start_time: time(12),
            end_time: time(14),
            location_id: None,
        })
    }

    #[test]
    fn permanence_needs_exactly_one_schedule() {
        let related = RelatedSnapshot::new();
        let both = validate(&permanence(Some(3), Some(date(2021, 3, 2))), &related, today());
        assert_eq!(rules(&both), vec![Rule::Scheduling]);
        let neither = validate(&permanence(None, None), &related, today());
        assert_eq!(rules(&neither), vec![Rule::Scheduling]);
    }

    #[test]
    fn weekly_or_one_off_permanence_is_accepted() {
        let related = RelatedSnapshot::new();
        assert!(validate(&permanence(Some(3), None), &related, today()).is_empty());
        assert!(validate(&permanence(None, Some(date(2021, 3, 2))), &related, today()).is_empty());
    }

    // -- memberships --------------------------------------------------------

    fn membership_record(certificate: Date) -> MembershipRecord {
        MembershipRecord {
            id: None,
            member_id: 7,
            membership_type_id: None,
            created_at: Some(Utc.with_ymd_and_hms(2021, 1, 1, 10, 0, 0).unwrap()),
            expiration_date: date(2021, 7, 1),
            certificate_date: certificate,
            payment_mean: PaymentMean::Cash,
            cheque_bank: None,
        }
    }

    #[test]
    fn membership_with_fresh_certificate_is_accepted() {
        let record = membership_record(date(2020, 9, 1));
        let violations = validate(&Candidate::Membership(record), &RelatedSnapshot::new(), today());
        assert!(violations.is_empty(), "{violations:?}");
    }

    #[test]
    fn membership_with_stale_certificate_is_rejected() {
        let stale = date(2021, 7, 1) - Duration::weeks(58) - Duration::days(1);
        let violations = validate(
            &Candidate::Membership(membership_record(stale)),
            &RelatedSnapshot::new(),
            today(),
        );
        assert_eq!(rules(&violations), vec![Rule::CertificateFreshness]);
    }

    #[test]
    fn unsaved_membership_is_compared_to_today() {
        let mut record = membership_record(date(2021, 6, 1));
        record.created_at = None;
        let violations = validate(&Candidate::Membership(record), &RelatedSnapshot::new(), date(2021, 7, 1));
        assert_eq!(rules(&violations), vec![Rule::TemporalOrdering]);
    }

    #[test]
    fn membership_expiring_before_its_creation_is_rejected() {
        let mut record = membership_record(date(2020, 9, 1));
        record.expiration_date = date(2020, 12, 31);
        let violations = validate(&Candidate::Membership(record), &RelatedSnapshot::new(), date(2020, 6, 1));
        assert_eq!(rules(&violations), vec![Rule::TemporalOrdering]);
    }

    #[test]
    fn stored_membership_is_compared_to_its_creation_not_today() {
        // Created 2021-01-01, expires 2021-07-01: still valid when edited later.
        let record = membership_record(date(2020, 9, 1));
        let violations = validate(&Candidate::Membership(record), &RelatedSnapshot::new(), date(2021, 9, 1));
        assert!(violations.is_empty(), "{violations:?}");
    }

    #[test]
    fn membership_cheque_without_bank_is_rejected() {
        let mut record = membership_record(date(2020, 9, 1));
        record.payment_mean = PaymentMean::Cheque;
        for bank in [None, Some("  ".to_string())] {
            record.cheque_bank = bank;
            let violations = validate(
                &Candidate::Membership(record.clone()),
                &RelatedSnapshot::new(),
                today(),
            );
            assert_eq!(rules(&violations), vec![Rule::Payment]);
        }
    }

    #[test]
    fn membership_cheque_with_bank_is_accepted() {
        let mut record = membership_record(date(2020, 9, 1));
        record.payment_mean = PaymentMean::Cheque;
        record.cheque_bank = Some("Crédit Agricole".into());
        let violations = validate(&Candidate::Membership(record), &RelatedSnapshot::new(), today());
        assert!(violations.is_empty(), "{violations:?}");
    }

    // -- locations and informations ----------------------------------------

    fn location(
        address: Option<&str>,
        city: Option<&str>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Candidate {
        Candidate::Location(LocationRecord {
            id: None,
            name: "Gymnase".into(),
            address: address.map(String::from),
            city: city.map(String::from),
            latitude,
            longitude,
        })
    }

    #[test]
    fn location_rules() {
        let related = RelatedSnapshot::new();
        let check = |c: Candidate| rules(&validate(&c, &related, today()));

        assert!(check(location(Some("1 rue"), Some("Lyon"), None, None)).is_empty());
        assert!(check(location(None, Some("Lyon"), None, None)).is_empty());
        assert!(check(location(None, None, Some(45.7), Some(4.8))).is_empty());
        assert_eq!(check(location(None, None, Some(45.7), None)), vec![Rule::GeoConsistency]);
        assert_eq!(check(location(Some("1 rue"), None, None, None)), vec![Rule::AddressConsistency]);
        assert_eq!(check(location(None, None, None, None)), vec![Rule::Completeness]);
        assert_eq!(check(location(None, Some("Lyon"), Some(95.0), Some(4.8))), vec![Rule::FieldConstraint]);
    }

    #[test]
    fn information_needs_title_or_content() {
        let record = InformationRecord {
            id: None,
            title: Some(" ".into()),
            content: None,
            start_date: Some(Utc.with_ymd_and_hms(2021, 1, 2, 0, 0, 0).unwrap()),
            end_date: Some(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()),
            is_important: true,
            is_published: true,
        };
        let violations = validate(&Candidate::Information(record), &RelatedSnapshot::new(), today());
        assert_eq!(rules(&violations), vec![Rule::TemporalOrdering, Rule::Completeness]);
    }

    #[test]
    fn financial_operation_identity() {
        let record = FinancialOperationRecord {
            id: None,
            name: "Gym rental".into(),
            description: String::new(),
            amount_cents: -12_000,
            registered_user_id: None,
            unregistered_user: None,
            related_activity_id: None,
            processed_date: None,
        };
        let violations = validate(
            &Candidate::FinancialOperation(record),
            &RelatedSnapshot::new(),
            today(),
        );
        assert_eq!(rules(&violations), vec![Rule::Identity]);
    }

    #[test]
    fn parameter_needs_an_owner() {
        let record = ParameterRecord {
            id: None,
            name: "Size".into(),
            description: None,
            activity_id: None,
            parent_parameter_id: None,
            is_member_only: false,
            is_mandatory: false,
            is_published: true,
            max_bought_items: None,
            default_price_cents: 0,
            member_price_cents: 0,
        };
        let candidate = Candidate::Parameter(record);
        assert_matches!(
            validate_report(&candidate, &RelatedSnapshot::new(), today()).into_result(),
            Err(CoreError::RuleViolations(v)) if v[0].rule == Rule::Ownership
        );
    }
}
