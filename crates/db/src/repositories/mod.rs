//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! any Postgres executor (`&PgPool`, `&mut PgConnection` or a transaction) as
//! the first argument.

pub mod activity_repo;
pub mod article_repo;
pub mod cancelled_session_repo;
pub mod candidature_repo;
pub mod election_repo;
pub mod equipment_repo;
pub mod financial_operation_repo;
pub mod information_repo;
pub mod item_repo;
pub mod lending_repo;
pub mod location_repo;
pub mod match_repo;
pub mod membership_repo;
pub mod parameter_repo;
pub mod participant_repo;
pub mod permanence_repo;
pub mod position_repo;
pub mod session_repo;
pub mod sport_repo;
pub mod user_repo;
pub mod vacant_position_repo;
pub mod vote_repo;
pub mod weekmail_repo;

pub use activity_repo::ActivityRepo;
pub use article_repo::ArticleRepo;
pub use cancelled_session_repo::CancelledSessionRepo;
pub use candidature_repo::CandidatureRepo;
pub use election_repo::ElectionRepo;
pub use equipment_repo::EquipmentRepo;
pub use financial_operation_repo::FinancialOperationRepo;
pub use information_repo::InformationRepo;
pub use item_repo::ItemRepo;
pub use lending_repo::LendingRepo;
pub use location_repo::LocationRepo;
pub use match_repo::MatchRepo;
pub use membership_repo::MembershipRepo;
pub use parameter_repo::ParameterRepo;
pub use participant_repo::ParticipantRepo;
pub use permanence_repo::PermanenceRepo;
pub use position_repo::PositionRepo;
pub use session_repo::SessionRepo;
pub use sport_repo::SportRepo;
pub use user_repo::UserRepo;
pub use vacant_position_repo::VacantPositionRepo;
pub use vote_repo::VoteRepo;
pub use weekmail_repo::WeekmailRepo;
