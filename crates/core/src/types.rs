/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (lendings, memberships, one-off sessions) carry no zone.
pub type Date = chrono::NaiveDate;

/// Wall-clock times of day (session and permanence slots).
pub type TimeOfDay = chrono::NaiveTime;

/// Money is stored as signed integer cents.
pub type Cents = i64;
