/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A calendar date with no time-of-day component (UTC).
pub type CalendarDay = chrono::NaiveDate;
