//! Appointment guard: one appointment per game, per origin, per calendar day.
//!
//! The guard owns the rules (which day an instant belongs to, how an origin
//! is normalized, how ledger outcomes map to errors). The check, the insert
//! and the counter increment are a single atomic step behind the
//! [`AppointmentLedger`] port, so the counter can never lose an update to a
//! concurrent appointment.

use async_trait::async_trait;

use crate::origin::UNKNOWN_ORIGIN;
use crate::types::{CalendarDay, DbId, Timestamp};

/// Result of one atomic ledger write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerOutcome {
    /// A new record was inserted and the counter now reads `appointment_count`.
    Recorded { appointment_count: i64 },
    /// A record for the same (game, origin, day) already exists. Nothing changed.
    AlreadyAppointed,
    /// No game version with the requested id.
    GameNotFound,
}

/// Storage port for appointment records and the per-game counter.
///
/// Implementations must make `record` atomic: check for an existing record,
/// insert the new one and increment the counter with no window in which a
/// concurrent call can observe or overwrite a stale count.
#[async_trait]
pub trait AppointmentLedger: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn record(
        &self,
        game_id: DbId,
        origin: &str,
        day: CalendarDay,
    ) -> Result<LedgerOutcome, Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum AppointmentError {
    #[error("Already appointed today. Each address may appoint once per day")]
    AlreadyAppointed,

    #[error("Game version not found: {0}")]
    GameNotFound(DbId),

    #[error("Appointment storage failed: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The calendar day an instant belongs to. Always UTC.
pub fn appointment_day(now: Timestamp) -> CalendarDay {
    now.date_naive()
}

/// Register an appointment for `origin` against `game_id` at instant `now`.
///
/// Returns the game's new appointment count.
pub async fn appoint<L>(
    ledger: &L,
    game_id: DbId,
    origin: &str,
    now: Timestamp,
) -> Result<i64, AppointmentError>
where
    L: AppointmentLedger + ?Sized,
{
    let origin = match origin.trim() {
        "" => UNKNOWN_ORIGIN,
        trimmed => trimmed,
    };
    let day = appointment_day(now);

    let outcome = ledger
        .record(game_id, origin, day)
        .await
        .map_err(|e| AppointmentError::Storage(Box::new(e)))?;

    match outcome {
        LedgerOutcome::Recorded { appointment_count } => Ok(appointment_count),
        LedgerOutcome::AlreadyAppointed => Err(AppointmentError::AlreadyAppointed),
        LedgerOutcome::GameNotFound => Err(AppointmentError::GameNotFound(game_id)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    #[derive(Default)]
    struct MemoryState {
        counts: HashMap<DbId, i64>,
        records: HashSet<(DbId, String, CalendarDay)>,
    }

    /// Ledger double that applies the same rules as the PostgreSQL adapter.
    #[derive(Default)]
    struct MemoryLedger {
        state: Mutex<MemoryState>,
    }

    impl MemoryLedger {
        fn with_game(game_id: DbId, count: i64) -> Self {
            let ledger = Self::default();
            ledger.state.lock().unwrap().counts.insert(game_id, count);
            ledger
        }

        fn count(&self, game_id: DbId) -> i64 {
            self.state.lock().unwrap().counts[&game_id]
        }

        fn record_count(&self) -> usize {
            self.state.lock().unwrap().records.len()
        }
    }

    #[async_trait]
    impl AppointmentLedger for MemoryLedger {
        type Error = std::convert::Infallible;

        async fn record(
            &self,
            game_id: DbId,
            origin: &str,
            day: CalendarDay,
        ) -> Result<LedgerOutcome, Self::Error> {
            let mut state = self.state.lock().unwrap();
            if !state.counts.contains_key(&game_id) {
                return Ok(LedgerOutcome::GameNotFound);
            }
            if !state.records.insert((game_id, origin.to_string(), day)) {
                return Ok(LedgerOutcome::AlreadyAppointed);
            }
            let count = state.counts.get_mut(&game_id).unwrap();
            *count += 1;
            Ok(LedgerOutcome::Recorded {
                appointment_count: *count,
            })
        }
    }

    struct BrokenLedger;

    #[async_trait]
    impl AppointmentLedger for BrokenLedger {
        type Error = std::io::Error;

        async fn record(
            &self,
            _game_id: DbId,
            _origin: &str,
            _day: CalendarDay,
        ) -> Result<LedgerOutcome, Self::Error> {
            Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "store unreachable",
            ))
        }
    }

    fn day_d() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
    }

    #[tokio::test]
    async fn once_per_origin_per_day_scenario() {
        let ledger = MemoryLedger::with_game(1, 5);

        assert_eq!(appoint(&ledger, 1, "1.2.3.4", day_d()).await.unwrap(), 6);
        assert_eq!(ledger.record_count(), 1);

        let later_same_day = day_d() + Duration::hours(10);
        assert_matches!(
            appoint(&ledger, 1, "1.2.3.4", later_same_day).await,
            Err(AppointmentError::AlreadyAppointed)
        );
        assert_eq!(ledger.count(1), 6);
        assert_eq!(ledger.record_count(), 1);

        let next_day = day_d() + Duration::days(1);
        assert_eq!(appoint(&ledger, 1, "1.2.3.4", next_day).await.unwrap(), 7);
        assert_eq!(ledger.record_count(), 2);
    }

    #[tokio::test]
    async fn different_origins_share_a_day() {
        let ledger = MemoryLedger::with_game(3, 0);
        assert_eq!(appoint(&ledger, 3, "10.0.0.1", day_d()).await.unwrap(), 1);
        assert_eq!(appoint(&ledger, 3, "10.0.0.2", day_d()).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn same_origin_may_appoint_different_games() {
        let ledger = MemoryLedger::with_game(1, 0);
        ledger.state.lock().unwrap().counts.insert(2, 0);

        assert_eq!(appoint(&ledger, 1, "10.0.0.1", day_d()).await.unwrap(), 1);
        assert_eq!(appoint(&ledger, 2, "10.0.0.1", day_d()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn day_boundary_is_utc_midnight() {
        let ledger = MemoryLedger::with_game(1, 0);
        let before = Utc.with_ymd_and_hms(2026, 10, 19, 23, 59, 59).unwrap();
        let after = before + Duration::seconds(2);

        assert_eq!(appoint(&ledger, 1, "1.2.3.4", before).await.unwrap(), 1);
        assert_eq!(appoint(&ledger, 1, "1.2.3.4", after).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn blank_origin_is_treated_as_unknown() {
        let ledger = MemoryLedger::with_game(1, 0);
        appoint(&ledger, 1, "  ", day_d()).await.unwrap();
        assert_matches!(
            appoint(&ledger, 1, UNKNOWN_ORIGIN, day_d()).await,
            Err(AppointmentError::AlreadyAppointed)
        );
    }

    #[tokio::test]
    async fn missing_game_is_reported_distinctly() {
        let ledger = MemoryLedger::default();
        assert_matches!(
            appoint(&ledger, 404, "1.2.3.4", day_d()).await,
            Err(AppointmentError::GameNotFound(404))
        );
    }

    #[tokio::test]
    async fn storage_failure_is_surfaced() {
        let err = appoint(&BrokenLedger, 1, "1.2.3.4", day_d())
            .await
            .unwrap_err();
        assert_matches!(err, AppointmentError::Storage(_));
        assert!(err.to_string().contains("store unreachable"));
    }

    #[test]
    fn appointment_day_truncates_time() {
        let d = appointment_day(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap());
        assert_eq!(d, chrono::NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
    }
}
