//! Cache expiry policy

use chrono::{DateTime, Days, Duration, Local, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};

/// Decides whether a cached snapshot may still be served
///
/// A snapshot saved at `timestamp` stays valid until `timestamp` plus the maximum
/// age in calendar days, evaluated on the policy's calendar so daylight saving shifts
/// keep the same wall-clock time. The boundary instant itself is already expired.
///
/// The calendar is the host's local time zone unless one is given with
/// [`FeedCachePolicy::with_calendar`].
#[derive(Debug, Clone, Copy)]
pub struct FeedCachePolicy<Tz: TimeZone = Local> {
    max_age_days: u32,
    calendar: Tz,
}

impl FeedCachePolicy {
    /// Maximum cache age used by [`FeedCachePolicy::default`]
    pub const DEFAULT_MAX_AGE_DAYS: u32 = 7;

    /// Create a policy on the local calendar with a custom maximum age in days
    pub fn new(max_age_days: u32) -> Self {
        Self::with_calendar(max_age_days, Local)
    }
}

impl<Tz: TimeZone> FeedCachePolicy<Tz> {
    /// Create a policy counting days on `calendar`
    pub fn with_calendar(max_age_days: u32, calendar: Tz) -> Self {
        Self {
            max_age_days,
            calendar,
        }
    }

    pub fn max_age_days(&self) -> u32 {
        self.max_age_days
    }

    pub fn calendar(&self) -> &Tz {
        &self.calendar
    }

    /// The first instant at which a snapshot saved at `timestamp` is expired
    ///
    /// A wall-clock expiry repeated by a backward shift resolves to its earlier
    /// instant; one skipped by a forward shift moves forward by the length of the gap.
    /// Returns `None` only when the date is out of range.
    pub fn expiry_of(&self, timestamp: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let expiry = timestamp
            .with_timezone(&self.calendar)
            .naive_local()
            .checked_add_days(Days::new(u64::from(self.max_age_days)))?;

        self.resolve(expiry)
    }

    /// Check whether a snapshot saved at `timestamp` is still valid at `now`
    pub fn is_valid(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.expiry_of(timestamp) {
            Some(expiry) => now < expiry,
            None => false,
        }
    }

    fn resolve(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self.calendar.from_local_datetime(&local) {
            LocalResult::Single(expiry) => Some(expiry.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
            LocalResult::None => {
                // Offset in force a day earlier is the one before the gap
                let before = local.checked_sub_signed(Duration::days(1))?;
                let offset = self.calendar.offset_from_utc_datetime(&before).fix();
                let utc = local
                    .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))?;
                Some(Utc.from_utc_datetime(&utc))
            }
        }
    }
}

impl Default for FeedCachePolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_AGE_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use chrono_tz::{America::New_York, Tz};

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 17, 10, 30, 0).unwrap()
    }

    fn new_york(max_age_days: u32) -> FeedCachePolicy<Tz> {
        FeedCachePolicy::with_calendar(max_age_days, New_York)
    }

    fn new_york_time(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        New_York
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
    }

    fn minus_max_age(now: DateTime<Utc>) -> DateTime<Utc> {
        now.with_timezone(&New_York)
            .checked_sub_days(Days::new(7))
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_default_max_age_is_seven_days() {
        assert_eq!(FeedCachePolicy::default().max_age_days(), 7);
    }

    #[test]
    fn test_less_than_max_age_is_valid() {
        let now = fixed_now();
        let timestamp = minus_max_age(now) + Duration::seconds(1);

        assert!(new_york(7).is_valid(timestamp, now));
    }

    #[test]
    fn test_exactly_max_age_is_expired() {
        let now = fixed_now();

        assert!(!new_york(7).is_valid(minus_max_age(now), now));
    }

    #[test]
    fn test_more_than_max_age_is_expired() {
        let now = fixed_now();
        let timestamp = minus_max_age(now) - Duration::seconds(1);

        assert!(!new_york(7).is_valid(timestamp, now));
    }

    #[test]
    fn test_fresh_snapshot_is_valid() {
        let now = fixed_now();

        assert!(FeedCachePolicy::default().is_valid(now, now));
        assert!(new_york(7).is_valid(now, now));
    }

    #[test]
    fn test_custom_max_age() {
        let now = fixed_now();
        let policy = FeedCachePolicy::with_calendar(1, Utc);
        let one_day_ago = now - Duration::days(1);

        assert!(policy.is_valid(one_day_ago + Duration::seconds(1), now));
        assert!(!policy.is_valid(one_day_ago, now));
    }

    #[test]
    fn test_zero_max_age_expires_immediately() {
        let now = fixed_now();

        assert!(!FeedCachePolicy::new(0).is_valid(now, now));
    }

    #[test]
    fn test_unrepresentable_expiry_is_invalid() {
        let now = fixed_now();
        let policy = FeedCachePolicy::new(u32::MAX);

        assert_eq!(policy.expiry_of(now), None);
        assert!(!policy.is_valid(now, now));
    }

    #[test]
    fn test_expiry_keeps_wall_clock_time_across_dst_start() {
        // 2024-03-05 12:00 EST -> 2024-03-12 12:00 EDT, one hour short of 168h
        let timestamp = new_york_time(2024, 3, 5, 12, 0);

        let expiry = new_york(7).expiry_of(timestamp).unwrap();

        assert_eq!(expiry, new_york_time(2024, 3, 12, 12, 0));
        assert_eq!(expiry - timestamp, Duration::hours(7 * 24 - 1));
    }

    #[test]
    fn test_expiry_in_skipped_hour_moves_past_the_gap() {
        // 2024-03-10 02:30 does not exist in New York; clocks jump 02:00 EST -> 03:00 EDT
        let timestamp = new_york_time(2024, 3, 3, 2, 30);
        let policy = new_york(7);

        let expiry = policy.expiry_of(timestamp);

        assert_eq!(expiry, Some(Utc.with_ymd_and_hms(2024, 3, 10, 7, 30, 0).unwrap()));
        assert!(policy.is_valid(timestamp, timestamp));
        assert!(policy.is_valid(timestamp, timestamp + Duration::hours(1)));
    }

    #[test]
    fn test_expiry_in_repeated_hour_takes_earliest_instant() {
        // 2024-11-03 01:30 happens twice in New York: first EDT, then EST
        let timestamp = new_york_time(2024, 10, 27, 1, 30);
        let policy = new_york(7);

        let expiry = policy.expiry_of(timestamp);

        assert_eq!(expiry, Some(Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).unwrap()));
        assert!(policy.is_valid(timestamp, timestamp));
        let first_occurrence = Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).unwrap();
        assert!(!policy.is_valid(timestamp, first_occurrence));
    }
}
