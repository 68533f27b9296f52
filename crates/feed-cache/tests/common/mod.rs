//! Shared factories for feed cache tests

#![allow(dead_code)]

use chrono::{DateTime, Days, Duration, TimeZone, Utc};
use chrono_tz::{America::New_York, Tz};
use feed_cache::{FeedCachePolicy, LocalFeedImage};
use feed_core::FeedImage;
use url::Url;
use uuid::Uuid;

pub const ANY_ERROR: &str = "any error";

/// Calendar with daylight saving, so expiry never depends on the host zone
pub const CALENDAR: Tz = New_York;

pub fn any_url() -> Url {
    Url::parse("https://any-url.com").unwrap()
}

pub fn unique_image() -> FeedImage {
    FeedImage::new(
        Uuid::new_v4(),
        Some("any".to_string()),
        Some("any".to_string()),
        any_url(),
    )
}

/// A feed as the domain sees it and as the store receives it
pub fn unique_image_feed() -> (Vec<FeedImage>, Vec<LocalFeedImage>) {
    let models = vec![unique_image(), unique_image()];
    let local = models.iter().map(LocalFeedImage::from).collect();
    (models, local)
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 18, 12, 0, 0).unwrap()
}

pub fn feed_cache_policy() -> FeedCachePolicy<Tz> {
    FeedCachePolicy::with_calendar(7, CALENDAR)
}

pub fn minus_feed_cache_max_age(date: DateTime<Utc>) -> DateTime<Utc> {
    date.with_timezone(&CALENDAR)
        .checked_sub_days(Days::new(7))
        .unwrap()
        .with_timezone(&Utc)
}

pub fn seconds(n: i64) -> Duration {
    Duration::seconds(n)
}
