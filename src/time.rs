// src/time.rs
//! Client timezone offsets

use chrono::{DateTime, TimeDelta, Utc};

/// Shift a server UTC timestamp into the client's wall-clock time
///
/// `offset_minutes` follows the browser convention (`getTimezoneOffset`):
/// positive west of UTC, so Auckland in summer is `-780`.
/// Returns `None` when the offset or the shifted time is out of range.
pub fn server_utc_to_local(time: DateTime<Utc>, offset_minutes: i64) -> Option<DateTime<Utc>> {
    TimeDelta::try_minutes(offset_minutes).and_then(|offset| time.checked_sub_signed(offset))
}
