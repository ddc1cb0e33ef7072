//! Calendar month arithmetic
//!
//! Elapsed time for the cooldown is counted in calendar months, not days, so
//! month lengths and leap years fall out of chrono's `Months` addition.

use chrono::{DateTime, Datelike, Months, Utc};

/// Number of whole calendar months from `from` to `to`
///
/// A month counts once `from` shifted by that many months (clamped to the
/// end of shorter months) is not later than `to`. The result is negative when
/// `to` precedes `from`.
#[must_use]
pub fn whole_months_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    if to < from {
        return -whole_months_between(to, from);
    }

    let mut months = i64::from(to.year() - from.year()) * 12 + i64::from(to.month())
        - i64::from(from.month());

    while months > 0 && !reached(from, months, to) {
        months -= 1;
    }
    months
}

fn reached(from: DateTime<Utc>, months: i64, to: DateTime<Utc>) -> bool {
    u32::try_from(months)
        .ok()
        .and_then(|m| from.checked_add_months(Months::new(m)))
        .is_some_and(|shifted| shifted <= to)
}
