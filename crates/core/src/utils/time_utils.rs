use chrono::{DateTime, NaiveDate, Utc};

/// Business date of a UTC instant.
pub fn collection_date_from_utc(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        if let Some(next) = current.succ_opt() {
            current = next;
        } else {
            break;
        }
    }
    days
}
