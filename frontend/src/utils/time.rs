use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;

fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

/// Header clock text: time then date, e.g. `02:05:09 PM` / `01/10/2025`.
pub fn clock_strings(now: &DateTime<Tz>) -> (String, String) {
    (
        now.format("%I:%M:%S %p").to_string(),
        now.format("%m/%d/%Y").to_string(),
    )
}
