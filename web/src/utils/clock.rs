//! Wall-clock access in the visitor's local time.
//!
//! Booking cutoffs and calendar highlights are relative to the browser's
//! clock once hydrated; during server rendering the server's clock is used.
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Utc};

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn today() -> NaiveDate {
    now().date()
}

pub fn now_utc() -> chrono::DateTime<Utc> {
    Utc::now()
}

pub fn current_year() -> i32 {
    today().year()
}
