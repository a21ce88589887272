//! Newsletter popup state and the persisted "don't show again" record.

use crate::contact::is_valid_email;
use crate::store::{KeyValueStore, StoreError};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NEWSLETTER_DISMISSED_KEY: &str = "rugCafeNewsletterClosed";
/// A dismissal keeps the popup from opening by itself for this long.
pub const DISMISSAL_TTL_DAYS: i64 = 7;

pub const DEFAULT_POPUP_DELAY_MS: u64 = 5_000;
pub const SUBMIT_DELAY_MS: u64 = 1_500;
pub const SUCCESS_CLOSE_DELAY_MS: u64 = 3_000;
pub const RESET_DELAY_MS: u64 = 500;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterError {
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

pub fn validate_email(input: &str) -> Result<String, NewsletterError> {
    let email = input.trim();
    if email.is_empty() {
        Err(NewsletterError::MissingEmail)
    } else if !is_valid_email(email) {
        Err(NewsletterError::InvalidEmail)
    } else {
        Ok(email.to_string())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PopupPosition {
    #[default]
    BottomRight,
    Center,
}

impl PopupPosition {
    pub fn class(&self) -> &'static str {
        match self {
            PopupPosition::BottomRight => "newsletter-popup newsletter-popup--corner",
            PopupPosition::Center => "newsletter-popup newsletter-popup--center",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NewsletterPhase {
    #[default]
    Closed,
    Open,
    Submitting,
    Subscribed,
}

/// Popup state owned by a single page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewsletterPopup {
    pub phase: NewsletterPhase,
    pub error: Option<NewsletterError>,
}

impl NewsletterPopup {
    pub fn is_open(&self) -> bool {
        self.phase != NewsletterPhase::Closed
    }

    pub fn open(&mut self) {
        if self.phase == NewsletterPhase::Closed {
            self.phase = NewsletterPhase::Open;
        }
    }

    /// Validates `email` and moves to `Submitting`. Leaves the popup open
    /// with an error when the address is rejected.
    pub fn submit(&mut self, email: &str) -> Result<String, NewsletterError> {
        match validate_email(email) {
            Ok(email) => {
                self.phase = NewsletterPhase::Submitting;
                self.error = None;
                Ok(email)
            }
            Err(e) => {
                self.error = Some(e);
                Err(e)
            }
        }
    }

    /// The simulated signup finished.
    pub fn complete(&mut self) {
        if self.phase == NewsletterPhase::Submitting {
            self.phase = NewsletterPhase::Subscribed;
        }
    }

    pub fn close(&mut self) {
        self.phase = NewsletterPhase::Closed;
    }

    /// Clears success and error once the close transition has finished.
    pub fn reset(&mut self) {
        if self.phase == NewsletterPhase::Closed {
            self.error = None;
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
struct DismissalRecord {
    dismissed_at: DateTime<Utc>,
}

pub fn record_dismissal(store: &impl KeyValueStore, now: DateTime<Utc>) -> Result<(), StoreError> {
    let record = serde_json::to_string(&DismissalRecord { dismissed_at: now })
        .map_err(|e| StoreError::Encode(e.to_string()))?;
    store.set(NEWSLETTER_DISMISSED_KEY, &record)
}

/// When the visitor last closed the popup. Older builds stored a bare
/// millisecond timestamp, which is still accepted.
pub fn last_dismissal(store: &impl KeyValueStore) -> Result<Option<DateTime<Utc>>, StoreError> {
    let Some(raw) = store.get(NEWSLETTER_DISMISSED_KEY)? else {
        return Ok(None);
    };

    if let Ok(record) = serde_json::from_str::<DismissalRecord>(&raw) {
        return Ok(Some(record.dismissed_at));
    }

    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
        .map(Some)
        .ok_or_else(|| StoreError::Decode(format!("unrecognised dismissal record: {}", raw)))
}

/// Whether the popup should open by itself after the page delay.
pub fn should_auto_open(store: &impl KeyValueStore, now: DateTime<Utc>) -> Result<bool, StoreError> {
    Ok(match last_dismissal(store)? {
        Some(dismissed_at) => now - dismissed_at >= Duration::days(DISMISSAL_TTL_DAYS),
        None => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap()
    }

    #[rstest]
    #[case("", Err(NewsletterError::MissingEmail))]
    #[case("   ", Err(NewsletterError::MissingEmail))]
    #[case("coffee", Err(NewsletterError::InvalidEmail))]
    #[case(" hi@therug.london ", Ok("hi@therug.london".to_string()))]
    fn validates_addresses(#[case] input: &str, #[case] expected: Result<String, NewsletterError>) {
        assert_eq!(validate_email(input), expected);
    }

    #[test]
    fn signup_walks_through_the_phases() {
        let mut popup = NewsletterPopup::default();
        assert!(!popup.is_open());

        popup.open();
        assert_eq!(popup.phase, NewsletterPhase::Open);

        assert!(popup.submit("nope").is_err());
        assert_eq!(popup.phase, NewsletterPhase::Open);
        assert_eq!(popup.error, Some(NewsletterError::InvalidEmail));

        popup.submit("guest@example.com").unwrap();
        assert_eq!(popup.phase, NewsletterPhase::Submitting);
        assert_eq!(popup.error, None);

        popup.complete();
        assert_eq!(popup.phase, NewsletterPhase::Subscribed);

        popup.close();
        popup.reset();
        assert_eq!(popup, NewsletterPopup::default());
    }

    #[test]
    fn complete_is_ignored_unless_submitting() {
        let mut popup = NewsletterPopup::default();
        popup.open();
        popup.complete();
        assert_eq!(popup.phase, NewsletterPhase::Open);
    }

    #[test]
    fn fresh_visitor_gets_the_popup() {
        let store = MemoryStore::default();
        assert!(should_auto_open(&store, now()).unwrap());
    }

    #[test]
    fn dismissal_suppresses_for_a_week() {
        let store = MemoryStore::default();
        record_dismissal(&store, now()).unwrap();

        assert!(!should_auto_open(&store, now() + Duration::days(6)).unwrap());
        assert!(should_auto_open(&store, now() + Duration::days(7)).unwrap());
    }

    #[test]
    fn legacy_millisecond_records_are_understood() {
        let store = MemoryStore::default();
        store
            .set(NEWSLETTER_DISMISSED_KEY, &now().timestamp_millis().to_string())
            .unwrap();

        assert_eq!(last_dismissal(&store).unwrap(), Some(now()));
        assert!(!should_auto_open(&store, now() + Duration::hours(1)).unwrap());
    }

    #[test]
    fn garbage_record_is_a_decode_error() {
        let store = MemoryStore::default();
        store.set(NEWSLETTER_DISMISSED_KEY, "yesterday").unwrap();

        assert!(matches!(last_dismissal(&store), Err(StoreError::Decode(_))));
    }
}
