//! Table reservation form: field rules and the validated reservation intent.

use crate::availability::SlotTime;
use crate::contact::is_valid_email;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MAX_LISTED_PARTY: u8 = 10;
const MIN_NAME_LEN: usize = 2;
const MIN_PHONE_LEN: usize = 10;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartySize {
    People(u8),
    /// More than ten guests; arranged by phone.
    Large,
}

impl PartySize {
    /// Every option offered by the party size select, in display order.
    pub fn options() -> Vec<PartySize> {
        (1..=MAX_LISTED_PARTY)
            .map(PartySize::People)
            .chain(std::iter::once(PartySize::Large))
            .collect()
    }

    /// Value used for the `<option value>` attribute.
    pub fn value(&self) -> String {
        match self {
            PartySize::People(n) => n.to_string(),
            PartySize::Large => "large".to_string(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "large" => Some(PartySize::Large),
            other => other
                .parse::<u8>()
                .ok()
                .filter(|n| (1..=MAX_LISTED_PARTY).contains(n))
                .map(PartySize::People),
        }
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartySize::People(1) => write!(f, "1 person"),
            PartySize::People(n) => write!(f, "{} people", n),
            PartySize::Large => write!(f, "More than 10 people"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingFieldError {
    #[error("Please select a date")]
    MissingDate,
    #[error("Please select a time")]
    MissingTime,
    #[error("Please select party size")]
    MissingPartySize,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BookingField {
    Date,
    Time,
    PartySize,
    Name,
    Email,
    Phone,
}

impl BookingFieldError {
    pub fn field(&self) -> BookingField {
        match self {
            BookingFieldError::MissingDate => BookingField::Date,
            BookingFieldError::MissingTime => BookingField::Time,
            BookingFieldError::MissingPartySize => BookingField::PartySize,
            BookingFieldError::NameTooShort => BookingField::Name,
            BookingFieldError::InvalidEmail => BookingField::Email,
            BookingFieldError::InvalidPhone => BookingField::Phone,
        }
    }
}

/// Raw form values as typed into the booking form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    pub date: String,
    pub time: String,
    pub party_size: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: String,
}

/// A reservation that passed validation. Lives only until the simulated
/// confirmation is dismissed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReservationIntent {
    pub date: NaiveDate,
    pub time: SlotTime,
    pub party_size: PartySize,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: Option<String>,
}

impl BookingForm {
    /// Checks every field and reports all failures at once.
    pub fn validate(&self) -> Result<ReservationIntent, Vec<BookingFieldError>> {
        let mut errors = Vec::new();

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok();
        if date.is_none() {
            errors.push(BookingFieldError::MissingDate);
        }

        let time = SlotTime::parse(&self.time);
        if time.is_none() {
            errors.push(BookingFieldError::MissingTime);
        }

        let party_size = PartySize::parse(&self.party_size);
        if party_size.is_none() {
            errors.push(BookingFieldError::MissingPartySize);
        }

        let name = self.name.trim();
        if name.chars().count() < MIN_NAME_LEN {
            errors.push(BookingFieldError::NameTooShort);
        }

        let email = self.email.trim();
        if !is_valid_email(email) {
            errors.push(BookingFieldError::InvalidEmail);
        }

        let phone = self.phone.trim();
        if phone.chars().count() < MIN_PHONE_LEN {
            errors.push(BookingFieldError::InvalidPhone);
        }

        match (date, time, party_size) {
            (Some(date), Some(time), Some(party_size)) if errors.is_empty() => {
                let requests = self.special_requests.trim();
                Ok(ReservationIntent {
                    date,
                    time,
                    party_size,
                    name: name.to_string(),
                    email: email.to_string(),
                    phone: phone.to_string(),
                    special_requests: (!requests.is_empty()).then(|| requests.to_string()),
                })
            }
            _ => Err(errors),
        }
    }

    /// First error for `field`, if any, for inline display under the input.
    pub fn error_for(&self, field: BookingField) -> Option<BookingFieldError> {
        self.validate()
            .err()?
            .into_iter()
            .find(|error| error.field() == field)
    }

    /// True once date, time and party size are all chosen.
    pub fn has_summary(&self) -> bool {
        !self.date.trim().is_empty()
            && !self.time.trim().is_empty()
            && !self.party_size.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn filled() -> BookingForm {
        BookingForm {
            date: "2026-10-24".to_string(),
            time: "11:30".to_string(),
            party_size: "4".to_string(),
            name: "Priya K".to_string(),
            email: "priya@example.com".to_string(),
            phone: "+44 20 1234 5678".to_string(),
            special_requests: "  ".to_string(),
        }
    }

    #[test]
    fn valid_form_becomes_an_intent() {
        let intent = filled().validate().unwrap();

        assert_eq!(intent.date, NaiveDate::from_ymd_opt(2026, 10, 24).unwrap());
        assert_eq!(intent.time, SlotTime { hour: 11, minute: 30 });
        assert_eq!(intent.party_size, PartySize::People(4));
        assert_eq!(intent.special_requests, None);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = BookingForm::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                BookingFieldError::MissingDate,
                BookingFieldError::MissingTime,
                BookingFieldError::MissingPartySize,
                BookingFieldError::NameTooShort,
                BookingFieldError::InvalidEmail,
                BookingFieldError::InvalidPhone,
            ]
        );
    }

    #[test]
    fn special_requests_are_kept_trimmed() {
        let form = BookingForm {
            special_requests: " high chair please ".to_string(),
            ..filled()
        };
        assert_eq!(
            form.validate().unwrap().special_requests.as_deref(),
            Some("high chair please")
        );
    }

    #[rstest]
    #[case(BookingForm { name: "A".to_string(), ..filled() }, BookingFieldError::NameTooShort)]
    #[case(BookingForm { email: "not-an-email".to_string(), ..filled() }, BookingFieldError::InvalidEmail)]
    #[case(BookingForm { phone: "12345".to_string(), ..filled() }, BookingFieldError::InvalidPhone)]
    #[case(BookingForm { party_size: "12".to_string(), ..filled() }, BookingFieldError::MissingPartySize)]
    #[case(BookingForm { time: "".to_string(), ..filled() }, BookingFieldError::MissingTime)]
    fn single_bad_field_is_reported(#[case] form: BookingForm, #[case] expected: BookingFieldError) {
        assert_eq!(form.validate().unwrap_err(), vec![expected]);
        assert_eq!(form.error_for(expected.field()), Some(expected));
    }

    #[test]
    fn messages_match_the_form_copy() {
        assert_eq!(BookingFieldError::MissingPartySize.to_string(), "Please select party size");
        assert_eq!(
            BookingFieldError::NameTooShort.to_string(),
            "Name must be at least 2 characters"
        );
    }

    #[test]
    fn party_size_options_and_labels() {
        let options = PartySize::options();
        assert_eq!(options.len(), 11);
        assert_eq!(options[0].to_string(), "1 person");
        assert_eq!(options[1].to_string(), "2 people");
        assert_eq!(options[10], PartySize::Large);
        assert_eq!(PartySize::parse(&options[10].value()), Some(PartySize::Large));
    }

    #[test]
    fn summary_needs_date_time_and_party() {
        let mut form = BookingForm::default();
        form.date = "2026-10-24".to_string();
        form.time = "09:00".to_string();
        assert!(!form.has_summary());
        form.party_size = "2".to_string();
        assert!(form.has_summary());
    }
}
