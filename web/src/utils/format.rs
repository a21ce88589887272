//! Display helpers for dates and map links
use chrono::{NaiveDate, NaiveDateTime};

/// "Tuesday 20 October 2026", as shown on the booking confirmation.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A %-d %B %Y").to_string()
}

/// "Tue 20 Oct", as shown in the live booking summary.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%a %-d %b").to_string()
}

/// "Oct 23, 2026", used in the featured events list.
pub fn event_list_date(date: NaiveDateTime) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "Friday, October 23, 2026", used in the event detail modal.
pub fn event_detail_date(date: NaiveDateTime) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Value for `<input type="date" min=..>`.
pub fn input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn map_embed_url(address: &str) -> String {
    format!(
        "https://www.google.com/maps?q={}&output=embed",
        urlencoding::encode(address)
    )
}

pub fn directions_url(address: &str) -> String {
    format!("https://maps.google.com/?q={}", urlencoding::encode(address))
}

pub fn phone_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
    }

    #[test]
    fn booking_dates() {
        assert_eq!(long_date(date()), "Tuesday 20 October 2026");
        assert_eq!(short_date(date()), "Tue 20 Oct");
        assert_eq!(input_date(date()), "2026-10-20");
    }

    #[test]
    fn event_dates() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 23)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();
        assert_eq!(event_list_date(at), "Oct 23, 2026");
        assert_eq!(event_detail_date(at), "Friday, October 23, 2026");
    }

    #[test]
    fn address_is_url_encoded() {
        assert_eq!(
            map_embed_url("309-311 Harrow Rd, London W9 3RG"),
            "https://www.google.com/maps?q=309-311%20Harrow%20Rd%2C%20London%20W9%203RG&output=embed"
        );
        assert_eq!(
            directions_url("Harrow Rd"),
            "https://maps.google.com/?q=Harrow%20Rd"
        );
    }

    #[test]
    fn phone_link_keeps_digits_and_plus() {
        assert_eq!(phone_href("+44 (0)20-1234-5678"), "tel:+4402012345678");
    }
}
