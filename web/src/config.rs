//! Environment overrides for [`SiteSettings`].

use shared_types::SiteSettings;
use thiserror::Error;

pub const NEWSLETTER_DELAY_VAR: &str = "CAFE_NEWSLETTER_DELAY_MS";
pub const INSTAGRAM_POST_COUNT_VAR: &str = "CAFE_INSTAGRAM_POST_COUNT";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Applies overrides on top of the defaults. `lookup` is `std::env::var`
/// in production.
pub fn settings_from(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<SiteSettings, ConfigError> {
    let mut settings = SiteSettings::default();

    if let Some(value) = lookup(NEWSLETTER_DELAY_VAR) {
        settings.newsletter_delay_ms = parse_number(NEWSLETTER_DELAY_VAR, &value)?;
    }
    if let Some(value) = lookup(INSTAGRAM_POST_COUNT_VAR) {
        settings.instagram_post_count = parse_number(INSTAGRAM_POST_COUNT_VAR, &value)?;
    }

    Ok(settings)
}

pub fn load_site_settings() -> Result<SiteSettings, ConfigError> {
    settings_from(|var| std::env::var(var).ok())
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_overrides() {
        assert_eq!(settings_from(|_| None), Ok(SiteSettings::default()));
    }

    #[test]
    fn overrides_are_applied() {
        let settings = settings_from(|var| match var {
            NEWSLETTER_DELAY_VAR => Some("8000".to_string()),
            INSTAGRAM_POST_COUNT_VAR => Some(" 3 ".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(settings.newsletter_delay_ms, 8000);
        assert_eq!(settings.instagram_post_count, 3);
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let err = settings_from(|var| {
            (var == INSTAGRAM_POST_COUNT_VAR).then(|| "six".to_string())
        })
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "CAFE_INSTAGRAM_POST_COUNT must be a whole number, got \"six\""
        );
    }
}
