use crate::newsletter::DEFAULT_POPUP_DELAY_MS;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INSTAGRAM_POST_COUNT: usize = 6;

/// Site-wide knobs. The server may override some of them from the environment.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SiteSettings {
    pub newsletter_delay_ms: u64,
    pub instagram_post_count: usize,
    pub instagram_handle: String,
    pub address: String,
    pub phone: String,
    pub opening_hours: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        SiteSettings {
            newsletter_delay_ms: DEFAULT_POPUP_DELAY_MS,
            instagram_post_count: DEFAULT_INSTAGRAM_POST_COUNT,
            instagram_handle: "therug_london".to_string(),
            address: "309-311 Harrow Rd, London W9 3RG".to_string(),
            phone: "+44 (0)20-1234-5678".to_string(),
            opening_hours: "Mon-Sat: 08:00-18:00 | Sun: 08:00-16:00".to_string(),
        }
    }
}

impl SiteSettings {
    pub fn instagram_url(&self) -> String {
        format!("https://www.instagram.com/{}/", self.instagram_handle)
    }
}

/// Delay before the newsletter popup opens by itself. An explicit override
/// wins; otherwise the popup waits until the site settings have loaded.
pub fn popup_delay_ms(override_ms: Option<u64>, settings: Option<&SiteSettings>) -> Option<u64> {
    override_ms.or_else(|| settings.map(|settings| settings.newsletter_delay_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn loaded(delay: u64) -> SiteSettings {
        SiteSettings {
            newsletter_delay_ms: delay,
            ..SiteSettings::default()
        }
    }

    #[rstest]
    #[case(None, None, None)]
    #[case(None, Some(loaded(8_000)), Some(8_000))]
    #[case(Some(2_000), None, Some(2_000))]
    #[case(Some(2_000), Some(loaded(8_000)), Some(2_000))]
    fn picks_popup_delay(
        #[case] override_ms: Option<u64>,
        #[case] settings: Option<SiteSettings>,
        #[case] expected: Option<u64>,
    ) {
        assert_eq!(popup_delay_ms(override_ms, settings.as_ref()), expected);
    }

    #[test]
    fn defaults_use_the_standard_popup_delay() {
        assert_eq!(SiteSettings::default().newsletter_delay_ms, DEFAULT_POPUP_DELAY_MS);
        assert_eq!(
            SiteSettings::default().instagram_url(),
            "https://www.instagram.com/therug_london/"
        );
    }
}
