use leptos::prelude::*;
use leptos::server;
use shared_types::SiteSettings;

/// Settings the client needs for timed widgets (popup delay, feed size).
#[server]
pub async fn get_site_settings() -> Result<SiteSettings, ServerFnError> {
    match crate::config::load_site_settings() {
        Ok(settings) => Ok(settings),
        Err(e) => {
            tracing::warn!("Invalid site settings override, using defaults: {}", e);
            Ok(SiteSettings::default())
        }
    }
}
