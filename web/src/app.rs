use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use shared_types::SiteSettings;
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::server::get_site_settings;
use crate::views::{AboutPage, BookPage, HomePage, MenuPage, NotFoundPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

/// Site settings shared through context. `None` until the server answers.
#[derive(Clone, Copy)]
struct SiteSettingsContext(Signal<Option<SiteSettings>>);

/// Settings as loaded from the server, `None` while the request is pending.
/// Without a provider the defaults count as loaded.
pub fn use_loaded_site_settings() -> Signal<Option<SiteSettings>> {
    use_context::<SiteSettingsContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Signal::derive(|| Some(SiteSettings::default())))
}

/// Settings for display, falling back to the defaults while loading.
pub fn use_site_settings() -> Signal<SiteSettings> {
    let loaded = use_loaded_site_settings();
    Signal::derive(move || loaded.get().unwrap_or_default())
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let settings_resource = Resource::new(
        || (),
        |_| async move {
            match get_site_settings().await {
                Ok(settings) => settings,
                Err(e) => {
                    leptos::logging::error!("Failed to load site settings: {}", e);
                    SiteSettings::default()
                }
            }
        },
    );
    provide_context(SiteSettingsContext(Signal::derive(move || settings_resource.get())));

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/web.css"/>

        <Title text="The Rug Café"/>
        <Meta
            name="description"
            content="Specialty coffee & modern brunch with Asian touches in a historic London pub on Harrow Road."
        />

        <ConfigProvider>
            <Router>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("menu") view=MenuPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("book") view=BookPage/>
                </Routes>
            </Router>
        </ConfigProvider>
    }
}
