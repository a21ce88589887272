use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::use_site_settings;
use crate::utils::clock::current_year;
use crate::utils::format::{directions_url, map_embed_url, phone_href};

const LOGO_URL: &str =
    "https://2r66v53nwmfsqes8.public.blob.vercel-storage.com/Logo-THJYQlFkccpv4bJXjsOHucdIpZS6lP.jpg";

/// Page chrome shared by every route: header, footer and scroll helper.
#[component]
pub fn Layout(#[prop(optional)] transparent_header: bool, children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar transparent=transparent_header />
            <main class="layout__main">{children()}</main>
            <Footer />
            <ScrollToTopButton />
        </div>
    }
}

#[component]
pub fn Navbar(#[prop(optional)] transparent: bool) -> impl IntoView {
    let mobile_open = RwSignal::new(false);
    let close_mobile = move |_| mobile_open.set(false);

    view! {
        <header class=if transparent { "navbar navbar--transparent" } else { "navbar" }>
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        <img src=LOGO_URL alt="The Rug Cafe Logo" />
                    </A>
                </div>

                <nav class="navbar__links">
                    <A href="/" attr:class="navbar__link">
                        "Home"
                    </A>
                    <A href="/menu" attr:class="navbar__link">
                        "Menu"
                    </A>
                    <A href="/about" attr:class="navbar__link">
                        "About"
                    </A>
                    <A href="/book" attr:class="navbar__link navbar__link--cta">
                        "Book a Table"
                    </A>
                </nav>

                <button
                    class="navbar__toggle"
                    aria-label="Open menu"
                    aria-expanded=move || mobile_open.get().to_string()
                    on:click=move |_| mobile_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>

                <Show when=move || mobile_open.get()>
                    <nav class="navbar__mobile" aria-label="Mobile navigation menu">
                        <A href="/" attr:class="navbar__link" on:click=close_mobile>
                            "Home"
                        </A>
                        <A href="/menu" attr:class="navbar__link" on:click=close_mobile>
                            "Menu"
                        </A>
                        <A href="/about" attr:class="navbar__link" on:click=close_mobile>
                            "About"
                        </A>
                        <A href="/book" attr:class="navbar__link navbar__link--cta" on:click=close_mobile>
                            "Book a Table"
                        </A>
                    </nav>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let settings = use_site_settings();

    view! {
        <footer class="footer">
            <div class="footer__container">
                <div class="footer__location">
                    <img class="footer__logo" src=LOGO_URL alt="The Rug Cafe Logo" />
                    <p class="footer__address">{move || settings.get().address}</p>
                    <iframe
                        class="footer__map"
                        title="The Rug Cafe Map"
                        src=move || map_embed_url(&settings.get().address)
                        width="100%"
                        height="180"
                        {leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                        referrerpolicy="no-referrer-when-downgrade"
                        allowfullscreen=true
                    ></iframe>
                    <a
                        class="footer__directions"
                        href=move || directions_url(&settings.get().address)
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Get Directions"
                    </a>
                </div>

                <div class="footer__contact">
                    <p class="footer__hours">{move || settings.get().opening_hours}</p>
                    <a class="footer__phone" href=move || phone_href(&settings.get().phone)>
                        {move || settings.get().phone}
                    </a>
                    <a
                        class="footer__instagram"
                        href=move || settings.get().instagram_url()
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Instagram"
                    </a>
                </div>
            </div>

            <p class="footer__copyright">
                {format!("© {} The Rug Café. All rights reserved.", current_year())}
            </p>
        </footer>
    }
}

#[component]
pub fn ScrollToTopButton() -> impl IntoView {
    let visible = RwSignal::new(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        visible.set(window().scroll_y().unwrap_or_default() > 300.0);
    });
    on_cleanup(move || handle.remove());

    let scroll_to_top = move |_| {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <Show when=move || visible.get()>
            <button class="scroll-to-top" aria-label="Scroll to top" on:click=scroll_to_top>
                "↑"
            </button>
        </Show>
    }
}
