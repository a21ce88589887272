use leptos::logging::warn;
use leptos::prelude::*;
use shared_types::newsletter::{
    record_dismissal, should_auto_open, RESET_DELAY_MS, SUBMIT_DELAY_MS, SUCCESS_CLOSE_DELAY_MS,
};
use shared_types::{popup_delay_ms, NewsletterPhase, NewsletterPopup, PopupPosition};
use std::time::Duration;
use thaw::*;

use crate::app::use_loaded_site_settings;
use crate::utils::clock;
use crate::utils::storage::BrowserStore;

#[component]
pub fn NewsletterSignup(
    /// Overrides the site-wide popup delay.
    #[prop(optional)]
    delay_ms: Option<u64>,
    #[prop(optional)] position: PopupPosition,
) -> impl IntoView {
    let settings = use_loaded_site_settings();
    let popup = RwSignal::new(NewsletterPopup::default());
    let email = RwSignal::new(String::new());
    let scheduled = RwSignal::new(false);

    let wants_auto_open = move || match should_auto_open(&BrowserStore, clock::now_utc()) {
        Ok(open) => open,
        Err(e) => {
            warn!("Could not read newsletter dismissal: {}", e);
            true
        }
    };

    // Effects only run in the browser, so the timer never starts during SSR
    Effect::new(move |_| {
        // Wait for the server's settings so a configured delay is honoured
        let Some(delay) = settings.with(|settings| popup_delay_ms(delay_ms, settings.as_ref())) else {
            return;
        };
        if scheduled.get_untracked() || !wants_auto_open() {
            return;
        }
        scheduled.set(true);
        set_timeout(
            move || {
                // The visitor may have opened and closed it by hand meanwhile
                if wants_auto_open() {
                    popup.update(|p| p.open());
                }
            },
            Duration::from_millis(delay),
        );
    });

    let close_popup = move || {
        popup.update(|p| p.close());
        if let Err(e) = record_dismissal(&BrowserStore, clock::now_utc()) {
            warn!("Could not remember newsletter dismissal: {}", e);
        }
        set_timeout(
            move || popup.update(|p| p.reset()),
            Duration::from_millis(RESET_DELAY_MS),
        );
    };

    let handle_submit = move || {
        let mut outcome = None;
        popup.update(|p| outcome = Some(p.submit(&email.get_untracked())));
        if let Some(Ok(_)) = outcome {
            set_timeout(
                move || {
                    popup.update(|p| p.complete());
                    email.set(String::new());
                    set_timeout(close_popup, Duration::from_millis(SUCCESS_CLOSE_DELAY_MS));
                },
                Duration::from_millis(SUBMIT_DELAY_MS),
            );
        }
    };

    let is_submitting = Signal::derive(move || popup.get().phase == NewsletterPhase::Submitting);

    view! {
        <Show when=move || !popup.get().is_open()>
            <button
                class="newsletter-reopen"
                aria-label="Subscribe to newsletter"
                on:click=move |_| popup.update(|p| p.open())
            >
                "✉"
            </button>
        </Show>

        <Show when=move || popup.get().is_open()>
            <div class=position.class()>
                <div class="newsletter-popup__card">
                    <button
                        class="newsletter-popup__close"
                        aria-label="Close newsletter popup"
                        on:click=move |_| close_popup()
                    >
                        "×"
                    </button>
                    <h3>"Join Our Community"</h3>
                    <p class="newsletter-popup__intro">
                        "Subscribe to our newsletter for exclusive offers, events, and behind-the-scenes content."
                    </p>

                    {move || {
                        if popup.get().phase == NewsletterPhase::Subscribed {
                            view! {
                                <div class="newsletter-popup__success">
                                    <h4>"Thank You!"</h4>
                                    <p>"You've been added to our mailing list."</p>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <form on:submit=move |ev| {
                                    ev.prevent_default();
                                    handle_submit();
                                }>
                                    <Input
                                        input_type=InputType::Email
                                        placeholder="Your email address"
                                        value=email
                                    />
                                    {move || {
                                        popup
                                            .get()
                                            .error
                                            .map(|error| view! { <p class="field-error">{error.to_string()}</p> })
                                    }}
                                    <Button
                                        button_type=ButtonType::Submit
                                        appearance=ButtonAppearance::Primary
                                        disabled=is_submitting
                                        loading=is_submitting
                                    >
                                        {move || if is_submitting.get() { "Subscribing..." } else { "Subscribe" }}
                                    </Button>
                                </form>
                            }
                                .into_any()
                        }
                    }}

                    <p class="newsletter-popup__privacy">
                        "We respect your privacy and will never share your information."
                    </p>
                </div>
            </div>
        </Show>
    }
}
