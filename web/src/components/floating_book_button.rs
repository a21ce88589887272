use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;

/// Scroll distance in pixels after which the button appears.
pub const SHOW_AFTER_SCROLL_PX: f64 = 300.0;

#[component]
pub fn FloatingBookButton() -> impl IntoView {
    let visible = RwSignal::new(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        let scrolled = window().scroll_y().unwrap_or_default();
        visible.set(scrolled > SHOW_AFTER_SCROLL_PX);
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class=move || {
            if visible.get() {
                "floating-book floating-book--visible"
            } else {
                "floating-book"
            }
        }>
            <A href="/book" attr:class="floating-book__button">
                "Book a Table"
            </A>
        </div>
    }
}
