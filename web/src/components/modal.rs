use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog. Clicking the backdrop, the close button or pressing
/// Escape calls `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: impl Fn() + Copy + Send + Sync + 'static,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if open.get_untracked() && ev.key() == "Escape" {
            on_close();
        }
    });
    on_cleanup(move || handle.remove());

    let class = format!("modal {}", class);

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close()>
                <div
                    class=class.clone()
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button class="modal__close" aria-label="Close" on:click=move |_| on_close()>
                        "×"
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
