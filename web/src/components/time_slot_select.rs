use chrono::NaiveDate;
use leptos::prelude::*;
use shared_types::compute_time_slots;

use crate::utils::clock;

/// Time dropdown for the booking form. Every slot of the day is listed;
/// slots that cannot be booked are shown disabled.
#[component]
pub fn TimeSlotSelect(
    #[prop(into)] selected_date: Signal<String>,
    selected_time: RwSignal<String>,
    #[prop(into)] has_error: Signal<bool>,
) -> impl IntoView {
    let date = Memo::new(move |_| NaiveDate::parse_from_str(selected_date.get().trim(), "%Y-%m-%d").ok());
    let slots = Memo::new(move |_| {
        date.get()
            .map(|date| compute_time_slots(date, clock::now()))
            .unwrap_or_default()
    });

    // Drop a previously chosen time that the new date no longer allows
    Effect::new(move |_| {
        let slots = slots.get();
        let current = selected_time.get_untracked();
        if current.is_empty() {
            return;
        }
        let still_open = slots
            .iter()
            .any(|slot| !slot.disabled && slot.time.to_string() == current);
        if !still_open {
            selected_time.set(String::new());
        }
    });

    view! {
        <select
            id="booking-time"
            class=move || if has_error.get() { "form-select form-select--error" } else { "form-select" }
            disabled=move || date.get().is_none()
            prop:value=move || selected_time.get()
            on:change=move |ev| selected_time.set(event_target_value(&ev))
        >
            <option value="">"Select a time"</option>
            {move || {
                slots
                    .get()
                    .into_iter()
                    .map(|slot| {
                        let label = slot.time.to_string();
                        view! {
                            <option value=label.clone() disabled=slot.disabled>
                                {label.clone()}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
        <Show when=move || date.get().is_none()>
            <p class="form-hint">"Please select a date first"</p>
        </Show>
    }
}
