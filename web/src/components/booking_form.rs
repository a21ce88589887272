use leptos::logging::log;
use leptos::prelude::*;
use shared_types::availability::is_bookable;
use shared_types::{BookingField, BookingFieldError, BookingForm, PartySize, ReservationIntent};
use std::time::Duration;
use thaw::*;

use crate::components::error::ErrorView;
use crate::components::time_slot_select::TimeSlotSelect;
use crate::utils::clock;
use crate::utils::format::{input_date, long_date, short_date};

/// Simulated round trip to the reservation desk.
const PROCESSING_DELAY_MS: u64 = 1_500;

#[component]
pub fn BookingFormView() -> impl IntoView {
    // Form state
    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let party_size = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let special_requests = RwSignal::new(String::new());

    // UI state
    let show_all_errors = RwSignal::new(false);
    let is_submitting = RwSignal::new(false);
    let slot_expired = RwSignal::new(false);
    let confirmed = RwSignal::new(None::<ReservationIntent>);

    let form = Memo::new(move |_| BookingForm {
        date: date.get(),
        time: time.get(),
        party_size: party_size.get(),
        name: name.get(),
        email: email.get(),
        phone: phone.get(),
        special_requests: special_requests.get(),
    });

    // Empty fields only complain after a submit attempt; typed-in ones complain live
    let field_error = move |field: BookingField, value: RwSignal<String>| {
        Signal::derive(move || {
            let touched = show_all_errors.get() || !value.get().trim().is_empty();
            if touched {
                form.with(|form| form.error_for(field))
            } else {
                None
            }
        })
    };
    let date_error = field_error(BookingField::Date, date);
    let time_error = field_error(BookingField::Time, time);
    let party_error = field_error(BookingField::PartySize, party_size);
    let name_error = field_error(BookingField::Name, name);
    let email_error = field_error(BookingField::Email, email);
    let phone_error = field_error(BookingField::Phone, phone);

    let reset_form = move || {
        date.set(String::new());
        time.set(String::new());
        party_size.set(String::new());
        name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        special_requests.set(String::new());
        show_all_errors.set(false);
    };

    let handle_submit = move || {
        show_all_errors.set(true);
        slot_expired.set(false);
        let intent = match form.get_untracked().validate() {
            Ok(intent) => intent,
            Err(errors) => {
                log!("Booking form has {} invalid field(s)", errors.len());
                return;
            }
        };
        // The clock may have moved past the chosen slot while the form was open
        if !is_bookable(intent.date, intent.time, clock::now()) {
            time.set(String::new());
            slot_expired.set(true);
            return;
        }

        is_submitting.set(true);
        set_timeout(
            move || {
                confirmed.set(Some(intent));
                is_submitting.set(false);
                reset_form();
            },
            Duration::from_millis(PROCESSING_DELAY_MS),
        );
    };

    let render_error = |error: Signal<Option<BookingFieldError>>| {
        move || error.get().map(|e| view! { <p class="field-error">{e.to_string()}</p> })
    };

    view! {
        {move || match confirmed.get() {
            Some(intent) => view! { <BookingConfirmation intent=intent on_reset=move || confirmed.set(None) /> }.into_any(),
            None => view! {
                <form class="booking-form" on:submit=move |ev| {
                    ev.prevent_default();
                    if !is_submitting.get_untracked() {
                        handle_submit();
                    }
                }>
                    <div class="booking-form__columns">
                        <div class="form-section">
                            <h3>"Reservation Details"</h3>
                            <div class="form-group">
                                <label for="booking-date">"Date " <span class="required">"*"</span></label>
                                <input
                                    id="booking-date"
                                    type="date"
                                    class=move || if date_error.get().is_some() { "form-input form-input--error" } else { "form-input" }
                                    min=input_date(clock::today())
                                    prop:value=move || date.get()
                                    on:input=move |ev| date.set(event_target_value(&ev))
                                />
                                {render_error(date_error)}
                            </div>
                            <div class="form-group">
                                <label for="booking-time">"Time " <span class="required">"*"</span></label>
                                <TimeSlotSelect
                                    selected_date=date
                                    selected_time=time
                                    has_error=Signal::derive(move || time_error.get().is_some())
                                />
                                {render_error(time_error)}
                            </div>
                            <div class="form-group">
                                <label for="booking-party">"Party Size " <span class="required">"*"</span></label>
                                <select
                                    id="booking-party"
                                    class=move || if party_error.get().is_some() { "form-select form-select--error" } else { "form-select" }
                                    prop:value=move || party_size.get()
                                    on:change=move |ev| party_size.set(event_target_value(&ev))
                                >
                                    <option value="">"Select party size"</option>
                                    {PartySize::options()
                                        .into_iter()
                                        .map(|size| view! { <option value=size.value()>{size.to_string()}</option> })
                                        .collect_view()}
                                </select>
                                {render_error(party_error)}
                            </div>
                        </div>

                        <div class="form-section">
                            <h3>"Contact Information"</h3>
                            <div class="form-group">
                                <label for="booking-name">"Name " <span class="required">"*"</span></label>
                                <Input id="booking-name" placeholder="Your full name" value=name />
                                {render_error(name_error)}
                            </div>
                            <div class="form-group">
                                <label for="booking-email">"Email " <span class="required">"*"</span></label>
                                <Input
                                    id="booking-email"
                                    input_type=InputType::Email
                                    placeholder="your.email@example.com"
                                    value=email
                                />
                                {render_error(email_error)}
                            </div>
                            <div class="form-group">
                                <label for="booking-phone">"Phone " <span class="required">"*"</span></label>
                                <Input
                                    id="booking-phone"
                                    input_type=InputType::Tel
                                    placeholder="+44 XXX XXX XXXX"
                                    value=phone
                                />
                                {render_error(phone_error)}
                            </div>
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="booking-requests">"Special Requests or Dietary Requirements"</label>
                        <Textarea
                            id="booking-requests"
                            placeholder="Let us know of any special requests..."
                            value=special_requests
                        />
                    </div>

                    <Show when=move || slot_expired.get()>
                        <ErrorView
                            title="Slot unavailable"
                            message="That time is no longer available. Please choose another slot."
                        />
                    </Show>

                    <div class="form-actions">
                        <Button
                            button_type=ButtonType::Submit
                            appearance=ButtonAppearance::Primary
                            disabled=is_submitting
                            loading=is_submitting
                        >
                            {move || if is_submitting.get() { "Processing..." } else { "Confirm Booking" }}
                        </Button>
                    </div>

                    <Show when=move || form.with(BookingForm::has_summary)>
                        <div class="booking-summary">
                            <h4>"Booking Summary"</h4>
                            <div class="booking-summary__grid">
                                <div>
                                    <p class="booking-summary__label">"Date"</p>
                                    <p>
                                        {move || {
                                            chrono::NaiveDate::parse_from_str(&date.get(), "%Y-%m-%d")
                                                .map(short_date)
                                                .unwrap_or_else(|_| date.get())
                                        }}
                                    </p>
                                </div>
                                <div>
                                    <p class="booking-summary__label">"Time"</p>
                                    <p>{move || time.get()}</p>
                                </div>
                                <div>
                                    <p class="booking-summary__label">"Party Size"</p>
                                    <p>
                                        {move || {
                                            PartySize::parse(&party_size.get())
                                                .map(|size| size.to_string())
                                                .unwrap_or_else(|| party_size.get())
                                        }}
                                    </p>
                                </div>
                            </div>
                        </div>
                    </Show>
                </form>
            }.into_any(),
        }}
    }
}

#[component]
fn BookingConfirmation(
    intent: ReservationIntent,
    on_reset: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        <div class="booking-confirmation">
            <div class="booking-confirmation__header">
                <div class="success-icon">"✓"</div>
                <h3>"Booking Confirmed!"</h3>
                <p>"We're looking forward to seeing you soon."</p>
            </div>

            <div class="booking-confirmation__details">
                <h4>"Booking Details"</h4>
                <div class="booking-confirmation__grid">
                    <div>
                        <p class="booking-summary__label">"Date"</p>
                        <p>{long_date(intent.date)}</p>
                    </div>
                    <div>
                        <p class="booking-summary__label">"Time"</p>
                        <p>{intent.time.to_string()}</p>
                    </div>
                    <div>
                        <p class="booking-summary__label">"Party Size"</p>
                        <p>{intent.party_size.to_string()}</p>
                    </div>
                    <div>
                        <p class="booking-summary__label">"Name"</p>
                        <p>{intent.name.clone()}</p>
                    </div>
                    <div class="booking-confirmation__wide">
                        <p class="booking-summary__label">"Contact"</p>
                        <p>{format!("{} | {}", intent.email, intent.phone)}</p>
                    </div>
                    {intent
                        .special_requests
                        .clone()
                        .map(|requests| {
                            view! {
                                <div class="booking-confirmation__wide">
                                    <p class="booking-summary__label">"Special Requests"</p>
                                    <p>{requests}</p>
                                </div>
                            }
                        })}
                </div>
            </div>

            <p class="booking-confirmation__note">
                {format!("A confirmation email has been sent to {}", intent.email)}
            </p>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| on_reset()>
                "Make Another Booking"
            </Button>
        </div>
    }
}
