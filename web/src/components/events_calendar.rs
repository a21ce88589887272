use leptos::prelude::*;
use shared_types::events::{first_of_month, shift_month, FEATURED_EVENT_LIMIT};
use shared_types::{events_on_day, upcoming_events, Event, MonthGrid};

use crate::components::modal::Modal;
use crate::utils::clock;
use crate::utils::format::{event_detail_date, event_list_date};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[component]
pub fn EventsCalendar(events: Vec<Event>) -> impl IntoView {
    let today = clock::today();
    let current_month = RwSignal::new(first_of_month(today));
    let selected = RwSignal::new(None::<Event>);
    let events = StoredValue::new(events);

    let grid = Memo::new(move |_| {
        events.with_value(|events| MonthGrid::build(current_month.get(), today, events))
    });

    let featured = events.with_value(|events| {
        upcoming_events(events, clock::now(), FEATURED_EVENT_LIMIT)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    let is_open = Signal::derive(move || selected.with(Option::is_some));
    let close = move || selected.set(None);

    view! {
        <div class="events">
            <div class="events__header">
                <h2>"Upcoming Events"</h2>
                <p>"Join us for special nights, workshops, and community gatherings"</p>
            </div>

            <div class="events__nav">
                <button
                    aria-label="Previous month"
                    on:click=move |_| current_month.update(|month| *month = shift_month(*month, -1))
                >
                    "‹"
                </button>
                <h3>{move || grid.get().title()}</h3>
                <button
                    aria-label="Next month"
                    on:click=move |_| current_month.update(|month| *month = shift_month(*month, 1))
                >
                    "›"
                </button>
            </div>

            <div class="events__grid">
                {WEEKDAYS
                    .iter()
                    .map(|day| view! { <div class="events__weekday">{*day}</div> })
                    .collect_view()}
                {move || {
                    let grid = grid.get();
                    let leading = (0..grid.leading_blanks)
                        .map(|_| view! { <div class="events__cell events__cell--blank"></div> }.into_any());
                    let trailing = (0..grid.trailing_blanks)
                        .map(|_| view! { <div class="events__cell events__cell--blank"></div> }.into_any());
                    let days = grid
                        .days
                        .into_iter()
                        .map(|cell| {
                            let day_events: Vec<Event> = events
                                .with_value(|events| {
                                    events_on_day(events, cell.date).into_iter().cloned().collect()
                                });
                            let class = if cell.is_today {
                                "events__cell events__cell--today"
                            } else if cell.event_count > 0 {
                                "events__cell events__cell--has-events"
                            } else {
                                "events__cell"
                            };
                            let label = match day_events.as_slice() {
                                [] => None,
                                [only] => Some(only.title.clone()),
                                many => Some(format!("{} events", many.len())),
                            };
                            let single = match day_events.as_slice() {
                                [only] => Some(only.clone()),
                                _ => None,
                            };
                            view! {
                                <div
                                    class=class
                                    on:click=move |_| {
                                        if let Some(event) = single.clone() {
                                            selected.set(Some(event));
                                        }
                                    }
                                >
                                    <span class="events__day-number">{cell.date.format("%-d").to_string()}</span>
                                    {label.map(|label| view! { <span class="events__label">{label}</span> })}
                                </div>
                            }
                                .into_any()
                        });
                    leading.chain(days).chain(trailing).collect_view()
                }}
            </div>

            <div class="events__featured">
                <h3>"Featured Events"</h3>
                <div class="events__featured-grid">
                    {featured
                        .into_iter()
                        .map(|event| {
                            let card = event.clone();
                            view! {
                                <div class="events__card" on:click=move |_| selected.set(Some(card.clone()))>
                                    {event
                                        .image
                                        .clone()
                                        .map(|src| view! { <img src=src alt=event.title.clone() /> })}
                                    <div class="events__card-body">
                                        <div class="events__card-meta">
                                            <span class="events__card-date">{event_list_date(event.date)}</span>
                                            <span class="events__card-time">{event.time.clone()}</span>
                                        </div>
                                        <h4>{event.title.clone()}</h4>
                                        <p>{event.description.clone()}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Modal open=is_open on_close=close class="events__modal">
                {move || {
                    selected
                        .get()
                        .map(|event| {
                            view! {
                                <div class="events__detail">
                                    {event.image.clone().map(|src| view! { <img src=src alt=event.title.clone() /> })}
                                    <h3>{event.title.clone()}</h3>
                                    <div class="events__card-meta">
                                        <span>{event_detail_date(event.date)}</span>
                                        <span>{event.time.clone()}</span>
                                    </div>
                                    <p>{event.description.clone()}</p>
                                    <div class="events__detail-actions">
                                        {event
                                            .ticket_link
                                            .clone()
                                            .map(|href| {
                                                view! {
                                                    <a class="button button--primary" href=href target="_blank" rel="noopener noreferrer">
                                                        "Book Tickets"
                                                    </a>
                                                }
                                            })}
                                        <button class="button" on:click=move |_| close()>
                                            "Close"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Modal>
        </div>
    }
}
