use leptos::prelude::*;
use shared_types::{filter_sections, DietaryFilter, MenuItem, MenuSection, SectionExpansion};
use thaw::*;

use crate::components::modal::Modal;

fn dietary_tags(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="menu__tags">
            {tags.into_iter().map(|tag| view! { <span class="menu__tag">{tag}</span> }).collect_view()}
        </div>
    }
}

#[component]
pub fn EnhancedMenu(sections: Vec<MenuSection>) -> impl IntoView {
    let (active_filter, set_active_filter) = signal(DietaryFilter::All);
    let expansion = RwSignal::new(SectionExpansion::default());
    let selected = RwSignal::new(None::<MenuItem>);

    let filtered = Memo::new(move |_| filter_sections(&sections, active_filter.get()));

    let is_open = Signal::derive(move || selected.with(Option::is_some));
    let close = move || selected.set(None);

    view! {
        <div class="menu">
            <div class="menu__filters">
                {DietaryFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        view! {
                            <button
                                class=move || {
                                    if active_filter.get() == filter {
                                        "menu__filter menu__filter--active"
                                    } else {
                                        "menu__filter"
                                    }
                                }
                                on:click=move |_| set_active_filter.set(filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                let sections = filtered.get();
                if sections.is_empty() {
                    view! {
                        <div class="menu__empty">
                            <p>"No items match your dietary preference."</p>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| set_active_filter.set(DietaryFilter::All)
                            >
                                "View All Items"
                            </Button>
                        </div>
                    }
                        .into_any()
                } else {
                    sections
                        .into_iter()
                        .map(|section| {
                            let MenuSection { name: title, description, items } = section;
                            let name = StoredValue::new(title.clone());
                            view! {
                                <div class="menu__section">
                                    <button
                                        class="menu__section-header"
                                        on:click=move |_| name.with_value(|name| expansion.update(|e| e.toggle(name)))
                                    >
                                        <div>
                                            <h2>{title}</h2>
                                            <p>{description}</p>
                                        </div>
                                        <span class=move || {
                                            if name.with_value(|name| expansion.with(|e| e.is_expanded(name))) {
                                                "menu__chevron menu__chevron--open"
                                            } else {
                                                "menu__chevron"
                                            }
                                        }>"⌄"</span>
                                    </button>
                                    <Show when=move || name.with_value(|name| expansion.with(|e| e.is_visible(name)))>
                                        <div class="menu__items">
                                            {items
                                                .iter()
                                                .cloned()
                                                .map(|item| {
                                                    let detail = item.clone();
                                                    view! {
                                                        <div class="menu__item" on:click=move |_| selected.set(Some(detail.clone()))>
                                                            <div class="menu__item-row">
                                                                <div class="menu__item-text">
                                                                    <h3>
                                                                        {item.name.clone()}
                                                                        {item.featured.then(|| view! { <span class="menu__featured">"Featured"</span> })}
                                                                    </h3>
                                                                    <p>{item.description.clone()}</p>
                                                                    {dietary_tags(item.dietary.clone())}
                                                                </div>
                                                                <span class="menu__price">{item.price.clone()}</span>
                                                            </div>
                                                            {item.image.clone().map(|src| view! { <img class="menu__item-image" src=src alt=item.name.clone() /> })}
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}

            <Modal open=is_open on_close=close class="menu__modal">
                {move || {
                    selected
                        .get()
                        .map(|item| {
                            view! {
                                <div class="menu__detail">
                                    {item.image.clone().map(|src| view! { <img src=src alt=item.name.clone() /> })}
                                    <div class="menu__detail-header">
                                        <h3>{item.name.clone()}</h3>
                                        <span class="menu__price">{item.price.clone()}</span>
                                    </div>
                                    <p>{item.description.clone()}</p>
                                    {dietary_tags(item.dietary.clone())}
                                    <Button appearance=ButtonAppearance::Primary on_click=move |_| close()>
                                        "Close"
                                    </Button>
                                </div>
                            }
                        })
                }}
            </Modal>
        </div>
    }
}
