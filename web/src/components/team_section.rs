use leptos::prelude::*;
use shared_types::TeamMember;

use crate::components::modal::Modal;

#[component]
pub fn TeamSection(members: Vec<TeamMember>) -> impl IntoView {
    let selected = RwSignal::new(None::<TeamMember>);
    let is_open = Signal::derive(move || selected.with(Option::is_some));
    let close = move || selected.set(None);

    view! {
        <div class="team">
            <h2 class="team__title">"Meet Our Team"</h2>
            <p class="team__subtitle">"The passionate people behind every cup and plate at The Rug Café"</p>

            <div class="team__grid">
                {members
                    .into_iter()
                    .map(|member| {
                        let name = member.name.clone();
                        let role = member.role.clone();
                        let image = member.image.clone();
                        view! {
                            <div class="team__card" on:click=move |_| selected.set(Some(member.clone()))>
                                <img src=image alt=name.clone() />
                                <div class="team__card-caption">
                                    <h3>{name.clone()}</h3>
                                    <p>{role}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <Modal open=is_open on_close=close class="team__modal">
                {move || {
                    selected
                        .get()
                        .map(|member| {
                            view! {
                                <div class="team__detail">
                                    <img src=member.image alt=member.name.clone() />
                                    <div class="team__detail-body">
                                        <h3>{member.name}</h3>
                                        <p class="team__role">{member.role}</p>
                                        <p>{member.bio}</p>
                                        {member
                                            .favorite_item
                                            .map(|item| {
                                                view! {
                                                    <div class="team__favorite">
                                                        <p class="team__favorite-label">"Favorite Menu Item:"</p>
                                                        <p>{item}</p>
                                                    </div>
                                                }
                                            })}
                                        <button class="button button--primary" on:click=move |_| close()>
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
