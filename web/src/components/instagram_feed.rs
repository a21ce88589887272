use leptos::prelude::*;
use shared_types::content::latest_posts;
use shared_types::InstagramPost;
use std::time::Duration;

use crate::app::use_site_settings;
use crate::components::loading::LoadingView;
use crate::data::instagram_posts;

/// Stand-in for the Instagram API round trip.
const SIMULATED_FETCH_MS: u64 = 1_000;

#[component]
pub fn InstagramFeed(#[prop(optional, into)] post_count: Option<Signal<usize>>) -> impl IntoView {
    let settings = use_site_settings();
    let post_count =
        post_count.unwrap_or_else(|| Signal::derive(move || settings.get().instagram_post_count));
    let posts = RwSignal::new(None::<Vec<InstagramPost>>);

    Effect::new(move |_| {
        let count = post_count.get();
        posts.set(None);
        set_timeout(
            move || posts.set(Some(latest_posts(&instagram_posts(), count))),
            Duration::from_millis(SIMULATED_FETCH_MS),
        );
    });

    view! {
        <div class="instagram-feed">
            <div class="instagram-feed__header">
                <h2>"Instagram"</h2>
                <p>
                    "Follow us "
                    <a href=move || settings.get().instagram_url() target="_blank" rel="noopener noreferrer">
                        {move || format!("@{}", settings.get().instagram_handle)}
                    </a>
                    " for daily inspiration and behind-the-scenes moments"
                </p>
            </div>

            {move || match posts.get() {
                None => view! { <LoadingView message="Loading latest posts..." /> }.into_any(),
                Some(posts) => {
                    view! {
                        <div class="instagram-feed__grid">
                            <For
                                each=move || posts.clone()
                                key=|post| post.id.clone()
                                children=move |post| {
                                    view! {
                                        <a class="instagram-feed__post" href=post.permalink target="_blank" rel="noopener noreferrer">
                                            <img src=post.image_url alt=post.caption.clone() loading="lazy" />
                                            <div class="instagram-feed__overlay">
                                                <p>{post.caption}</p>
                                                <span class="instagram-feed__likes">{format!("♥ {}", post.likes)}</span>
                                            </div>
                                        </a>
                                    }
                                }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}

            <div class="instagram-feed__more">
                <a href=move || settings.get().instagram_url() target="_blank" rel="noopener noreferrer">
                    "View More on Instagram"
                </a>
            </div>
        </div>
    }
}
