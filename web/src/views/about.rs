use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::use_site_settings;
use crate::components::{Layout, TeamSection};
use crate::data;
use crate::utils::format::directions_url;

#[component]
pub fn AboutPage() -> impl IntoView {
    let settings = use_site_settings();

    view! {
        <Title text="About | The Rug Café" />
        <Layout>
            <section class="page-hero">
                <h1>"Our Story"</h1>
                <p>"A place to slow down, connect, and savor the moment"</p>
            </section>

            <div class="about">
                <section class="about__philosophy">
                    <p>
                        "Amid the city's rhythm, " <span class="brand">"the rug"</span>
                        " offers a sanctuary to eat, drink, and relax. We bring together modern brunch with Asian flavours and a welcoming coffeehouse experience."
                    </p>
                    <p>
                        "We take pride in supporting small London producers, celebrating craft, and championing sustainability in everything we do."
                    </p>
                </section>

                <section class="about__images">
                    {data::about_images()
                        .into_iter()
                        .map(|image| view! { <img src=image.src alt=image.alt /> })
                        .collect_view()}
                </section>

                <section class="about__history">
                    <h2>"A Little History"</h2>
                    <p>
                        "The Windsor Castle opened in 1829 and, by the 1960s, had become a renowned music venue, hosting early gigs by The Rolling Stones and U2."
                    </p>
                    <p>"Then one day, the doors closed. For fifteen years, the building stood empty, until we moved in."</p>
                    <p>
                        "Driven by a vision to bring new life to this old pub, we started "
                        <span class="brand">"the rug"</span>
                        ", a place for the community once again. A little oasis on Harrow Road."
                    </p>
                </section>

                <section class="about__team">
                    <TeamSection members=data::team_members() />
                </section>

                <section class="about__visit">
                    <h2>"Visit Us"</h2>
                    <p>{move || settings.get().address}</p>
                    <p>{move || settings.get().opening_hours}</p>
                    <a
                        class="button button--primary"
                        href=move || directions_url(&settings.get().address)
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Get Directions"
                    </a>
                </section>
            </div>
        </Layout>
    }
}
