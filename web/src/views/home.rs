use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::{
    EventsCalendar, FloatingBookButton, ImageGallery, InstagramFeed, Layout, NewsletterSignup,
    TeamSection,
};
use crate::data;
use crate::utils::clock;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="The Rug Café | Specialty Coffee & Brunch on Harrow Road" />
        <Layout transparent_header=true>
            <section class="hero">
                <div
                    class="hero__background"
                    style=format!("background-image: url('{}')", data::hero_background())
                ></div>
                <div class="hero__content">
                    <h1>"Slow down. Sip. Savour."</h1>
                    <p>"Specialty coffee & modern brunch with Asian touches in a historic London pub"</p>
                    <div class="hero__actions">
                        <A href="/book" attr:class="button button--primary">
                            "Book a Table"
                        </A>
                        <A href="/menu" attr:class="button button--outline">
                            "View Menu"
                        </A>
                    </div>
                </div>
                <div class="hero__scroll">"Scroll to explore"</div>
            </section>

            <section id="about" class="story">
                <img
                    class="story__portrait"
                    src="https://images.unsplash.com/photo-1517841905240-472988babdf9?auto=format&fit=facearea&w=200&q=80"
                    alt="Founder portrait"
                />
                <div>
                    <h2>"Our Story"</h2>
                    <p>
                        "The Rug Café was born from a love of great coffee, community, and the vibrant flavors of London. Founded by "
                        <strong>"Samira & the team"</strong>
                        ", our mission is to create a welcoming space where everyone can slow down, sip, and savour the moment. Whether you're here for a quick espresso or a long brunch with friends, we hope you feel at home."
                    </p>
                    <blockquote>"“We believe every cup tells a story. Thank you for being part of ours.”"</blockquote>
                </div>
            </section>

            <section class="featured">
                <h2>"Featured Delights"</h2>
                <ImageGallery images=data::featured_images() columns=3 />
            </section>

            <section class="testimonials">
                <h2>"What Our Guests Say"</h2>
                <div class="testimonials__row">
                    {data::testimonials()
                        .into_iter()
                        .map(|testimonial| {
                            view! {
                                <div class="testimonials__card">
                                    <img src=testimonial.avatar alt="Happy customer" />
                                    <p>{format!("\"{}\"", testimonial.quote)}</p>
                                    <span>{format!("— {}", testimonial.author)}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <TeamSection members=data::team_members() />
            </section>

            <section class="section section--tinted">
                <EventsCalendar events=data::events(clock::today()) />
            </section>

            <section class="section">
                <InstagramFeed />
            </section>

            <section class="highlights">
                <h2>"Current Favorites"</h2>
                <div class="highlights__grid">
                    {data::menu_highlights()
                        .into_iter()
                        .map(|image| {
                            view! {
                                <div class="highlights__card">
                                    <img src=image.src alt=image.alt />
                                    <div class="highlights__overlay">
                                        <h3>{image.title}</h3>
                                        <p>"Discover our seasonal selection"</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="heritage">
                <h2>"Our Story"</h2>
                <p>
                    "The Café brings new life to the historic Windsor Castle pub (est. 1829), combining London's pub heritage with modern specialty coffee culture."
                </p>
                <p>
                    "We focus on sustainability, working with local suppliers and creating a welcoming neighborhood space where everyone can slow down and savor the moment."
                </p>
            </section>
        </Layout>

        <FloatingBookButton />
        <NewsletterSignup />
    }
}
