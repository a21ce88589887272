use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{EnhancedMenu, ImageGallery, Layout};
use crate::data;

#[component]
pub fn MenuPage() -> impl IntoView {
    view! {
        <Title text="Menu | The Rug Café" />
        <Layout>
            <section class="page-hero">
                <h1>"Our Menu"</h1>
                <p>
                    "We offer a carefully curated selection of specialty coffees and modern brunch dishes with Asian influences, using seasonal ingredients from local suppliers."
                </p>
            </section>

            <section class="section">
                <h2 class="section__title">"Our Creations"</h2>
                <ImageGallery images=data::menu_gallery() columns=3 />
            </section>

            <section class="section">
                <h2 class="section__title">"Menu Selection"</h2>
                <EnhancedMenu sections=data::menu_sections() />
            </section>

            <section class="section">
                <div class="chef-note">
                    <h3>"A Note from Our Chef"</h3>
                    <p class="chef-note__quote">
                        "\"Our menu changes with the seasons, always featuring the freshest ingredients from our trusted local suppliers. We believe in creating dishes that not only taste incredible but also tell a story, connecting traditional Asian flavors with modern London sensibilities. Every plate that leaves our kitchen is crafted with care and passion.\""
                    </p>
                    <div class="chef-note__author">
                        <img
                            src="https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&w=100&q=80"
                            alt="Chef Samira"
                        />
                        <div>
                            <p class="chef-note__name">"Samira Ahmed"</p>
                            <p class="chef-note__role">"Head Chef & Founder"</p>
                        </div>
                    </div>
                </div>
            </section>
        </Layout>
    }
}
