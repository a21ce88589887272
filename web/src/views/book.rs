use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{BookingFormView, Layout};

#[component]
pub fn BookPage() -> impl IntoView {
    view! {
        <Title text="Book a Table | The Rug Café" />
        <Layout>
            <section class="book">
                <h1>"Book Your Visit"</h1>
                <p class="book__intro">
                    "Join us for a coffee, brunch, or special event. We recommend booking in advance, especially for weekends."
                </p>
                <BookingFormView />
            </section>
        </Layout>
    }
}
