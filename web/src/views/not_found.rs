use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::Layout;

/// Fallback for unknown routes. Server rendering answers with HTTP 404.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    let navigate = use_navigate();

    view! {
        <Title text="Page Not Found | The Rug Café" />
        <Layout>
            <section class="not-found">
                <div class="not-found__code">"404"</div>
                <h1>"Page Not Found"</h1>
                <p>"Looks like this table has been cleared! The page you're looking for doesn't exist or may have been moved."</p>
                <div class="not-found__actions">
                    <button
                        class="button button--primary"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| {
                                navigate("/", Default::default());
                            }
                        }
                    >
                        "Go Home"
                    </button>
                    <button
                        class="button button--outline"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| {
                                navigate("/menu", Default::default());
                            }
                        }
                    >
                        "See the Menu"
                    </button>
                    <button
                        class="button button--outline"
                        on:click=move |_| {
                            navigate("/book", Default::default());
                        }
                    >
                        "Book a Table"
                    </button>
                </div>
            </section>
        </Layout>
    }
}
