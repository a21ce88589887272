use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

/// Centered spinner shown while mocked content is "fetched".
#[component]
pub fn LoadingView(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container">
            <Spinner size=SpinnerSize::Large />
            {message.map(|message| view! { <p class="loading-message">{message}</p> })}
        </div>
    }
}
