use leptos::prelude::*;
use thaw::{MessageBar, MessageBarBody, MessageBarIntent, MessageBarTitle};

#[component]
pub fn ErrorView(
    #[prop(optional, into)] title: Option<String>,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            <MessageBarBody>
                {title.map(|title| view! { <MessageBarTitle>{title}</MessageBarTitle> })}
                {message}
            </MessageBarBody>
        </MessageBar>
    }
}
