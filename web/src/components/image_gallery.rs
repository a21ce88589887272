use leptos::ev;
use leptos::prelude::*;
use shared_types::{GalleryImage, Lightbox};

use crate::components::modal::Modal;

#[component]
pub fn ImageGallery(images: Vec<GalleryImage>, #[prop(default = 3)] columns: usize) -> impl IntoView {
    let lightbox = RwSignal::new(Lightbox::new(images.len()));
    let is_open = Signal::derive(move || lightbox.get().current().is_some());
    let close = move || lightbox.update(|lb| lb.close());

    // Arrow keys step through the lightbox while it is open
    let handle = window_event_listener(ev::keydown, move |ev| {
        if lightbox.get_untracked().current().is_none() {
            return;
        }
        match ev.key().as_str() {
            "ArrowLeft" => lightbox.update(|lb| lb.previous()),
            "ArrowRight" => lightbox.update(|lb| lb.next()),
            _ => {}
        }
    });
    on_cleanup(move || handle.remove());

    let tiles = images
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, image)| {
            view! {
                <div class="image-gallery__tile" on:click=move |_| lightbox.update(|lb| lb.open(index))>
                    <img src=image.src alt=image.alt loading="lazy" />
                    <div class="image-gallery__overlay">
                        {image.title.map(|title| view! { <h3>{title}</h3> })}
                        {image.description.map(|description| view! { <p>{description}</p> })}
                    </div>
                </div>
            }
        })
        .collect_view();

    let images = StoredValue::new(images);
    let selected = move || {
        lightbox
            .get()
            .current()
            .and_then(|index| images.with_value(|images| images.get(index).cloned()))
    };

    view! {
        <div class=format!("image-gallery image-gallery--cols-{}", columns)>{tiles}</div>

        <Modal open=is_open on_close=close class="lightbox">
            {move || {
                selected()
                    .map(|image| {
                        view! {
                            <figure class="lightbox__figure">
                                <img src=image.src alt=image.alt />
                                <figcaption>
                                    {image.title.map(|title| view! { <h3>{title}</h3> })}
                                    {image.description.map(|description| view! { <p>{description}</p> })}
                                </figcaption>
                            </figure>
                        }
                    })
            }}
            <div class="lightbox__nav">
                <button aria-label="Previous image" on:click=move |_| lightbox.update(|lb| lb.previous())>
                    "‹"
                </button>
                <button aria-label="Next image" on:click=move |_| lightbox.update(|lb| lb.next())>
                    "›"
                </button>
            </div>
        </Modal>
    }
}
