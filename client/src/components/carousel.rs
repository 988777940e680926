//! Image carousel with arrow buttons and swipe navigation.
//!
//! Slide state lives in the engine. The active slide is the one whose class
//! includes `active`; CSS handles the cross-fade.

use gallery::engine::Command;
use leptos::prelude::*;

use crate::host::Host;
use crate::scene::client_touches;

#[component]
pub fn Carousel(carousel_id: String, images: Vec<String>, alt: String) -> impl IntoView {
    let host = expect_context::<Host>();
    let stage = host.stage;

    let slides = images
        .into_iter()
        .enumerate()
        .map(|(i, src)| {
            let id = carousel_id.clone();
            let class = move || stage.with(|s| s.slide_class(&id, i + 1));
            view! { <img class=class src=src alt=alt.clone()/> }
        })
        .collect_view();

    let advance = {
        let carousel_id = carousel_id.clone();
        move |delta: i32| host.dispatch(Command::Advance { carousel_id: carousel_id.clone(), delta })
    };
    let prev = advance.clone();
    let next = advance;
    let swipe_id = carousel_id.clone();

    view! {
        <div
            class="image-carousel"
            id=carousel_id
            on:touchstart=move |e| host.carousel_touch_start(&swipe_id, &client_touches(&e))
            on:touchmove=move |e| host.carousel_touch_move(&client_touches(&e))
            on:touchend=move |_| host.carousel_touch_end()
        >
            <div class="slides-container">{slides}</div>
            <button class="prev-btn" aria-label="Previous image" on:click=move |_| prev(-1)>
                "❮"
            </button>
            <button class="next-btn" aria-label="Next image" on:click=move |_| next(1)>
                "❯"
            </button>
        </div>
    }
}
