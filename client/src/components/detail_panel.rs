//! Tier-2 view: one product's carousel and feature list.

use gallery::engine::Command;
use gallery::views::DetailView;
use leptos::prelude::*;

use crate::components::carousel::Carousel;
use crate::host::Host;

#[component]
pub fn DetailPanel(detail: DetailView) -> impl IntoView {
    let host = expect_context::<Host>();
    let stage = host.stage;
    let DetailView { product_id, title, images, features, carousel_id, prev_content } = detail;

    let style = {
        let id = product_id.clone();
        move || stage.with(|s| s.view_style(&id))
    };
    let alt = title.clone();
    let features = features.into_iter().map(|feature| view! { <li>{feature}</li> }).collect_view();

    view! {
        <div
            id=product_id
            class="modal-content-block product-detail-content"
            data-prev-content=prev_content
            style=style
        >
            <span class="back-button" role="button" aria-label="Back" on:click=move |_| host.dispatch(Command::Back)>
                "←"
            </span>
            <div class="modal-flex-container">
                <div class="modal-left-column">
                    <Carousel carousel_id=carousel_id images=images alt=alt/>
                </div>
                <div class="modal-right-column">
                    <h3 class="detail-title">{title}</h3>
                    <ul class="feature-list">{features}</ul>
                </div>
            </div>
        </div>
    }
}
