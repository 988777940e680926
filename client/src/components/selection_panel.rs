//! Tier-1 view: a category's grid of product cards.

use gallery::engine::{Command, Origin};
use gallery::views::{ProductCard, SelectionView};
use leptos::prelude::*;

use crate::host::Host;

#[component]
pub fn SelectionPanel(selection: SelectionView) -> impl IntoView {
    let host = expect_context::<Host>();
    let stage = host.stage;
    let SelectionView { key, title, product_cards } = selection;

    let style = {
        let key = key.clone();
        move || stage.with(|s| s.view_style(&key))
    };

    let cards = product_cards
        .into_iter()
        .map(|card| {
            let ProductCard { product_id, card_img, title } = card;
            let target = product_id.clone();
            let alt = title.clone();
            let on_select = move |_: leptos::ev::MouseEvent| host.dispatch(Command::Open { view_id: target.clone(), origin: Origin::Card });
            view! {
                <div
                    class="product-card"
                    data-target-content=product_id
                    data-prev-content=key.clone()
                    on:click=on_select
                >
                    <img src=card_img alt=alt class="card-image"/>
                    <p class="card-title">{title}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div id=key.clone() class="modal-content-block selection-view" style=style>
            <p class="card-heading">{title}</p>
            <div class="product-selection-grid">{cards}</div>
        </div>
    }
}
