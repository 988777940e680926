//! Modal overlay holding every content view.

use gallery::engine::Command;
use leptos::prelude::*;

use crate::components::detail_panel::DetailPanel;
use crate::components::selection_panel::SelectionPanel;
use crate::host::Host;
use crate::state::stage::Stage;

/// Full-screen overlay with the close button and the dynamic content area.
#[component]
pub fn Overlay() -> impl IntoView {
    let host = expect_context::<Host>();
    let stage = host.stage;

    let blocks = move || {
        host.views.get().map(|views| {
            let selections = views
                .selections()
                .iter()
                .cloned()
                .map(|selection| view! { <SelectionPanel selection=selection/> })
                .collect_view();
            let details = views
                .details()
                .iter()
                .cloned()
                .map(|detail| view! { <DetailPanel detail=detail/> })
                .collect_view();
            view! {
                {selections}
                {details}
            }
        })
    };

    view! {
        <div id="modal-overlay" style=move || stage.with(Stage::overlay_style)>
            <div id="content-master-container">
                <span
                    class="close-button"
                    role="button"
                    aria-label="Close"
                    on:click=move |_| host.dispatch(Command::CloseAll)
                >
                    "×"
                </span>
                <div id="dynamic-content-area">{blocks}</div>
            </div>
        </div>
    }
}
