//! Banner shown when the content document could not be loaded.

use leptos::prelude::*;

use crate::host::Host;

#[component]
pub fn LoadStatus() -> impl IntoView {
    let host = expect_context::<Host>();
    let error = move || host.stage.with(|s| s.load_error.clone());

    view! {
        <Show when=move || error().is_some()>
            <div class="load-error" role="alert">
                {move || error().unwrap_or_default()}
            </div>
        </Show>
    }
}
