//! Root component and startup sequence.

use gallery::engine::ShowroomCore;
use leptos::prelude::*;

use crate::components::load_status::LoadStatus;
use crate::components::overlay::Overlay;
use crate::host::Host;
use crate::net::api::fetch_content;
use crate::scene;
use crate::util::config::content_url;

/// Showroom app: wires the scene, fetches content, and renders the overlay.
///
/// The fetch runs once. On failure the panorama stays usable without markers.
#[component]
pub fn App() -> impl IntoView {
    let host = Host::new();
    provide_context(host);

    scene::suppress_device_sensors();
    scene::configure_scene();
    scene::install_key_listener(host);
    scene::install_scene_gestures(host);
    scene::when_scene_loaded(scene::remove_loader);

    leptos::task::spawn_local(async move {
        let url = content_url();
        log::info!("loading showroom content from {url}");
        match fetch_content(&url).await {
            Ok(doc) => {
                let core = ShowroomCore::from_document(doc);
                scene::apply_scene_config(core.scene_config());
                scene::place_markers(core.markers(), host);
                host.install(core);
            }
            Err(err) => host.fail(&err),
        }
    });

    view! {
        <Overlay/>
        <LoadStatus/>
    }
}
