//! Bridge to the A-Frame scene declared in `index.html`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panorama, camera, and hotspot markers live in A-Frame custom elements
//! that Leptos does not render. This module reaches them through `web-sys` and
//! `js_sys::Reflect`: it places markers, reads and writes camera state in
//! degrees (A-Frame stores radians), and wires scene-level listeners into the
//! [`Host`].
//!
//! Every DOM failure here is logged and skipped. A missing scene element
//! degrades the showroom; it never stops the overlay from working.

use std::cell::RefCell;
use std::rc::Rc;

use gallery::camera::LookRotation;
use gallery::consts::{DEFAULT_FOV_DEG, LOADER_REMOVE_DELAY_MS};
use gallery::content::SceneConfig;
use gallery::hotspot::MarkerPlacement;
use gallery::input::{Key, TouchPoint};
use gloo_timers::callback::Timeout;
use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, Event, KeyboardEvent, TouchEvent};

use crate::host::Host;

pub const SCENE_ID: &str = "my-scene";
pub const SKY_ID: &str = "main-environment-asset";
pub const CAMERA_WRAPPER_ID: &str = "camera-wrapper";
pub const CAMERA_SELECTOR: &str = "a-camera";
pub const LOADER_ID: &str = "scene-loader";

// =============================================================================
// DOM HELPERS
// =============================================================================

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

fn camera() -> Option<Element> {
    document()?.query_selector(CAMERA_SELECTOR).unwrap_or_default()
}

/// Walk a property path, stopping at the first missing link.
fn get_path(root: &JsValue, path: &[&str]) -> Option<JsValue> {
    path.iter().try_fold(root.clone(), |value, key| {
        let next = Reflect::get(&value, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED);
        (!next.is_undefined() && !next.is_null()).then_some(next)
    })
}

fn get_number(root: &JsValue, path: &[&str]) -> Option<f64> {
    get_path(root, path).and_then(|v| v.as_f64())
}

fn set_number(target: &JsValue, key: &str, value: f64) {
    if let Err(err) = Reflect::set(target, &JsValue::from_str(key), &JsValue::from_f64(value)) {
        log::debug!("failed to set `{key}`: {err:?}");
    }
}

fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        log::warn!("failed to set `{name}` on <{}>: {err:?}", el.tag_name());
    }
}

/// A-Frame's three-argument `setAttribute(component, property, value)`.
fn set_component_property(el: &Element, component: &str, property: &str, value: &JsValue) {
    let result = Reflect::get(el, &JsValue::from_str("setAttribute"))
        .and_then(|f| f.dyn_into::<Function>())
        .and_then(|f| f.call3(el, &JsValue::from_str(component), &JsValue::from_str(property), value));
    if let Err(err) = result {
        log::warn!("failed to set {component}.{property}: {err:?}");
    }
}

fn listen(target: &web_sys::EventTarget, kind: &str, callback: &JsValue, options: &AddEventListenerOptions) {
    if let Err(err) =
        target.add_event_listener_with_callback_and_add_event_listener_options(kind, callback.unchecked_ref(), options)
    {
        log::warn!("failed to listen for `{kind}`: {err:?}");
    }
}

fn request_frame(callback: &JsValue) -> bool {
    web_sys::window().is_some_and(|w| w.request_animation_frame(callback.unchecked_ref()).is_ok())
}

// =============================================================================
// SCENE SETUP
// =============================================================================

/// Keep the scene a flat panorama viewer: no VR entry button, no immersive session.
pub fn configure_scene() {
    let Some(scene) = by_id(SCENE_ID) else {
        log::error!("scene element #{SCENE_ID} not found");
        return;
    };
    set_attr(&scene, "vr-mode-ui", "enabled: false");
    set_attr(&scene, "webxr", "referenceSpaceType: local; requiredFeatures: []; optionalFeatures: [];");
}

/// Swallow device orientation and motion events before A-Frame sees them.
///
/// The camera only moves in response to touch and mouse input.
pub fn suppress_device_sensors() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = AddEventListenerOptions::new();
    options.set_capture(true);
    for kind in ["deviceorientation", "devicemotion"] {
        let stop = Closure::wrap(Box::new(|e: Event| e.stop_immediate_propagation()) as Box<dyn FnMut(Event)>);
        listen(&window, kind, stop.as_ref(), &options);
        stop.forget();
    }
}

pub fn apply_scene_config(config: Option<&SceneConfig>) {
    let Some(config) = config else {
        return;
    };
    let Some(sky) = by_id(SKY_ID) else {
        log::warn!("sky element #{SKY_ID} not found; scene config ignored");
        return;
    };
    if let Some(panorama) = &config.panorama {
        set_attr(&sky, "src", panorama);
    }
    if let Some(rotation) = config.rotation {
        set_attr(&sky, "rotation", &rotation.to_string());
    }
}

/// Run `f` once the scene and its assets have loaded.
pub fn when_scene_loaded(f: impl FnOnce() + 'static) {
    let Some(scene) = by_id(SCENE_ID) else {
        log::error!("scene element #{SCENE_ID} not found");
        return;
    };
    let loaded = get_path(&scene, &["hasLoaded"]).and_then(|v| v.as_bool()).unwrap_or(false);
    if loaded {
        f();
        return;
    }
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    listen(&scene, "loaded", &Closure::once_into_js(f), &options);
}

/// Fade the loading screen out on the next frame, then remove it.
pub fn remove_loader() {
    let fade = Closure::once_into_js(|| {
        let Some(loader) = by_id(LOADER_ID) else {
            return;
        };
        if let Err(err) = loader.class_list().add_1("hidden") {
            log::warn!("failed to hide loader: {err:?}");
        }
        Timeout::new(LOADER_REMOVE_DELAY_MS, move || loader.remove()).forget();
    });
    if !request_frame(&fade) {
        log::warn!("requestAnimationFrame unavailable; loader left in place");
    }
}

// =============================================================================
// MARKERS
// =============================================================================

/// Create one `<a-entity>` per marker and append it to the scene.
pub fn place_markers(markers: &[MarkerPlacement], host: Host) {
    let (Some(document), Some(scene)) = (document(), by_id(SCENE_ID)) else {
        log::error!("scene element #{SCENE_ID} not found; markers not placed");
        return;
    };

    let mut billboards = Vec::new();
    for marker in markers {
        let entity = match document.create_element("a-entity") {
            Ok(entity) => entity,
            Err(err) => {
                log::warn!("failed to create marker {}: {err:?}", marker.id);
                continue;
            }
        };
        for (name, value) in marker.attributes() {
            set_attr(&entity, name, &value);
        }

        let command = marker.on_click();
        let on_click = Closure::wrap(Box::new(move |_e: Event| host.dispatch(command.clone())) as Box<dyn FnMut(Event)>);
        if let Err(err) = entity.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            log::warn!("failed to bind click on marker {}: {err:?}", marker.id);
        }
        on_click.forget();

        match scene.append_child(&entity) {
            Ok(_) if marker.billboard => billboards.push(entity),
            Ok(_) => {}
            Err(err) => log::warn!("failed to append marker {}: {err:?}", marker.id),
        }
    }

    log::info!("placed {} hotspot markers", markers.len());
    start_billboard_loop(billboards);
}

/// Match every marker's yaw to the camera's, once per frame.
fn start_billboard_loop(markers: Vec<Element>) {
    if markers.is_empty() {
        return;
    }
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        face_camera(&markers);
        if let Some(cb) = holder_for_cb.borrow().as_ref() {
            request_frame(cb.as_ref());
        }
    }) as Box<dyn FnMut(f64)>);

    if request_frame(cb.as_ref()) {
        *holder.borrow_mut() = Some(cb);
    }
}

fn face_camera(markers: &[Element]) {
    let Some(yaw) = camera().and_then(|c| get_number(&c, &["object3D", "rotation", "y"])) else {
        return;
    };
    for marker in markers {
        if let Some(rotation) = get_path(marker, &["object3D", "rotation"]) {
            set_number(&rotation, "y", yaw);
        }
    }
}

// =============================================================================
// CAMERA
// =============================================================================

pub fn set_look_controls(enabled: bool) {
    match camera() {
        Some(camera) => set_component_property(&camera, "look-controls", "enabled", &JsValue::from_bool(enabled)),
        None => log::warn!("camera not found; look-controls unchanged"),
    }
}

pub fn camera_fov() -> f64 {
    camera()
        .and_then(|c| get_number(&c, &["components", "camera", "data", "fov"]))
        .unwrap_or(DEFAULT_FOV_DEG)
}

pub fn set_camera_fov(fov: f64) {
    if let Some(camera) = camera() {
        set_component_property(&camera, "camera", "fov", &JsValue::from_f64(fov));
    }
}

/// Current view direction: yaw from the camera wrapper, pitch from look-controls.
pub fn camera_rotation() -> LookRotation {
    let yaw = by_id(CAMERA_WRAPPER_ID).and_then(|w| get_number(&w, &["object3D", "rotation", "y"]));
    let pitch = camera().and_then(|c| get_number(&c, &["components", "look-controls", "pitchObject", "rotation", "x"]));
    LookRotation {
        yaw_deg: yaw.unwrap_or_default().to_degrees(),
        pitch_deg: pitch.unwrap_or_default().to_degrees(),
    }
}

pub fn set_camera_rotation(rotation: LookRotation) {
    if let Some(wrapper) = by_id(CAMERA_WRAPPER_ID).and_then(|w| get_path(&w, &["object3D", "rotation"])) {
        set_number(&wrapper, "y", rotation.yaw_deg.to_radians());
    }
    if let Some(pitch) = camera().and_then(|c| get_path(&c, &["components", "look-controls", "pitchObject", "rotation"])) {
        set_number(&pitch, "x", rotation.pitch_deg.to_radians());
    }
}

// =============================================================================
// INPUT
// =============================================================================

/// Touch contacts in page coordinates.
pub fn page_touches(e: &TouchEvent) -> Vec<TouchPoint> {
    let list = e.touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| TouchPoint::new(f64::from(t.page_x()), f64::from(t.page_y())))
        .collect()
}

/// Touch contacts in viewport coordinates.
pub fn client_touches(e: &TouchEvent) -> Vec<TouchPoint> {
    let list = e.touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| TouchPoint::new(f64::from(t.client_x()), f64::from(t.client_y())))
        .collect()
}

/// Pinch-zoom and one-finger look on the scene canvas.
///
/// Listeners are non-passive so handled moves can suppress page scrolling.
pub fn install_scene_gestures(host: Host) {
    let Some(scene) = by_id(SCENE_ID) else {
        log::error!("scene element #{SCENE_ID} not found; touch gestures disabled");
        return;
    };
    let options = AddEventListenerOptions::new();
    options.set_passive(false);

    let start = Closure::wrap(Box::new(move |e: TouchEvent| {
        let touches = page_touches(&e);
        if touches.len() == 2 {
            e.prevent_default();
        }
        host.scene_touch_start(&touches);
    }) as Box<dyn FnMut(TouchEvent)>);
    let moved = Closure::wrap(Box::new(move |e: TouchEvent| {
        if host.scene_touch_move(&page_touches(&e)) {
            e.prevent_default();
        }
    }) as Box<dyn FnMut(TouchEvent)>);
    let end = Closure::wrap(Box::new(move |_e: TouchEvent| host.scene_touch_end()) as Box<dyn FnMut(TouchEvent)>);

    listen(&scene, "touchstart", start.as_ref(), &options);
    listen(&scene, "touchmove", moved.as_ref(), &options);
    listen(&scene, "touchend", end.as_ref(), &options);
    listen(&scene, "touchcancel", end.as_ref(), &options);
    start.forget();
    moved.forget();
    end.forget();
}

/// Escape closes the overlay from anywhere on the page.
pub fn install_key_listener(host: Host) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let on_key = Closure::wrap(Box::new(move |e: KeyboardEvent| host.key_down(&Key(e.key()))) as Box<dyn FnMut(KeyboardEvent)>);
    listen(&window, "keydown", on_key.as_ref(), &AddEventListenerOptions::new());
    on_key.forget();
}
