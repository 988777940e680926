//! Action host: owns the navigation engine and carries out what it returns.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components and scene listeners never touch the engine directly. They call
//! a `Host` method, which runs the engine and applies the resulting actions:
//! timers become `gloo-timers` timeouts that feed `on_timer`, camera actions go
//! to the A-Frame bridge, and everything else lands in the reactive `Stage`.

use gallery::content::LoadError;
use gallery::engine::{Action, Command, ShowroomCore};
use gallery::input::{Key, TouchPoint};
use gallery::views::ViewTable;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::scene;
use crate::state::stage::Stage;

/// Shared handle to the engine and presentation state. Cheap to copy into handlers.
#[derive(Clone, Copy)]
pub struct Host {
    core: RwSignal<Option<ShowroomCore>>,
    pub stage: RwSignal<Stage>,
    /// Views to render. Set once when the content document arrives.
    pub views: RwSignal<Option<ViewTable>>,
}

impl Host {
    pub fn new() -> Self {
        Self { core: RwSignal::new(None), stage: RwSignal::new(Stage::default()), views: RwSignal::new(None) }
    }

    /// Take ownership of a freshly built engine and publish its views.
    pub fn install(self, core: ShowroomCore) {
        self.views.set(Some(core.views().clone()));
        self.core.set(Some(core));
        self.stage.update(|s| s.loaded = true);
    }

    /// Record a failed content load. The scene stays usable with no markers.
    pub fn fail(self, err: &LoadError) {
        log::error!("{err}");
        self.stage.update(|s| s.load_error = Some(err.to_string()));
    }

    // --- Entry points ---

    pub fn dispatch(self, command: Command) {
        let actions = self.with_core(|core| core.dispatch(command));
        self.apply(actions);
    }

    pub fn key_down(self, key: &Key) {
        let actions = self.with_core(|core| core.on_key_down(key));
        self.apply(actions);
    }

    pub fn carousel_touch_start(self, carousel_id: &str, touches: &[TouchPoint]) {
        self.with_core(|core| core.on_carousel_touch_start(carousel_id, touches));
    }

    pub fn carousel_touch_move(self, touches: &[TouchPoint]) {
        self.with_core(|core| core.on_carousel_touch_move(touches));
    }

    pub fn carousel_touch_end(self) {
        let actions = self.with_core(ShowroomCore::on_carousel_touch_end);
        self.apply(actions);
    }

    pub fn scene_touch_start(self, touches: &[TouchPoint]) {
        let fov = scene::camera_fov();
        let rotation = scene::camera_rotation();
        self.with_core(|core| core.on_scene_touch_start(touches, fov, rotation));
    }

    /// Returns true when the move was consumed by a camera gesture.
    pub fn scene_touch_move(self, touches: &[TouchPoint]) -> bool {
        let actions = self.with_core(|core| core.on_scene_touch_move(touches));
        let handled = !actions.is_empty();
        self.apply(actions);
        handled
    }

    pub fn scene_touch_end(self) {
        self.with_core(ShowroomCore::on_scene_touch_end);
    }

    // --- Internals ---

    /// Run `f` against the engine. Before content arrives this is a no-op.
    fn with_core<R: Default>(self, f: impl FnOnce(&mut ShowroomCore) -> R) -> R {
        self.core
            .try_update_untracked(|core| core.as_mut().map(f))
            .flatten()
            .unwrap_or_default()
    }

    fn apply(self, actions: Vec<Action>) {
        if actions.is_empty() {
            return;
        }
        let mut touches_stage = false;
        for action in &actions {
            match action {
                Action::Schedule { delay_ms, task } => {
                    let task = task.clone();
                    Timeout::new(*delay_ms, move || {
                        let next = self.with_core(|core| core.on_timer(task));
                        self.apply(next);
                    })
                    .forget();
                }
                Action::SetLookControls(enabled) => {
                    scene::set_look_controls(*enabled);
                    touches_stage = true;
                }
                Action::SetCameraFov(fov) => scene::set_camera_fov(*fov),
                Action::SetCameraRotation(rotation) => scene::set_camera_rotation(*rotation),
                _ => touches_stage = true,
            }
        }
        if touches_stage {
            self.stage.update(|s| s.apply_all(&actions));
        }
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}
