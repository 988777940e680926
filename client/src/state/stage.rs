//! Presentation state for the overlay, its views, and carousel slides.
//!
//! DESIGN
//! ======
//! `Stage` is the DOM-facing mirror of the navigation engine. The engine
//! decides what should be visible and returns `Action`s; the host applies
//! each one here, and components derive their inline styles and classes from
//! the result. Nothing here decides navigation, so a `Stage` can always be
//! rebuilt by replaying actions.

#[cfg(test)]
#[path = "stage_test.rs"]
mod stage_test;

use std::collections::HashMap;

use gallery::engine::Action;

/// Overlay display phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayPhase {
    /// `display: none`.
    #[default]
    Hidden,
    /// Displayed at zero opacity, waiting for the fade-in.
    Shown,
    /// Fully opaque.
    Revealed,
    /// Fading to zero opacity before being hidden.
    FadingOut,
}

/// Display phase of one content view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    Visible,
    FadingOut,
}

/// Everything the overlay markup needs to render.
#[derive(Clone, Debug, PartialEq)]
pub struct Stage {
    pub overlay: OverlayPhase,
    /// Views currently displayed. Absent views are `display: none`.
    pub views: HashMap<String, ViewPhase>,
    /// Active slide (1-based) per carousel id.
    pub slides: HashMap<String, usize>,
    pub look_controls: bool,
    /// Set once the content document has been applied.
    pub loaded: bool,
    pub load_error: Option<String>,
}

impl Default for Stage {
    fn default() -> Self {
        Self {
            overlay: OverlayPhase::Hidden,
            views: HashMap::new(),
            slides: HashMap::new(),
            look_controls: true,
            loaded: false,
            load_error: None,
        }
    }
}

impl Stage {
    /// Apply one engine action. Timer and camera actions are handled by the host.
    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::ShowOverlay => self.overlay = OverlayPhase::Shown,
            Action::RevealOverlay => self.overlay = OverlayPhase::Revealed,
            Action::FadeOutOverlay => self.overlay = OverlayPhase::FadingOut,
            Action::HideOverlay => self.overlay = OverlayPhase::Hidden,
            Action::HideAllViews => self.views.clear(),
            Action::ShowView(id) => {
                self.views.insert(id.clone(), ViewPhase::Visible);
            }
            Action::FadeOutView(id) => {
                if let Some(phase) = self.views.get_mut(id) {
                    *phase = ViewPhase::FadingOut;
                }
            }
            Action::HideView(id) => {
                self.views.remove(id);
            }
            Action::SetLookControls(enabled) => self.look_controls = *enabled,
            Action::ActivateSlide { carousel_id, index } => {
                self.slides.insert(carousel_id.clone(), *index);
            }
            Action::Schedule { .. } | Action::SetCameraFov(_) | Action::SetCameraRotation(_) => {}
        }
    }

    pub fn apply_all(&mut self, actions: &[Action]) {
        for action in actions {
            self.apply(action);
        }
    }

    // --- Styles ---

    #[must_use]
    pub fn overlay_style(&self) -> &'static str {
        match self.overlay {
            OverlayPhase::Hidden => "display: none; opacity: 0;",
            OverlayPhase::Shown | OverlayPhase::FadingOut => "display: block; opacity: 0;",
            OverlayPhase::Revealed => "display: block; opacity: 1;",
        }
    }

    #[must_use]
    pub fn view_style(&self, view_id: &str) -> &'static str {
        match self.views.get(view_id) {
            None => "display: none;",
            Some(ViewPhase::Visible) => "display: block; opacity: 1;",
            Some(ViewPhase::FadingOut) => "display: block; opacity: 0;",
        }
    }

    /// Class list for a slide (1-based `slide`).
    #[must_use]
    pub fn slide_class(&self, carousel_id: &str, slide: usize) -> &'static str {
        if self.slides.get(carousel_id) == Some(&slide) {
            "carousel-slide active"
        } else {
            "carousel-slide"
        }
    }

    #[cfg(test)]
    pub fn is_view_displayed(&self, view_id: &str) -> bool {
        self.views.contains_key(view_id)
    }
}
