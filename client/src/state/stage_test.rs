use gallery::engine::Deferred;

use super::*;

fn stage_after(actions: &[Action]) -> Stage {
    let mut stage = Stage::default();
    stage.apply_all(actions);
    stage
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_stage_is_hidden_with_look_controls() {
    let stage = Stage::default();
    assert_eq!(stage.overlay, OverlayPhase::Hidden);
    assert!(stage.views.is_empty());
    assert!(stage.look_controls);
    assert!(!stage.loaded);
    assert_eq!(stage.overlay_style(), "display: none; opacity: 0;");
}

// =============================================================
// Overlay
// =============================================================

#[test]
fn overlay_fades_in_and_out() {
    let mut stage = stage_after(&[Action::ShowOverlay]);
    assert_eq!(stage.overlay_style(), "display: block; opacity: 0;");
    stage.apply(&Action::RevealOverlay);
    assert_eq!(stage.overlay_style(), "display: block; opacity: 1;");
    stage.apply(&Action::FadeOutOverlay);
    assert_eq!(stage.overlay_style(), "display: block; opacity: 0;");
    stage.apply(&Action::HideOverlay);
    assert_eq!(stage.overlay, OverlayPhase::Hidden);
}

// =============================================================
// Views
// =============================================================

#[test]
fn show_view_after_hide_all_leaves_one_visible() {
    let stage = stage_after(&[
        Action::ShowView("kitchen".into()),
        Action::HideAllViews,
        Action::ShowView("p1".into()),
    ]);
    assert_eq!(stage.views.len(), 1);
    assert_eq!(stage.view_style("p1"), "display: block; opacity: 1;");
    assert_eq!(stage.view_style("kitchen"), "display: none;");
}

#[test]
fn fade_out_keeps_view_displayed_until_hidden() {
    let mut stage = stage_after(&[Action::ShowView("kitchen".into()), Action::FadeOutView("kitchen".into())]);
    assert_eq!(stage.view_style("kitchen"), "display: block; opacity: 0;");
    assert!(stage.is_view_displayed("kitchen"));
    stage.apply(&Action::HideView("kitchen".into()));
    assert!(!stage.is_view_displayed("kitchen"));
}

#[test]
fn fade_out_of_hidden_view_is_ignored() {
    let stage = stage_after(&[Action::FadeOutView("ghost".into())]);
    assert!(stage.views.is_empty());
}

// =============================================================
// Slides
// =============================================================

#[test]
fn activate_slide_marks_exactly_one_active() {
    let mut stage = stage_after(&[Action::ActivateSlide { carousel_id: "c1".into(), index: 2 }]);
    assert_eq!(stage.slide_class("c1", 1), "carousel-slide");
    assert_eq!(stage.slide_class("c1", 2), "carousel-slide active");
    assert_eq!(stage.slide_class("c1", 3), "carousel-slide");

    stage.apply(&Action::ActivateSlide { carousel_id: "c1".into(), index: 3 });
    assert_eq!(stage.slide_class("c1", 2), "carousel-slide");
    assert_eq!(stage.slide_class("c1", 3), "carousel-slide active");
}

#[test]
fn uninitialized_carousel_has_no_active_slide() {
    let stage = Stage::default();
    assert_eq!(stage.slide_class("c1", 1), "carousel-slide");
}

// =============================================================
// Host-only actions
// =============================================================

#[test]
fn look_controls_flag_is_recorded() {
    let mut stage = stage_after(&[Action::SetLookControls(false)]);
    assert!(!stage.look_controls);
    stage.apply(&Action::SetLookControls(true));
    assert!(stage.look_controls);
}

#[test]
fn timer_and_camera_actions_leave_stage_unchanged() {
    let stage = stage_after(&[
        Action::Schedule { delay_ms: 50, task: Deferred::FadeInOverlay },
        Action::SetCameraFov(40.0),
        Action::SetCameraRotation(gallery::camera::LookRotation::default()),
    ]);
    assert_eq!(stage, Stage::default());
}
