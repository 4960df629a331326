use glam::Vec3;
use hero_core::breakpoint::Breakpoint;
use hero_core::constants::{ENTRY_ROTATION, REST_ROTATION};
use hero_core::model::Bounds;
use hero_core::{HeroController, ResizeOutcome, ScrollMetrics, ViewportSize};

fn unit_cube() -> Bounds {
    Bounds::from_points([Vec3::splat(-1.0), Vec3::splat(1.0)])
}

fn desktop() -> HeroController {
    HeroController::new(ViewportSize::new(1280.0, 800.0))
}

/// Tick at 60 Hz from `from_ms` for `secs`; returns the last timestamp.
fn run(c: &mut HeroController, from_ms: f64, secs: f64) -> f64 {
    let mut now = from_ms;
    while now < from_ms + secs * 1000.0 {
        now += 1000.0 / 60.0;
        c.tick(now);
    }
    now
}

fn mid_scroll() -> ScrollMetrics {
    ScrollMetrics {
        scroll_top: 500.0,
        scroll_height: 2000.0,
        client_height: 1000.0,
    }
}

#[test]
fn initial_camera_matches_breakpoint() {
    let c = desktop();
    assert_eq!(c.breakpoint(), Breakpoint::Desktop);
    assert_eq!(c.camera().eye, Vec3::new(0.0, 0.0, 14.0));
    assert!((c.camera().fovy_radians - 12f32.to_radians()).abs() < 1e-6);
    assert!((c.camera().aspect - 1.6).abs() < 1e-6);

    let m = HeroController::new(ViewportSize::new(390.0, 844.0));
    assert_eq!(m.breakpoint(), Breakpoint::Mobile);
    assert_eq!(m.camera().eye.z, 20.0);
}

#[test]
fn attach_places_model_offscreen_then_glides_in() {
    let mut c = desktop();
    c.attach_model(unit_cube(), None);
    let m = *c.model().unwrap();
    assert_eq!(m.position, Vec3::new(-12.0, 0.0, 0.0));
    assert_eq!(m.rotation, Vec3::from(ENTRY_ROTATION));
    assert!((m.scale.x - 3.3).abs() < 1e-6);
    assert_eq!(m.pivot, Vec3::ZERO);
    assert_eq!(c.active_tweens(), 2);

    // still waiting on the delay
    c.tick(0.0);
    c.tick(100.0);
    assert_eq!(c.model().unwrap().position.x, -12.0);

    run(&mut c, 100.0, 3.5);
    let m = *c.model().unwrap();
    assert_eq!(m.position, Vec3::ZERO);
    assert_eq!(m.rotation, Vec3::from(REST_ROTATION));
    assert_eq!(c.active_tweens(), 0);
}

#[test]
fn scroll_requires_model_and_is_gated() {
    let mut c = desktop();
    assert!(c.on_scroll(mid_scroll()).is_none());

    c.attach_model(unit_cube(), None);
    let t = c.on_scroll(mid_scroll()).unwrap();
    assert_eq!(t.progress, 0.5);
    assert!(c.is_scroll_animating());
    assert!(c.on_scroll(mid_scroll()).is_none());

    let end = run(&mut c, 0.0, 0.6);
    assert!(!c.is_scroll_animating());

    // once the entry glide is over the scroll target sticks
    let end = run(&mut c, end, 4.0);
    assert!(c.on_scroll(mid_scroll()).is_some());
    run(&mut c, end, 0.6);
    let m = c.model().unwrap();
    assert!((m.position - t.position).length() < 1e-5);
    assert!((m.rotation.x - t.rotation_x).abs() < 1e-6);
}

#[test]
fn small_resizes_are_ignored() {
    let mut c = desktop();
    assert_eq!(c.on_resize(1280.0 + 59.0, 800.0 + 79.0, false), ResizeOutcome::Minor);
    assert_eq!(c.stable_size(), ViewportSize::new(1280.0, 800.0));
    assert!((c.camera().aspect - 1.6).abs() < 1e-6);

    match c.on_resize(1340.0, 800.0, false) {
        ResizeOutcome::Applied {
            size,
            breakpoint_change,
        } => {
            assert_eq!(size, ViewportSize::new(1340.0, 800.0));
            assert_eq!(breakpoint_change, None);
        }
        other => panic!("expected applied resize, got {other:?}"),
    }
    assert!((c.camera().aspect - 1340.0 / 800.0).abs() < 1e-6);
    assert_eq!(c.active_tweens(), 0);
}

#[test]
fn height_change_alone_is_applied() {
    let mut c = desktop();
    match c.on_resize(1280.0 + 10.0, 800.0 + 80.0, false) {
        ResizeOutcome::Applied { size, .. } => assert_eq!(size, ViewportSize::new(1290.0, 880.0)),
        other => panic!("expected applied resize, got {other:?}"),
    }
    assert_eq!(c.stable_size(), ViewportSize::new(1290.0, 880.0));
    // deltas are measured from the newly committed size
    assert_eq!(c.on_resize(1290.0 + 59.0, 880.0 + 79.0, false), ResizeOutcome::Minor);
    assert_eq!(c.stable_size(), ViewportSize::new(1290.0, 880.0));
}

#[test]
fn hidden_document_is_ignored() {
    let mut c = desktop();
    assert_eq!(c.on_resize(500.0, 500.0, true), ResizeOutcome::Hidden);
    assert_eq!(c.breakpoint(), Breakpoint::Desktop);
    assert_eq!(c.stable_size(), ViewportSize::new(1280.0, 800.0));
}

#[test]
fn breakpoint_change_tweens_camera_and_scale() {
    let mut c = desktop();
    c.attach_model(unit_cube(), None);
    let end = run(&mut c, 0.0, 4.0);

    let outcome = c.on_resize(700.0, 800.0, false);
    assert_eq!(
        outcome,
        ResizeOutcome::Applied {
            size: ViewportSize::new(700.0, 800.0),
            breakpoint_change: Some(Breakpoint::Mobile),
        }
    );
    assert_eq!(c.breakpoint(), Breakpoint::Mobile);
    assert_eq!(c.active_tweens(), 2);

    run(&mut c, end, 0.6);
    assert_eq!(c.camera().eye, Vec3::new(0.0, 0.0, 20.0));
    assert!((c.model().unwrap().scale.x - 2.1).abs() < 1e-6);
    // field of view is left alone
    assert!((c.camera().fovy_radians - 12f32.to_radians()).abs() < 1e-6);
}

#[test]
fn frame_budget_follows_breakpoint() {
    let mut c = desktop();
    assert_eq!(c.tick(0.0), None);
    assert_eq!(c.tick(17.0), Some(0.02));
    assert_eq!(c.tick(20.0), None);
    assert_eq!(c.tick(34.0), Some(0.02));

    let mut m = HeroController::new(ViewportSize::new(390.0, 844.0));
    assert_eq!(m.tick(17.0), None);
    assert_eq!(m.tick(34.0), Some(0.016));
}

#[test]
fn clip_player_advances_only_on_rendered_frames() {
    let mut c = HeroController::new(ViewportSize::new(390.0, 844.0));
    c.attach_model(unit_cube(), Some((0, 10.0)));
    assert_eq!(c.clip_player().unwrap().time_scale, 0.7);
    c.tick(34.0);
    c.tick(40.0);
    assert!((c.clip_player().unwrap().time() - 0.016 * 0.7).abs() < 1e-6);
}

#[test]
fn long_pause_does_not_skip_the_entry() {
    let mut c = desktop();
    c.attach_model(unit_cube(), None);
    c.tick(0.0);
    c.tick(60_000.0);
    assert_eq!(c.model().unwrap().position.x, -12.0);
    assert_eq!(c.active_tweens(), 2);
}
