use hero_core::breakpoint::{
    animation_params_for, camera_settings_for, model_scale_for, resolve_breakpoint, Breakpoint,
    ScrollPath,
};
use glam::Vec3;

#[test]
fn boundaries_are_inclusive_upper_bounds() {
    assert_eq!(resolve_breakpoint(0.0), Breakpoint::Mobile);
    assert_eq!(resolve_breakpoint(768.0), Breakpoint::Mobile);
    assert_eq!(resolve_breakpoint(768.5), Breakpoint::Tablet);
    assert_eq!(resolve_breakpoint(769.0), Breakpoint::Tablet);
    assert_eq!(resolve_breakpoint(1024.0), Breakpoint::Tablet);
    assert_eq!(resolve_breakpoint(1025.0), Breakpoint::Desktop);
    assert_eq!(resolve_breakpoint(3840.0), Breakpoint::Desktop);
}

#[test]
fn resolution_is_monotonic() {
    let mut prev = resolve_breakpoint(0.0);
    let mut w = 0.0;
    while w < 2000.0 {
        let bp = resolve_breakpoint(w);
        assert!(bp >= prev, "width {w} went from {prev:?} to {bp:?}");
        prev = bp;
        w += 0.5;
    }
}

#[test]
fn camera_table() {
    let m = camera_settings_for(Breakpoint::Mobile);
    assert_eq!((m.fov_deg, m.position), (13.0, Vec3::new(0.0, 0.0, 20.0)));
    let t = camera_settings_for(Breakpoint::Tablet);
    assert_eq!((t.fov_deg, t.position), (12.0, Vec3::new(0.0, 0.0, 16.0)));
    let d = camera_settings_for(Breakpoint::Desktop);
    assert_eq!((d.fov_deg, d.position), (12.0, Vec3::new(0.0, 0.0, 14.0)));
    for bp in Breakpoint::ALL {
        let c = camera_settings_for(bp);
        assert_eq!((c.near, c.far), (0.1, 1000.0));
    }
}

#[test]
fn animation_and_scale_tables() {
    let m = animation_params_for(Breakpoint::Mobile);
    assert_eq!(
        (m.initial_x, m.duration, m.delay, m.movement_range),
        (-15.0, 2.8, 0.1, 1.5)
    );
    let t = animation_params_for(Breakpoint::Tablet);
    assert_eq!(
        (t.initial_x, t.duration, t.delay, t.movement_range),
        (-14.0, 3.0, 0.15, 2.0)
    );
    let d = animation_params_for(Breakpoint::Desktop);
    assert_eq!(
        (d.initial_x, d.duration, d.delay, d.movement_range),
        (-12.0, 3.2, 0.2, 2.5)
    );
    assert_eq!(model_scale_for(Breakpoint::Mobile), 4.2);
    assert_eq!(model_scale_for(Breakpoint::Tablet), 5.2);
    assert_eq!(model_scale_for(Breakpoint::Desktop), 6.6);
}

#[test]
fn mobile_profile_is_lighter() {
    let mobile = Breakpoint::Mobile.profile();
    let desktop = Breakpoint::Desktop.profile();
    assert_eq!(mobile.scroll.path, ScrollPath::Sine);
    assert_eq!(desktop.scroll.path, ScrollPath::Zigzag);
    assert_eq!(mobile.scroll.follow_up_ms, Some(16));
    assert_eq!(desktop.scroll.follow_up_ms, None);
    assert_eq!(mobile.render.target_fps, 30.0);
    assert_eq!(desktop.render.target_fps, 60.0);
    assert_eq!(mobile.render.clip_time_scale, 0.7);
    assert_eq!(desktop.render.clip_time_scale, 1.0);
    assert_eq!(mobile.lighting.ambient_intensity, 0.8);
    assert_eq!(desktop.lighting.directional_intensity, 1.0);
    assert!(Breakpoint::Mobile.is_mobile());
    assert!(!Breakpoint::Tablet.is_mobile());
}
