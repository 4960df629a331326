use glam::Vec3;
use hero_core::easing::Ease;
use hero_core::tween::{Animatable, Axes, Property, TweenSpec, Tweener};

#[derive(Default)]
struct Target {
    scale: Vec3,
    camera: Vec3,
    gone: bool,
}

impl Animatable for Target {
    fn read(&self, property: Property) -> Option<Vec3> {
        match property {
            Property::ModelScale if !self.gone => Some(self.scale),
            Property::CameraPosition => Some(self.camera),
            _ => None,
        }
    }

    fn write(&mut self, property: Property, value: Vec3) {
        match property {
            Property::ModelScale => self.scale = value,
            Property::CameraPosition => self.camera = value,
            _ => {}
        }
    }
}

#[test]
fn delay_holds_value_then_reaches_target_exactly() {
    let mut tweener = Tweener::new();
    let mut target = Target {
        scale: Vec3::ONE,
        ..Default::default()
    };
    let id = tweener.start(
        TweenSpec::new(Property::ModelScale, Axes::uniform(0.37), 0.5)
            .delay(0.2)
            .ease(Ease::Power2Out),
    );

    assert!(tweener.advance(0.1, &mut target).is_empty());
    assert_eq!(target.scale, Vec3::ONE);

    assert!(tweener.advance(0.3, &mut target).is_empty());
    assert!(target.scale.x < 1.0 && target.scale.x > 0.37);

    let done = tweener.advance(0.5, &mut target);
    assert_eq!(done.as_slice(), &[id]);
    assert_eq!(target.scale, Vec3::splat(0.37));
    assert!(tweener.is_empty());
}

#[test]
fn only_targeted_axes_are_written() {
    let mut tweener = Tweener::new();
    let mut target = Target {
        camera: Vec3::new(1.0, 2.0, 3.0),
        ..Default::default()
    };
    tweener.start(TweenSpec::new(Property::CameraPosition, Axes::x(-4.0), 0.25));
    tweener.advance(1.0, &mut target);
    assert_eq!(target.camera, Vec3::new(-4.0, 2.0, 3.0));
}

#[test]
fn start_value_is_read_when_the_delay_ends() {
    let mut tweener = Tweener::new();
    let mut target = Target::default();
    tweener.start(TweenSpec::new(Property::CameraPosition, Axes::x(10.0), 1.0).delay(0.5).ease(Ease::Linear));
    tweener.advance(0.25, &mut target);
    // moved by someone else during the delay
    target.camera.x = 6.0;
    tweener.advance(0.75, &mut target);
    assert!((target.camera.x - 8.0).abs() < 1e-5);
}

#[test]
fn later_tween_on_same_property_wins() {
    let mut tweener = Tweener::new();
    let mut target = Target::default();
    tweener.start(TweenSpec::new(Property::CameraPosition, Axes::x(1.0), 1.0));
    tweener.start(TweenSpec::new(Property::CameraPosition, Axes::x(-1.0), 1.0));
    let done = tweener.advance(2.0, &mut target);
    assert_eq!(done.len(), 2);
    assert_eq!(target.camera.x, -1.0);
}

#[test]
fn missing_target_finishes_tween() {
    let mut tweener = Tweener::new();
    let mut target = Target {
        gone: true,
        ..Default::default()
    };
    let id = tweener.start(TweenSpec::new(Property::ModelScale, Axes::uniform(2.0), 1.0));
    assert_eq!(tweener.advance(0.01, &mut target).as_slice(), &[id]);
    assert!(!tweener.is_active(id));
}

#[test]
fn zero_duration_jumps_to_target() {
    let mut tweener = Tweener::new();
    let mut target = Target::default();
    tweener.start(TweenSpec::new(Property::CameraPosition, Axes::all(Vec3::splat(3.0)), 0.0));
    tweener.advance(0.0, &mut target);
    assert_eq!(target.camera, Vec3::splat(3.0));
}
