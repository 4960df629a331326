use hero_core::breakpoint::Breakpoint;
use hero_core::slider::{classify_swipe, track_transform, wheel_request, SliderAxis};
use hero_core::{SiteConfig, SliderRequest, SliderState};

const LOCK_MS: f64 = 700.0;

#[test]
fn empty_slider_is_not_created() {
    assert!(SliderState::new(0).is_none());
}

#[test]
fn second_next_within_lock_is_rejected() {
    let mut s = SliderState::new(4).unwrap();
    assert_eq!(s.request(SliderRequest::Next, 0.0), Some(1));
    assert!(s.is_transitioning(100.0));
    assert_eq!(s.request(SliderRequest::Next, 699.0), None);
    assert_eq!(s.index(), 1);
    assert_eq!(s.request(SliderRequest::Next, 700.0), Some(2));
}

#[test]
fn index_wraps_both_directions() {
    let mut s = SliderState::new(3).unwrap();
    assert_eq!(s.request(SliderRequest::Previous, 0.0), Some(2));
    assert_eq!(s.request(SliderRequest::Next, LOCK_MS), Some(0));
    assert_eq!(s.request(SliderRequest::Jump(7), 2.0 * LOCK_MS), Some(1));
}

#[test]
fn index_matches_net_moves_modulo_total() {
    // deterministic mix of accepted moves
    let pattern = [true, true, false, true, false, false, false, true, true, true, false];
    for total in 1..6usize {
        let mut s = SliderState::new(total).unwrap();
        let (mut n, mut m) = (0usize, 0usize);
        for (step, forward) in pattern.iter().cycle().take(40).enumerate() {
            let now = step as f64 * LOCK_MS;
            let req = if *forward {
                SliderRequest::Next
            } else {
                SliderRequest::Previous
            };
            let index = s.request(req, now).unwrap();
            if *forward {
                n += 1;
            } else {
                m += 1;
            }
            assert!(index < total);
            assert_eq!(index, (n + total * m - m) % total);
        }
    }
}

#[test]
fn transforms_per_axis() {
    assert_eq!(track_transform(SliderAxis::Vertical, 0), "translateY(-0%)");
    assert_eq!(track_transform(SliderAxis::Vertical, 2), "translateY(-200%)");
    assert_eq!(track_transform(SliderAxis::Horizontal, 1), "translateX(-100%)");
}

#[test]
fn wheel_direction() {
    assert_eq!(wheel_request(12.0), SliderRequest::Next);
    assert_eq!(wheel_request(-3.0), SliderRequest::Previous);
    assert_eq!(wheel_request(0.0), SliderRequest::Previous);
}

#[test]
fn swipe_classification() {
    let v = SliderAxis::Vertical;
    // finger moves up by 80px
    assert_eq!(classify_swipe(v, (100.0, 300.0), (110.0, 220.0)), Some(SliderRequest::Next));
    assert_eq!(classify_swipe(v, (100.0, 220.0), (100.0, 300.0)), Some(SliderRequest::Previous));
    // too short
    assert_eq!(classify_swipe(v, (0.0, 100.0), (0.0, 50.0)), None);
    // mostly horizontal
    assert_eq!(classify_swipe(v, (0.0, 200.0), (120.0, 100.0)), None);
    assert_eq!(
        classify_swipe(SliderAxis::Horizontal, (300.0, 0.0), (100.0, 10.0)),
        Some(SliderRequest::Next)
    );
}

#[test]
fn default_sliders_and_autoplay() {
    let config = SiteConfig::default();
    assert_eq!(config.sliders.len(), 2);
    let services = &config.sliders[0];
    assert_eq!(services.container_selector, ".slider-container");
    assert_eq!(services.dot_class, "dot");
    assert_eq!(services.autoplay_ms(Breakpoint::Mobile), 3000);
    assert_eq!(services.autoplay_ms(Breakpoint::Desktop), 2000);
    let wwd = &config.sliders[1];
    assert_eq!(wwd.track_selector, "#wwdSlider");
    assert_eq!(wwd.autoplay_ms(Breakpoint::Mobile), 3500);
    assert_eq!(wwd.autoplay_ms(Breakpoint::Tablet), 2000);
    assert!(config.sliders.iter().all(|s| s.axis == SliderAxis::Vertical));
}
