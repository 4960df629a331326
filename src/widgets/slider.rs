use crate::constants::ACTIVE_CLASS;
use crate::dom;
use hero_core::slider::{classify_swipe, track_transform, wheel_request};
use hero_core::{resolve_breakpoint, SliderConfig, SliderRequest, SliderState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Slider {
    config: SliderConfig,
    state: SliderState,
    track: web::HtmlElement,
    dots: Vec<web::Element>,
    autoplay: Option<dom::Interval>,
    touch_start: Option<(f64, f64)>,
}

impl Slider {
    /// Returns true when the request was accepted and the view updated.
    fn navigate(&mut self, req: SliderRequest) -> bool {
        let Some(index) = self.state.request(req, instant::now()) else {
            return false;
        };
        _ = self
            .track
            .style()
            .set_property("transform", &track_transform(self.config.axis, index));
        for (i, dot) in self.dots.iter().enumerate() {
            _ = dot.class_list().toggle_with_force(ACTIVE_CLASS, i == index);
        }
        true
    }
}

/// Wire one slider instance. No-ops when any of its elements is missing.
pub fn init(document: &web::Document, config: &SliderConfig) -> Option<Rc<RefCell<Slider>>> {
    let container = dom::query(document, config.container_selector)?;
    let track = dom::query(document, config.track_selector)?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    let total = dom::query_all(document, config.slide_selector).len();
    let state = SliderState::new(total)?;
    let dots_container = dom::query(document, config.dots_selector)?;

    let slider = Rc::new(RefCell::new(Slider {
        config: config.clone(),
        state,
        track,
        dots: Vec::new(),
        autoplay: None,
        touch_start: None,
    }));

    build_dots(document, &dots_container, &slider);
    slider.borrow_mut().navigate(SliderRequest::Jump(0));
    restart_autoplay(&slider);
    wire_container(&container, &slider);

    log::info!(
        "[slider] {} ready with {} slides",
        config.container_selector,
        total
    );
    Some(slider)
}

fn build_dots(
    document: &web::Document,
    dots_container: &web::Element,
    slider: &Rc<RefCell<Slider>>,
) {
    dots_container.set_inner_html("");
    let (total, dot_class) = {
        let s = slider.borrow();
        (s.state.total(), s.config.dot_class)
    };
    let mut dots = Vec::with_capacity(total);
    for i in 0..total {
        let Ok(dot) = document.create_element("div") else {
            continue;
        };
        _ = dot.class_list().add_1(dot_class);
        let slider_click = slider.clone();
        dom::listen(&dot, "click", move |_ev: web::MouseEvent| {
            user_navigate(&slider_click, SliderRequest::Jump(i));
        });
        _ = dots_container.append_child(&dot);
        dots.push(dot);
    }
    slider.borrow_mut().dots = dots;
}

fn wire_container(container: &web::Element, slider: &Rc<RefCell<Slider>>) {
    let slider_wheel = slider.clone();
    dom::listen_with_passive(container, "wheel", false, move |ev: web::WheelEvent| {
        ev.prevent_default();
        user_navigate(&slider_wheel, wheel_request(ev.delta_y()));
    });

    let slider_start = slider.clone();
    dom::listen_with_passive(container, "touchstart", true, move |ev: web::TouchEvent| {
        if let Some(t) = ev.touches().get(0) {
            slider_start.borrow_mut().touch_start = Some((t.client_x() as f64, t.client_y() as f64));
        }
    });

    let slider_end = slider.clone();
    dom::listen_with_passive(container, "touchend", true, move |ev: web::TouchEvent| {
        let (start, axis) = {
            let mut s = slider_end.borrow_mut();
            (s.touch_start.take(), s.config.axis)
        };
        let (Some(start), Some(t)) = (start, ev.changed_touches().get(0)) else {
            return;
        };
        let end = (t.client_x() as f64, t.client_y() as f64);
        if let Some(req) = classify_swipe(axis, start, end) {
            user_navigate(&slider_end, req);
        }
    });
}

fn user_navigate(slider: &Rc<RefCell<Slider>>, req: SliderRequest) {
    let accepted = slider.borrow_mut().navigate(req);
    if accepted {
        restart_autoplay(slider);
    }
}

/// (Re)start the autoplay timer at the interval for the current breakpoint.
/// Replacing the stored interval cancels the previous one.
fn restart_autoplay(slider: &Rc<RefCell<Slider>>) {
    let width = web::window()
        .map(|w| dom::viewport_size(&w).0)
        .unwrap_or(0.0);
    let ms = slider.borrow().config.autoplay_ms(resolve_breakpoint(width));
    let weak = Rc::downgrade(slider);
    let interval = dom::Interval::new(ms, move || {
        if let Some(s) = weak.upgrade() {
            s.borrow_mut().navigate(SliderRequest::Next);
        }
    });
    slider.borrow_mut().autoplay = interval;
}
