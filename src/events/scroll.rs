use crate::dom;
use crate::scene::Scene;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Passive window scroll listener feeding the scroll mapper. On breakpoints
/// with a follow-up delay the mapper runs once more after the last event.
pub fn wire_scroll(window: &web::Window, scene: Rc<RefCell<Scene>>) {
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    dom::listen_with_passive(window, "scroll", true, move |_ev: web::Event| {
        if let Some(handle) = pending.take() {
            dom::clear_timeout(handle);
        }
        apply_scroll(&scene);

        let follow_up = scene
            .borrow()
            .controller
            .breakpoint()
            .profile()
            .scroll
            .follow_up_ms;
        if let Some(ms) = follow_up {
            let scene_later = scene.clone();
            let pending_later = pending.clone();
            pending.set(dom::set_timeout(ms, move || {
                pending_later.set(None);
                apply_scroll(&scene_later);
            }));
        }
    });
}

fn apply_scroll(scene: &Rc<RefCell<Scene>>) {
    let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
        return;
    };
    let metrics = dom::scroll_metrics(&window, &document);
    if let Some(t) = scene.borrow_mut().controller.on_scroll(metrics) {
        log::debug!(
            "[scroll] progress={:.3} target=({:.2},{:.2},{:.2}) rot_x={:.3}",
            t.progress,
            t.position.x,
            t.position.y,
            t.position.z,
            t.rotation_x
        );
    }
}
