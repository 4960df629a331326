use crate::dom;
use crate::scene::Scene;
use hero_core::ResizeOutcome;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Window resize, plus one re-check when the tab becomes visible again.
pub fn wire_resize(window: &web::Window, document: &web::Document, scene: Rc<RefCell<Scene>>) {
    let scene_resize = scene.clone();
    dom::listen(window, "resize", move |_ev: web::Event| {
        handle_resize(&scene_resize);
    });

    let doc = document.clone();
    dom::listen(document, "visibilitychange", move |_ev: web::Event| {
        if !doc.hidden() {
            handle_resize(&scene);
        }
    });
}

fn handle_resize(scene: &Rc<RefCell<Scene>>) {
    let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
        return;
    };
    let (w, h) = dom::viewport_size(&window);
    let mut scene = scene.borrow_mut();
    let outcome = scene.controller.on_resize(w, h, document.hidden());
    if let ResizeOutcome::Applied {
        size,
        breakpoint_change,
    } = outcome
    {
        log::info!(
            "[resize] {}x{} breakpoint_change={:?}",
            size.width,
            size.height,
            breakpoint_change
        );
    }
    scene.apply_resize(outcome);
}
