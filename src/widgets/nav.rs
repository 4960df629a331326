use crate::constants::{MENU_TOGGLE_SELECTOR, NAV_LINK_SELECTOR, NAV_OPEN_CLASS, NAV_SELECTOR};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mobile menu: the toggle opens/closes the nav; a click anywhere outside
/// both, or on a nav link, closes it.
pub fn init(document: &web::Document) {
    let (Some(toggle), Some(nav)) = (
        dom::query(document, MENU_TOGGLE_SELECTOR),
        dom::query(document, NAV_SELECTOR),
    ) else {
        return;
    };

    let nav_toggle = nav.clone();
    dom::listen(&toggle, "click", move |ev: web::MouseEvent| {
        ev.prevent_default();
        _ = nav_toggle.class_list().toggle(NAV_OPEN_CLASS);
    });

    let nav_outside = nav.clone();
    dom::listen(document, "click", move |ev: web::MouseEvent| {
        let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
        let inside = |el: &web::Element| el.contains(target.as_ref());
        if !inside(&nav_outside) && !inside(&toggle) {
            _ = nav_outside.class_list().remove_1(NAV_OPEN_CLASS);
        }
    });

    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let nav_link = nav.clone();
        dom::listen(&link, "click", move |_ev: web::MouseEvent| {
            _ = nav_link.class_list().remove_1(NAV_OPEN_CLASS);
        });
    }
}
