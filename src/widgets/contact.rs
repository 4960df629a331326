use crate::constants::{CONTACT_FORM_SELECTOR, FORM_FIELD_SELECTOR, SENDING_LABEL, SUBMIT_SELECTOR};
use crate::dom;
use hero_core::constants::{FOCUS_SCROLL_DELAY_MS, FORM_RESET_MS};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(document: &web::Document) {
    let Some(form) = dom::query(document, CONTACT_FORM_SELECTOR) else {
        return;
    };

    let form_submit = form.clone();
    dom::listen(&form, "submit", move |_ev: web::Event| {
        let Some(button) = dom::query_in(&form_submit, SUBMIT_SELECTOR)
            .and_then(|b| b.dyn_into::<web::HtmlButtonElement>().ok())
        else {
            return;
        };
        let original = button.text_content();
        button.set_text_content(Some(SENDING_LABEL));
        button.set_disabled(true);
        dom::set_timeout(FORM_RESET_MS, move || {
            button.set_text_content(original.as_deref());
            button.set_disabled(false);
        });
    });

    for field in dom::query_all_in(&form, FORM_FIELD_SELECTOR) {
        let target = field.clone();
        dom::listen(&field, "focus", move |_ev: web::Event| {
            let Some(window) = web::window() else {
                return;
            };
            if !dom::is_mobile_width(&window) {
                return;
            }
            let target = target.clone();
            dom::set_timeout(FOCUS_SCROLL_DELAY_MS, move || {
                let options = web::ScrollIntoViewOptions::new();
                options.set_behavior(web::ScrollBehavior::Smooth);
                options.set_block(web::ScrollLogicalPosition::Center);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            });
        });
    }
}
