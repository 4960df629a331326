use hero_core::ScrollMetrics;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query(root: &web::Document, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

#[inline]
pub fn query_in(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

/// Every element under `root` matching `selector`, in document order.
pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Attach a listener for the lifetime of the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`listen`] but with an explicit `passive` flag. Non-passive
/// listeners are needed wherever the handler calls `prevent_default`.
pub fn listen_with_passive<E>(
    target: &web::EventTarget,
    event: &str,
    passive: bool,
    handler: impl FnMut(E) + 'static,
) where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(passive);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

/// Run `f` once the document has been parsed.
pub fn when_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(f);
        _ = document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref());
    } else {
        f();
    }
}

/// One-shot timer. Returns the handle for `clear_timeout`.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
        .ok()
}

pub fn clear_timeout(handle: i32) {
    if let Some(w) = web::window() {
        w.clear_timeout_with_handle(handle);
    }
}

/// A repeating timer that stops when dropped.
pub struct Interval {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(ms: i32, f: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            )
            .ok()?;
        Some(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.handle);
        }
    }
}

/// Layout viewport in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (w, h)
}

pub fn scroll_metrics(window: &web::Window, document: &web::Document) -> ScrollMetrics {
    let root = document.document_element();
    let scroll_top = window
        .scroll_y()
        .ok()
        .filter(|y| *y > 0.0)
        .or_else(|| root.as_ref().map(|r| r.scroll_top() as f64))
        .unwrap_or(0.0);
    let (scroll_height, client_height) = root
        .map(|r| (r.scroll_height() as f64, r.client_height() as f64))
        .unwrap_or((0.0, 0.0));
    ScrollMetrics {
        scroll_top,
        scroll_height,
        client_height,
    }
}

#[inline]
pub fn is_mobile_width(window: &web::Window) -> bool {
    hero_core::resolve_breakpoint(viewport_size(window).0).is_mobile()
}

/// Size the canvas to `css_w x css_h` CSS pixels with a backing store scaled
/// by the (capped) device pixel ratio. Returns the backing size.
pub fn sync_canvas_size(
    canvas: &web::HtmlCanvasElement,
    css_w: f64,
    css_h: f64,
    max_ratio: f64,
) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let w_px = crate::constants::backing_pixels(css_w, dpr, max_ratio);
    let h_px = crate::constants::backing_pixels(css_h, dpr, max_ratio);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css_w));
    _ = style.set_property("height", &format!("{}px", css_h));
    (w_px, h_px)
}
