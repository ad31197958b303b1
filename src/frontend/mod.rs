mod app;
mod effects;
mod hooks;
mod nav;
mod panels;

use crate::config::site_config;
use crate::pointer::Bounds;
use crate::sections::Section;
use web_sys::{window, Document, Element, ScrollBehavior, ScrollIntoViewOptions};

const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 720.0);

fn document() -> Option<Document> {
    window()?.document()
}

fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return FALLBACK_VIEWPORT;
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.1);

    (width, height)
}

fn scroll_y() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

fn page_height() -> f64 {
    document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0)
}

fn element_bounds(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

fn section_top(section: Section) -> Option<f64> {
    let element = document()?.get_element_by_id(section.id())?;
    Some(element.get_bounding_client_rect().top())
}

fn scroll_to_section(section: Section) {
    let Some(element) = document().and_then(|d| d.get_element_by_id(section.id())) else {
        log::debug!("scroll target #{} is not in the document", section.id());
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

pub fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Trace).ok();
    log::set_max_level(site_config().log_level);

    yew::Renderer::<app::App>::with_root(
        document()
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
