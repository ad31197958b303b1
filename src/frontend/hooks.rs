use super::viewport_width;
use crate::viewport::ViewportClass;
use gloo_events::EventListener;
use web_sys::window;
use yew::prelude::*;

#[hook]
pub fn use_viewport_class(breakpoint: f64) -> ViewportClass {
    let class = use_state_eq(|| ViewportClass::classify(viewport_width(), breakpoint));

    {
        let class = class.clone();
        use_effect_with(breakpoint, move |breakpoint| {
            let breakpoint = *breakpoint;
            let check = move || class.set(ViewportClass::classify(viewport_width(), breakpoint));
            check();

            let listener = window().map(|win| EventListener::new(&win, "resize", move |_| check()));
            move || drop(listener)
        });
    }

    use_effect_with(*class, |class| {
        log::debug!("viewport is {}", class.as_str());
        || ()
    });

    *class
}

/// Reads the class published by the root provider. Components rendered
/// outside it behave as wide.
#[hook]
pub fn use_narrow() -> bool {
    use_context::<ViewportClass>()
        .unwrap_or_default()
        .is_narrow()
}

#[hook]
pub fn use_window_scroll(on_scroll: Callback<()>) {
    use_effect_with((), move |_| {
        let listener = window().map(|win| {
            EventListener::new(&win, "scroll", move |_| on_scroll.emit(()))
        });
        move || drop(listener)
    });
}
