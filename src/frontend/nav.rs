use super::hooks::{use_narrow, use_window_scroll};
use super::{scroll_to_section, scroll_y};
use crate::config::site_config;
use crate::content::OWNER;
use crate::nav::NavState;
use crate::sections::Section;
use crate::viewport::ViewportClass;
use std::rc::Rc;
use yew::prelude::*;

pub enum NavAction {
    Scrolled(f64),
    ToggleMenu(ViewportClass),
    Selected,
    Viewport(ViewportClass),
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let current = *self;
        let next = match action {
            NavAction::Scrolled(y) => current.on_scroll(y, site_config().nav_scroll_threshold_px),
            NavAction::ToggleMenu(viewport) => current.toggle_menu(viewport),
            NavAction::Selected => current.select(),
            NavAction::Viewport(viewport) => current.on_viewport(viewport),
        };

        if next == current {
            self
        } else {
            if next.menu_open != current.menu_open {
                log::debug!("menu {}", if next.menu_open { "opened" } else { "closed" });
            }
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: Section,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let narrow = use_narrow();
    let viewport = if narrow {
        ViewportClass::Narrow
    } else {
        ViewportClass::Wide
    };
    let state = use_reducer_eq(|| NavState::default().on_scroll(scroll_y(), site_config().nav_scroll_threshold_px));

    {
        let dispatcher = state.dispatcher();
        use_window_scroll(Callback::from(move |_| dispatcher.dispatch(NavAction::Scrolled(scroll_y()))));
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with(viewport, move |viewport| {
            dispatcher.dispatch(NavAction::Viewport(*viewport));
            || ()
        });
    }

    let on_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::ToggleMenu(viewport)))
    };

    let link = |section: Section, index: usize| {
        let dispatcher = state.dispatcher();
        let onclick = Callback::from(move |_: MouseEvent| {
            scroll_to_section(section);
            dispatcher.dispatch(NavAction::Selected);
        });
        let style = narrow.then(|| format!("animation-delay: {:.2}s;", index as f64 * 0.05));

        html! {
            <button
                key={section.id()}
                type="button"
                class={classes!("nav-link", (props.active == section).then_some("is-active"))}
                aria-current={(props.active == section).then_some("true")}
                style={style}
                onclick={onclick}
            >
                {section.id()}
            </button>
        }
    };

    let links: Html = state
        .visible_links(viewport)
        .iter()
        .enumerate()
        .map(|(index, section)| link(*section, index))
        .collect();

    html! {
        <nav class={classes!("site-nav", state.is_opaque().then_some("is-opaque"), state.scrolled.then_some("is-scrolled"))}>
            <div class="brand">
                <span class="gradient-text">{OWNER}</span>
            </div>
            if narrow {
                <>
                    <button
                        type="button"
                        class={classes!("menu-toggle", state.menu_open.then_some("is-open"))}
                        aria-label={if state.menu_open { "Close menu" } else { "Open menu" }}
                        aria-expanded={state.menu_open.to_string()}
                        onclick={on_toggle}
                    >
                        <span class="menu-bar" />
                        <span class="menu-bar" />
                        <span class="menu-bar" />
                    </button>
                    if state.menu_open {
                        <div class="menu-overlay">{links}</div>
                    }
                </>
            } else {
                <div class="nav-links">{links}</div>
            }
        </nav>
    }
}
