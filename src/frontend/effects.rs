use super::hooks::use_narrow;
use super::{element_bounds, page_height, random_seed, viewport_size};
use crate::config::{site_config, SiteConfig};
use crate::nav::is_activation_key;
use crate::particles::ParticleField;
use crate::pointer::{GlowDisc, PointerPosition, Tilt};
use crate::reveal::{reveal_style, RevealDirection, RevealLatch};
use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use js_sys::Array;
use rand::{rngs::SmallRng, SeedableRng};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, CanvasRenderingContext2d, Element, HtmlCanvasElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent,
};
use yew::prelude::*;

#[function_component(PointerGlow)]
pub fn pointer_glow() -> Html {
    let config = site_config();
    let narrow = use_narrow();
    let pointer = use_state(|| PointerPosition::offscreen(config.glow_radius_px));

    {
        let pointer = pointer.clone();
        use_effect_with(narrow, move |narrow| {
            let listener = if *narrow {
                None
            } else {
                window().map(|win| {
                    EventListener::new(&win, "mousemove", move |event| {
                        if let Some(event) = event.dyn_ref::<MouseEvent>() {
                            pointer.set(PointerPosition::from_client(event.client_x(), event.client_y()));
                        }
                    })
                })
            };
            move || drop(listener)
        });
    }

    if narrow {
        return html! {};
    }

    let disc = GlowDisc::centered_on(*pointer, config.glow_radius_px);
    html! { <div class="pointer-glow" style={disc.style()} aria-hidden="true" /> }
}

struct ParticleLoop {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    field: RefCell<ParticleField>,
    frame: RefCell<Option<AnimationFrame>>,
    config: &'static SiteConfig,
}

impl ParticleLoop {
    fn start(canvas: HtmlCanvasElement, count: usize, config: &'static SiteConfig) -> Option<Rc<Self>> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let (width, height) = field_size(config);
        let field = ParticleField::spawn(&mut SmallRng::seed_from_u64(random_seed()), count, width, height);
        let running = Rc::new(Self {
            canvas,
            context,
            field: RefCell::new(field),
            frame: RefCell::new(None),
            config,
        });

        running.fit_to_viewport();
        running.draw();
        running.schedule();
        Some(running)
    }

    fn fit_to_viewport(&self) {
        let (width, height) = field_size(self.config);
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field.borrow_mut().resize(width, height);
    }

    fn draw(&self) {
        let mut field = self.field.borrow_mut();
        field.step();

        self.context.clear_rect(0.0, 0.0, field.width(), field.height());
        for particle in field.particles() {
            self.context.begin_path();
            if self
                .context
                .arc(particle.x, particle.y, particle.radius, 0.0, TAU)
                .is_err()
            {
                continue;
            }
            self.context
                .set_fill_style_str(&self.config.particle_fill(particle.opacity));
            self.context.fill();
        }
    }

    fn schedule(self: &Rc<Self>) {
        let next = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            next.frame.borrow_mut().take();
            next.draw();
            next.schedule();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn stop(&self) {
        self.frame.borrow_mut().take();
    }
}

fn field_size(config: &SiteConfig) -> (f64, f64) {
    let (width, height) = viewport_size();
    (width, config.particle_field_height(height, page_height()))
}

#[function_component(ParticleCanvas)]
pub fn particle_canvas() -> Html {
    let config = site_config();
    let narrow = use_narrow();
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(narrow, move |narrow| {
            let count = config.particle_count(*narrow);
            let running = canvas_ref
                .cast::<HtmlCanvasElement>()
                .and_then(|canvas| ParticleLoop::start(canvas, count, config));

            let resize = running.as_ref().and_then(|running| {
                let running = Rc::clone(running);
                window().map(|win| {
                    EventListener::new(&win, "resize", move |_| running.fit_to_viewport())
                })
            });

            move || {
                drop(resize);
                if let Some(running) = running {
                    running.stop();
                }
            }
        });
    }

    html! { <canvas ref={canvas_ref} class="particle-canvas" aria-hidden="true" /> }
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn watch(element: &Element, threshold: f64, on_reveal: Callback<()>) -> Option<Self> {
        let mut latch = RevealLatch::new(threshold);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };

                    if latch.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                        observer.unobserve(&entry.target());
                        on_reveal.emit(());
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub direction: RevealDirection,
    /// Seconds before the fade starts once revealed.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Hides its children until they first scroll into view, then fades and
/// slides them in. Never hides them again.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let config = site_config();
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let on_reveal = Callback::from(move |_: ()| revealed.set(true));
            let observer = node
                .cast::<Element>()
                .and_then(|element| RevealObserver::watch(&element, config.reveal_threshold, on_reveal));
            move || drop(observer)
        });
    }

    let style = reveal_style(
        *revealed,
        props.direction,
        config.reveal_offset_px,
        config.reveal_duration_ms,
        props.delay,
    );

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())} style={style}>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let config = site_config();
    let narrow = use_narrow();
    let node = use_node_ref();
    let hovered = use_state_eq(|| false);
    let tilt = use_state_eq(Tilt::neutral);

    let onmousemove = {
        let node = node.clone();
        let tilt = tilt.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let pointer = PointerPosition::from_client(event.client_x(), event.client_y());
            if let Some(next) = Tilt::from_pointer(pointer, element_bounds(&element), config.tilt_max_degrees) {
                tilt.set(next);
            }
        })
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| {
            hovered.set(false);
            tilt.set(Tilt::neutral());
        })
    };

    let interactive = props.onclick.is_some();
    let onclick = props
        .onclick
        .clone()
        .map(|activate| Callback::from(move |_: MouseEvent| activate.emit(())));
    let onkeydown = props.onclick.clone().map(|activate| {
        Callback::from(move |event: KeyboardEvent| {
            if is_activation_key(&event.key()) {
                event.prevent_default();
                activate.emit(());
            }
        })
    });
    let style = (!narrow).then(|| {
        let scale = if *hovered { config.hover_scale } else { 1.0 };
        format!(
            "transform: {}; --glow-x: {:.1}%; --glow-y: {:.1}%;",
            tilt.transform(scale),
            tilt.glow_x,
            tilt.glow_y
        )
    });

    html! {
        <div
            ref={node}
            class={classes!(
                "tilt-card",
                (*hovered && !narrow).then_some("is-hovered"),
                interactive.then_some("is-interactive"),
                props.class.clone()
            )}
            style={style}
            role={interactive.then_some("button")}
            tabindex={interactive.then_some("0")}
            onmousemove={(!narrow).then_some(onmousemove)}
            onmouseenter={(!narrow).then_some(onmouseenter)}
            onmouseleave={(!narrow).then_some(onmouseleave)}
            onclick={onclick}
            onkeydown={onkeydown}
        >
            if !narrow {
                <>
                    <div class="tilt-card-glow" aria-hidden="true" />
                    <div class="tilt-card-edge" aria-hidden="true" />
                </>
            }
            <div class="tilt-card-body">{props.children.clone()}</div>
        </div>
    }
}
