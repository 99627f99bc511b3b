use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, SvgGeometryElement, Window};
use yew::prelude::*;

use crate::animation::line_draw::{
    scroll_ratio, AnimationState, LineDrawConfig, PathGeometry, StrokeStyle,
};

fn apply_style(path: &SvgGeometryElement, style: &StrokeStyle) {
    let css = path.style();
    let _ = css.set_property("stroke-dasharray", &style.dash_array.to_string());
    let _ = css.set_property("stroke-dashoffset", &style.dash_offset.to_string());
}

fn page_scroll_ratio(window: &Window) -> f64 {
    let Some(document) = window.document() else { return 0.0 };
    let Some(root) = document.document_element() else { return 0.0 };
    let body_top = document.body().map(|b| b.scroll_top()).unwrap_or(0);
    scroll_ratio(
        (root.scroll_top() + body_top) as f64,
        root.scroll_height() as f64,
        root.client_height() as f64,
    )
}

/// Draws a path in proportion to page scroll, lagging behind it.
///
/// The scroll listener only records the target ratio; the fixed-period
/// interval is the only thing that touches the path. Dropping the animator
/// stops both.
pub struct StrokeAnimator {
    window: Window,
    on_scroll: Closure<dyn Fn()>,
    _ticker: Interval,
}

impl StrokeAnimator {
    pub fn start(path: SvgGeometryElement, config: LineDrawConfig) -> Option<Self> {
        let window = window()?;
        let geometry = PathGeometry::new(path.get_total_length() as f64);
        apply_style(&path, &geometry.hidden());

        let state = Rc::new(RefCell::new(AnimationState::default()));

        let on_scroll = Closure::<dyn Fn()>::new({
            let state = state.clone();
            let window = window.clone();
            move || {
                state.borrow_mut().set_target(page_scroll_ratio(&window));
            }
        });
        window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            .ok()?;

        let ticker = Interval::new(config.tick_ms, move || {
            let style = state.borrow_mut().tick(&config, &geometry);
            apply_style(&path, &style);
        });

        Some(Self { window, on_scroll, _ticker: ticker })
    }
}

/// Starts the animator on `path`, or does nothing when the page has no
/// path to draw.
pub fn mount_animator(
    path: Option<SvgGeometryElement>,
    config: LineDrawConfig,
) -> Option<StrokeAnimator> {
    match path {
        Some(path) => StrokeAnimator::start(path, config),
        None => {
            gloo_console::debug!("line draw: no path element, skipping");
            None
        }
    }
}

impl Drop for StrokeAnimator {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
    }
}

#[derive(Properties, PartialEq)]
pub struct LineDrawProps {
    pub config: LineDrawConfig,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LineDraw)]
pub fn line_draw(props: &LineDrawProps) -> Html {
    let path_ref = use_node_ref();

    {
        let path_ref = path_ref.clone();
        use_effect_with_deps(
            move |config: &LineDrawConfig| {
                let animator = mount_animator(path_ref.cast::<SvgGeometryElement>(), *config);
                move || drop(animator)
            },
            props.config,
        );
    }

    html! {
        <div class={classes!("line-draw", props.class.clone())} aria-hidden="true">
            <svg viewBox="0 0 600 2400" preserveAspectRatio="xMidYMin meet">
                <path
                    ref={path_ref}
                    id="red-line"
                    d="M300 0 C 80 300, 520 600, 300 900 S 80 1500, 300 1800 S 520 2200, 300 2400"
                    fill="none"
                    stroke="#d7263d"
                    stroke-width="6"
                    stroke-linecap="round"
                />
            </svg>
        </div>
    }
}
