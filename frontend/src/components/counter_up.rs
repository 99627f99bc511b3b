use gloo_timers::callback::Timeout;
use web_sys::{window, Element};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::counter::{counter_frames, displayed_text, frame_count, is_in_view};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct CounterUpProps {
    pub value: AttrValue,
    pub label: AttrValue,
}

fn in_viewport(node: &NodeRef) -> bool {
    let Some(element) = node.cast::<Element>() else { return false };
    let viewport_height = window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    is_in_view(element.get_bounding_client_rect().top(), viewport_height)
}

/// A stat that counts up from zero the first time it scrolls into view.
#[function_component(CounterUp)]
pub fn counter_up(props: &CounterUpProps) -> Html {
    let node = use_node_ref();
    let frames = use_memo(
        |value: &AttrValue| {
            counter_frames(value, frame_count(config::COUNTER_TIME_MS, config::COUNTER_DELAY_MS))
        },
        props.value.clone(),
    );
    // None until the counter has been seen.
    let frame = use_state_eq(|| None::<usize>);

    let start_if_visible = {
        let node = node.clone();
        let frame = frame.clone();
        let animated = frames.is_some();
        move || {
            if animated && frame.is_none() && in_viewport(&node) {
                frame.set(Some(0));
            }
        }
    };

    {
        let start_if_visible = start_if_visible.clone();
        use_effect_with_deps(
            move |_| {
                start_if_visible();
                || ()
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: Event| start_if_visible());

    {
        let frame_setter = frame.clone();
        let last = (*frames).as_ref().map(|f| f.len().saturating_sub(1)).unwrap_or(0);
        use_effect_with_deps(
            move |current: &Option<usize>| {
                let timeout = match *current {
                    Some(i) if i < last => Some(Timeout::new(config::COUNTER_DELAY_MS, move || {
                        frame_setter.set(Some(i + 1));
                    })),
                    _ => None,
                };
                move || drop(timeout)
            },
            *frame,
        );
    }

    let text = displayed_text((*frames).as_deref(), *frame, &props.value);

    html! {
        <div class="counter-box" ref={node}>
            <span data-toggle="counter-up">{text}</span>
            <p>{props.label.clone()}</p>
        </div>
    }
}
