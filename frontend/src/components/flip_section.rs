use web_sys::window;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

fn window_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(config::LAYOUT_FLIP_BREAKPOINT)
}

pub fn is_narrow(width: f64) -> bool {
    width < config::LAYOUT_FLIP_BREAKPOINT
}

#[derive(Properties, PartialEq)]
pub struct FlipSectionProps {
    pub id: AttrValue,
    pub title: Html,
    pub image: Html,
}

/// Image beside a title; on narrow screens the title is stacked first.
#[function_component(FlipSection)]
pub fn flip_section(props: &FlipSectionProps) -> Html {
    let narrow = use_state_eq(|| is_narrow(window_width()));

    {
        let narrow = narrow.clone();
        use_event_with_window("resize", move |_: Event| {
            narrow.set(is_narrow(window_width()));
        });
    }

    html! {
        <section id={props.id.clone()} class="flip-section">
            <div class="container row">
                <div class={classes!("flip-img", (*narrow).then(|| "order-2"))}>
                    {props.image.clone()}
                </div>
                <div class={classes!("flip-title", (*narrow).then(|| "order-1"))}>
                    {props.title.clone()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint() {
        assert!(is_narrow(989.0));
        assert!(!is_narrow(990.0));
        assert!(!is_narrow(1440.0));
    }
}
