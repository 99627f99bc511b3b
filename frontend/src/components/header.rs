use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::mobile_nav::MobileNav;
use crate::scroll::{self, AnchorClick};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub children: &'static [NavItem],
}

const fn leaf(id: &'static str, label: &'static str) -> NavItem {
    NavItem { id, label, children: &[] }
}

pub const NAV_ITEMS: &[NavItem] = &[
    leaf("hero", "Home"),
    leaf("about", "About"),
    NavItem {
        id: "features",
        label: "Features",
        children: &[leaf("compare", "Before & After"), leaf("stats", "Numbers")],
    },
    leaf("newsletter", "Newsletter"),
];

/// Nav item made active by the hero's subscribe button.
const NEWSLETTER_ITEM: &str = "newsletter";

fn set_body_class(class: &str, on: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().toggle_with_force(class, on);
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let is_fixed = use_state_eq(|| scroll::header_is_fixed(scroll::current_scroll_y()));
    let mobile_open = use_state_eq(|| false);
    let active = use_state_eq(|| AttrValue::from(NAV_ITEMS[0].id));

    {
        let is_fixed = is_fixed.clone();
        use_event_with_window("scroll", move |_: Event| {
            is_fixed.set(scroll::header_is_fixed(scroll::current_scroll_y()));
        });
    }

    {
        let mobile_open = mobile_open.clone();
        let active = active.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };

            if let Some(click) = AnchorClick::from_target(&target) {
                if scroll::scroll_to_anchor(&click.target_id) {
                    e.prevent_default();
                    if click.within(".nav-menu") || click.within("#mobile-nav") {
                        active.set(AttrValue::from(click.target_id.clone()));
                    }
                    if click.anchor.id() == "btn-sub" {
                        active.set(AttrValue::from(NEWSLETTER_ITEM));
                    }
                    mobile_open.set(false);
                    return;
                }
            }

            let inside_drawer =
                matches!(target.closest("#mobile-nav, #mobile-nav-toggle"), Ok(Some(_)));
            if *mobile_open && !inside_drawer {
                mobile_open.set(false);
            }
        });
    }

    {
        use_effect_with_deps(
            move |open: &bool| {
                set_body_class("mobile-nav-active", *open);
                || set_body_class("mobile-nav-active", false)
            },
            *mobile_open,
        );
    }

    let toggle_mobile = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: MouseEvent| {
            mobile_open.set(!*mobile_open);
        })
    };

    let back_to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::smooth_scroll_to(0.0);
    });

    let nav_link = |item: &'static NavItem| -> Html {
        let is_active = active.as_str() == item.id;
        html! {
            <li class={classes!(
                (!item.children.is_empty()).then(|| "menu-has-children"),
                is_active.then(|| "menu-active")
            )}>
                <a href={format!("#{}", item.id)}>{item.label}</a>
                if !item.children.is_empty() {
                    <ul>
                        { for item.children.iter().map(|child| html! {
                            <li class={classes!(
                                (active.as_str() == child.id).then(|| "menu-active")
                            )}>
                                <a href={format!("#{}", child.id)}>{child.label}</a>
                            </li>
                        }) }
                    </ul>
                }
            </li>
        }
    };

    html! {
        <>
            <header id="header" class={classes!((*is_fixed).then(|| "header-fixed"))}>
                <div class="container">
                    <div id="logo">
                        <a href="#hero">{"Lineweave"}</a>
                    </div>
                    <nav id="nav-menu-container">
                        <ul class="nav-menu">
                            { for NAV_ITEMS.iter().map(nav_link) }
                        </ul>
                    </nav>
                </div>
            </header>
            <MobileNav
                items={NAV_ITEMS}
                active={(*active).clone()}
                open={*mobile_open}
                on_toggle={toggle_mobile}
            />
            <a
                href="#"
                class={classes!("back-to-top", (*is_fixed).then(|| "visible"))}
                onclick={back_to_top}
            >
                <i class="fa fa-chevron-up"></i>
            </a>
        </>
    }
}
