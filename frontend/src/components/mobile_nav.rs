use yew::prelude::*;

use crate::components::header::NavItem;

#[derive(Properties, PartialEq)]
pub struct MobileNavProps {
    pub items: &'static [NavItem],
    pub active: AttrValue,
    pub open: bool,
    pub on_toggle: Callback<MouseEvent>,
}

/// Drawer copy of the header menu for narrow screens.
#[function_component(MobileNav)]
pub fn mobile_nav(props: &MobileNavProps) -> Html {
    let expanded = use_state(Vec::<&'static str>::new);

    let toggle_submenu = |id: &'static str| {
        let expanded = expanded.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*expanded).clone();
            if let Some(pos) = next.iter().position(|open| *open == id) {
                next.remove(pos);
            } else {
                next.push(id);
            }
            expanded.set(next);
        })
    };

    let render_item = |item: &'static NavItem| -> Html {
        let is_active = props.active.as_str() == item.id;
        if item.children.is_empty() {
            return html! {
                <li class={classes!(is_active.then(|| "menu-active"))}>
                    <a href={format!("#{}", item.id)}>{item.label}</a>
                </li>
            };
        }
        let is_open = expanded.contains(&item.id);
        let chevron = if is_open { "fa-chevron-up" } else { "fa-chevron-down" };
        html! {
            <li class={classes!("menu-has-children", is_active.then(|| "menu-active"))}>
                <i
                    class={classes!("fa", chevron)}
                    onclick={toggle_submenu(item.id)}
                ></i>
                <a
                    href={format!("#{}", item.id)}
                    class={classes!(is_open.then(|| "menu-item-active"))}
                >
                    {item.label}
                </a>
                <ul style={if is_open { "display: block;" } else { "display: none;" }}>
                    { for item.children.iter().map(|child| html! {
                        <li class={classes!(
                            (props.active.as_str() == child.id).then(|| "menu-active")
                        )}>
                            <a href={format!("#{}", child.id)}>{child.label}</a>
                        </li>
                    }) }
                </ul>
            </li>
        }
    };

    html! {
        <>
            <button type="button" id="mobile-nav-toggle" onclick={props.on_toggle.clone()}>
                <i class={classes!("fa", if props.open { "fa-times" } else { "fa-bars" })}></i>
            </button>
            <nav id="mobile-nav">
                <ul>
                    { for props.items.iter().map(render_item) }
                </ul>
            </nav>
            <div
                id="mobile-body-overly"
                style={if props.open { "display: block;" } else { "display: none;" }}
            ></div>
        </>
    }
}
