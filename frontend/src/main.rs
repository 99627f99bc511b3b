use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod newsletter;
mod scroll;
mod animation {
    pub mod counter;
    pub mod easing;
    pub mod line_draw;
}
mod components {
    pub mod counter_up;
    pub mod flip_section;
    pub mod header;
    pub mod line_draw;
    pub mod mobile_nav;
    pub mod newsletter_form;
}
mod pages {
    pub mod home;
    pub mod unsubscribe;
}

use pages::{
    home::Home,
    unsubscribe::Unsubscribe,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/newsletter/unsubscribe")]
    Unsubscribe,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Unsubscribe => {
            info!("Rendering Unsubscribe page");
            html! { <Unsubscribe /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
