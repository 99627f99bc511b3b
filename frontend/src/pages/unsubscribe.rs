use wasm_bindgen_futures::spawn_local;
use web_sys::UrlSearchParams;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::newsletter::{self, FormStatus, UNSUBSCRIBED_MESSAGE};
use crate::Route;

#[function_component(Unsubscribe)]
pub fn unsubscribe() -> Html {
    let status = use_state(|| None::<FormStatus>);
    let location = use_location();

    {
        let status = status.clone();
        let query = location.map(|l| l.query_str().to_string()).unwrap_or_default();
        use_effect_with_deps(
            move |query: &String| {
                let params = UrlSearchParams::new_with_str(query).ok();
                let param = |name: &str| params.as_ref().and_then(|p| p.get(name));
                match newsletter::unsubscribe_request(param("email"), param("token")) {
                    Ok(request) => {
                        spawn_local(async move {
                            let result = newsletter::unsubscribe(&request).await;
                            if let Err(e) = &result {
                                gloo_console::error!("Unsubscribe failed:", e.diagnostic());
                            }
                            let shown = FormStatus::from_result(&result, UNSUBSCRIBED_MESSAGE);
                            status.set(Some(shown));
                        });
                    }
                    Err(e) => {
                        status.set(Some(FormStatus::from_result(&Err(e), UNSUBSCRIBED_MESSAGE)));
                    }
                }
                || ()
            },
            query,
        );
    }

    html! {
        <section class="unsubscribe">
            <div class="container">
                <h1>{"Newsletter"}</h1>
                {
                    match &*status {
                        Some(status) => html! {
                            <div id="form-alert" class={status.class()}>{status.message()}</div>
                        },
                        None => html! { <p>{"Removing your address..."}</p> },
                    }
                }
                <Link<Route> to={Route::Home} classes="back-home">
                    {"Back to the home page"}
                </Link<Route>>
            </div>
        </section>
    }
}
