use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::newsletter::{self, FormStatus, NewsletterError, SUBSCRIBED_MESSAGE};

/// Clears the email field after a successful subscription and returns
/// the status to show under the form. A failure leaves the input as typed.
pub fn apply_subscribe_result(
    input: &HtmlInputElement,
    result: &Result<(), NewsletterError>,
) -> FormStatus {
    match result {
        Ok(()) => {
            gloo_console::log!("Newsletter subscription created");
            input.set_value("");
        }
        Err(e) => {
            gloo_console::error!("Newsletter subscription failed:", e.diagnostic());
        }
    }
    FormStatus::from_result(result, SUBSCRIBED_MESSAGE)
}

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let input_ref = use_node_ref();
    let status = use_state(|| None::<FormStatus>);
    let is_sending = use_state(|| false);

    let onsubmit = {
        let input_ref = input_ref.clone();
        let status = status.clone();
        let is_sending = is_sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let Some(request) = newsletter::subscribe_request(&input.value()) else {
                return;
            };

            is_sending.set(true);
            let status = status.clone();
            let is_sending = is_sending.clone();
            spawn_local(async move {
                let result = newsletter::subscribe(&request).await;
                status.set(Some(apply_subscribe_result(&input, &result)));
                is_sending.set(false);
            });
        })
    };

    html! {
        <section id="newsletter" class="newsletter">
            <div class="container">
                <h2>{"Stay in the loop"}</h2>
                <p>{"One email a month. No tracking, unsubscribe any time."}</p>
                <form class="subscribe-form" {onsubmit}>
                    <input
                        ref={input_ref}
                        id="email-subscribe"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                    />
                    <button type="submit" disabled={*is_sending}>
                        { if *is_sending { "Sending..." } else { "Subscribe" } }
                    </button>
                </form>
                {
                    match &*status {
                        Some(status) => html! {
                            <div
                                id="form-alert"
                                class={status.class()}
                                style="visibility: visible;"
                            >
                                {status.message()}
                            </div>
                        },
                        None => html! {
                            <div id="form-alert" class="alert" style="visibility: hidden;"></div>
                        },
                    }
                }
            </div>
        </section>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{window, HtmlInputElement};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn email_input(value: &str) -> HtmlInputElement {
        let input = window()
            .and_then(|w| w.document())
            .and_then(|d| d.create_element("input").ok())
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
            .unwrap();
        input.set_value(value);
        input
    }

    #[wasm_bindgen_test]
    fn created_clears_the_input() {
        let input = email_input("john-doe@example.com");
        let status = apply_subscribe_result(&input, &Ok(()));
        assert_eq!(input.value(), "");
        assert_eq!(status.class(), "alert alert-success");
    }

    #[wasm_bindgen_test]
    fn rejection_keeps_what_was_typed() {
        let input = email_input("not-an-email");
        let result = Err(NewsletterError::Rejected {
            status: 400,
            description: "Invalid email".to_string(),
        });
        let status = apply_subscribe_result(&input, &result);
        assert_eq!(input.value(), "not-an-email");
        assert_eq!(status.message(), "Error: Invalid email");
        assert_eq!(status.class(), "alert alert-danger");
    }
}
