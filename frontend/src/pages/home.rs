use yew::prelude::*;

use crate::components::counter_up::CounterUp;
use crate::components::flip_section::FlipSection;
use crate::components::header::Header;
use crate::components::line_draw::LineDraw;
use crate::components::newsletter_form::NewsletterForm;
use crate::config;

const STATS: &[(&str, &str)] = &[
    ("1,250", "Teams onboarded"),
    ("98.6", "Uptime this year (%)"),
    ("42", "Countries"),
    ("24/7", "Support"),
];

#[function_component]
pub fn Home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <style>
                {r#"
                    #header {
                        position: absolute;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 997;
                        padding: 30px 0;
                        transition: all 0.5s;
                    }
                    #header.header-fixed {
                        position: fixed;
                        background: rgba(20, 20, 20, 0.92);
                        padding: 15px 0;
                    }
                    .back-to-top {
                        position: fixed;
                        right: 15px;
                        bottom: 15px;
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.6s;
                    }
                    .back-to-top.visible {
                        opacity: 1;
                        pointer-events: auto;
                    }
                    .line-draw {
                        position: absolute;
                        top: 100vh;
                        left: 0;
                        width: 100%;
                        pointer-events: none;
                        z-index: -1;
                    }
                    #mobile-nav-toggle,
                    #mobile-nav {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        #nav-menu-container {
                            display: none;
                        }
                        #mobile-nav-toggle {
                            display: inline;
                            position: fixed;
                            right: 0;
                            top: 0;
                            z-index: 999;
                        }
                        #mobile-nav {
                            display: block;
                            position: fixed;
                            top: 0;
                            left: -260px;
                            width: 260px;
                            height: 100%;
                            transition: 0.4s;
                            z-index: 998;
                        }
                        body.mobile-nav-active #mobile-nav {
                            left: 0;
                        }
                    }
                    #mobile-body-overly {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.7);
                        z-index: 997;
                    }
                    .alert-success { color: #1e7b34; }
                    .alert-danger { color: #b02a37; }
                    .order-1 { order: 1; }
                    .order-2 { order: 2; }
                "#}
            </style>
            <Header />

            <section id="hero" class="hero">
                <div class="hero-container">
                    <h1>{"Ship the page people actually scroll"}</h1>
                    <p>{"Follow the line."}</p>
                    <a href="#newsletter" id="btn-sub" class="btn-get-started">{"Subscribe"}</a>
                </div>
            </section>

            <LineDraw config={config::HOME_LINE_DRAW} />

            <FlipSection
                id="about"
                title={html! {
                    <>
                        <h2>{"About"}</h2>
                        <p>{"A small team building calm, fast websites."}</p>
                    </>
                }}
                image={html! { <img src="/assets/about.jpg" alt="Our studio" /> }}
            />

            <FlipSection
                id="features"
                title={html! {
                    <>
                        <h2>{"Features"}</h2>
                        <p>
                            {"Everything loads in one request and works without tracking scripts."}
                        </p>
                    </>
                }}
                image={html! { <img src="/assets/features.jpg" alt="Feature overview" /> }}
            />

            <section id="compare" class="compare">
                <div class="container">
                    <h2>{"Before & After"}</h2>
                    <div class="compare-images">
                        <img src="/assets/before.jpg" alt="Before" />
                        <img src="/assets/after.jpg" alt="After" />
                    </div>
                </div>
            </section>

            <section id="stats" class="stats">
                <div class="container row">
                    { for STATS.iter().map(|(value, label)| html! {
                        <CounterUp value={*value} label={*label} />
                    }) }
                </div>
            </section>

            <NewsletterForm />

            <footer class="footer">
                <p>{"© Lineweave"}</p>
            </footer>
        </div>
    }
}
