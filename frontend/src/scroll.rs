use std::cell::{Cell, RefCell};

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlAnchorElement, HtmlElement};

use crate::animation::easing::ScrollTween;
use crate::config;

thread_local! {
    // At most one smooth scroll runs; starting another drops this one.
    static ACTIVE_SCROLL: RefCell<Option<(u64, Interval)>> = RefCell::new(None);
    static SCROLL_GENERATION: Cell<u64> = Cell::new(0);
}

fn trim_leading_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Whether a link's `href` is a candidate for smooth scrolling.
pub fn is_hash_href(href: &str) -> bool {
    href.contains('#') && href != "#"
}

/// A link targets the current page when path (ignoring a leading slash)
/// and host both match.
pub fn is_same_page(
    current_path: &str,
    current_host: &str,
    link_path: &str,
    link_host: &str,
) -> bool {
    trim_leading_slash(current_path) == trim_leading_slash(link_path) && current_host == link_host
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderMetrics {
    pub outer_height: f64,
    pub fixed: bool,
}

/// Space to leave above an anchor target so the header does not cover it.
pub fn header_space(header: Option<HeaderMetrics>) -> f64 {
    match header {
        Some(HeaderMetrics { outer_height, fixed: true }) => outer_height,
        Some(HeaderMetrics { outer_height, fixed: false }) => {
            outer_height - config::HEADER_UNFIXED_ALLOWANCE
        }
        None => 0.0,
    }
}

pub fn anchor_destination(target_top: f64, header: Option<HeaderMetrics>) -> f64 {
    target_top - header_space(header)
}

pub fn header_is_fixed(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_FIXED_THRESHOLD
}

pub fn current_scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn now_ms() -> Option<f64> {
    window().and_then(|w| w.performance()).map(|p| p.now())
}

/// Animates the window to `y` with easeInOutExpo, replacing any scroll
/// already in flight.
pub fn smooth_scroll_to(y: f64) {
    let Some(win) = window() else { return };
    let tween = ScrollTween::new(current_scroll_y(), y.max(0.0), config::SMOOTH_SCROLL_MS);
    let started = now_ms();
    let mut ticks = 0u32;
    let mut finished = false;
    let generation = SCROLL_GENERATION.with(|g| {
        g.set(g.get() + 1);
        g.get()
    });

    let interval = Interval::new(config::SMOOTH_SCROLL_FRAME_MS, move || {
        if finished {
            return;
        }
        ticks += 1;
        let elapsed = match (started, now_ms()) {
            (Some(start), Some(now)) => now - start,
            _ => (ticks * config::SMOOTH_SCROLL_FRAME_MS) as f64,
        };
        win.scroll_to_with_x_and_y(0.0, tween.position_at(elapsed));
        if tween.is_finished(elapsed) {
            finished = true;
            // The interval cannot drop itself from inside its own callback.
            Timeout::new(0, move || {
                ACTIVE_SCROLL.with(|slot| {
                    let mut slot = slot.borrow_mut();
                    if matches!(*slot, Some((current, _)) if current == generation) {
                        slot.take();
                    }
                });
            })
            .forget();
        }
    });

    ACTIVE_SCROLL.with(|slot| *slot.borrow_mut() = Some((generation, interval)));
}

fn header_metrics() -> Option<HeaderMetrics> {
    let header = window()?
        .document()?
        .get_element_by_id("header")?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(HeaderMetrics {
        outer_height: header.offset_height() as f64,
        fixed: header.class_name().split_whitespace().any(|c| c == "header-fixed"),
    })
}

/// Smooth-scrolls to the element `#id`. Returns false if it does not exist.
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(target) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let top = target.get_bounding_client_rect().top() + current_scroll_y();
    smooth_scroll_to(anchor_destination(top, header_metrics()));
    true
}

/// The same-page anchor a click landed on, if any.
pub struct AnchorClick {
    pub anchor: HtmlAnchorElement,
    pub target_id: String,
}

impl AnchorClick {
    pub fn from_target(target: &Element) -> Option<Self> {
        let anchor = target.closest("a").ok()??.dyn_into::<HtmlAnchorElement>().ok()?;
        let href = anchor.get_attribute("href")?;
        if !is_hash_href(&href) {
            return None;
        }
        let location = window()?.location();
        let same_page = is_same_page(
            &location.pathname().ok()?,
            &location.hostname().ok()?,
            &anchor.pathname(),
            &anchor.hostname(),
        );
        if !same_page {
            return None;
        }
        let target_id = anchor.hash().trim_start_matches('#').to_string();
        if target_id.is_empty() {
            return None;
        }
        Some(Self { anchor, target_id })
    }

    pub fn within(&self, selector: &str) -> bool {
        matches!(self.anchor.closest(selector), Ok(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_hrefs() {
        assert!(is_hash_href("#about"));
        assert!(is_hash_href("/index#about"));
        assert!(!is_hash_href("#"));
        assert!(!is_hash_href("/pricing"));
    }

    #[test]
    fn same_page_ignores_leading_slash() {
        assert!(is_same_page("/", "example.org", "", "example.org"));
        assert!(is_same_page("/about", "example.org", "about", "example.org"));
        assert!(!is_same_page("/about", "example.org", "/blog", "example.org"));
        assert!(!is_same_page("/", "example.org", "/", "other.org"));
    }

    #[test]
    fn header_sticks_past_threshold() {
        assert!(!header_is_fixed(0.0));
        assert!(!header_is_fixed(100.0));
        assert!(header_is_fixed(101.0));
    }

    #[test]
    fn destination_leaves_room_for_header() {
        let fixed = HeaderMetrics { outer_height: 80.0, fixed: true };
        let floating = HeaderMetrics { outer_height: 80.0, fixed: false };
        assert_eq!(anchor_destination(1000.0, Some(fixed)), 920.0);
        assert_eq!(anchor_destination(1000.0, Some(floating)), 940.0);
        assert_eq!(anchor_destination(1000.0, None), 1000.0);
    }
}
