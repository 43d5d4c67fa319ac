//! Viewport-triggered reveals and the hero stat counters.

use leptos::*;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const REVEAL_SELECTOR: &str = ".problem-card, .feature-card, .step, .team-card, .hero-stats";
pub const ANIMATED_CLASS: &str = "animate-in";
pub const STATS_CLASS: &str = "hero-stats";

const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const COUNTER_DURATION_MS: f64 = 2_000.0;

/// A stat such as `500+` or `30sec`, split into its number and suffix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterTarget {
    pub value: u64,
    pub suffix: String,
}

impl CounterTarget {
    /// Digits anywhere in the text form the number. `None` when there are none.
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let value = digits.parse().ok()?;

        let mut suffix = String::new();
        if text.contains('+') {
            suffix.push('+');
        }
        if text.contains("sec") {
            suffix.push_str("sec");
        }
        Some(Self { value, suffix })
    }

    /// Text for a frame `elapsed_ms` into the animation, and whether it was the last.
    pub fn frame(&self, elapsed_ms: f64) -> (String, bool) {
        let progress = (elapsed_ms / COUNTER_DURATION_MS).clamp(0.0, 1.0);
        let current = ((progress * self.value as f64).floor() as u64).min(self.value);
        (format!("{}{}", current, self.suffix), progress >= 1.0)
    }
}

/// Drive `display` from 0 to `target` on animation frames, then call `on_done`.
pub fn animate_counter(
    target: CounterTarget,
    display: WriteSignal<String>,
    on_done: impl FnOnce() + 'static,
) {
    let start = js_sys::Date::now();
    step(start, target, display, Box::new(on_done));
}

fn step(
    start: f64,
    target: CounterTarget,
    display: WriteSignal<String>,
    on_done: Box<dyn FnOnce()>,
) {
    let (text, finished) = target.frame(js_sys::Date::now() - start);
    display.set(text);
    if finished {
        on_done();
    } else {
        request_animation_frame(move || step(start, target, display, on_done));
    }
}

fn reveal(element: &Element) -> bool {
    let classes = element.class_list();
    if classes.contains(ANIMATED_CLASS) {
        return false;
    }
    classes.add_1(ANIMATED_CLASS).is_ok()
}

/// Observe every reveal target on the page. `on_stats_visible` runs the first
/// time the stats block is revealed. The observer lives as long as the page.
pub fn install(on_stats_visible: impl Fn() + 'static) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if reveal(&target) && target.class_list().contains(STATS_CLASS) {
                    log::debug!("stats visible, starting counters");
                    on_stats_visible();
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let targets = document().query_selector_all(REVEAL_SELECTOR)?;
    for i in 0..targets.length() {
        if let Some(el) = targets.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&el);
        }
    }
    log::debug!("observing {} reveal targets", targets.length());
    Ok(())
}
