use std::collections::VecDeque;

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::notification::Notifier;
use crate::types::Severity;

/// ↑ ↑ ↓ ↓ ← → ← → B A
pub const KONAMI: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

const MESSAGE: &str = "🎉 Easter egg found! You're a true Berkeley hacker!";
const BODY_ANIMATION: &str = "rainbow 2s infinite";
const ANIMATION_MS: u32 = 3_000;

/// Rolling window over the most recent key codes.
#[derive(Clone, Debug)]
pub struct KeySequence {
    target: &'static [u32],
    recent: VecDeque<u32>,
}

impl KeySequence {
    pub fn new(target: &'static [u32]) -> Self {
        Self { target, recent: VecDeque::with_capacity(target.len()) }
    }

    /// Record a key. True when it completes the target, which also clears the window.
    pub fn push(&mut self, code: u32) -> bool {
        self.recent.push_back(code);
        if self.recent.len() > self.target.len() {
            self.recent.pop_front();
        }
        if self.recent.iter().eq(self.target.iter()) {
            self.reset();
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.recent.clear();
    }
}

impl Default for KeySequence {
    fn default() -> Self {
        Self::new(&KONAMI)
    }
}

fn set_body_animation(value: &str) {
    let Some(body) = document().body() else {
        return;
    };
    if let Err(e) = body.style().set_property("animation", value) {
        log::warn!("could not set body animation: {:?}", e);
    }
}

/// Listen for the sequence on the window for the life of the page.
pub fn install(notifier: Notifier) {
    let keys = store_value(KeySequence::default());
    let handle = window_event_listener(ev::keydown, move |ev| {
        if keys.try_update_value(|k| k.push(ev.key_code())) == Some(true) {
            log::info!("easter egg unlocked");
            notifier.show(MESSAGE, Severity::Success);
            set_body_animation(BODY_ANIMATION);
            Timeout::new(ANIMATION_MS, || set_body_animation("")).forget();
        }
    });
    std::mem::forget(handle);
}
