use gloo_timers::callback::Timeout;
use leptos::*;

use crate::types::Severity;

const REVEAL_DELAY_MS: u32 = 100;
const LIFETIME_MS: u32 = 5_000;
const FADE_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

impl Notice {
    pub fn class(&self) -> String {
        let phase = match self.phase {
            Phase::Entering => "",
            Phase::Visible => " show",
            Phase::Leaving => " show fade-out",
        };
        format!("notification {}{}", self.severity.class(), phase)
    }
}

/// Holds the single on-screen notice. Every transition names the notice it
/// targets, so timers left over from a replaced notice do nothing.
#[derive(Clone, Debug, Default)]
pub struct NotificationSlot {
    next_id: u64,
    current: Option<Notice>,
}

impl NotificationSlot {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        self.current = Some(Notice {
            id: self.next_id,
            message: message.into(),
            severity,
            phase: Phase::Entering,
        });
        self.next_id
    }

    pub fn reveal(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(n) if n.id == id && n.phase == Phase::Entering => {
                n.phase = Phase::Visible;
                true
            }
            _ => false,
        }
    }

    /// Start the fade. False if `id` is gone or already fading.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(n) if n.id == id && n.phase != Phase::Leaving => {
                n.phase = Phase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}

/// Page-wide presenter, shared through context.
#[derive(Clone, Copy)]
pub struct Notifier {
    slot: RwSignal<NotificationSlot>,
}

impl Notifier {
    pub fn new() -> Self {
        Self { slot: create_rw_signal(NotificationSlot::default()) }
    }

    pub fn current(&self) -> Signal<Option<Notice>> {
        let slot = self.slot;
        Signal::derive(move || slot.with(|s| s.current().cloned()))
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let Some(id) = self.slot.try_update(|s| s.show(message, severity)) else {
            return;
        };

        let slot = self.slot;
        Timeout::new(REVEAL_DELAY_MS, move || {
            slot.update(|s| {
                s.reveal(id);
            });
        })
        .forget();

        let this = *self;
        Timeout::new(LIFETIME_MS, move || this.dismiss(id)).forget();
    }

    /// Fade out, then remove.
    pub fn dismiss(&self, id: u64) {
        if self.slot.try_update(|s| s.begin_dismiss(id)) != Some(true) {
            return;
        }
        let slot = self.slot;
        Timeout::new(FADE_MS, move || {
            slot.update(|s| {
                s.remove(id);
            });
        })
        .forget();
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(|| {
        log::warn!("no Notifier in context, notices will not be shown");
        Notifier::new()
    })
}
