//! Waitlist signup workflow: validate, dedupe by email, insert, recount.
//!
//! Nothing here touches the DOM. The form section turns a [`SubmitOutcome`]
//! into a notification and a form reset, then starts a recount with
//! [`Waitlist::refresh_counter`] without waiting on it.

use std::rc::Rc;

use leptos::{RwSignal, SignalGetUntracked, SignalSet};

use crate::analytics::Analytics;
use crate::config::Config;
use crate::error::{StoreError, ValidationError};
use crate::store::{DocumentStore, EMAIL_FIELD};
use crate::types::{NewSignup, Severity, SignupForm};
use crate::validation::{self, EmailRules};

pub const SIGNUP_EVENT: &str = "waitlist_signup";

const ALREADY_JOINED: &str = "You're already on our waitlist! 🎉";
const WELCOME: &str = "🎉 Welcome to the Fluent waitlist! We'll keep you updated on our launch.";
const RETRY: &str = "Oops! Something went wrong. Please try again.";

#[derive(Debug)]
pub enum SubmitOutcome {
    Rejected(ValidationError),
    AlreadyJoined,
    Joined,
    Failed(StoreError),
}

impl SubmitOutcome {
    pub fn notice(&self) -> (String, Severity) {
        match self {
            SubmitOutcome::Rejected(e) => (e.to_string(), Severity::Error),
            SubmitOutcome::AlreadyJoined => (ALREADY_JOINED.to_string(), Severity::Success),
            SubmitOutcome::Joined => (WELCOME.to_string(), Severity::Success),
            SubmitOutcome::Failed(_) => (RETRY.to_string(), Severity::Error),
        }
    }

    pub fn clears_form(&self) -> bool {
        matches!(self, SubmitOutcome::AlreadyJoined | SubmitOutcome::Joined)
    }
}

enum Registration {
    Existing,
    Created,
}

/// Calls `on_busy(false)` when dropped, whichever way the workflow ends.
struct BusyGuard<'a, F: Fn(bool)>(&'a F);

impl<'a, F: Fn(bool)> BusyGuard<'a, F> {
    fn engage(on_busy: &'a F) -> Self {
        on_busy(true);
        Self(on_busy)
    }
}

impl<F: Fn(bool)> Drop for BusyGuard<'_, F> {
    fn drop(&mut self) {
        (self.0)(false);
    }
}

/// Counter text for a total, e.g. `523+`.
pub fn counter_text(total: u64) -> String {
    format!("{}+", total)
}

/// What to show when the recount fails: the floor, unless a count is already up.
pub fn counter_fallback(current: &str, floor: u64) -> Option<String> {
    (!current.contains('+')).then(|| counter_text(floor))
}

pub struct Waitlist {
    store: Rc<dyn DocumentStore>,
    analytics: Rc<dyn Analytics>,
    rules: EmailRules,
    collection: String,
    floor: u64,
}

impl Waitlist {
    pub fn new(
        config: &Config,
        store: Rc<dyn DocumentStore>,
        analytics: Rc<dyn Analytics>,
    ) -> Self {
        Self {
            store,
            analytics,
            rules: EmailRules {
                institution: config.institution.clone(),
                accepted_domains: config.accepted_domains.clone(),
            },
            collection: config.collection.clone(),
            floor: config.counter_floor,
        }
    }

    /// Run one submission. `on_busy` is told when the store round-trip starts
    /// and, always, when it ends. The counter is not refreshed here.
    ///
    /// There is no in-flight guard: two overlapping calls with the same email
    /// can both pass the lookup before either inserts.
    pub async fn submit(&self, form: &SignupForm, on_busy: impl Fn(bool)) -> SubmitOutcome {
        let signup = match validation::validate(form, &self.rules) {
            Ok(s) => s,
            Err(e) => {
                log::debug!("signup rejected: {}", e);
                return SubmitOutcome::Rejected(e);
            }
        };

        let _busy = BusyGuard::engage(&on_busy);

        match self.register(&signup).await {
            Ok(Registration::Existing) => {
                log::info!("{} is already on the waitlist", signup.email);
                SubmitOutcome::AlreadyJoined
            }
            Ok(Registration::Created) => {
                self.analytics.log_event(
                    SIGNUP_EVENT,
                    &[("event_category", "engagement"), ("housing", signup.housing.value())],
                );
                log::info!(
                    "Successfully added to waitlist: {} <{}> ({})",
                    signup.name,
                    signup.email,
                    signup.housing
                );
                SubmitOutcome::Joined
            }
            Err(e) => {
                log::error!("waitlist store error: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }

    async fn register(&self, signup: &NewSignup) -> Result<Registration, StoreError> {
        let existing = self.store.query(&self.collection, EMAIL_FIELD, &signup.email).await?;
        if !existing.is_empty() {
            return Ok(Registration::Existing);
        }

        log::debug!("inserting {} into {}", signup.email, self.collection);
        self.store.insert(&self.collection, signup).await?;
        Ok(Registration::Created)
    }

    /// Display floor plus stored signups.
    pub async fn total(&self) -> Result<u64, StoreError> {
        let count = self.store.count(&self.collection).await?;
        Ok(self.floor + count as u64)
    }

    /// Recount and write the result into `count`. On failure the floor is
    /// shown, unless a count is already displayed.
    pub async fn refresh_counter(&self, count: RwSignal<String>) {
        match self.total().await {
            Ok(total) => count.set(counter_text(total)),
            Err(e) => {
                log::error!("Error getting waitlist count: {}", e);
                if let Some(text) = counter_fallback(&count.get_untracked(), self.floor) {
                    count.set(text);
                }
            }
        }
    }
}
