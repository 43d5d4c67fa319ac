use std::rc::Rc;

use leptos::*;

use crate::app::WaitlistCount;
use crate::notification::use_notifier;
use crate::types::{Housing, SignupForm};
use crate::waitlist::{SubmitOutcome, Waitlist};

/// Bound values of the signup inputs.
#[derive(Clone, Copy)]
struct SignupFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    housing: RwSignal<String>,
}

impl SignupFields {
    fn new() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            housing: create_rw_signal(String::new()),
        }
    }

    fn snapshot(&self) -> SignupForm {
        SignupForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            housing: self.housing.get_untracked(),
        }
    }

    fn clear(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.housing.set(String::new());
    }
}

/// Reset the form if the outcome calls for it. Returns whether the counter
/// needs a recount.
fn apply_outcome(outcome: &SubmitOutcome, fields: SignupFields) -> bool {
    if outcome.clears_form() {
        fields.clear();
    }
    matches!(outcome, SubmitOutcome::Joined)
}

#[component]
pub fn WaitlistSection() -> impl IntoView {
    let waitlist = use_context::<Rc<Waitlist>>();
    let count = use_context::<WaitlistCount>();
    let notifier = use_notifier();

    let fields = SignupFields::new();
    let (busy, set_busy) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(waitlist) = waitlist.clone() else {
            log::warn!("waitlist form submitted without a workflow in context");
            return;
        };
        let form = fields.snapshot();

        spawn_local(async move {
            let outcome = waitlist.submit(&form, move |b| set_busy.set(b)).await;

            let (message, severity) = outcome.notice();
            notifier.show(message, severity);

            if apply_outcome(&outcome, fields) {
                if let Some(count) = count {
                    spawn_local(async move { waitlist.refresh_counter(count.0).await });
                }
            }
        });
    };

    view! {
        <section id="waitlist" class="waitlist">
            <div class="container">
                <div class="waitlist-content">
                    <h2 class="section-title">"Be first on campus"</h2>
                    <p class="waitlist-subtitle">
                        "Join "
                        <strong>{move || count.map(|c| c.0.get()).unwrap_or_default()}</strong>
                        " Berkeley students waiting for launch."
                    </p>

                    <form id="waitlist-signup" class="waitlist-form" on:submit=on_submit>
                        <div class="form-group">
                            <input
                                type="text"
                                id="name"
                                placeholder="Your name"
                                on:input=move |ev| fields.name.set(event_target_value(&ev))
                                prop:value=move || fields.name.get()
                            />
                        </div>
                        <div class="form-group">
                            <input
                                type="email"
                                id="email"
                                placeholder="you@berkeley.edu"
                                on:input=move |ev| fields.email.set(event_target_value(&ev))
                                prop:value=move || fields.email.get()
                            />
                        </div>
                        <div class="form-group">
                            <select
                                id="housing"
                                on:change=move |ev| fields.housing.set(event_target_value(&ev))
                                prop:value=move || fields.housing.get()
                            >
                                <option value="">"Where do you live?"</option>
                                {Housing::ALL.iter().map(|h| view! {
                                    <option value=h.value()>{h.label()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <button
                            type="submit"
                            class="btn btn-primary btn-full"
                            disabled=move || busy.get()
                        >
                            {move || if busy.get() {
                                view! { <i class="fas fa-spinner fa-spin"></i>" Joining..." }
                                    .into_view()
                            } else {
                                view! { <i class="fas fa-paper-plane"></i>" Join the Waitlist" }
                                    .into_view()
                            }}
                        </button>
                    </form>
                    <p class="waitlist-note">
                        "Berkeley email required. We'll only write when there's something worth saying."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pollster::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::analytics::NoAnalytics;
    use crate::config::Config;
    use crate::error::{StoreError, ValidationError};
    use crate::store::memory::MemoryStore;

    fn filled() -> SignupFields {
        let fields = SignupFields::new();
        fields.name.set("Jane".to_string());
        fields.email.set("jane@berkeley.edu".to_string());
        fields.housing.set("dorm".to_string());
        fields
    }

    fn is_blank(fields: SignupFields) -> bool {
        let form = fields.snapshot();
        form.name.is_empty() && form.email.is_empty() && form.housing.is_empty()
    }

    #[test]
    fn joined_clears_the_form_and_bumps_the_counter() {
        let runtime = create_runtime();
        let store = Rc::new(MemoryStore::seeded("waitlist", &["a@berkeley.edu"]));
        let waitlist = Waitlist::new(&Config::default(), store, Rc::new(NoAnalytics));
        let count = create_rw_signal(String::new());
        block_on(waitlist.refresh_counter(count));
        assert_eq!(count.get_untracked(), "501+");

        let fields = filled();
        let outcome = block_on(waitlist.submit(&fields.snapshot(), |_| {}));
        assert!(apply_outcome(&outcome, fields));
        assert!(is_blank(fields));

        block_on(waitlist.refresh_counter(count));
        assert_eq!(count.get_untracked(), "502+");
        runtime.dispose();
    }

    #[test]
    fn already_joined_clears_without_a_recount() {
        let runtime = create_runtime();
        let fields = filled();
        assert!(!apply_outcome(&SubmitOutcome::AlreadyJoined, fields));
        assert!(is_blank(fields));
        runtime.dispose();
    }

    #[test]
    fn failures_keep_what_was_typed() {
        let runtime = create_runtime();
        for outcome in [
            SubmitOutcome::Failed(StoreError::Http(503)),
            SubmitOutcome::Rejected(ValidationError::InvalidEmail),
        ] {
            let fields = filled();
            assert!(!apply_outcome(&outcome, fields));
            assert_eq!(fields.email.get_untracked(), "jane@berkeley.edu");
            assert_eq!(fields.housing.get_untracked(), "dorm");
        }
        runtime.dispose();
    }
}
