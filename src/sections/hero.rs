use leptos::*;

use crate::app::{StatsVisible, WaitlistCount};
use crate::config::COUNTER_FLOOR;
use crate::nav;
use crate::scroll::{self, CounterTarget};
use crate::sections::PhoneMockup;
use crate::waitlist::counter_text;

/// A hero number. Counts up from zero the first time the stats block is
/// revealed, then follows `target`.
#[component]
fn StatCounter(
    #[prop(into)] target: MaybeSignal<String>,
    label: &'static str,
    #[prop(optional)] id: Option<&'static str>,
) -> impl IntoView {
    let target = Signal::derive(move || target.get());
    let stats_visible = use_context::<StatsVisible>();
    let (frame, set_frame) = create_signal(String::new());
    let (animating, set_animating) = create_signal(false);
    let started = store_value(false);

    create_effect(move |_| {
        let visible = stats_visible.map(|s| s.0.get()).unwrap_or(false);
        if !visible || started.get_value() {
            return;
        }
        started.set_value(true);

        let Some(goal) = CounterTarget::parse(&target.get_untracked()) else {
            return;
        };
        set_animating.set(true);
        scroll::animate_counter(goal, set_frame, move || set_animating.set(false));
    });

    let text = move || if animating.get() { frame.get() } else { target.get() };

    view! {
        <div class="stat">
            <span class="stat-number" id=id data-target=move || target.get()>{text}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let count = use_context::<WaitlistCount>()
        .map(|c| MaybeSignal::from(Signal::from(c.0)))
        .unwrap_or_else(|| MaybeSignal::from(counter_text(COUNTER_FLOOR)));

    view! {
        <section id="home" class="hero">
            <div class="hero-container">
                <div class="hero-content">
                    <span class="hero-badge">"Built by Berkeley students"</span>
                    <h1 class="hero-title">
                        "Know what's going around "
                        <span class="gradient-text">"before it gets to you"</span>
                    </h1>
                    <p class="hero-subtitle">
                        "Fluent turns anonymous symptom reports into live health scores for campus "
                        "and your dorm, so you can dodge the flu instead of catching it."
                    </p>
                    <div class="hero-buttons">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| nav::scroll_to_section("waitlist")
                        >
                            <i class="fas fa-rocket"></i>" Join the Waitlist"
                        </button>
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| nav::scroll_to_section("features")
                        >
                            "See How It Works"
                        </button>
                    </div>
                    <div class="hero-stats">
                        <StatCounter target=count label="Students waiting" id="waitlist-count"/>
                        <StatCounter target="40+".to_string() label="Residence halls"/>
                        <StatCounter target="30sec".to_string() label="To report symptoms"/>
                    </div>
                </div>
                <div class="hero-visual">
                    <PhoneMockup/>
                </div>
            </div>
        </section>
    }
}
