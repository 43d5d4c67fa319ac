use gloo_timers::callback::Interval;
use leptos::*;

use crate::phone::{self, PhoneCycler, CYCLE_MS};

#[component]
pub fn PhoneMockup() -> impl IntoView {
    let cycler = create_rw_signal(PhoneCycler::default());

    // Clicks and the timer share one cursor; a click does not restart the timer
    let advance = move || {
        cycler.update(|c| {
            c.advance();
        })
    };

    let key = move || cycler.get().current().key();

    let interval = Interval::new(CYCLE_MS, advance);
    on_cleanup(move || drop(interval));

    view! {
        <div class="phone-mockup">
            <div class="phone-frame">
                <div class="phone-screen" on:click=move |_| advance()>
                    <div
                        class="app-preview"
                        data-view=key
                        inner_html=move || phone::fragment(key()).to_string()
                    ></div>
                </div>
            </div>
            <p class="phone-hint">"Tap the screen to explore"</p>
        </div>
    }
}
