use std::rc::Rc;

use leptos::*;

use crate::analytics::{Analytics, Gtag, NoAnalytics};
use crate::config::{Config, StoreBackend};
use crate::easter_egg;
use crate::notification::Notifier;
use crate::scroll;
use crate::sections::{
    Features, Footer, Hero, HowItWorks, Navbar, NotificationHost, Problem, Team, WaitlistSection,
};
use crate::storage::LocalStore;
use crate::store::DocumentStore;
use crate::supabase::SupabaseStore;
use crate::waitlist::{counter_text, Waitlist};

/// Text of the `#waitlist-count` stat.
#[derive(Clone, Copy)]
pub struct WaitlistCount(pub RwSignal<String>);

/// Flips once the hero stats have scrolled into view.
#[derive(Clone, Copy)]
pub struct StatsVisible(pub RwSignal<bool>);

fn store_for(config: &Config) -> Rc<dyn DocumentStore> {
    match &config.backend {
        StoreBackend::Supabase { url, key } => {
            Rc::new(SupabaseStore::new(url.clone(), key.clone()))
        }
        StoreBackend::Local => {
            log::warn!("no remote store configured, waitlist signups stay in this browser");
            Rc::new(LocalStore::new())
        }
    }
}

fn analytics_for(config: &Config) -> Rc<dyn Analytics> {
    if config.analytics {
        Rc::new(Gtag)
    } else {
        Rc::new(NoAnalytics)
    }
}

#[component]
pub fn App(config: Config) -> impl IntoView {
    let waitlist =
        Rc::new(Waitlist::new(&config, store_for(&config), analytics_for(&config)));
    let notifier = Notifier::new();
    let count = WaitlistCount(create_rw_signal(counter_text(config.counter_floor)));
    let stats_visible = StatsVisible(create_rw_signal(false));

    provide_context(notifier);
    provide_context(waitlist.clone());
    provide_context(count);
    provide_context(stats_visible);

    spawn_local(async move {
        waitlist.refresh_counter(count.0).await;
    });

    easter_egg::install(notifier);

    // Reveal targets exist once the first frame is painted
    request_animation_frame(move || {
        if let Err(e) = scroll::install(move || stats_visible.0.set(true)) {
            log::warn!("scroll animations disabled: {:?}", e);
        }
    });

    view! {
        <Navbar/>
        <main>
            <Hero/>
            <Problem/>
            <Features/>
            <HowItWorks/>
            <Team/>
            <WaitlistSection/>
        </main>
        <Footer/>
        <NotificationHost/>
    }
}
