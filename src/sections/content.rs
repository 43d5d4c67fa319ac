use leptos::*;

struct Card {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

static PROBLEMS: [Card; 3] = [
    Card {
        icon: "fa-virus",
        title: "Illness spreads silently",
        body: "By the time you hear half your floor is sick, you've already shared a bathroom with them for a week.",
    },
    Card {
        icon: "fa-eye-slash",
        title: "No one sees the pattern",
        body: "Health services only see the students who show up. Everyone else recovers, or doesn't, off the record.",
    },
    Card {
        icon: "fa-calendar-times",
        title: "Midterms don't wait",
        body: "A surprise week in bed costs more than a grade. Students need a heads-up, not a diagnosis.",
    },
];

static FEATURES: [Card; 4] = [
    Card {
        icon: "fa-tachometer-alt",
        title: "Live health scores",
        body: "One number for campus and one for your dorm, updated as reports come in.",
    },
    Card {
        icon: "fa-map-marked-alt",
        title: "Sickness map",
        body: "See which buildings are hotspots before you pick where to study.",
    },
    Card {
        icon: "fa-chart-line",
        title: "Trend insights",
        body: "Weekly trends tell you whether things are getting better or worse.",
    },
    Card {
        icon: "fa-user-shield",
        title: "Anonymous by default",
        body: "Reports never carry your name. Your dorm sees a number, not you.",
    },
];

const STEPS: [(&str, &str); 3] = [
    ("Report in 30 seconds", "Tap the symptoms you have. No account details shared."),
    ("We aggregate", "Reports roll up into building and campus scores in real time."),
    ("Stay ahead", "Get a nudge when your area heats up, and recover with tips that work."),
];

const TEAM: [(&str, &str, &str); 3] = [
    ("Maya Chen", "Product & Design", "Public Health '26"),
    ("Daniel Ortiz", "Engineering", "EECS '25"),
    ("Priya Raman", "Data & Research", "Data Science '26"),
];

fn cards(cards: &'static [Card], class: &'static str) -> impl IntoView {
    cards
        .iter()
        .map(|card| {
            view! {
                <div class=class>
                    <div class="card-icon"><i class=format!("fas {}", card.icon)></i></div>
                    <h3>{card.title}</h3>
                    <p>{card.body}</p>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn Problem() -> impl IntoView {
    view! {
        <section id="problem" class="problem">
            <div class="container">
                <h2 class="section-title">"Getting sick on campus is a group project"</h2>
                <div class="problem-grid">{cards(&PROBLEMS, "problem-card")}</div>
            </div>
        </section>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <h2 class="section-title">"Everything you need to stay well"</h2>
                <div class="features-grid">{cards(&FEATURES, "feature-card")}</div>
            </div>
        </section>
    }
}

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works">
            <div class="container">
                <h2 class="section-title">"How it works"</h2>
                <div class="steps">
                    {STEPS.iter().enumerate().map(|(i, &(title, body))| view! {
                        <div class="step">
                            <div class="step-number">{i + 1}</div>
                            <h3>{title}</h3>
                            <p>{body}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Team() -> impl IntoView {
    view! {
        <section id="team" class="team">
            <div class="container">
                <h2 class="section-title">"The team"</h2>
                <div class="team-grid">
                    {TEAM.iter().map(|&(name, role, major)| view! {
                        <div class="team-card">
                            <div class="team-avatar"><i class="fas fa-user"></i></div>
                            <h3>{name}</h3>
                            <p class="team-role">{role}</p>
                            <p class="team-major">{major}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <i class="fas fa-heartbeat"></i>
                    <span>"Fluent"</span>
                </div>
                <p>"Made in Berkeley, for Berkeley."</p>
                <p class="footer-note">
                    "© Fluent. Not a medical service. "
                    "If you feel seriously unwell, contact University Health Services."
                </p>
            </div>
        </footer>
    }
}
