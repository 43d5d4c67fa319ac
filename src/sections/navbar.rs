use leptos::*;

use crate::nav;

const LINKS: [(&str, &str); 4] = [
    ("#problem", "Problem"),
    ("#features", "Features"),
    ("#how-it-works", "How It Works"),
    ("#team", "Team"),
];

fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let (scrolled, set_scrolled) = create_signal(nav::is_scrolled(scroll_y()));

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        set_scrolled.set(nav::is_scrolled(scroll_y()));
    });
    on_cleanup(move || scroll_listener.remove());

    // Following a link closes the mobile menu
    let follow_link = move |ev: ev::MouseEvent, href: &str| {
        set_menu_open.set(false);
        nav::follow_anchor(ev, href);
    };

    view! {
        <nav class="navbar" class:scrolled=move || scrolled.get()>
            <div class="nav-container">
                <a href="#home" class="nav-logo" on:click=|ev| nav::follow_anchor(ev, "#home")>
                    <i class="fas fa-heartbeat"></i>
                    <span>"Fluent"</span>
                </a>

                <ul class="nav-menu" class:active=move || menu_open.get()>
                    {LINKS.iter().map(|&(href, label)| view! {
                        <li class="nav-item">
                            <a href=href class="nav-link" on:click=move |ev| follow_link(ev, href)>
                                {label}
                            </a>
                        </li>
                    }).collect_view()}
                    <li class="nav-item">
                        <a
                            href="#waitlist"
                            class="nav-link nav-cta"
                            on:click=move |ev| follow_link(ev, "#waitlist")
                        >
                            "Join Waitlist"
                        </a>
                    </li>
                </ul>

                <div
                    class="hamburger"
                    class:active=move || menu_open.get()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}
