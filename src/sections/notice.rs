use leptos::*;

use crate::notification::use_notifier;

/// Renders the current notice. The element is rebuilt only when a new notice
/// replaces the old one, so phase changes animate through CSS classes.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifier = use_notifier();
    let current = notifier.current();
    let current_id = create_memo(move |_| current.with(|n| n.as_ref().map(|n| n.id)));
    let class = move || current.with(|n| n.as_ref().map(|n| n.class()).unwrap_or_default());
    let message =
        move || current.with(|n| n.as_ref().map(|n| n.message.clone()).unwrap_or_default());

    move || {
        current_id.get().map(|id| {
            view! {
                <div class=class>
                    <div class="notification-content">
                        <span>{message}</span>
                        <button class="notification-close" on:click=move |_| notifier.dismiss(id)>
                            "×"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
