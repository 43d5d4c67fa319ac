use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};

/// Scroll depth past which the navbar turns solid.
pub const SCROLLED_AFTER_PX: f64 = 50.0;
/// Height of the fixed navbar.
pub const NAV_OFFSET_PX: f64 = 70.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER_PX
}

pub fn anchor_top(offset_top: f64) -> f64 {
    offset_top - NAV_OFFSET_PX
}

/// Smooth-scroll to the element an in-page `href` points at, leaving room for
/// the navbar. Returns false when there is nothing to scroll to.
pub fn scroll_to_anchor(href: &str) -> bool {
    if !href.starts_with('#') || href.len() < 2 {
        return false;
    }
    let target = match document().query_selector(href) {
        Ok(Some(el)) => el,
        Ok(None) => return false,
        Err(e) => {
            log::warn!("bad anchor {}: {:?}", href, e);
            return false;
        }
    };
    let Ok(target) = target.dyn_into::<HtmlElement>() else {
        return false;
    };

    let opts = ScrollToOptions::new();
    opts.set_top(anchor_top(target.offset_top() as f64));
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
    true
}

/// Bring a section's top into view, as the hero buttons do.
pub fn scroll_to_section(id: &str) {
    let Some(section) = document().get_element_by_id(id) else {
        log::debug!("no #{} section on this page", id);
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Click handler body for `<a href="#...">`.
pub fn follow_anchor(ev: ev::MouseEvent, href: &str) {
    ev.prevent_default();
    scroll_to_anchor(href);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_turns_solid_past_fifty_pixels() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn anchors_leave_room_for_the_navbar() {
        assert_eq!(anchor_top(870.0), 800.0);
        assert_eq!(anchor_top(0.0), -70.0);
    }
}
