//! Smooth scrolling to page anchors.

use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls the section with this DOM id into view. Missing elements
/// are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
