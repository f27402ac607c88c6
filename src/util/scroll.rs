//! Keep the newest history row in view.

/// Scroll the last child of the element `log_id` into view. No-op when the
/// element is missing or empty.
pub fn reveal_latest(log_id: &str) {
    #[cfg(feature = "csr")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let Some(log) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(log_id)) else {
            return;
        };
        let Some(latest) = log.last_element_child() else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        latest.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = log_id;
    }
}
