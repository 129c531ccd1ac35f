//! In-page anchor navigation

/// Selector of the element an anchor link scrolls to.
///
/// Only fragment links (`#section`) qualify; a bare `#` has no target.
pub fn anchor_selector(href: &str) -> Option<&str> {
    href.strip_prefix('#')
        .filter(|id| !id.is_empty())
        .map(|_| href)
}
