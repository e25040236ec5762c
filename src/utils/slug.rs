//! Anchor slugs for in-page member links.

/// Anchor for a member heading, e.g. `"AddChild"` → `"addchild"`.
pub fn anchor_link(name: &str) -> String {
    slug::slugify(name)
}
