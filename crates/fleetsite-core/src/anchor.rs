//! In-page anchor resolution for smooth scrolling.

use std::collections::HashMap;

/// Fragment id of an in-page link, or `None` when `href` is not one.
///
/// `"#fleet"` yields `Some("fleet")`; a bare `"#"` yields `None` since it
/// names no element.
pub fn fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Whether clicks on a link with this `href` are intercepted.
pub fn is_in_page(href: &str) -> bool {
    href.starts_with('#')
}

/// Scroll targets keyed by element id.
///
/// Generic over the handle type so the renderer can store whatever it
/// needs to scroll an element.
#[derive(Debug, Clone)]
pub struct AnchorMap<T> {
    targets: HashMap<String, T>,
}

impl<T> Default for AnchorMap<T> {
    fn default() -> Self {
        Self {
            targets: HashMap::new(),
        }
    }
}

impl<T> AnchorMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the element with `id`.
    pub fn insert(&mut self, id: impl Into<String>, target: T) {
        self.targets.insert(id.into(), target);
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        self.targets.remove(id)
    }

    /// Resolve a link's `href` to its target. Unknown fragments resolve to
    /// `None` and the click is a no-op.
    pub fn resolve(&self, href: &str) -> Option<&T> {
        let id = fragment(href)?;
        let target = self.targets.get(id);
        if target.is_none() {
            tracing::debug!(href, "Anchor target not found");
        }
        target
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
