//! One-shot reveal of elements entering the viewport.
//!
//! An element is revealed the first time its intersection ratio reaches
//! the threshold; it is then dropped from observation and never
//! considered again, even after leaving and re-entering the viewport.

use std::collections::BTreeSet;

/// Vertical extent of an element or the viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

impl Span {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Fraction of `element` inside `viewport`, in `[0, 1]`.
///
/// A zero-height element counts as fully visible while its top edge lies
/// within the viewport.
pub fn intersection_ratio(element: Span, viewport: Span) -> f64 {
    if element.height <= 0.0 {
        let inside = element.top >= viewport.top && element.top <= viewport.bottom();
        return if inside { 1.0 } else { 0.0 };
    }
    let visible = element.bottom().min(viewport.bottom()) - element.top.max(viewport.top);
    (visible / element.height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct RevealSet<K: Ord> {
    threshold: f64,
    observed: BTreeSet<K>,
    revealed: BTreeSet<K>,
}

impl<K: Ord + Clone + std::fmt::Debug> RevealSet<K> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            observed: BTreeSet::new(),
            revealed: BTreeSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start watching `key`. Returns `false` if it is already watched or
    /// was revealed before; revealed elements are never re-added.
    pub fn observe(&mut self, key: K) -> bool {
        if self.revealed.contains(&key) {
            return false;
        }
        self.observed.insert(key)
    }

    pub fn unobserve(&mut self, key: &K) -> bool {
        self.observed.remove(key)
    }

    /// Stop watching everything still pending.
    pub fn disconnect(&mut self) {
        self.observed.clear();
    }

    /// Report an intersection change. Returns `true` exactly once per
    /// element: on the change that reveals it.
    pub fn on_intersection(&mut self, key: &K, ratio: f64) -> bool {
        if ratio < self.threshold || !self.observed.remove(key) {
            return false;
        }
        tracing::trace!(?key, ratio, "Element revealed");
        self.revealed.insert(key.clone());
        true
    }

    pub fn is_observed(&self, key: &K) -> bool {
        self.observed.contains(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    /// Elements still waiting to be revealed, in key order.
    pub fn pending(&self) -> impl Iterator<Item = &K> {
        self.observed.iter()
    }
}
