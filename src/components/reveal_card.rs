//! Reveal Card Component
//!
//! Cards that animate in the first time they scroll into view.

use dioxus::prelude::*;

use crate::context::{check_reveals, use_page, use_reveal_targets, use_viewport};

#[derive(Props, Clone, PartialEq)]
pub struct RevealCardProps {
    /// Unique element id, used as the reveal key
    pub id: String,
    /// Base class; must be one of the configured reveal selectors to be
    /// observed at all
    pub class: String,
    pub children: Element,
}

#[component]
pub fn RevealCard(props: RevealCardProps) -> Element {
    let mut page = use_page();
    let mut targets = use_reveal_targets();
    let viewport = use_viewport();

    let class = page.read().reveal_class(&props.id, &props.class);
    let id = props.id.clone();
    let base = props.class.clone();
    let registered = props.id.clone();

    use_drop(move || {
        if let Ok(mut targets) = targets.try_write() {
            targets.0.remove(&registered);
        }
    });

    rsx! {
        div {
            id: "{props.id}",
            class: "{class}",
            onmounted: move |e: MountedEvent| {
                targets.write().0.insert(id.clone(), e.data());
                if page.write().observe(id.clone(), &base) {
                    // Cards already on screen reveal without waiting for a scroll
                    spawn(check_reveals(page, targets, viewport));
                }
            },
            {props.children}
        }
    }
}
