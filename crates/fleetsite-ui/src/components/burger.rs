//! Burger Button Component
//!
//! Three-bar menu control for narrow screens (< 768px).

use dioxus::prelude::*;

/// Properties for the BurgerButton component
#[derive(Clone, PartialEq, Props)]
pub struct BurgerButtonProps {
    /// Full class string, including the active marker when open
    pub class: String,
    /// Whether the menu is open (for screen readers)
    pub expanded: bool,
    /// Click handler; propagation is stopped so the document-level
    /// outside-click check never sees this click
    pub onclick: EventHandler<()>,
}

#[component]
pub fn BurgerButton(props: BurgerButtonProps) -> Element {
    rsx! {
        button {
            class: "{props.class}",
            r#type: "button",
            "aria-label": "Menu",
            "aria-expanded": "{props.expanded}",
            onclick: move |e| {
                e.stop_propagation();
                props.onclick.call(());
            },
            span { class: "burger-line" }
            span { class: "burger-line" }
            span { class: "burger-line" }
        }
    }
}
