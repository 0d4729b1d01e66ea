//! In-page links and the sections they scroll to.

use dioxus::prelude::*;
use fleetsite_core::anchor::is_in_page;

use crate::context::{use_anchors, use_page};

#[derive(Props, Clone, PartialEq)]
pub struct AnchorLinkProps {
    pub href: String,
    #[props(default)]
    pub class: String,
    /// Link sits in the navigation panel; following it closes the menu
    #[props(default = false)]
    pub in_menu: bool,
    pub children: Element,
}

/// Anchor that smooth-scrolls to a registered [`Section`] instead of
/// jumping. Links outside the page keep their default behavior.
#[component]
pub fn AnchorLink(props: AnchorLinkProps) -> Element {
    let mut page = use_page();
    let anchors = use_anchors();
    let href = props.href.clone();
    let in_menu = props.in_menu;

    rsx! {
        a {
            class: "{props.class}",
            href: "{props.href}",
            onclick: move |e: MouseEvent| {
                if in_menu {
                    page.write().menu_link_click();
                }
                if !is_in_page(&href) {
                    return;
                }
                e.prevent_default();

                let Some(target) = anchors.read().resolve(&href).cloned() else {
                    tracing::debug!(href = %href, "No scroll target");
                    return;
                };
                spawn(async move {
                    if let Err(err) = target.scroll_to(ScrollBehavior::Smooth).await {
                        tracing::warn!("Smooth scroll failed: {:?}", err);
                    }
                });
            },
            {props.children}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SectionProps {
    pub id: String,
    #[props(default)]
    pub class: String,
    pub children: Element,
}

/// A page section registered as a scroll target under its id.
#[component]
pub fn Section(props: SectionProps) -> Element {
    let mut anchors = use_anchors();
    let id = props.id.clone();
    let registered = props.id.clone();

    use_drop(move || {
        if let Ok(mut anchors) = anchors.try_write() {
            anchors.remove(&registered);
        }
    });

    rsx! {
        section {
            id: "{props.id}",
            class: "{props.class}",
            onmounted: move |e: MountedEvent| {
                anchors.write().insert(id.clone(), e.data());
            },
            {props.children}
        }
    }
}
