//! Site Header Component
//!
//! Desktop: logo and horizontal nav links
//! Mobile (< 768px): nav links slide in from a burger-controlled panel

use dioxus::prelude::*;
use fleetsite_core::ClickTarget;
use fleetsite_ui::BurgerButton;

use crate::components::AnchorLink;
use crate::context::use_page;

/// Navigation entries: (href, label)
const NAV_ITEMS: [(&str, &str); 4] = [
    ("#services", "Услуги"),
    ("#fleet", "Флот"),
    ("#stats", "О нас"),
    ("#contact", "Контакты"),
];

/// Fixed header that hides while scrolling down and returns on scroll up.
#[component]
pub fn SiteHeader() -> Element {
    let mut page = use_page();

    let (header_class, panel_class, control_class, expanded) = {
        let page = page.read();
        (
            page.header_class(),
            page.menu_panel_class(),
            page.menu_control_class(),
            page.menu_flags().panel_active,
        )
    };

    rsx! {
        header { class: "{header_class}",
            div { class: "container header-inner",
                AnchorLink { href: "#home", class: "logo", "SkyFleet" }

                // Clicks inside the open panel must not count as outside clicks
                nav {
                    class: "{panel_class}",
                    onclick: move |e| {
                        e.stop_propagation();
                        page.write().document_click(ClickTarget::Panel);
                    },
                    for (href, label) in NAV_ITEMS {
                        AnchorLink {
                            key: "{href}",
                            href: href.to_string(),
                            in_menu: true,
                            "{label}"
                        }
                    }
                }

                BurgerButton {
                    class: control_class,
                    expanded,
                    onclick: move |_: ()| {
                        page.write().toggle_menu();
                    },
                }
            }
        }
    }
}
