//! Landing page - the single page of the Fleetsite charter site.
//!
//! The page root is the scroll container: it reports its offset to the
//! header effect, drives reveal checks and carries the scroll lock while
//! the mobile menu is open.

use dioxus::prelude::*;
use fleetsite_core::ClickTarget;

use crate::components::{AnchorLink, ContactForm, RevealCard, Section, SiteHeader};
use crate::context::{check_reveals, use_page, use_reveal_targets, use_viewport, Viewport};

/// Service cards: (id, title, text)
const SERVICES: [(&str, &str, &str); 3] = [
    (
        "service-charter",
        "Частные чартеры",
        "Рейсы по вашему расписанию в любой аэропорт России и мира.",
    ),
    (
        "service-cargo",
        "Грузовые перевозки",
        "Срочная доставка ценных и негабаритных грузов.",
    ),
    (
        "service-medical",
        "Санитарная авиация",
        "Медицинская эвакуация с бригадой врачей на борту.",
    ),
];

/// Fleet cards: (id, model, passengers, range)
const FLEET: [(&str, &str, &str, &str); 3] = [
    ("fleet-citation", "Cessna Citation XLS+", "до 9 пассажиров", "3 440 км"),
    ("fleet-challenger", "Bombardier Challenger 650", "до 12 пассажиров", "7 400 км"),
    ("fleet-falcon", "Dassault Falcon 7X", "до 14 пассажиров", "11 000 км"),
];

/// Stats: (id, number, label)
const STATS: [(&str, &str, &str); 4] = [
    ("stat-years", "15", "лет в небе"),
    ("stat-aircraft", "24", "воздушных судна"),
    ("stat-flights", "12 000+", "выполненных рейсов"),
    ("stat-airports", "300+", "аэропортов назначения"),
];

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let mut page = use_page();
    let targets = use_reveal_targets();
    let mut viewport = use_viewport();

    let page_class = page.read().page_class();

    rsx! {
        div {
            class: "{page_class}",
            onmounted: move |e: MountedEvent| {
                viewport.set(Viewport(Some(e.data())));
                spawn(check_reveals(page, targets, viewport));
            },
            onscroll: move |_| {
                let Some(root) = viewport.read().0.clone() else {
                    return;
                };
                spawn(async move {
                    match root.get_scroll_offset().await {
                        Ok(offset) => {
                            page.write().scroll(offset.y);
                        }
                        Err(e) => tracing::debug!("Scroll offset unavailable: {:?}", e),
                    }
                    check_reveals(page, targets, viewport).await;
                });
            },
            // Anything that reaches the root was outside the menu
            onclick: move |_| {
                if page.peek().menu_flags().panel_active {
                    page.write().document_click(ClickTarget::Outside);
                }
            },

            SiteHeader {}

            main {
                Section { id: "home", class: "hero",
                    div { class: "container",
                        h1 { class: "hero-title", "Бизнес-авиация без компромиссов" }
                        p { class: "hero-subtitle",
                            "Частные рейсы, грузовые и медицинские перевозки. Вылет в течение трёх часов после заявки."
                        }
                        AnchorLink { href: "#contact", class: "cta-button", "Заказать рейс" }
                    }
                }

                Section { id: "services",
                    div { class: "container",
                        h2 { class: "section-title", "Услуги" }
                        div { class: "card-grid",
                            for (id, title, text) in SERVICES {
                                RevealCard { key: "{id}", id: id.to_string(), class: "service-card",
                                    h3 { class: "card-title", "{title}" }
                                    p { class: "card-text", "{text}" }
                                }
                            }
                        }
                    }
                }

                Section { id: "fleet",
                    div { class: "container",
                        h2 { class: "section-title", "Наш флот" }
                        div { class: "card-grid",
                            for (id, model, seats, range) in FLEET {
                                RevealCard { key: "{id}", id: id.to_string(), class: "fleet-card",
                                    h3 { class: "card-title", "{model}" }
                                    ul { class: "fleet-specs",
                                        li { "{seats}" }
                                        li { "Дальность: {range}" }
                                    }
                                }
                            }
                        }
                    }
                }

                Section { id: "stats",
                    div { class: "container",
                        h2 { class: "section-title", "О компании" }
                        div { class: "stats-grid",
                            for (id, number, label) in STATS {
                                RevealCard { key: "{id}", id: id.to_string(), class: "stat-item",
                                    div { class: "stat-number", "{number}" }
                                    div { class: "stat-label", "{label}" }
                                }
                            }
                        }
                    }
                }

                Section { id: "contact",
                    div { class: "container",
                        h2 { class: "section-title", "Оставить заявку" }
                        ContactForm {}
                    }
                }
            }

            footer { class: "footer",
                div { class: "container",
                    p { "© 2026 SkyFleet. Все права защищены." }
                }
            }
        }
    }
}
