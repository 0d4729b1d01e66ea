use dioxus::prelude::*;
use fleetsite_core::{PageController, SimulatedSubmitter};

use crate::context::{get_config, Anchors, RevealTargets, Viewport};
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the page controller and the mounted-element
/// registries, then renders the landing page.
#[component]
pub fn App() -> Element {
    let config = get_config();
    let submitter = SimulatedSubmitter::from_config(&config.submit);

    // Attached on creation; every behavior is live from the first render
    let mut page: Signal<PageController> = use_signal(move || {
        let mut page = PageController::new(config);
        page.attach();
        page
    });
    let anchors: Signal<Anchors> = use_signal(Anchors::new);
    let reveal_targets: Signal<RevealTargets> = use_signal(RevealTargets::default);
    let viewport: Signal<Viewport> = use_signal(Viewport::default);

    use_context_provider(|| page);
    use_context_provider(|| anchors);
    use_context_provider(|| reveal_targets);
    use_context_provider(|| viewport);
    use_context_provider(|| submitter);

    use_drop(move || {
        // The signal may already be gone when the whole window closes
        if let Ok(mut page) = page.try_write() {
            page.detach();
            tracing::info!("Page detached");
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Landing {}
    }
}
