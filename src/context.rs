//! Page context providers for Fleetsite.
//!
//! The `App` component provides one `PageController` plus the mounted
//! element handles the behaviors need to measure or scroll to.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut page = use_page();
//! page.write().toggle_menu();
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use fleetsite_core::{
    intersection_ratio, AnchorMap, PageController, PageHandle, SimulatedSubmitter, Span,
};

/// Section elements addressable by in-page links, keyed by id.
pub type Anchors = AnchorMap<Rc<MountedData>>;

/// Mounted reveal targets, keyed by element id.
#[derive(Clone, Default)]
pub struct RevealTargets(pub HashMap<String, Rc<MountedData>>);

/// The scrolling page root. Reveal ratios are measured against it.
#[derive(Clone, Default)]
pub struct Viewport(pub Option<Rc<MountedData>>);

/// The page signal as a [`PageHandle`]; each step takes a fresh write
/// borrow, so none is held while a submission is awaited.
#[derive(Clone, Copy)]
pub struct PageSignal(pub Signal<PageController>);

impl PageHandle for PageSignal {
    fn with_page<R>(&mut self, f: impl FnOnce(&mut PageController) -> R) -> R {
        f(&mut self.0.write())
    }
}

/// Get the site configuration loaded at startup.
pub fn get_config() -> fleetsite_core::SiteConfig {
    crate::get_config()
}

/// Hook to access the page controller from context.
pub fn use_page() -> Signal<PageController> {
    use_context::<Signal<PageController>>()
}

pub fn use_anchors() -> Signal<Anchors> {
    use_context::<Signal<Anchors>>()
}

pub fn use_reveal_targets() -> Signal<RevealTargets> {
    use_context::<Signal<RevealTargets>>()
}

pub fn use_viewport() -> Signal<Viewport> {
    use_context::<Signal<Viewport>>()
}

/// Hook to access the submission endpoint.
pub fn use_submitter() -> SimulatedSubmitter {
    use_context::<SimulatedSubmitter>()
}

/// Measure every pending reveal target against the viewport and feed the
/// ratios to the controller.
///
/// Stands in for an intersection observer: call it after mount and on
/// every scroll of the page root.
pub async fn check_reveals(
    mut page: Signal<PageController>,
    targets: Signal<RevealTargets>,
    viewport: Signal<Viewport>,
) {
    let Some(root) = viewport.read().0.clone() else {
        return;
    };
    let view = match root.get_client_rect().await {
        Ok(rect) => Span::new(rect.origin.y, rect.size.height),
        Err(e) => {
            tracing::debug!("Viewport not measurable: {:?}", e);
            return;
        }
    };

    let pending = page.read().pending_reveals();
    for id in pending {
        let Some(element) = targets.read().0.get(&id).cloned() else {
            continue;
        };
        match element.get_client_rect().await {
            Ok(rect) => {
                let ratio = intersection_ratio(Span::new(rect.origin.y, rect.size.height), view);
                if page.write().intersection(&id, ratio) {
                    tracing::debug!(id = %id, ratio, "Revealed");
                }
            }
            Err(e) => tracing::debug!(id = %id, "Reveal target not measurable: {:?}", e),
        }
    }
}
