//! Mobile navigation menu.
//!
//! One boolean drives three class flags (control, panel, page scroll lock),
//! so they can never disagree.

/// Where a click landed relative to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The burger button, or anything inside it
    Control,
    /// The navigation panel, or anything inside it
    Panel,
    Outside,
}

/// Class flags as rendered on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuFlags {
    pub control_active: bool,
    pub panel_active: bool,
    pub scroll_locked: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn flags(&self) -> MenuFlags {
        MenuFlags {
            control_active: self.open,
            panel_active: self.open,
            scroll_locked: self.open,
        }
    }

    /// Burger button click.
    pub fn toggle(&mut self) -> MenuFlags {
        self.open = !self.open;
        tracing::debug!(open = self.open, "Menu toggled");
        self.flags()
    }

    /// Click anywhere on the document. Closes an open menu unless the
    /// click hit the panel or the control.
    pub fn document_click(&mut self, target: ClickTarget) -> MenuFlags {
        if self.open && target == ClickTarget::Outside {
            self.close();
        }
        self.flags()
    }

    /// Click on a link inside the panel.
    pub fn link_click(&mut self) -> MenuFlags {
        self.close();
        self.flags()
    }

    pub fn close(&mut self) {
        if self.open {
            tracing::debug!("Menu closed");
        }
        self.open = false;
    }
}
