//! Header show/hide on scroll direction.

/// Visibility markers currently on the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderState {
    /// Neither marker
    #[default]
    Neutral,
    /// "hide" marker, set while scrolling down
    Hidden,
    /// "show" marker, set when scrolling back up
    Shown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeaderScroll {
    last_offset: f64,
    state: HeaderState,
}

impl HeaderScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HeaderState {
        self.state
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Feed the current vertical scroll offset.
    pub fn on_scroll(&mut self, offset: f64) -> HeaderState {
        if offset <= 0.0 {
            // top of the page never hides the header
            if self.state == HeaderState::Hidden {
                self.state = HeaderState::Neutral;
            }
        } else if offset > self.last_offset && self.state != HeaderState::Hidden {
            self.state = HeaderState::Hidden;
        } else if offset < self.last_offset && self.state == HeaderState::Hidden {
            self.state = HeaderState::Shown;
        }

        self.last_offset = offset;
        self.state
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
