// src/shell.rs
//! Mode selector: owns the mode and the panel it configures

use crate::panel::Panel;
use crate::types::Mode;

/// One of the two mode toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub mode: Mode,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Shell {
    mode: Mode,
    panel: Panel,
}

impl Shell {
    pub fn new() -> Self {
        Self::with_mode(Mode::default())
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            panel: Panel::new(mode),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.panel.apply_mode(mode);
    }

    pub fn select_single(&mut self) {
        self.set_mode(Mode::Single);
    }

    pub fn select_bulk(&mut self) {
        self.set_mode(Mode::Bulk);
    }

    /// Both toggles in display order, the active mode flagged
    pub fn toggles(&self) -> [Toggle; 2] {
        Mode::ALL.map(|mode| Toggle {
            mode,
            label: mode.toggle_label(),
            active: mode == self.mode,
        })
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut Panel {
        &mut self.panel
    }
}
