//! Single-overlay lifecycle.
//!
//! The controller owns whatever the host wants to show modally and guarantees
//! that at most one overlay is visible at any time. Teardown is best-effort:
//! failures are logged and followed by a forced reset, never returned.

use thiserror::Error;
use tracing::{debug, warn};

pub type OverlayId = u64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OverlayError {
    #[error("overlay {0} is not mounted")]
    NotMounted(OverlayId),
    #[error("teardown failed: {0}")]
    Teardown(String),
}

/// Host-supplied overlay content.
pub trait OverlayContent {
    /// Called while the overlay is being hidden. An error triggers the
    /// controller's force-clear recovery.
    fn teardown(&mut self) -> Result<(), OverlayError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open(OverlayId),
}

/// Re-render notifications for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalSignal {
    Opened(OverlayId),
    Closed(OverlayId),
    /// Everything was dropped by a forced reset.
    Cleared,
}

struct Mounted<C> {
    id: OverlayId,
    visible: bool,
    content: C,
}

pub struct ModalController<C> {
    active: Vec<Mounted<C>>,
    current: Option<OverlayId>,
    next_id: OverlayId,
    signals: Vec<ModalSignal>,
}

impl<C> Default for ModalController<C> {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            current: None,
            next_id: 1,
            signals: Vec::new(),
        }
    }
}

impl<C: OverlayContent> ModalController<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        match self.current {
            Some(id) if self.visible_count() > 0 => ModalState::Open(id),
            _ => ModalState::Closed,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state(), ModalState::Open(_))
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.active.iter().filter(|m| m.visible).count()
    }

    #[must_use]
    pub fn current(&self) -> Option<&C> {
        let id = self.current?;
        self.active
            .iter()
            .find(|m| m.id == id && m.visible)
            .map(|m| &m.content)
    }

    pub fn current_mut(&mut self) -> Option<&mut C> {
        let id = self.current?;
        self.active
            .iter_mut()
            .find(|m| m.id == id && m.visible)
            .map(|m| &mut m.content)
    }

    /// Shows `content` as the only overlay, closing whatever was open first.
    pub fn open(&mut self, content: C) -> OverlayId {
        if self.current.is_some() || !self.active.is_empty() {
            self.close();
        }

        let id = self.next_id;
        self.next_id += 1;
        self.active.push(Mounted {
            id,
            visible: true,
            content,
        });
        self.current = Some(id);
        self.signals.push(ModalSignal::Opened(id));
        debug!(overlay = id, "overlay opened");
        id
    }

    /// Hides and unmounts the current overlay. Safe to call when closed.
    pub fn close(&mut self) {
        if self.current.is_none() && self.active.is_empty() {
            return;
        }

        let closing = self.current;
        if let Err(e) = self.teardown_current() {
            warn!(error = %e, "overlay close failed, forcing reset");
            self.force_close_all();
            return;
        }

        // Anything left over was mounted without being current.
        self.active.clear();
        if let Some(id) = closing {
            self.signals.push(ModalSignal::Closed(id));
            debug!(overlay = id, "overlay closed");
        }
    }

    /// Drops every overlay regardless of internal consistency.
    pub fn force_close_all(&mut self) {
        for mut mounted in self.active.drain(..) {
            mounted.visible = false;
            if let Err(e) = mounted.content.teardown() {
                warn!(overlay = mounted.id, error = %e, "teardown failed during reset");
            }
        }
        self.current = None;
        self.signals.push(ModalSignal::Cleared);
        debug!("all overlays cleared");
    }

    /// Takes the signals recorded since the last call.
    pub fn drain_signals(&mut self) -> Vec<ModalSignal> {
        std::mem::take(&mut self.signals)
    }

    // Unmount, hide, forget the cached reference, then run the hook. The
    // entry is already gone if the hook fails, so the reset never calls it again.
    fn teardown_current(&mut self) -> Result<(), OverlayError> {
        let Some(id) = self.current else {
            return Ok(());
        };
        let index = self
            .active
            .iter()
            .position(|m| m.id == id)
            .ok_or(OverlayError::NotMounted(id))?;

        let mut mounted = self.active.remove(index);
        mounted.visible = false;
        self.current = None;
        mounted.content.teardown()
    }
}
