//! Widget handle lifecycle: init → open/close/toggle → destroy.
//!
//! DESIGN
//! ======
//! The state machine is pure and returns the DOM [`Effect`]s to perform, in
//! order. The browser host applies them; tests assert on them. Operations on
//! a handle that has not been initialized (or was destroyed) are no-ops.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

/// A DOM change the host must perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Create the launcher button and the (hidden) panel container.
    MountChrome,
    ShowPanel,
    HidePanel,
    ShowLauncher,
    HideLauncher,
    /// Create the iframe and boot the chat tree inside it. Emitted once per
    /// mounted chrome.
    CreateFrame,
    /// Remove the frame, the container and the launcher.
    RemoveChrome,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lifecycle {
    mounted: bool,
    open: bool,
    frame_created: bool,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn init(&mut self, auto_open: bool) -> Vec<Effect> {
        if self.mounted {
            return Vec::new();
        }
        self.mounted = true;
        let mut effects = vec![Effect::MountChrome];
        if auto_open {
            effects.extend(self.open());
        }
        effects
    }

    pub fn open(&mut self) -> Vec<Effect> {
        if !self.mounted {
            return Vec::new();
        }
        self.open = true;
        let mut effects = vec![Effect::ShowPanel, Effect::HideLauncher];
        if !self.frame_created {
            self.frame_created = true;
            effects.push(Effect::CreateFrame);
        }
        effects
    }

    pub fn close(&mut self) -> Vec<Effect> {
        if !self.mounted {
            return Vec::new();
        }
        self.open = false;
        vec![Effect::HidePanel, Effect::ShowLauncher]
    }

    pub fn toggle(&mut self) -> Vec<Effect> {
        if self.open { self.close() } else { self.open() }
    }

    /// Undo `init` after the chrome could not be mounted, so the next
    /// `init` retries instead of being a no-op.
    pub fn mount_failed(&mut self) {
        *self = Self::default();
    }

    /// Undo `open` after the frame could not be created. The next `open`
    /// emits `CreateFrame` again. Returns the effects that restore the
    /// closed look.
    pub fn frame_failed(&mut self) -> Vec<Effect> {
        if !self.mounted {
            return Vec::new();
        }
        self.frame_created = false;
        self.open = false;
        vec![Effect::HidePanel, Effect::ShowLauncher]
    }

    pub fn destroy(&mut self) -> Vec<Effect> {
        if !self.mounted {
            return Vec::new();
        }
        *self = Self::default();
        vec![Effect::RemoveChrome]
    }
}
