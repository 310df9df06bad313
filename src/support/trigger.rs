/// Transmission request shared by the button sampler and the idle loop.
///
/// A pass cannot be interrupted, so presses seen while it runs are dropped
/// instead of queued.
#[derive(Default, Debug)]
pub struct Trigger {
    pending: bool,
    busy: bool,
}

impl Trigger {
    pub const fn new() -> Self {
        Self {
            pending: false,
            busy: false,
        }
    }

    /// Returns `false` if the press was dropped.
    pub fn press(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn take(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.busy = true;
        true
    }

    pub fn finish(&mut self) {
        self.busy = false;
        self.pending = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}
