//! Sound-enabled gate
//!
//! Owned by the app instance and flipped from event handlers: a click
//! anywhere toggles it, losing visibility forces it shut. The gate only
//! decides whether a due crossing is audible; it never touches the
//! schedule.

/// Click-toggled, visibility-forced sound switch
#[derive(Debug, Clone, Copy, Default)]
pub struct SoundGate {
    enabled: bool,
}

impl SoundGate {
    /// Gate starts closed; the first click opens it
    pub fn new() -> Self {
        Self::default()
    }

    /// True when due crossings should be audible
    pub fn is_open(&self) -> bool {
        self.enabled
    }

    /// Invert the gate (document click); returns the new state
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Force the gate shut (surface lost visibility)
    pub fn force_off(&mut self) {
        self.enabled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!SoundGate::new().is_open());
    }

    #[test]
    fn test_click_toggles() {
        let mut gate = SoundGate::new();
        assert!(gate.toggle());
        assert!(gate.is_open());
        assert!(!gate.toggle());
        assert!(!gate.is_open());
    }

    #[test]
    fn test_visibility_loss_forces_off_from_any_state() {
        let mut gate = SoundGate::new();
        gate.force_off();
        assert!(!gate.is_open());

        gate.toggle();
        gate.force_off();
        assert!(!gate.is_open());

        // Idempotent
        gate.force_off();
        assert!(!gate.is_open());
    }

    #[test]
    fn test_toggle_reopens_after_forced_off() {
        let mut gate = SoundGate::new();
        gate.toggle();
        gate.force_off();
        assert!(gate.toggle());
    }
}
