// src/ar/session.rs - AR session tracking state

use serde::{Deserialize, Serialize};

/// The external renderer's confidence in device pose estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingState {
    Unavailable,
    Limited,
    Normal,
}

impl TrackingState {
    /// Maps the renderer's raw tracking code. Unknown codes are the
    /// renderer's problem, not a crash here.
    pub fn from_raw(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Unavailable),
            2 => Some(Self::Limited),
            3 => Some(Self::Normal),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Unavailable => "Initializing AR...",
            Self::Limited => "Move the device slowly",
            Self::Normal => "AR ready - Look for a surface",
        }
    }
}

/// Per-entry AR session state.
///
/// The only reaction to renderer events is flipping `ar_ready` once
/// tracking reaches normal or an anchor is found; no geometric reasoning
/// happens here. Once ready, the flag latches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArSession {
    tracking: TrackingState,
    anchor_found: bool,
    ar_ready: bool,
}

impl Default for ArSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ArSession {
    pub fn new() -> Self {
        Self {
            tracking: TrackingState::Unavailable,
            anchor_found: false,
            ar_ready: false,
        }
    }

    pub fn tracking(&self) -> TrackingState {
        self.tracking
    }

    pub fn is_ready(&self) -> bool {
        self.ar_ready
    }

    pub fn on_tracking_update(&mut self, state: TrackingState) {
        self.tracking = state;
        if state == TrackingState::Normal {
            self.ar_ready = true;
        }
    }

    pub fn on_anchor_found(&mut self) {
        self.anchor_found = true;
        self.ar_ready = true;
    }

    pub fn message(&self) -> &'static str {
        self.tracking.message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_code_mapping() {
        assert_eq!(TrackingState::from_raw(1), Some(TrackingState::Unavailable));
        assert_eq!(TrackingState::from_raw(2), Some(TrackingState::Limited));
        assert_eq!(TrackingState::from_raw(3), Some(TrackingState::Normal));
        assert_eq!(TrackingState::from_raw(7), None);
    }

    #[test]
    fn test_ready_on_normal_tracking() {
        let mut session = ArSession::new();
        assert!(!session.is_ready());

        session.on_tracking_update(TrackingState::Limited);
        assert!(!session.is_ready());

        session.on_tracking_update(TrackingState::Normal);
        assert!(session.is_ready());
    }

    #[test]
    fn test_ready_on_anchor_found() {
        let mut session = ArSession::new();
        session.on_anchor_found();
        assert!(session.is_ready());
    }

    #[test]
    fn test_ready_latches() {
        let mut session = ArSession::new();
        session.on_tracking_update(TrackingState::Normal);
        session.on_tracking_update(TrackingState::Limited);
        assert!(session.is_ready());
        assert_eq!(session.message(), "Move the device slowly");
    }
}
