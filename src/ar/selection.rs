// src/ar/selection.rs - Selected-prop binding

use serde::{Deserialize, Serialize};

/// Conceptual inventory attribute anchored as an AR prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropTag {
    Current,
    Min,
    Max,
}

impl PropTag {
    pub fn label(self) -> &'static str {
        match self {
            Self::Current => "Current Stock",
            Self::Min => "Minimum Stock",
            Self::Max => "Maximum Stock",
        }
    }
}

/// Animation variant a prop renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropAnimation {
    Emphasized,
    Idle,
}

/// Which prop is currently focused, shared between the AR scene and its
/// hosting screen. Single-valued; a prop-activated event overwrites it.
/// Owned by the screen and reset when the AR view is freshly entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection(Option<PropTag>);

impl Selection {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn get(self) -> Option<PropTag> {
        self.0
    }

    /// Handles a prop-activated event. Overwrites, no history.
    pub fn select(&mut self, tag: PropTag) {
        self.0 = Some(tag);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Presentation variant for a prop: the selected tag is emphasized,
    /// every other prop is idle.
    pub fn animation_for(self, tag: PropTag) -> PropAnimation {
        if self.0 == Some(tag) {
            PropAnimation::Emphasized
        } else {
            PropAnimation::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_roundtrip() {
        let mut selection = Selection::none();
        assert_eq!(selection.get(), None);

        selection.select(PropTag::Min);
        assert_eq!(selection.get(), Some(PropTag::Min));

        selection.clear();
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn test_selection_overwrites() {
        let mut selection = Selection::none();
        selection.select(PropTag::Current);
        selection.select(PropTag::Max);
        assert_eq!(selection.get(), Some(PropTag::Max));
    }

    #[test]
    fn test_animation_mapping() {
        let mut selection = Selection::none();
        assert_eq!(selection.animation_for(PropTag::Current), PropAnimation::Idle);

        selection.select(PropTag::Min);
        assert_eq!(selection.animation_for(PropTag::Min), PropAnimation::Emphasized);
        assert_eq!(selection.animation_for(PropTag::Current), PropAnimation::Idle);
        assert_eq!(selection.animation_for(PropTag::Max), PropAnimation::Idle);
    }
}
