//! Signals the host sends when its state may have changed.

use game_world::ScreenId;
use serde::{Deserialize, Serialize};

/// A host lifecycle or state-change signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostSignal {
    /// The templating system is updating one screen's context.
    ContextChanged { screen: ScreenId },

    /// A save finished loading and the world is playable.
    WorldReady,

    /// The in-game clock advanced.
    TimeChanged,

    /// A split-screen player left; their screen's caches go with them.
    ScreenDisconnected { screen: ScreenId },

    /// The game returned to the title screen; every cache is dropped.
    ReturnedToTitle,
}

impl HostSignal {
    /// The screen this signal is about, if it targets exactly one.
    pub fn screen(&self) -> Option<ScreenId> {
        match self {
            HostSignal::ContextChanged { screen } | HostSignal::ScreenDisconnected { screen } => {
                Some(*screen)
            }
            HostSignal::WorldReady | HostSignal::TimeChanged | HostSignal::ReturnedToTitle => None,
        }
    }

    /// Whether handling this signal tears down caches instead of refreshing them.
    pub fn is_teardown(&self) -> bool {
        matches!(
            self,
            HostSignal::ScreenDisconnected { .. } | HostSignal::ReturnedToTitle
        )
    }
}
