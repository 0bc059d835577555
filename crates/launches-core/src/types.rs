//! Core domain types shared across the application layers

/// Lifecycle of the one launch fetch performed per run
///
/// `Idle → Loading → {Loaded, Failed}`; there is no way back to `Loading`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// No request issued yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Launch list received and validated
    Loaded,
    /// Request failed; the user sees the generic error message
    Failed,
}

impl LoadPhase {
    /// Whether a fetch may start from this phase
    pub fn can_start(&self) -> bool {
        matches!(self, LoadPhase::Idle)
    }
}
