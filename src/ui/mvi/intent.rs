//! Base trait for intents (user/system actions) in MVI architecture.

/// An immutable description of a requested state change.
///
/// Intents are plain data: building one never validates or fails.
/// Reducers turn them into new states.
pub trait Intent: Send + 'static {
    /// Stable kind label, used as a structured log field on dispatch.
    fn name(&self) -> &'static str;
}
